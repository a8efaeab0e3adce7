pub mod cs;
pub mod error;
pub mod math;

pub use cs::{security, string};
pub use error::{Error, Result};
