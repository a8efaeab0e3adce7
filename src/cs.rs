pub mod security;
pub mod string;

// Re-export all modules
pub use security::*;
pub use string::*;
