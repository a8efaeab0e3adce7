pub mod text_codec;

// Re-export text codec functionality
pub use text_codec::{decode, encode, MASK};
