// Types representing annotated specification documents

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
