// Program wide presentation of findings and errors

mod format;
mod messages;
mod present;

// Re-export all public symbols
pub use format::*;
pub use present::*;
