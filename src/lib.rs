pub mod language;
pub mod linting;
pub mod parsing;
mod regex;
pub mod requests;
pub mod templating;
