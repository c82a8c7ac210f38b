pub mod number;
pub mod text;

pub use text::{format_outcome, DisplayText, Emphasis};
