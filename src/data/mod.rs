pub mod persistence;
pub mod quote_settings;

pub use quote_settings::{QuoteSettings, QuoteVariant};
