pub mod quote_calc;
pub mod validation;
pub mod work_period;

pub use quote_calc::{compute, QuoteResult, DEFAULT_VAT_RATE};
pub use validation::{validate, RawInput, ValidationError};
pub use work_period::today_at_offset;

use crate::error::QuoteError;
use chrono::NaiveDate;

/// Runs one "calculate" action end to end: validate the raw fields, then
/// price them.
pub fn quote_from_raw(
    raw: &RawInput,
    today: NaiveDate,
    vat_rate: u32,
) -> Result<QuoteResult, QuoteError> {
    let input = validate(raw).inspect_err(|e| {
        tracing::warn!(code = e.code(), error = %e, "quote input rejected");
    })?;

    let result = compute(&input, today, vat_rate)?;
    tracing::info!(
        total = result.total,
        total_with_vat = result.total_with_vat,
        work_days = result.work_days,
        "quote computed"
    );
    Ok(result)
}
