use crate::calc::validation::ValidatedInput;
use crate::calc::work_period::{work_period_after, WorkPeriod};
use crate::data::QuoteVariant;
use crate::error::QuoteError;
use chrono::NaiveDate;
use serde::Serialize;

/// Percentage added on top of the pre-tax total.
pub const DEFAULT_VAT_RATE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub traffic_count: u64,
    pub storage_count: u64,
    pub work_days: u32,
    pub traffic_cost: u64,
    pub storage_cost: u64,
    pub daily_total: u64,
    /// `daily_total * work_days`, excluding VAT.
    pub total: u64,
    /// Unrounded; rounding happens only when displayed.
    pub total_with_vat: f64,
    pub vat_rate: u32,
    /// Present only for the scheduled variant.
    pub date_range: Option<WorkPeriod>,
}

impl QuoteResult {
    /// True when at least one count is positive, i.e. there is something to bill.
    pub fn has_load(&self) -> bool {
        self.traffic_count > 0 || self.storage_count > 0
    }
}

/// Prices a validated input. Pure given (input, today, vat_rate); checked
/// arithmetic turns overflow into `QuoteError::Unexpected`.
pub fn compute(
    input: &ValidatedInput,
    today: NaiveDate,
    vat_rate: u32,
) -> Result<QuoteResult, QuoteError> {
    let traffic_cost = input
        .traffic_count
        .checked_mul(input.traffic_unit_cost)
        .ok_or_else(|| QuoteError::overflow("traffic cost"))?;
    let storage_cost = input
        .storage_count
        .checked_mul(input.storage_unit_cost)
        .ok_or_else(|| QuoteError::overflow("storage cost"))?;
    let daily_total = traffic_cost
        .checked_add(storage_cost)
        .ok_or_else(|| QuoteError::overflow("daily total"))?;
    let total = daily_total
        .checked_mul(u64::from(input.work_days))
        .ok_or_else(|| QuoteError::overflow("total"))?;
    let total_with_vat = total as f64 * (1.0 + f64::from(vat_rate) / 100.0);

    let date_range = match input.variant {
        QuoteVariant::Scheduled => Some(
            work_period_after(today, input.work_days)
                .ok_or_else(|| QuoteError::Unexpected("work period is out of range".to_string()))?,
        ),
        QuoteVariant::FixedWeek => None,
    };

    Ok(QuoteResult {
        traffic_count: input.traffic_count,
        storage_count: input.storage_count,
        work_days: input.work_days,
        traffic_cost,
        storage_cost,
        daily_total,
        total,
        total_with_vat,
        vat_rate,
        date_range,
    })
}
