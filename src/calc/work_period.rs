use chrono::{Days, FixedOffset, NaiveDate, Offset, Utc};
use serde::Serialize;

/// Inclusive calendar range covered by a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Work starts the day after `today` and runs for `work_days` calendar days.
/// Returns `None` when `work_days` is zero or the range leaves chrono's calendar.
pub fn work_period_after(today: NaiveDate, work_days: u32) -> Option<WorkPeriod> {
    let span = work_days.checked_sub(1)?;
    let start_date = today.checked_add_days(Days::new(1))?;
    let end_date = start_date.checked_add_days(Days::new(u64::from(span)))?;
    Some(WorkPeriod {
        start_date,
        end_date,
    })
}

/// Today's date at a fixed UTC offset. Asia/Seoul has no DST, so +9 is exact.
pub fn today_at_offset(utc_offset_hours: i32) -> NaiveDate {
    let offset = utc_offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            tracing::warn!(utc_offset_hours, "invalid UTC offset, falling back to UTC");
            Utc.fix()
        });
    Utc::now().with_timezone(&offset).date_naive()
}
