use crate::calc::{quote_from_raw, today_at_offset, QuoteResult, RawInput};
use crate::data::{QuoteSettings, QuoteVariant};
use crate::display::format_outcome;
use crate::error::QuoteError;
use anyhow::Result;
use chrono::NaiveDate;

/// Command-line counterpart of the form fields. Unset unit costs and work
/// days fall back to the configured defaults, like the form's prefill.
#[derive(Debug, Default, Clone)]
pub struct QuoteArgs {
    pub traffic: Option<String>,
    pub storage: Option<String>,
    pub traffic_unit_cost: Option<String>,
    pub storage_unit_cost: Option<String>,
    pub work_days: Option<String>,
    pub today: Option<NaiveDate>,
    pub json: bool,
}

impl QuoteArgs {
    fn raw_input(&self, settings: &QuoteSettings, variant: QuoteVariant) -> RawInput {
        let or_default = |v: &Option<String>, default: String| v.clone().unwrap_or(default);
        RawInput {
            traffic_count: self.traffic.clone().unwrap_or_default(),
            storage_count: self.storage.clone().unwrap_or_default(),
            traffic_unit_cost: or_default(
                &self.traffic_unit_cost,
                settings.default_traffic_unit_cost.to_string(),
            ),
            storage_unit_cost: or_default(
                &self.storage_unit_cost,
                settings.default_storage_unit_cost.to_string(),
            ),
            work_days: match variant {
                QuoteVariant::Scheduled => Some(or_default(
                    &self.work_days,
                    settings.default_work_days.to_string(),
                )),
                QuoteVariant::FixedWeek => None,
            },
        }
    }
}

pub fn run(args: &QuoteArgs, settings: &QuoteSettings, variant: QuoteVariant) -> Result<()> {
    write_quote(args, settings, variant, &mut std::io::stdout())
}

pub(crate) fn write_quote<W: std::io::Write>(
    args: &QuoteArgs,
    settings: &QuoteSettings,
    variant: QuoteVariant,
    out: &mut W,
) -> Result<()> {
    if args.work_days.is_some() && variant == QuoteVariant::FixedWeek {
        tracing::warn!("--work-days ignored for the fixed-week quote");
    }
    let today = args
        .today
        .unwrap_or_else(|| today_at_offset(settings.utc_offset_hours));
    let outcome = quote_from_raw(&args.raw_input(settings, variant), today, settings.vat_rate);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&json_outcome(&outcome)?)?)?;
    } else {
        writeln!(out, "{}", format_outcome(&outcome, settings).to_plain())?;
    }
    Ok(())
}

fn json_outcome(outcome: &Result<QuoteResult, QuoteError>) -> Result<serde_json::Value> {
    let value = match outcome {
        Ok(result) => {
            let mut value = serde_json::to_value(result)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("status".to_string(), "ok".into());
            }
            value
        }
        Err(e) => serde_json::json!({
            "status": "error",
            "code": e.code(),
            "message": e.to_string(),
        }),
    };
    Ok(value)
}
