use crate::data::{QuoteSettings, QuoteVariant};
use anyhow::Result;

pub fn run(settings: &QuoteSettings) -> Result<()> {
    write_settings(settings, &mut std::io::stdout())
}

pub(crate) fn write_settings<W: std::io::Write>(s: &QuoteSettings, out: &mut W) -> Result<()> {
    let variant = match s.variant {
        QuoteVariant::Scheduled => "scheduled (work days + period)",
        QuoteVariant::FixedWeek => "fixed_week (7 days)",
    };
    writeln!(out, "Quote Settings")?;
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}%", "VAT Rate:", s.vat_rate)?;
    writeln!(out, "{:<26} {}", "Currency Unit:", s.currency_unit)?;
    writeln!(out, "{:<26} {}", "Variant:", variant)?;
    writeln!(out, "{:<26} UTC{:+}", "Time Zone:", s.utc_offset_hours)?;
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}", "Traffic Unit Cost:", s.default_traffic_unit_cost)?;
    writeln!(out, "{:<26} {}", "Storage Unit Cost:", s.default_storage_unit_cost)?;
    writeln!(out, "{:<26} {}", "Work Days:", s.default_work_days)?;
    writeln!(out, "---")?;
    writeln!(out, "{:<26} {}", "Organization:", s.organization_name)?;
    writeln!(out, "{:<26} {}", "Bank Account:", s.bank_account)?;
    Ok(())
}
