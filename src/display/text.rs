use crate::calc::QuoteResult;
use crate::data::QuoteSettings;
use crate::display::number::{format_rounded, group_thousands};
use crate::error::QuoteError;

const ERROR_GLYPH: &str = "❌";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    BoldHighlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

/// Ordered text segments ready for any renderer. Line breaks are carried
/// inside the segment text as `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    segments: Vec<Segment>,
}

impl DisplayText {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push(&mut self, text: impl Into<String>, emphasis: Emphasis) {
        self.segments.push(Segment {
            text: text.into(),
            emphasis,
        });
    }

    fn normal(&mut self, text: impl Into<String>) {
        self.push(text, Emphasis::Normal);
    }

    /// All segment text concatenated, emphasis dropped.
    pub fn to_plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Splits the segments at `\n` into display lines of (text, emphasis) runs.
    pub fn lines(&self) -> Vec<Vec<(&str, Emphasis)>> {
        let mut lines = vec![Vec::new()];
        for seg in self.segments() {
            for (i, part) in seg.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Vec::new());
                }
                if !part.is_empty() {
                    if let Some(line) = lines.last_mut() {
                        line.push((part, seg.emphasis));
                    }
                }
            }
        }
        lines
    }
}

/// Renders the outcome of one calculation. Cost lines only appear when at
/// least one count is positive; the date header appears whenever a work
/// period was computed.
pub fn format_outcome(
    outcome: &Result<QuoteResult, QuoteError>,
    settings: &QuoteSettings,
) -> DisplayText {
    match outcome {
        Ok(result) => format_result(result, settings),
        Err(err) => format_error(err),
    }
}

fn format_error(err: &QuoteError) -> DisplayText {
    let mut out = DisplayText::default();
    out.normal(format!("{ERROR_GLYPH} {err}"));
    out
}

fn format_result(r: &QuoteResult, settings: &QuoteSettings) -> DisplayText {
    let unit = settings.currency_unit.as_str();
    let mut out = DisplayText::default();

    if let Some(period) = &r.date_range {
        out.normal(format!(
            "작업 기간: {}~{}\n\n",
            period.start_date.format("%-m월 %-d일"),
            period.end_date.format("%-m월 %-d일")
        ));
    }
    if r.traffic_count > 0 {
        out.normal(format!("트래픽 비용: {} {unit}\n", group_thousands(r.traffic_cost)));
    }
    if r.storage_count > 0 {
        out.normal(format!("저장하기 비용: {} {unit}\n", group_thousands(r.storage_cost)));
    }
    if r.has_load() {
        let days = r.work_days;
        out.normal(format!("일 소진 비용: {} {unit}\n\n", group_thousands(r.daily_total)));
        out.normal(format!(
            "{days}일 작업 총 비용 (부가세 미포함): {} {unit}\n",
            group_thousands(r.total)
        ));
        out.normal(format!("{days}일 작업 총 비용 (부가세 포함): "));
        out.push(format_rounded(r.total_with_vat), Emphasis::BoldHighlight);
        out.normal(format!(" {unit}"));
        out.normal("\n\n");
        out.normal(format!("{}\n", settings.organization_name));
        out.normal(settings.bank_account.clone());
    }
    out
}
