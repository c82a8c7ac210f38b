use crate::data::QuoteVariant;
use crate::error::QuoteError;
use std::borrow::Cow;
use std::num::IntErrorKind;
use thiserror::Error;

/// Work days billed when the variant does not collect the field.
pub const FIXED_WORK_DAYS: u32 = 7;

/// The five form fields exactly as typed. `work_days` is `None` when the
/// active variant has no work-days field.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub traffic_count: String,
    pub storage_count: String,
    pub traffic_unit_cost: String,
    pub storage_unit_cost: String,
    pub work_days: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInput {
    pub traffic_count: u64,
    pub storage_count: u64,
    pub traffic_unit_cost: u64,
    pub storage_unit_cost: u64,
    /// Always >= 1.
    pub work_days: u32,
    pub variant: QuoteVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("최소한 하나의 건수를 입력해주세요!")]
    MissingCount,
    #[error("단가를 모두 입력해주세요!")]
    MissingUnitCost,
    #[error("작업 일수를 입력해주세요!")]
    MissingWorkDays,
    #[error("음수는 입력할 수 없습니다.")]
    NegativeValue,
    #[error("숫자만 입력해주세요!")]
    NonIntegerValue,
    #[error("작업 일수는 1일 이상이어야 합니다.")]
    InvalidWorkDays,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingCount => "missing_count",
            ValidationError::MissingUnitCost => "missing_unit_cost",
            ValidationError::MissingWorkDays => "missing_work_days",
            ValidationError::NegativeValue => "negative_value",
            ValidationError::NonIntegerValue => "non_integer_value",
            ValidationError::InvalidWorkDays => "invalid_work_days",
        }
    }
}

/// Outcome of parsing one field. Values beyond `i64` are still integers
/// with a known sign, so they go through the sign rules like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Value(i64),
    OutOfRange { negative: bool },
    NotAnInteger,
}

impl Parsed {
    fn is_negative(self) -> bool {
        match self {
            Parsed::Value(v) => v < 0,
            Parsed::OutOfRange { negative } => negative,
            Parsed::NotAnInteger => false,
        }
    }

    fn is_positive(self) -> bool {
        match self {
            Parsed::Value(v) => v > 0,
            Parsed::OutOfRange { negative } => !negative,
            Parsed::NotAnInteger => false,
        }
    }

    /// Only reached once every sign rule has passed, so the value is
    /// non-negative and only a too-large value can fail here.
    fn to_u64(self, name: &str) -> Result<u64, QuoteError> {
        match self {
            Parsed::Value(v) => {
                u64::try_from(v).map_err(|_| QuoteError::from(ValidationError::NegativeValue))
            }
            Parsed::OutOfRange { .. } => Err(QuoteError::Unexpected(format!("{name} is too large"))),
            Parsed::NotAnInteger => Err(ValidationError::NonIntegerValue.into()),
        }
    }
}

/// Full-width digits (U+FF10..U+FF19) come out of Korean IMEs; treat them
/// as their ASCII counterparts.
fn to_ascii_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '０'..='９' => char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c),
                _ => c,
            })
            .collect(),
    )
}

fn parse_field(text: &str) -> Parsed {
    match to_ascii_digits(text).parse::<i64>() {
        Ok(v) => Parsed::Value(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Parsed::OutOfRange { negative: false },
            IntErrorKind::NegOverflow => Parsed::OutOfRange { negative: true },
            _ => Parsed::NotAnInteger,
        },
    }
}

/// Empty count fields count as zero.
fn parse_count(text: &str) -> Parsed {
    if text.is_empty() {
        Parsed::Value(0)
    } else {
        parse_field(text)
    }
}

/// Checks the raw fields in a fixed order: work days present, a count
/// present, both unit costs present, every field an integer, work days
/// >= 1, no negatives. The first failing rule wins. A positive number that
/// does not fit in 64 bits comes back as `QuoteError::Unexpected`.
pub fn validate(raw: &RawInput) -> Result<ValidatedInput, QuoteError> {
    let traffic_str = raw.traffic_count.trim();
    let storage_str = raw.storage_count.trim();
    let traffic_cost_str = raw.traffic_unit_cost.trim();
    let storage_cost_str = raw.storage_unit_cost.trim();
    let work_days_str = raw.work_days.as_deref().map(str::trim);

    if work_days_str.is_some_and(str::is_empty) {
        return Err(ValidationError::MissingWorkDays.into());
    }
    if traffic_str.is_empty() && storage_str.is_empty() {
        return Err(ValidationError::MissingCount.into());
    }
    if traffic_cost_str.is_empty() || storage_cost_str.is_empty() {
        return Err(ValidationError::MissingUnitCost.into());
    }

    let fields = [
        ("traffic_count", parse_count(traffic_str)),
        ("storage_count", parse_count(storage_str)),
        ("traffic_unit_cost", parse_field(traffic_cost_str)),
        ("storage_unit_cost", parse_field(storage_cost_str)),
    ];
    let work_days = work_days_str.map(parse_field);

    let all = fields.iter().map(|&(_, p)| p).chain(work_days);
    if all.clone().any(|p| p == Parsed::NotAnInteger) {
        return Err(ValidationError::NonIntegerValue.into());
    }
    if work_days.is_some_and(|w| !w.is_positive()) {
        return Err(ValidationError::InvalidWorkDays.into());
    }
    if all.clone().any(Parsed::is_negative) {
        return Err(ValidationError::NegativeValue.into());
    }

    let [traffic_count, storage_count, traffic_unit_cost, storage_unit_cost] =
        fields.map(|(name, p)| p.to_u64(name));

    let (work_days, variant) = match work_days {
        Some(w) => (
            u32::try_from(w.to_u64("work_days")?)
                .map_err(|_| QuoteError::Unexpected("work_days is too large".to_string()))?,
            QuoteVariant::Scheduled,
        ),
        None => (FIXED_WORK_DAYS, QuoteVariant::FixedWeek),
    };

    Ok(ValidatedInput {
        traffic_count: traffic_count?,
        storage_count: storage_count?,
        traffic_unit_cost: traffic_unit_cost?,
        storage_unit_cost: storage_unit_cost?,
        work_days,
        variant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(traffic: &str, storage: &str, tc: &str, sc: &str, days: Option<&str>) -> RawInput {
        RawInput {
            traffic_count: traffic.to_string(),
            storage_count: storage.to_string(),
            traffic_unit_cost: tc.to_string(),
            storage_unit_cost: sc.to_string(),
            work_days: days.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_input_with_work_days() {
        let v = validate(&raw("100", "0", "50", "50", Some("7"))).unwrap();
        assert_eq!(v.traffic_count, 100);
        assert_eq!(v.storage_count, 0);
        assert_eq!(v.traffic_unit_cost, 50);
        assert_eq!(v.storage_unit_cost, 50);
        assert_eq!(v.work_days, 7);
        assert_eq!(v.variant, QuoteVariant::Scheduled);
    }

    #[test]
    fn test_fixed_week_defaults_to_seven_days() {
        let v = validate(&raw("10", "", "50", "50", None)).unwrap();
        assert_eq!(v.work_days, FIXED_WORK_DAYS);
        assert_eq!(v.variant, QuoteVariant::FixedWeek);
    }

    #[test]
    fn test_both_counts_empty_is_missing_count() {
        let err = validate(&raw("", "  ", "50", "50", Some("7"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::MissingCount));
        // Unit costs do not matter for this rule
        let err = validate(&raw("", "", "", "abc", None)).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::MissingCount));
    }

    #[test]
    fn test_either_count_alone_may_be_empty() {
        let v = validate(&raw("", "20", "50", "50", Some("3"))).unwrap();
        assert_eq!(v.traffic_count, 0);
        assert_eq!(v.storage_count, 20);
        let v = validate(&raw("20", "", "50", "50", Some("3"))).unwrap();
        assert_eq!(v.traffic_count, 20);
        assert_eq!(v.storage_count, 0);
    }

    #[test]
    fn test_missing_unit_cost() {
        assert_eq!(
            validate(&raw("1", "1", "", "50", Some("7"))).unwrap_err(),
            QuoteError::Validation(ValidationError::MissingUnitCost)
        );
        assert_eq!(
            validate(&raw("1", "1", "50", " ", Some("7"))).unwrap_err(),
            QuoteError::Validation(ValidationError::MissingUnitCost)
        );
    }

    #[test]
    fn test_missing_work_days_checked_first() {
        // Everything else is empty too, but work days is reported first
        let err = validate(&raw("", "", "", "", Some(" "))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::MissingWorkDays));
    }

    #[test]
    fn test_non_integer_values() {
        for bad in ["abc", "1.5", "1e3", "5개"] {
            let err = validate(&raw(bad, "", "50", "50", Some("7"))).unwrap_err();
            assert_eq!(
                err,
                QuoteError::Validation(ValidationError::NonIntegerValue),
                "input {bad:?}"
            );
        }
        let err = validate(&raw("1", "", "50", "50", Some("seven"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::NonIntegerValue));
    }

    #[test]
    fn test_zero_or_negative_work_days_is_invalid() {
        assert_eq!(
            validate(&raw("1", "", "50", "50", Some("0"))).unwrap_err(),
            QuoteError::Validation(ValidationError::InvalidWorkDays)
        );
        // Work-day check runs before the general sign check
        assert_eq!(
            validate(&raw("-1", "", "50", "50", Some("-3"))).unwrap_err(),
            QuoteError::Validation(ValidationError::InvalidWorkDays)
        );
    }

    #[test]
    fn test_negative_values_rejected() {
        assert_eq!(
            validate(&raw("-5", "", "50", "50", Some("7"))).unwrap_err(),
            QuoteError::Validation(ValidationError::NegativeValue)
        );
        assert_eq!(
            validate(&raw("5", "-1", "50", "50", None)).unwrap_err(),
            QuoteError::Validation(ValidationError::NegativeValue)
        );
        assert_eq!(
            validate(&raw("5", "1", "50", "-50", Some("7"))).unwrap_err(),
            QuoteError::Validation(ValidationError::NegativeValue)
        );
        assert_eq!(
            validate(&raw("5", "1", "-50", "50", Some("7"))).unwrap_err(),
            QuoteError::Validation(ValidationError::NegativeValue)
        );
    }

    #[test]
    fn test_huge_negative_count_is_negative_value() {
        let err = validate(&raw("-99999999999999999999", "", "50", "50", Some("7"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::NegativeValue));
    }

    #[test]
    fn test_huge_negative_work_days_is_invalid() {
        let input = raw("1", "", "50", "50", Some("-99999999999999999999"));
        assert_eq!(
            validate(&input).unwrap_err(),
            QuoteError::Validation(ValidationError::InvalidWorkDays)
        );
    }

    #[test]
    fn test_non_integer_wins_over_huge_value() {
        let err = validate(&raw("99999999999999999999", "abc", "50", "50", Some("7"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::NonIntegerValue));
    }

    #[test]
    fn test_full_width_digits_accepted() {
        let v = validate(&raw("１２", "", "５０", "50", Some("７"))).unwrap();
        assert_eq!(v.traffic_count, 12);
        assert_eq!(v.traffic_unit_cost, 50);
        assert_eq!(v.work_days, 7);
        let err = validate(&raw("1_000", "", "50", "50", Some("7"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::NonIntegerValue));
    }

    #[test]
    fn test_parse_error_wins_over_negative() {
        let err = validate(&raw("-5", "x", "50", "50", Some("7"))).unwrap_err();
        assert_eq!(err, QuoteError::Validation(ValidationError::NonIntegerValue));
    }

    #[test]
    fn test_surrounding_whitespace_and_plus_sign_accepted() {
        let v = validate(&raw(" 12 ", "+3", "50", "50", Some(" 2"))).unwrap();
        assert_eq!(v.traffic_count, 12);
        assert_eq!(v.storage_count, 3);
        assert_eq!(v.work_days, 2);
    }

    #[test]
    fn test_oversized_value_is_unexpected() {
        let input = raw("99999999999999999999", "", "50", "50", Some("7"));
        assert_eq!(
            validate(&input).unwrap_err(),
            QuoteError::Unexpected("traffic_count is too large".to_string())
        );
        let input = raw("1", "", "50", "50", Some("5000000000"));
        assert!(matches!(validate(&input), Err(QuoteError::Unexpected(_))));
    }

    #[test]
    fn test_error_messages_and_codes() {
        assert_eq!(
            ValidationError::MissingCount.to_string(),
            "최소한 하나의 건수를 입력해주세요!"
        );
        assert_eq!(ValidationError::InvalidWorkDays.code(), "invalid_work_days");
        assert_eq!(ValidationError::NegativeValue.to_string(), "음수는 입력할 수 없습니다.");
    }
}
