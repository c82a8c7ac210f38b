/// Inserts "," between every group of three digits: 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Rounds to a whole number and groups it. `{:.0}` rounds half to even on the
/// exact binary value, so 38500.000000000004 prints as "38,500".
pub fn format_rounded(value: f64) -> String {
    let rounded = format!("{value:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) if digits.bytes().any(|b| b != b'0') => format!("-{}", group_digits(digits)),
        Some(digits) => group_digits(digits),
        None => group_digits(&rounded),
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
