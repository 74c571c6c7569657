//! Parsing of locale-formatted numbers from spreadsheet cells.
//!
//! Cells come from a Danish spreadsheet, so `"1.234,50"` and `"12,5"` are
//! as common as `"12.5"`. Parsing never fails; anything that cannot be read
//! as a finite number yields `0.0`.

/// Converts a locale-formatted numeric string to `f64`, defaulting to `0.0`.
///
/// When the value contains a comma, every `.` is treated as a thousands
/// separator and dropped, then the first `,` becomes the decimal point.
/// The longest leading decimal prefix is parsed, so trailing units such as
/// `"12,50 kr"` are ignored.
#[must_use]
pub fn parse_locale_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replacen(',', ".", 1)
    } else {
        trimmed.to_owned()
    };

    let prefix = leading_decimal(&normalized);
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Returns the longest prefix of `s` that forms a decimal literal:
/// optional sign, digits with an optional fraction (or a bare fraction),
/// and an optional exponent. Returns `""` when no digits lead the string.
fn leading_decimal(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}
