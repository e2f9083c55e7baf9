//! Input normalization — quantity coercion/clamping and text sanitization.
//!
//! Raw request values pass through here before they are persisted or
//! compared.

/// Coerce a JSON value to an integer.
///
/// Accepts a number (floats truncate toward zero), a numeric string
/// (optional sign, leading digits — anything trailing is ignored, and a
/// string with no leading integer coerces to 0), or a boolean (1/0).
/// `null` means the value was not provided and yields `None`; callers
/// decide what absence means.
pub fn coerce_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Number(n) => Some(
            n.as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
        ),
        serde_json::Value::String(s) => Some(leading_int(s)),
        serde_json::Value::Bool(b) => Some(if *b { 1 } else { 0 }),
        _ => Some(0),
    }
}

/// Parse the leading integer of a string: optional whitespace, optional
/// sign, then a digit run. No digits → 0. Overflow saturates.
fn leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(n) => {
            if negative {
                -n
            } else {
                n
            }
        }
        Err(_) => {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

/// Normalize a scan quantity: absent → 1, otherwise the absolute value,
/// and 0 → 1. The result is always ≥ 1.
pub fn scan_quantity(raw: Option<i64>) -> i64 {
    let quantity = match raw {
        None => return 1,
        Some(q) => q.checked_abs().unwrap_or(i64::MAX),
    };
    if quantity == 0 {
        1
    } else {
        quantity
    }
}

/// Clamp an update quantity to a minimum of 0.
pub fn clamp_quantity(raw: i64) -> i64 {
    raw.max(0)
}

/// Sanitize free-text input for storage.
///
/// Strips ASCII control characters, drops `<...>` tag spans (an
/// unterminated `<` drops the rest of the string), and escapes single
/// and double quotes as HTML entities.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        match c {
            '<' => in_tag = true,
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            c if c.is_ascii_control() => {}
            c => out.push(c),
        }
    }
    out
}
