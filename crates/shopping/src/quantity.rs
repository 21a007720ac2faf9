/// Read the number a quantity starts with.
///
/// Leading whitespace is skipped and trailing text is ignored, so `"2 cups"`
/// reads as `2` and `"1/2"` as `1`. A quantity that does not start with a
/// number ("a pinch", "to taste", "NaN") returns `None`; callers keep the
/// original text in that case. `"Infinity"` is a number.
pub fn parse_quantity(quantity: &str) -> Option<f64> {
    leading_number(quantity.trim_start())?.parse().ok()
}

/// Read a quantity that must be a number in full, such as a running total
/// written by [`format_quantity`].
///
/// `"2 + to taste"` is text here even though it starts with a number.
pub(crate) fn parse_exact_quantity(quantity: &str) -> Option<f64> {
    let quantity = quantity.trim();
    let number = leading_number(quantity)?;

    if number.len() != quantity.len() {
        return None;
    }

    number.parse().ok()
}

/// Longest prefix of `text` that is a decimal literal: optional sign, digits
/// with an optional fraction, optional exponent, or `Infinity`.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return Some(&text[..end + "Infinity".len()]);
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }

        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&text[..end])
}

/// Format a numeric quantity with the shortest decimal that round-trips.
///
/// Output follows JavaScript number formatting: `5.0` → `"5"`, plain
/// decimals between `1e-7` and `1e21`, exponent form outside that range
/// (`"1e-7"`, `"1.5e+21"`), and `"Infinity"` / `"NaN"`.
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    // -0.0 would print as "-0"
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // Shortest digits with a decimal exponent, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exponent.parse::<i32>().unwrap_or_default() + 1;
    let len = digits.len() as i32;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exp_sign = if point > 0 { "+" } else { "-" };
        let exp = (point - 1).unsigned_abs();
        match digits.split_at(1) {
            (first, "") => format!("{first}e{exp_sign}{exp}"),
            (first, rest) => format!("{first}.{rest}e{exp_sign}{exp}"),
        }
    };

    format!("{sign}{body}")
}
