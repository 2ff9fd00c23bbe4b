//! Lenient operand parsing.
//!
//! Operands arrive as raw query text. Parsing skips leading whitespace and
//! accepts the longest prefix that reads as a decimal number, so `"12abc"`
//! is 12 and `" 3.5e2x"` is 350. Text without a numeric prefix is rejected,
//! as are values that do not fit in a finite `f64` (`"1e400"`).

/// Parse one operand, returning `None` when it is absent or not a number.
pub fn parse_operand(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return None;
    }
    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Length of the longest prefix matching
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
