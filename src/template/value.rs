//! Binding values and their rendered form

use std::fmt;

/// A precomputed value bound to a placeholder token
#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    /// Numeric value, rendered with exactly two decimals
    Number(f64),
    /// Literal text, rendered verbatim
    Text(String),
}

impl BindingValue {
    /// Render the value as it will appear in the filled template
    pub fn render(&self) -> String {
        match self {
            BindingValue::Number(n) => format_two_decimals(*n),
            BindingValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for BindingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<f64> for BindingValue {
    fn from(value: f64) -> Self {
        BindingValue::Number(value)
    }
}

impl From<String> for BindingValue {
    fn from(value: String) -> Self {
        BindingValue::Text(value)
    }
}

impl From<&str> for BindingValue {
    fn from(value: &str) -> Self {
        BindingValue::Text(value.to_string())
    }
}

/// Format a number with two decimals, rounding half away from zero.
///
/// Rounding works on the shortest decimal representation of the value rather
/// than its binary expansion, so `19.995` becomes `20.00` even though the
/// nearest `f64` is slightly below it. A result of zero never carries a sign.
pub fn format_two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // f64's Display never switches to exponent notation
    let repr = value.abs().to_string();
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, f),
        None => (repr.as_str(), ""),
    };

    let mut frac: Vec<u8> = frac_part.bytes().collect();
    frac.resize(3, b'0');
    let round_up = frac[2] >= b'5';

    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..2].iter().copied()).collect();
    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let is_zero = digits.iter().all(|&d| d == b'0');
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(std::str::from_utf8(&digits[..split]).unwrap_or("0"));
    out.push('.');
    out.push_str(std::str::from_utf8(&digits[split..]).unwrap_or("00"));
    out
}

/// Add one to an ASCII decimal digit string, growing it on overflow
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_number() {
        assert_eq!(format_two_decimals(840.0), "840.00");
        assert_eq!(format_two_decimals(0.0), "0.00");
    }

    #[test]
    fn test_format_half_rounds_away_from_zero() {
        assert_eq!(format_two_decimals(19.995), "20.00");
        assert_eq!(format_two_decimals(0.125), "0.13");
        assert_eq!(format_two_decimals(-1.005), "-1.01");
    }

    #[test]
    fn test_format_below_half_truncates() {
        assert_eq!(format_two_decimals(19.994), "19.99");
        assert_eq!(format_two_decimals(193.20000000000002), "193.20");
    }

    #[test]
    fn test_format_carry_into_integer_part() {
        assert_eq!(format_two_decimals(99.999), "100.00");
        assert_eq!(format_two_decimals(9.995), "10.00");
    }

    #[test]
    fn test_format_negative_zero_has_no_sign() {
        assert_eq!(format_two_decimals(-0.001), "0.00");
        assert_eq!(format_two_decimals(-0.0), "0.00");
    }

    #[test]
    fn test_format_small_and_large_values() {
        assert_eq!(format_two_decimals(0.005), "0.01");
        assert_eq!(format_two_decimals(1e21), "1000000000000000000000.00");
    }

    #[test]
    fn test_text_renders_verbatim() {
        assert_eq!(BindingValue::from("Ann Lee").render(), "Ann Lee");
        assert_eq!(BindingValue::from(16.8).to_string(), "16.80");
    }
}
