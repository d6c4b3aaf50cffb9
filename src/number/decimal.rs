//! Decimal rendering of `f64` with ECMAScript `Number` semantics.
//!
//! `to_fixed`, `to_precision` and `js_to_string` reproduce
//! `Number.prototype.toFixed`, `toPrecision` and `String(number)`. Rounding
//! works on the exact binary value and breaks ties away from zero, unlike
//! `format!("{:.N}")` which breaks ties to even.

/// Enough fractional digits in scientific form to hold the exact expansion of
/// any finite double (at most 767 significant digits).
const EXACT_DIGITS: usize = 800;

/// A finite, non-negative decimal: `d0.d1d2... x 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    fn zero() -> Self {
        Self { digits: vec![0], exponent: 0 }
    }

    /// Parse the output of `{:e}` / `{:.Ne}` for a non-negative finite value.
    fn from_scientific(s: &str) -> Self {
        let (mantissa, exponent) = s.split_once('e').unwrap_or((s, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }

        if digits.iter().all(|&d| d == 0) {
            return Self::zero();
        }
        Self { digits, exponent }
    }

    /// Exact decimal expansion of `x.abs()`.
    fn exact(x: f64) -> Self {
        Self::from_scientific(&format!("{:.*e}", EXACT_DIGITS, x.abs()))
    }

    /// Shortest digits that round-trip to `x.abs()`.
    fn shortest(x: f64) -> Self {
        Self::from_scientific(&format!("{:e}", x.abs()))
    }

    fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Keep `count` significant digits, rounding half away from zero.
    /// The result always holds exactly `count` digits.
    fn round_significant(&self, count: usize) -> Self {
        let count = count.max(1);
        if self.is_zero() {
            return Self { digits: vec![0; count], exponent: 0 };
        }

        let mut digits: Vec<u8> = self.digits.iter().copied().take(count).collect();
        digits.resize(count, 0);
        let mut exponent = self.exponent;

        if self.digits.get(count).is_some_and(|&d| d >= 5) {
            let mut i = count;
            loop {
                if i == 0 {
                    // Carried out of the leading digit: 99.9 -> 100
                    digits.insert(0, 1);
                    digits.truncate(count);
                    exponent += 1;
                    break;
                }
                i -= 1;
                if digits[i] == 9 {
                    digits[i] = 0;
                } else {
                    digits[i] += 1;
                    break;
                }
            }
        }

        Self { digits, exponent }
    }

    /// Round to `fraction` digits after the decimal point.
    fn round_fraction(&self, fraction: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let keep = self.exponent + 1 + fraction as i32;
        if keep > 0 {
            return self.round_significant(keep as usize);
        }
        // Everything sits below the last kept place. Only a leading digit
        // directly at the rounding position can carry into it.
        if keep == 0 && self.digits[0] >= 5 {
            Self { digits: vec![1], exponent: -(fraction as i32) }
        } else {
            Self::zero()
        }
    }

    fn digit_at(&self, power: i32) -> u8 {
        let index = self.exponent - power;
        if index < 0 {
            return 0;
        }
        self.digits.get(index as usize).copied().unwrap_or(0)
    }

    /// Plain positional rendering with exactly `fraction` decimals.
    fn render_fixed(&self, fraction: usize) -> String {
        let mut out = String::new();
        if self.is_zero() || self.exponent < 0 {
            out.push('0');
        } else {
            for power in (0..=self.exponent).rev() {
                out.push(char::from(b'0' + self.digit_at(power)));
            }
        }
        if fraction > 0 {
            out.push('.');
            for place in 1..=fraction as i32 {
                out.push(char::from(b'0' + self.digit_at(-place)));
            }
        }
        out
    }

    fn digit_string(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

fn non_finite(x: f64) -> Option<String> {
    if x.is_nan() {
        Some("NaN".to_string())
    } else if x.is_infinite() {
        Some(if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

fn exponent_suffix(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("e{sign}{}", exponent.abs())
}

/// `Number.prototype.toFixed`. `fraction` is clamped to 100 places.
///
/// Magnitudes of `1e21` and above fall back to [`js_to_string`].
pub fn to_fixed(x: f64, fraction: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    if x.abs() >= 1e21 {
        return js_to_string(x);
    }
    let fraction = fraction.min(100);
    let body = Decimal::exact(x).round_fraction(fraction).render_fixed(fraction);
    if x < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// `Number.prototype.toPrecision`. `precision` is clamped to [1, 100].
pub fn to_precision(x: f64, precision: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    let precision = precision.clamp(1, 100);
    let sign = if x < 0.0 { "-" } else { "" };

    let rounded = Decimal::exact(x).round_significant(precision);
    let digits = rounded.digit_string();
    let e = rounded.exponent;

    let body = if e < -6 || e >= precision as i32 {
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}{}", exponent_suffix(e))
        } else {
            format!("{head}.{tail}{}", exponent_suffix(e))
        }
    } else if e == precision as i32 - 1 {
        digits
    } else if e >= 0 {
        let (int, frac) = digits.split_at(e as usize + 1);
        format!("{int}.{frac}")
    } else {
        format!("0.{}{digits}", "0".repeat((-(e + 1)) as usize))
    };

    format!("{sign}{body}")
}

/// `String(number)`: shortest round-trip digits, positional notation for
/// magnitudes in `[1e-7, 1e21)`, exponential otherwise.
pub fn js_to_string(x: f64) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let sign = if x < 0.0 { "-" } else { "" };

    let shortest = Decimal::shortest(x);
    let digits = shortest.digit_string();
    let k = digits.len() as i32;
    let n = shortest.exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}{}", exponent_suffix(n - 1))
        } else {
            format!("{head}.{tail}{}", exponent_suffix(n - 1))
        }
    };

    format!("{sign}{body}")
}

/// `parseFloat` for the strings produced in this module.
pub(crate) fn parse_number(s: &str) -> f64 {
    match s {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        other => other.parse().unwrap_or(f64::NAN),
    }
}
