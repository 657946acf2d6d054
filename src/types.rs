//! Physical units and number formatting for PostScript output.
//!
//! PostScript user space is measured in points (1/72 inch). Dimensions in a
//! font definition may carry a unit suffix and are converted on read; bare
//! numbers are already points.

use std::fmt;
use std::str::FromStr;

/// A unit suffix accepted after a dimension value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Cm,
    Mm,
    In,
}

impl Unit {
    /// Multiplier converting a value in this unit to points.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Unit::Cm => 72.0 / 2.54,
            Unit::Mm => 7.2 / 2.54,
            Unit::In => 72.0,
        }
    }

    /// Converts `value` (in this unit) to points.
    #[inline]
    pub fn to_points(self, value: f64) -> f64 {
        value * self.factor()
    }
}

/// Error for a unit suffix outside `cm`, `mm`, `in`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit: {:?}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Unit::Cm),
            "mm" => Ok(Unit::Mm),
            "in" => Ok(Unit::In),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// Format a number the way C++ streams do by default (`%g`, 6 significant
/// digits, trailing zeros trimmed).
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with `sig_figs` significant digits following `%g` rules:
/// scientific notation when the decimal exponent is below -4 or at least
/// `sig_figs`, fixed notation otherwise.
pub fn fmt_num_precision(value: f64, sig_figs: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sig_figs = sig_figs.max(1);
    // Round once in scientific form to learn the exponent after rounding
    let sci = format!("{:.*e}", sig_figs - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= sig_figs as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (sig_figs as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_default_stream_output() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(72.0), "72");
        assert_eq!(fmt_num(-40.0), "-40");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(72.0 / 2.54), "28.3465");
        assert_eq!(fmt_num(1234567.0), "1.23457e+06");
        assert_eq!(fmt_num(123456.0), "123456");
        assert_eq!(fmt_num(0.0001), "0.0001");
        assert_eq!(fmt_num(0.00001), "1e-05");
    }

    #[test]
    fn units() {
        assert_eq!("cm".parse::<Unit>(), Ok(Unit::Cm));
        assert_eq!("mm".parse::<Unit>(), Ok(Unit::Mm));
        assert_eq!("in".parse::<Unit>(), Ok(Unit::In));
        assert!("pt".parse::<Unit>().is_err());
        assert_eq!(Unit::In.to_points(2.0), 144.0);
        assert_eq!(Unit::Cm.to_points(2.54), 2.54 * (72.0 / 2.54));
        assert_eq!(Unit::Mm.factor(), 7.2 / 2.54);
    }
}
