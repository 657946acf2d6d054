//! Readers for single-value sections.
//!
//! A value section holds its value on the first line after `%BEGIN <name>`.
//! Each reader consumes that one line and then skips to `%END <name>`, so any
//! trailing content in the section is ignored. A section whose first line is
//! already an end marker has no value.

use std::io::{self, BufRead};

use pest::Parser;
use pest_derive::Parser;

use super::scanner::{END_MARK, SectionScanner};
use crate::log::debug;
use crate::types::Unit;

#[derive(Parser)]
#[grammar = "font/value.pest"]
struct ValueParser;

/// A number with the unit token that followed it, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLine {
    pub number: f64,
    pub unit: Option<String>,
}

impl ValueLine {
    /// Parses `<number> [<unit>]`. Lines that do not start with a number
    /// give `0` without a unit.
    pub fn parse(line: &str) -> ValueLine {
        let mut value = ValueLine {
            number: 0.0,
            unit: None,
        };
        let Ok(mut pairs) = ValueParser::parse(Rule::value_line, line) else {
            debug!(line, "value line is not a number");
            return value;
        };
        let Some(value_line) = pairs.next() else {
            return value;
        };
        for pair in value_line.into_inner() {
            match pair.as_rule() {
                Rule::number => value.number = pair.as_str().parse().unwrap_or(0.0),
                Rule::unit => value.unit = Some(pair.as_str().to_string()),
                _ => {}
            }
        }
        value
    }

    /// The number as a non-negative magnitude.
    pub fn magnitude(&self) -> f64 {
        self.number.abs()
    }

    /// The magnitude converted to points. Unknown or missing units leave the
    /// number as it is.
    pub fn points(&self) -> f64 {
        let magnitude = self.magnitude();
        match self.unit.as_deref().map(str::parse::<Unit>) {
            Some(Ok(unit)) => unit.to_points(magnitude),
            _ => magnitude,
        }
    }
}

/// Reads the first line of the section, or `None` when the section is empty.
/// Bytes that are not UTF-8 decode to U+FFFD.
/// The rest of the section is skipped.
fn read_first_line<R: BufRead>(
    scanner: &mut SectionScanner<R>,
    section: &str,
) -> io::Result<Option<String>> {
    let first = match scanner.next_line()? {
        None => return Ok(None),
        Some(line) if line.starts_with(END_MARK.as_bytes()) => return Ok(None),
        Some(line) => String::from_utf8_lossy(line).into_owned(),
    };
    scanner.skip_section(section)?;
    Ok(Some(first))
}

/// Reads the section's line verbatim; empty sections give an empty string.
pub fn read_string<R: BufRead>(scanner: &mut SectionScanner<R>, section: &str) -> io::Result<String> {
    Ok(read_first_line(scanner, section)?.unwrap_or_default())
}

/// Reads a unitless magnitude. Empty or unparseable sections give `0`.
pub fn read_number<R: BufRead>(scanner: &mut SectionScanner<R>, section: &str) -> io::Result<f64> {
    Ok(read_first_line(scanner, section)?
        .map(|line| ValueLine::parse(&line).magnitude())
        .unwrap_or(0.0))
}

/// Reads a magnitude with an optional `cm`, `mm` or `in` unit, in points.
pub fn read_dimension<R: BufRead>(
    scanner: &mut SectionScanner<R>,
    section: &str,
) -> io::Result<f64> {
    Ok(read_first_line(scanner, section)?
        .map(|line| ValueLine::parse(&line).points())
        .unwrap_or(0.0))
}
