//! EPS document header and trailer

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use super::defaults::{CREATOR, UNTITLED};
use crate::font::FontInfo;
use crate::types::fmt_num;

/// Per-document values of the header comments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Output file name, `None` when streaming.
    pub title: Option<String>,
    /// `%%CreationDate:` value. [`DocumentInfo::now`] stamps the current time
    /// in UTC, not the local time zone.
    pub created: String,
}

impl DocumentInfo {
    /// Untitled document stamped with the current time.
    pub fn now() -> Self {
        Self {
            title: None,
            created: creation_date(SystemTime::now()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Writes the DSC header comments through the `save` that opens the
/// document body.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    info: &FontInfo,
    doc: &DocumentInfo,
) -> io::Result<()> {
    let bbox = info.layout.bounding_box;
    writeln!(out, "%!PS-Adobe-2.0 EPSF-2.0")?;
    writeln!(out, "%%Title: {}", doc.title.as_deref().unwrap_or(UNTITLED))?;
    writeln!(out, "%%Creator: {}", CREATOR)?;
    writeln!(out, "%%CreationDate: {}", doc.created)?;
    writeln!(out, "%%For: ")?;
    writeln!(out, "%%Orientation: Portrait")?;
    writeln!(out, "%%BoundingBox: 0 0 {} {}", fmt_num(bbox.x), fmt_num(bbox.y))?;
    writeln!(out, "%%Pages: 0")?;
    writeln!(out, "%%BeginSetup")?;
    writeln!(out, "%%EndSetup")?;
    writeln!(out, "%%BeginFen2epsFontInfo")?;
    writeln!(out, "%%F2E Name: {}", info.meta.name)?;
    writeln!(out, "%%F2E Author: {}", info.meta.author)?;
    writeln!(out, "%%F2E Version: {}", info.meta.version)?;
    writeln!(out, "%%F2E Date: {}", info.meta.date)?;
    writeln!(out, "%%EndFen2epsFontInfo")?;
    writeln!(out, "%%Magnification: 1.0000")?;
    writeln!(out, "%%EndComments")?;
    writeln!(out)?;
    writeln!(out, "save")
}

/// Closes the document opened by [`write_header`].
pub fn write_trailer<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "restore")?;
    writeln!(out)
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats `time` in the layout of C `ctime`, without the trailing newline:
/// `Thu Jan  1 00:00:00 1970`.
///
/// The time is always UTC. `ctime` would convert to the local time zone, so a
/// document created at 01:30 in Berlin in winter is stamped `00:30`.
pub fn creation_date(time: SystemTime) -> String {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    let days = secs.div_euclid(86_400);
    let of_day = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    // 1970-01-01 was a Thursday
    let weekday = (days + 4).rem_euclid(7) as usize;

    format!(
        "{} {} {:2} {:02}:{:02}:{:02} {}",
        WEEKDAYS[weekday],
        MONTHS[(month - 1) as usize],
        day,
        of_day / 3600,
        of_day % 3600 / 60,
        of_day % 60,
        year
    )
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}
