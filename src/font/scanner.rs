//! Line scanner for `%BEGIN <name>` / `%END <name>` delimited sections.
//!
//! A font definition is treated as lines of bytes. Any line starting with
//! [`BEGIN_MARK`] opens a section, any line starting with [`END_MARK`]
//! closes one; the section name is the second space-separated field of the
//! marker line. Everything else is content that only has meaning to the
//! reader of the enclosing section, and is copied without decoding.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::errors::{FontError, OutputError, RunError};
use crate::log::{debug, warn};

/// Prefix of a line opening a section.
pub const BEGIN_MARK: &str = "%BEGIN";
/// Prefix of a line closing a section.
pub const END_MARK: &str = "%END";

/// A section marker found by [`SectionScanner::next_mark`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Begin(String),
    End(String),
}

impl Mark {
    /// Parses a marker line, `None` for content lines.
    pub fn parse(line: &[u8]) -> Option<Mark> {
        if line.starts_with(BEGIN_MARK.as_bytes()) {
            Some(Mark::Begin(mark_name(line).into_owned()))
        } else if line.starts_with(END_MARK.as_bytes()) {
            Some(Mark::End(mark_name(line).into_owned()))
        } else {
            None
        }
    }

    /// Whether this closes the section called `name`.
    pub fn closes(&self, name: &str) -> bool {
        matches!(self, Mark::End(n) if n == name)
    }
}

/// The name field of a marker line (empty when the line has no second field).
/// Bytes that are not UTF-8 decode to U+FFFD.
fn mark_name(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line.split(|&b| b == b' ').nth(1).unwrap_or_default())
}

/// Collapse every run of spaces, tabs and newlines into a single space and
/// strip leading and trailing whitespace.
pub fn simplify_whitespace(line: &[u8]) -> Vec<u8> {
    line.split(|b| matches!(b, b' ' | b'\t' | b'\n'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(&b' ')
}

/// Forward-only scanner over a font definition stream.
#[derive(Debug)]
pub struct SectionScanner<R> {
    reader: R,
    line: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> SectionScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next line without its terminator. Returns `None` at the end
    /// of the stream.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        while matches!(self.line.last(), Some(b'\n' | b'\r')) {
            self.line.pop();
        }
        Ok(Some(&self.line))
    }

    /// Skips content lines up to the next marker. `None` at end of stream.
    pub fn next_mark(&mut self) -> io::Result<Option<Mark>> {
        while let Some(line) = self.next_line()? {
            if let Some(mark) = Mark::parse(line) {
                return Ok(Some(mark));
            }
        }
        Ok(None)
    }

    /// Skips to the next `%BEGIN` marker and returns its name.
    pub fn next_begin(&mut self) -> io::Result<Option<String>> {
        while let Some(mark) = self.next_mark()? {
            if let Mark::Begin(name) = mark {
                return Ok(Some(name));
            }
        }
        Ok(None)
    }

    /// Consumes everything up to and including `%END <name>`.
    ///
    /// A section that is never closed runs to the end of the stream; this is
    /// tolerated and reported as `false`.
    pub fn skip_section(&mut self, name: &str) -> io::Result<bool> {
        while let Some(mark) = self.next_mark()? {
            if mark.closes(name) {
                return Ok(true);
            }
        }
        debug!(section = name, line = self.line_number, "section not closed before end of file");
        Ok(false)
    }

    /// Copies the content of section `name` to `out`, one line at a time.
    ///
    /// End markers of other sections are content and are copied too; copying
    /// stops at `%END <name>`, which is consumed but not written. With
    /// `simplify` every copied line goes through [`simplify_whitespace`].
    /// Returns `false` if the stream ended first.
    ///
    /// Failing to read is a [`FontError::Read`], failing to write an
    /// [`OutputError::Write`].
    pub fn write_section<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        name: &str,
        simplify: bool,
    ) -> Result<bool, RunError> {
        while let Some(line) = self.next_line().map_err(FontError::Read)? {
            if line.starts_with(END_MARK.as_bytes()) && mark_name(line) == name {
                return Ok(true);
            }
            let text = if simplify {
                Cow::Owned(simplify_whitespace(line))
            } else {
                Cow::Borrowed(line)
            };
            out.write_all(&text)
                .and_then(|()| out.write_all(b"\n"))
                .map_err(OutputError::Write)?;
        }
        warn!(section = name, line = self.line_number, "section copy hit end of file");
        Ok(false)
    }
}
