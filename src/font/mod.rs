//! Font definition files
//!
//! A font definition (`*.fed`) is a text file that starts with
//! [`SIGNATURE`] and is divided into `%BEGIN <name>` / `%END <name>`
//! sections:
//!
//! - `FontInfo` holds metadata and geometry as nested single-value sections
//! - `EpsPreamble` holds PostScript copied into every document
//! - every other section holds the PostScript body of one board symbol
//!
//! The file is read once for `FontInfo` and then re-opened for every diagram,
//! because the set of symbols to export depends on the position.

pub mod info;
pub mod scanner;
pub mod values;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub use info::{Dimensions, FONT_INFO_SECTION, FontInfo, FontMeta, Layout};
pub use scanner::{BEGIN_MARK, END_MARK, Mark, SectionScanner, simplify_whitespace};

use crate::errors::FontError;
use crate::log::debug;

/// First line every font definition must start with.
pub const SIGNATURE: &str = "%Fen2eps Postscript font definition file";

/// Font file used when none is given on the command line.
pub const DEFAULT_FONT_FILE: &str = "default.fed";

/// Checks the signature line at the start of `reader`.
pub fn check_signature<R: BufRead>(scanner: &mut SectionScanner<R>) -> Result<bool, FontError> {
    Ok(scanner
        .next_line()?
        .is_some_and(|line| line.starts_with(SIGNATURE.as_bytes())))
}

/// A font definition on disk.
#[derive(Clone, Debug)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh scanner positioned at the start of the file.
    pub fn open(&self) -> Result<SectionScanner<BufReader<File>>, FontError> {
        let file = File::open(&self.path).map_err(|source| FontError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(SectionScanner::new(BufReader::new(file)))
    }

    /// Verifies the signature and loads `FontInfo` for the given notation
    /// mode. The file is closed again before returning.
    pub fn load(&self, notation: bool) -> Result<FontInfo, FontError> {
        let mut scanner = self.open()?;
        if !check_signature(&mut scanner)? {
            return Err(FontError::BadSignature {
                path: self.path.clone(),
            });
        }
        let info = FontInfo::load(&mut scanner, notation).map_err(|e| e.with_path(&self.path))?;
        debug!(path = %self.path.display(), name = info.meta.name.as_str(), "loaded font definition");
        Ok(info)
    }

    /// Opens the file for a symbol export pass: positioned just after the
    /// end of `FontInfo`.
    pub fn open_symbols(&self) -> Result<SectionScanner<BufReader<File>>, FontError> {
        let mut scanner = self.open()?;
        scanner.skip_section(FONT_INFO_SECTION)?;
        Ok(scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_a_prefix_match() {
        let mut s = SectionScanner::new(&b"%Fen2eps Postscript font definition file v2\n"[..]);
        assert!(check_signature(&mut s).unwrap());

        let mut s = SectionScanner::new(&b"%!PS-Adobe\n"[..]);
        assert!(!check_signature(&mut s).unwrap());

        let mut s = SectionScanner::new(&b""[..]);
        assert!(!check_signature(&mut s).unwrap());
    }

    #[test]
    fn missing_file_reports_path() {
        let font = FontFile::new("does/not/exist.fed");
        match font.load(true) {
            Err(FontError::Open { path, .. }) => assert_eq!(path, Path::new("does/not/exist.fed")),
            other => panic!("expected open error, got {:?}", other),
        }
    }
}
