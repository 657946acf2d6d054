//! Error types with diagnostics using miette
//!
//! Font errors are fatal for the whole run, position errors only skip the
//! offending input line, output errors stop the run.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Font Definition Errors
// ============================================================================

/// Errors raised while opening or loading a font definition file
#[derive(Error, Diagnostic, Debug)]
pub enum FontError {
    #[error("could not open font definition file {}", path.display())]
    #[diagnostic(
        code(fen2eps::font::open),
        help("pass an existing font definition with `-f <file>`")
    )]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("wrong file header in PostScript font definition file {}", path.display())]
    #[diagnostic(
        code(fen2eps::font::bad_signature),
        help("the first line must read `%Fen2eps Postscript font definition file`")
    )]
    BadSignature { path: PathBuf },

    #[error("no `FontInfo` section found in {}", path.display())]
    #[diagnostic(
        code(fen2eps::font::missing_font_info),
        help("add a `%BEGIN FontInfo` ... `%END FontInfo` block")
    )]
    MissingFontInfo { path: PathBuf },

    #[error("failed to read font definition")]
    #[diagnostic(code(fen2eps::font::read))]
    Read(#[from] io::Error),
}

impl FontError {
    /// Attach the font file path to errors raised by readers that only see
    /// a stream.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            FontError::MissingFontInfo { .. } => FontError::MissingFontInfo {
                path: path.to_path_buf(),
            },
            other => other,
        }
    }
}

// ============================================================================
// Position Errors
// ============================================================================

/// Errors raised while decoding a board position
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position expands to {length} squares, expected 64")]
    #[diagnostic(
        code(fen2eps::position::malformed),
        help("use eight `/`-separated ranks with digits 1-8 for empty squares")
    )]
    Malformed { length: usize },
}

// ============================================================================
// Output Errors
// ============================================================================

/// Errors raised while writing diagrams
#[derive(Error, Diagnostic, Debug)]
pub enum OutputError {
    #[error("could not open output file {}", path.display())]
    #[diagnostic(code(fen2eps::output::create))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write diagram")]
    #[diagnostic(code(fen2eps::output::write))]
    Write(#[from] io::Error),
}

// ============================================================================
// Run Errors
// ============================================================================

/// Anything that ends a conversion run early
#[derive(Error, Diagnostic, Debug)]
pub enum RunError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),

    #[error("failed to read positions")]
    #[diagnostic(code(fen2eps::input))]
    Input(#[source] io::Error),
}
