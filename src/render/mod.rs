//! EPS document generation
//!
//! This module is organized into submodules:
//! - `context`: `RenderOptions`, the notation and orientation switches
//! - `defaults`: Fixed procedure names and header values
//! - `header`: DSC header comments and trailer
//! - `export`: Symbol procedures copied from the font definition
//! - `diagram`: The board body built from symbol invocations

pub mod context;
pub mod defaults;
pub mod diagram;
pub mod export;
pub mod header;

pub use context::RenderOptions;
pub use header::DocumentInfo;

use std::io::Write;

use crate::board::Board;
use crate::errors::{OutputError, RunError};
use crate::font::{FontFile, FontInfo};

/// Writes one complete document for `board`.
///
/// The font file is opened afresh for the export pass; only the symbols the
/// board uses are copied into the document.
pub fn write_document<W: Write + ?Sized>(
    out: &mut W,
    font: &FontFile,
    info: &FontInfo,
    board: &Board,
    options: &RenderOptions,
    doc: &DocumentInfo,
) -> Result<(), RunError> {
    let mut symbols = font.open_symbols()?;

    header::write_header(out, info, doc).map_err(OutputError::Write)?;
    export::export_symbols(&mut symbols, board.used(), out)?;
    export::write_movement_macros(out, &info.dims, options.notation)
        .map_err(OutputError::Write)?;
    diagram::write_diagram(out, board, info, options).map_err(OutputError::Write)?;
    header::write_trailer(out).map_err(OutputError::Write)?;
    out.flush().map_err(OutputError::Write)?;
    Ok(())
}
