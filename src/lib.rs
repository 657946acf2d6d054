//! Chess diagrams as Encapsulated PostScript
//!
//! Each FEN line becomes one EPS document. A font definition file
//! (`*.fed`) provides the geometry of squares and frames plus the PostScript
//! body of every symbol; a document carries only the symbols its position
//! needs.
//!
//! ```no_run
//! use fen2eps::batch::{self, Output};
//! use fen2eps::font::FontFile;
//! use fen2eps::render::RenderOptions;
//!
//! let input = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n";
//! let mut out = Vec::new();
//! let summary = batch::run(
//!     FontFile::new("fonts/default.fed"),
//!     RenderOptions::new().with_reverse(true),
//!     Output::Stdout,
//!     input.as_bytes(),
//!     &mut out,
//! )?;
//! assert_eq!(summary.documents, 1);
//! # Ok::<(), fen2eps::errors::RunError>(())
//! ```

pub mod batch;
pub mod board;
pub mod errors;
pub mod font;
pub mod log;
pub mod render;
pub mod symbols;
pub mod types;

pub use batch::{Converter, Output, Summary};
pub use board::Board;
pub use errors::{FontError, OutputError, PositionError, RunError};
pub use font::{FontFile, FontInfo};
pub use render::RenderOptions;
pub use symbols::{SymbolId, SymbolSet};
