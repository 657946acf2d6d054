//! Fixed names used in generated documents

/// Prefix of every PostScript procedure the diagram defines.
pub const MACRO_PREFIX: &str = "F2E";

/// Font definition section copied unchanged into every document.
pub const PREAMBLE_SECTION: &str = "EpsPreamble";

/// Extension of files written in per-file mode.
pub const DOCUMENT_EXTENSION: &str = "eps";

/// `%%Creator:` value.
pub const CREATOR: &str = concat!("fen2eps v", env!("CARGO_PKG_VERSION"));

/// Title used when the document is not written to a named file.
pub const UNTITLED: &str = "none";

// Movement procedures synthesized from the font geometry
pub const STEP_SQUARE: &str = "F2ESW";
pub const FRAME_TO_SQUARE: &str = "F2EFTOS";
pub const SQUARE_TO_FRAME: &str = "F2ESTOF";
pub const NEXT_RANK: &str = "F2ENL";
