//! Symbol definitions copied from the font file into a document.

use std::io::{self, BufRead, Write};

use super::defaults::{
    FRAME_TO_SQUARE, MACRO_PREFIX, NEXT_RANK, PREAMBLE_SECTION, SQUARE_TO_FRAME, STEP_SQUARE,
};
use crate::errors::{FontError, OutputError, RunError};
use crate::font::{Dimensions, SectionScanner};
use crate::log::debug;
use crate::symbols::{SymbolId, SymbolSet};
use crate::types::fmt_num;

/// Streams the symbol sections left in `scanner` to `out`.
///
/// The preamble is copied as is. Every other section becomes a
/// `/F2E<name> { ... } def` procedure when its symbol is in `used`; section
/// names outside the symbol table count as the light square. Returns the
/// number of procedures written.
///
/// Read failures are font errors even though part of the document may
/// already be written.
pub fn export_symbols<R: BufRead, W: Write + ?Sized>(
    scanner: &mut SectionScanner<R>,
    used: &SymbolSet,
    out: &mut W,
) -> Result<usize, RunError> {
    let mut exported = 0;
    while let Some(name) = scanner.next_begin().map_err(FontError::Read)? {
        if name == PREAMBLE_SECTION {
            scanner.write_section(out, &name, false)?;
            continue;
        }
        if !used.contains(SymbolId::from_name(&name)) {
            continue;
        }
        writeln!(out, "/{}{} {{", MACRO_PREFIX, name).map_err(OutputError::Write)?;
        scanner.write_section(out, &name, true)?;
        writeln!(out, "}} def").map_err(OutputError::Write)?;
        exported += 1;
    }
    debug!(exported, "exported symbol definitions");
    Ok(exported)
}

/// Writes the four movement procedures the diagram body steps with.
pub fn write_movement_macros<W: Write + ?Sized>(
    out: &mut W,
    dims: &Dimensions,
    notation: bool,
) -> io::Result<()> {
    let square = dims.square_size;
    let left_width = dims.left_width(notation);
    let left_depth = dims.left_depth(notation);

    writeln!(out)?;
    writeln!(out, "/{} {{{} 0 translate}} def", STEP_SQUARE, fmt_num(square))?;
    writeln!(
        out,
        "/{} {{{} {} translate}} def",
        FRAME_TO_SQUARE,
        fmt_num(left_width),
        fmt_num(dims.square_depth - left_depth)
    )?;
    writeln!(
        out,
        "/{} {{{} {} translate}} def",
        SQUARE_TO_FRAME,
        fmt_num(square),
        fmt_num(dims.right_frame_depth - dims.square_depth)
    )?;
    writeln!(
        out,
        "/{} {{{} {} translate}} def",
        NEXT_RANK,
        fmt_num(-(square * 8.0 + left_width)),
        fmt_num(-(square + left_depth - dims.right_frame_depth))
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT_BODY: &str = "\
%BEGIN EpsPreamble
/inch {72 mul} def
  % kept verbatim
%END EpsPreamble
%BEGIN WS
0 0 moveto\t\t10 0  lineto
  stroke
%END WS
%BEGIN BS
fill
%END BS
%BEGIN WKWS
king
%END WKWS
%BEGIN Unknown
mystery
%END Unknown
";

    fn export(used: &SymbolSet) -> (usize, String) {
        let mut scanner = SectionScanner::new(FONT_BODY.as_bytes());
        let mut out = Vec::new();
        let count = export_symbols(&mut scanner, used, &mut out).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn latin1_bodies_are_copied_as_bytes() {
        let font = b"%BEGIN EpsPreamble\n% (c) Dirk B\xe4chle\n%END EpsPreamble\n\
%BEGIN WKWS\n(K\xf6nig)  show\n%END WKWS\n";
        let mut used = SymbolSet::empty();
        used.insert(SymbolId::from_name("WKWS"));
        let mut scanner = SectionScanner::new(&font[..]);
        let mut out = Vec::new();
        assert_eq!(export_symbols(&mut scanner, &used, &mut out).unwrap(), 1);
        assert_eq!(out, b"% (c) Dirk B\xe4chle\n/F2EWKWS {\n(K\xf6nig) show\n} def\n");
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn read_failures_are_font_errors() {
        let mut scanner = SectionScanner::new(io::BufReader::new(FailingReader));
        let mut out = Vec::new();
        let err = export_symbols(&mut scanner, &SymbolSet::frames(false), &mut out).unwrap_err();
        assert!(matches!(err, RunError::Font(FontError::Read(_))));
    }

    #[test]
    fn exports_only_used_symbols() {
        let mut used = SymbolSet::empty();
        used.insert(SymbolId::DARK_SQUARE);
        used.insert(SymbolId::from_name("WKWS"));
        let (count, text) = export(&used);
        assert_eq!(count, 2);
        assert_eq!(
            text,
            "/inch {72 mul} def\n  % kept verbatim\n/F2EBS {\nfill\n} def\n/F2EWKWS {\nking\n} def\n"
        );
    }

    #[test]
    fn unknown_sections_follow_the_light_square() {
        let mut used = SymbolSet::empty();
        used.insert(SymbolId::LIGHT_SQUARE);
        let (count, text) = export(&used);
        assert_eq!(count, 2);
        assert!(text.contains("/F2EWS {\n0 0 moveto 10 0 lineto\nstroke\n} def\n"));
        assert!(text.ends_with("/F2EUnknown {\nmystery\n} def\n"));
    }

    fn dims() -> Dimensions {
        Dimensions {
            square_size: 20.0,
            square_depth: 2.0,
            left_frame_width: 5.0,
            left_frame_depth: 1.0,
            left_notation_frame_width: 12.0,
            left_notation_frame_depth: 1.5,
            right_frame_depth: 3.0,
            ..Dimensions::default()
        }
    }

    #[test]
    fn movement_macros_without_notation() {
        let mut out = Vec::new();
        write_movement_macros(&mut out, &dims(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n/F2ESW {20 0 translate} def\n\
             /F2EFTOS {5 1 translate} def\n\
             /F2ESTOF {20 1 translate} def\n\
             /F2ENL {-165 -18 translate} def\n\n"
        );
    }

    #[test]
    fn movement_macros_with_notation() {
        let mut out = Vec::new();
        write_movement_macros(&mut out, &dims(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/F2EFTOS {12 0.5 translate} def\n"));
        assert!(text.contains("/F2ENL {-172 -18.5 translate} def\n"));
    }
}
