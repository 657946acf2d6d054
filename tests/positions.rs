use datatest_stable::Utf8Path;
use fen2eps::batch::{Converter, Output};
use fen2eps::font::FontFile;
use fen2eps::render::RenderOptions;
use fen2eps::symbols::SYMBOL_NAMES;
use fen2eps::types::fmt_num;
use fen2eps::{Board, SymbolId};
use regex_lite::Regex;

/// Font shipped with the crate
const DEFAULT_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/default.fed");

const DOCUMENT_START: &str = "%!PS-Adobe-2.0 EPSF-2.0\n";

/// Frame pieces in the order the body draws them
const FRAME_ORDER: [&str; 4] = ["F2ELFUC", "F2ERFUC", "F2ELFLC", "F2ERFLC"];

fn convert(source: &str, options: RenderOptions) -> datatest_stable::Result<(Converter, String)> {
    let converter = Converter::new(FontFile::new(DEFAULT_FONT), options, Output::Stdout)?
        .with_creation_date("Tue Jun 22 12:00:00 2010");
    let mut out = Vec::new();
    converter.run(source.as_bytes(), &mut out)?;
    Ok((converter, String::from_utf8(out)?))
}

/// Positions in `source` that decode to a full board.
fn boards(source: &str, options: &RenderOptions) -> Vec<Board> {
    source
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .filter_map(|line| Board::decode(line, options).ok())
        .collect()
}

fn check_document(
    path: &Utf8Path,
    document: &str,
    board: &Board,
    converter: &Converter,
) -> datatest_stable::Result<()> {
    let bbox = Regex::new(r"(?m)^%%BoundingBox: 0 0 (\S+) (\S+)$")?;
    let caps = bbox
        .captures(document)
        .ok_or_else(|| format!("{path}: no bounding box"))?;
    let layout = &converter.info().layout;
    assert_eq!(&caps[1], fmt_num(layout.bounding_box.x), "{path}: bounding box x");
    assert_eq!(&caps[2], fmt_num(layout.bounding_box.y), "{path}: bounding box y");

    let body_start = document
        .find(" setlinewidth\n")
        .ok_or_else(|| format!("{path}: no diagram body"))?;
    let (defs, body) = document.split_at(body_start);

    // one invocation per square, in board order
    let square = Regex::new(r"\bF2E([WB][PNBRQK]?[WB]S|BS|WS)\b")?;
    let invoked: Vec<&str> = square
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    let expected: Vec<&str> = board.squares().iter().map(|id| id.name()).collect();
    assert_eq!(invoked, expected, "{path}: square invocations");

    // every used symbol is defined, nothing else is
    let definition = Regex::new(r"(?m)^/F2E(\w+) \{$")?;
    let mut defined: Vec<SymbolId> = definition
        .captures_iter(defs)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|name| SYMBOL_NAMES.contains(name))
        .map(SymbolId::from_name)
        .collect();
    defined.sort();
    let used: Vec<SymbolId> = board.used().iter().collect();
    assert_eq!(defined, used, "{path}: exported symbols");

    let mut last = 0;
    for frame in FRAME_ORDER {
        let at = body
            .find(frame)
            .ok_or_else(|| format!("{path}: {frame} missing"))?;
        assert!(at >= last, "{path}: {frame} out of order");
        last = at;
    }
    assert!(document.ends_with("F2ERFLC\n\nrestore\n\n"), "{path}: trailer");
    Ok(())
}

fn check_fen_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;

    for notation in [true, false] {
        for reverse in [false, true] {
            let options = RenderOptions::new()
                .with_notation(notation)
                .with_reverse(reverse);
            let (converter, output) = convert(&source, options)?;
            let boards = boards(&source, &options);

            let documents: Vec<&str> = output
                .split(DOCUMENT_START)
                .filter(|doc| !doc.is_empty())
                .collect();
            assert_eq!(documents.len(), boards.len(), "{path}: document count");
            for (document, board) in documents.iter().zip(&boards) {
                check_document(path, document, board, &converter)?;
            }
        }
    }
    Ok(())
}

datatest_stable::harness! {
    { test = check_fen_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.fen$" },
}
