//! Line-by-line conversion of a FEN stream.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use crate::board::Board;
use crate::errors::{FontError, OutputError, RunError};
use crate::font::{FontFile, FontInfo};
use crate::log::debug;
use crate::render::defaults::DOCUMENT_EXTENSION;
use crate::render::header::DocumentInfo;
use crate::render::{RenderOptions, write_document};

/// Where finished documents go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    /// All documents back to back on one stream.
    #[default]
    Stdout,
    /// One file per position, named `<prefix><n>.eps` with `n` counting from 1.
    Files { prefix: String },
}

impl Output {
    /// Name of the `number`th document file for `prefix`.
    pub fn file_name(prefix: &str, number: usize) -> String {
        format!("{}{}.{}", prefix, number, DOCUMENT_EXTENSION)
    }
}

/// Counts from one conversion run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Input lines read, blank ones included.
    pub lines: usize,
    /// Documents written.
    pub documents: usize,
    /// Non-blank lines that did not decode to a board.
    pub skipped: usize,
}

/// A loaded font plus everything that stays fixed for a run.
#[derive(Clone, Debug)]
pub struct Converter {
    font: FontFile,
    info: FontInfo,
    options: RenderOptions,
    output: Output,
    creation_date: Option<String>,
}

impl Converter {
    /// Loads `font` once for the whole run.
    pub fn new(font: FontFile, options: RenderOptions, output: Output) -> Result<Self, FontError> {
        let info = font.load(options.notation)?;
        Ok(Self {
            font,
            info,
            options,
            output,
            creation_date: None,
        })
    }

    /// Stamps every document with `date` instead of the current time.
    pub fn with_creation_date(mut self, date: impl Into<String>) -> Self {
        self.creation_date = Some(date.into());
        self
    }

    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    fn document_info(&self) -> DocumentInfo {
        match &self.creation_date {
            Some(created) => DocumentInfo {
                title: None,
                created: created.clone(),
            },
            None => DocumentInfo::now(),
        }
    }

    /// Converts every position in `input`.
    ///
    /// Blank lines and lines that are not a full board are skipped. In
    /// [`Output::Stdout`] mode documents go to `stdout`; in
    /// [`Output::Files`] mode a file that cannot be created ends the run.
    pub fn run<R: BufRead, W: Write + ?Sized>(
        &self,
        input: R,
        stdout: &mut W,
    ) -> Result<Summary, RunError> {
        let mut summary = Summary::default();
        // Lines are bytes; nothing on a line has to be UTF-8
        for line in input.split(b'\n') {
            let mut line = line.map_err(RunError::Input)?;
            summary.lines += 1;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }

            let board = match Board::decode(&line, &self.options) {
                Ok(board) => board,
                Err(_err) => {
                    debug!(line = summary.lines, error = %_err, "skipping position");
                    summary.skipped += 1;
                    continue;
                }
            };

            summary.documents += 1;
            match &self.output {
                Output::Stdout => self.write(stdout, &board, self.document_info())?,
                Output::Files { prefix } => {
                    let name = Output::file_name(prefix, summary.documents);
                    let path = PathBuf::from(&name);
                    let file = File::create(&path)
                        .map_err(|source| OutputError::Create { path: path.clone(), source })?;
                    debug!(path = %path.display(), "writing diagram");
                    let mut out = BufWriter::new(file);
                    self.write(&mut out, &board, self.document_info().with_title(name))?;
                }
            }
        }
        debug!(
            lines = summary.lines,
            documents = summary.documents,
            skipped = summary.skipped,
            "conversion finished"
        );
        Ok(summary)
    }

    fn write<W: Write + ?Sized>(
        &self,
        out: &mut W,
        board: &Board,
        doc: DocumentInfo,
    ) -> Result<(), RunError> {
        write_document(out, &self.font, &self.info, board, &self.options, &doc)
    }
}

/// Loads `font` and converts every position in `input` in one go.
pub fn run<R: BufRead, W: Write + ?Sized>(
    font: FontFile,
    options: RenderOptions,
    output: Output,
    input: R,
    stdout: &mut W,
) -> Result<Summary, RunError> {
    Converter::new(font, options, output)?.run(input, stdout)
}
