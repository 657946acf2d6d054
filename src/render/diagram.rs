//! The diagram body: symbol invocations laid out by relative moves.
//!
//! The body starts at the translation computed in [`Layout`] and walks the
//! board left to right, top to bottom. Every move is relative, so the
//! offsets here have to agree with the movement procedures written by
//! [`super::export::write_movement_macros`].
//!
//! [`Layout`]: crate::font::Layout

use std::io::{self, Write};

use super::RenderOptions;
use super::defaults::{FRAME_TO_SQUARE, MACRO_PREFIX, NEXT_RANK, SQUARE_TO_FRAME, STEP_SQUARE};
use crate::board::Board;
use crate::font::FontInfo;
use crate::symbols::SymbolId;
use crate::types::fmt_num;

/// Writes the body of one diagram.
pub fn write_diagram<W: Write + ?Sized>(
    out: &mut W,
    board: &Board,
    info: &FontInfo,
    options: &RenderOptions,
) -> io::Result<()> {
    let layout = &info.layout;
    writeln!(out, "{} setlinewidth", fmt_num(info.dims.line_width))?;
    writeln!(
        out,
        "{} {} translate",
        fmt_num(layout.translate.x),
        fmt_num(layout.translate.y)
    )?;
    writeln!(out, "{} {} scale", fmt_num(layout.scale), fmt_num(layout.scale))?;

    write_top_frame(out, info, options)?;
    write_ranks(out, board, info, options)?;
    write_bottom_frame(out, info, options)
}

fn invoke<W: Write + ?Sized>(out: &mut W, id: SymbolId) -> io::Result<()> {
    write!(out, "{}{}", MACRO_PREFIX, id)
}

fn write_top_frame<W: Write + ?Sized>(
    out: &mut W,
    info: &FontInfo,
    options: &RenderOptions,
) -> io::Result<()> {
    let dims = &info.dims;
    invoke(out, SymbolId::UPPER_LEFT_CORNER)?;
    writeln!(out)?;
    writeln!(out, "{} 0 translate", fmt_num(dims.left_frame_width))?;
    for _ in 0..8 {
        invoke(out, SymbolId::TOP_FRAME)?;
        write!(out, " {} ", STEP_SQUARE)?;
    }
    invoke(out, SymbolId::UPPER_RIGHT_CORNER)?;
    writeln!(out)?;

    // down to the first rank
    writeln!(
        out,
        "{} {} translate",
        fmt_num(-(dims.square_size * 8.0 + dims.left_width(options.notation))),
        fmt_num(-(dims.square_size - dims.left_depth(options.notation) + dims.top_frame_depth))
    )
}

fn write_ranks<W: Write + ?Sized>(
    out: &mut W,
    board: &Board,
    info: &FontInfo,
    options: &RenderOptions,
) -> io::Result<()> {
    let dims = &info.dims;
    for row in 0..8 {
        let left = if options.notation {
            SymbolId::left_notation(if options.reverse { row } else { 7 - row })
        } else {
            SymbolId::LEFT_FRAME
        };
        invoke(out, left)?;
        write!(out, " {} ", FRAME_TO_SQUARE)?;

        for col in 0..7 {
            invoke(out, board.at(row, col))?;
            write!(out, " {} ", STEP_SQUARE)?;
        }
        invoke(out, board.at(row, 7))?;
        write!(out, " {} ", SQUARE_TO_FRAME)?;
        invoke(out, SymbolId::RIGHT_FRAME)?;

        if row < 7 {
            writeln!(out, " {}", NEXT_RANK)?;
        } else {
            // to the lower left corner
            writeln!(out)?;
            writeln!(
                out,
                "{} {} translate",
                fmt_num(-(dims.square_size * 8.0 + dims.left_frame_width)),
                fmt_num(-(dims.bottom_frame_height + dims.right_frame_depth))
            )?;
        }
    }
    Ok(())
}

fn write_bottom_frame<W: Write + ?Sized>(
    out: &mut W,
    info: &FontInfo,
    options: &RenderOptions,
) -> io::Result<()> {
    let dims = &info.dims;
    let (down, up) = if options.notation {
        (
            dims.bottom_frame_height - dims.bottom_notation_frame_height,
            dims.bottom_notation_frame_height - dims.bottom_frame_height,
        )
    } else {
        (0.0, 0.0)
    };

    invoke(out, SymbolId::LOWER_LEFT_CORNER)?;
    writeln!(out)?;
    writeln!(out, "{} {} translate", fmt_num(dims.left_frame_width), fmt_num(down))?;
    for col in 0..8 {
        let bottom = if options.notation {
            SymbolId::bottom_notation(if options.reverse { 7 - col } else { col })
        } else {
            SymbolId::BOTTOM_FRAME
        };
        invoke(out, bottom)?;
        if col < 7 {
            write!(out, " {} ", STEP_SQUARE)?;
        } else {
            writeln!(out)?;
            writeln!(out, "{} {} translate", fmt_num(dims.square_size), fmt_num(up))?;
        }
    }
    invoke(out, SymbolId::LOWER_RIGHT_CORNER)?;
    writeln!(out)?;
    writeln!(out)
}
