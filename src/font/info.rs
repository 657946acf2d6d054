//! The `FontInfo` section: font metadata, raw dimensions and derived layout.

use std::io::BufRead;

use glam::{DVec2, dvec2};

use super::scanner::{Mark, SectionScanner};
use super::values::{read_dimension, read_number, read_string};
use crate::errors::FontError;
use crate::log::debug;

/// Name of the section holding metadata and geometry.
pub const FONT_INFO_SECTION: &str = "FontInfo";

/// Descriptive strings echoed into every document header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontMeta {
    pub name: String,
    pub version: String,
    pub date: String,
    pub author: String,
}

/// Raw dimensions as read from the font definition.
///
/// Square and frame measurements are in font units; margins, board size and
/// line width are in points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub square_size: f64,
    pub square_height: f64,
    pub square_depth: f64,
    pub top_frame_height: f64,
    pub top_frame_depth: f64,
    pub left_frame_width: f64,
    pub left_frame_height: f64,
    pub left_frame_depth: f64,
    pub left_notation_frame_width: f64,
    pub left_notation_frame_height: f64,
    pub left_notation_frame_depth: f64,
    pub right_frame_width: f64,
    pub right_frame_height: f64,
    pub right_frame_depth: f64,
    pub bottom_frame_height: f64,
    pub bottom_frame_depth: f64,
    pub bottom_notation_frame_height: f64,
    pub bottom_notation_frame_depth: f64,
    /// Explicit scale, used unless `board_size` overrides it.
    pub scaling_factor: f64,
    /// Requested printed board size in points, `0` when not given.
    pub board_size: f64,
    pub line_width: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Dimensions {
    /// Width of the left frame for the active notation mode.
    pub fn left_width(&self, notation: bool) -> f64 {
        if notation {
            self.left_notation_frame_width
        } else {
            self.left_frame_width
        }
    }

    /// Depth of the left frame for the active notation mode.
    pub fn left_depth(&self, notation: bool) -> f64 {
        if notation {
            self.left_notation_frame_depth
        } else {
            self.left_frame_depth
        }
    }

    /// Height plus depth of the bottom frame for the active notation mode.
    pub fn bottom_extent(&self, notation: bool) -> f64 {
        if notation {
            self.bottom_notation_frame_height + self.bottom_notation_frame_depth
        } else {
            self.bottom_frame_height + self.bottom_frame_depth
        }
    }
}

/// Values computed once after all dimensions are loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub scale: f64,
    /// Upper corner of the `0 0 x y` bounding box, in points.
    pub bounding_box: DVec2,
    /// Translation to the upper left corner of the board, in points.
    pub translate: DVec2,
}

impl Layout {
    /// Derive scale, bounding box and translation from `dims`.
    ///
    /// The arithmetic is order-sensitive: the emitted diagram is a chain of
    /// relative moves that has to close exactly on these values.
    pub fn derive(dims: &Dimensions, notation: bool) -> Layout {
        let scale = if dims.board_size > 0.0 {
            dims.board_size / (8.0 * dims.square_size)
        } else {
            dims.scaling_factor
        };

        let mut bbox_x = dims.left_width(notation) * scale;
        let mut bbox_y = dims.bottom_extent(notation) * scale;
        bbox_x += dims.left_margin
            + (8.0 * dims.square_size + dims.right_frame_width) * scale
            + dims.right_margin;
        bbox_y += dims.bottom_margin
            + (8.0 * dims.square_size + dims.top_frame_height + dims.top_frame_depth) * scale
            + dims.top_margin;

        let mut translate_x = if notation {
            (dims.left_notation_frame_width - dims.left_frame_width) * scale
        } else {
            0.0
        };
        let mut translate_y = dims.bottom_extent(notation) * scale;
        translate_x += dims.left_margin;
        translate_y += dims.bottom_margin
            + 8.0 * dims.square_size * scale
            + (dims.top_frame_depth * scale);

        Layout {
            scale,
            bounding_box: dvec2(bbox_x, bbox_y),
            translate: dvec2(translate_x, translate_y),
        }
    }
}

/// Everything the renderer needs from a font definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontInfo {
    pub meta: FontMeta,
    pub dims: Dimensions,
    pub layout: Layout,
}

/// Metadata field addressed by a text section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Version,
    Date,
    Author,
}

/// Dimension field addressed by a numeric section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimField {
    SquareSize,
    SquareHeight,
    SquareDepth,
    TopFrameHeight,
    TopFrameDepth,
    LeftFrameWidth,
    LeftFrameHeight,
    LeftFrameDepth,
    LeftNotationFrameWidth,
    LeftNotationFrameHeight,
    LeftNotationFrameDepth,
    RightFrameWidth,
    RightFrameHeight,
    RightFrameDepth,
    BottomFrameHeight,
    BottomFrameDepth,
    BottomNotationFrameHeight,
    BottomNotationFrameDepth,
    ScalingFactor,
    BoardSize,
    LineWidth,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
}

/// How a `FontInfo` subsection is read and where its value goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Verbatim first line.
    Text(TextField),
    /// Plain magnitude.
    Number(DimField),
    /// Magnitude with optional unit, converted to points.
    Dimension(DimField),
}

impl Slot {
    /// Dispatch table from section name to slot.
    pub fn lookup(section: &str) -> Option<Slot> {
        use DimField::*;
        let slot = match section {
            "FontName" => Slot::Text(TextField::Name),
            "FontVersion" => Slot::Text(TextField::Version),
            "FontDate" => Slot::Text(TextField::Date),
            "FontAuthor" => Slot::Text(TextField::Author),

            "SquareSize" => Slot::Number(SquareSize),
            "SquareHeight" => Slot::Number(SquareHeight),
            "SquareDepth" => Slot::Number(SquareDepth),
            "TopFrameHeight" => Slot::Number(TopFrameHeight),
            "TopFrameDepth" => Slot::Number(TopFrameDepth),
            "LeftFrameWidth" => Slot::Number(LeftFrameWidth),
            "LeftFrameHeight" => Slot::Number(LeftFrameHeight),
            "LeftFrameDepth" => Slot::Number(LeftFrameDepth),
            "LeftNotationFrameWidth" => Slot::Number(LeftNotationFrameWidth),
            "LeftNotationFrameHeight" => Slot::Number(LeftNotationFrameHeight),
            "LeftNotationFrameDepth" => Slot::Number(LeftNotationFrameDepth),
            "RightFrameWidth" => Slot::Number(RightFrameWidth),
            "RightFrameHeight" => Slot::Number(RightFrameHeight),
            "RightFrameDepth" => Slot::Number(RightFrameDepth),
            "BottomFrameHeight" => Slot::Number(BottomFrameHeight),
            "BottomFrameDepth" => Slot::Number(BottomFrameDepth),
            "BottomNotationFrameHeight" => Slot::Number(BottomNotationFrameHeight),
            "BottomNotationFrameDepth" => Slot::Number(BottomNotationFrameDepth),
            "EpsScalingFactor" => Slot::Number(ScalingFactor),

            "EpsBoardSize" => Slot::Dimension(BoardSize),
            "EpsDefaultLineWidth" => Slot::Dimension(LineWidth),
            "EpsLeftMargin" => Slot::Dimension(LeftMargin),
            "EpsRightMargin" => Slot::Dimension(RightMargin),
            "EpsTopMargin" => Slot::Dimension(TopMargin),
            "EpsBottomMargin" => Slot::Dimension(BottomMargin),
            _ => return None,
        };
        Some(slot)
    }
}

impl FontMeta {
    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Version => &mut self.version,
            TextField::Date => &mut self.date,
            TextField::Author => &mut self.author,
        }
    }
}

impl Dimensions {
    pub fn field_mut(&mut self, field: DimField) -> &mut f64 {
        use DimField::*;
        match field {
            SquareSize => &mut self.square_size,
            SquareHeight => &mut self.square_height,
            SquareDepth => &mut self.square_depth,
            TopFrameHeight => &mut self.top_frame_height,
            TopFrameDepth => &mut self.top_frame_depth,
            LeftFrameWidth => &mut self.left_frame_width,
            LeftFrameHeight => &mut self.left_frame_height,
            LeftFrameDepth => &mut self.left_frame_depth,
            LeftNotationFrameWidth => &mut self.left_notation_frame_width,
            LeftNotationFrameHeight => &mut self.left_notation_frame_height,
            LeftNotationFrameDepth => &mut self.left_notation_frame_depth,
            RightFrameWidth => &mut self.right_frame_width,
            RightFrameHeight => &mut self.right_frame_height,
            RightFrameDepth => &mut self.right_frame_depth,
            BottomFrameHeight => &mut self.bottom_frame_height,
            BottomFrameDepth => &mut self.bottom_frame_depth,
            BottomNotationFrameHeight => &mut self.bottom_notation_frame_height,
            BottomNotationFrameDepth => &mut self.bottom_notation_frame_depth,
            ScalingFactor => &mut self.scaling_factor,
            BoardSize => &mut self.board_size,
            LineWidth => &mut self.line_width,
            LeftMargin => &mut self.left_margin,
            RightMargin => &mut self.right_margin,
            TopMargin => &mut self.top_margin,
            BottomMargin => &mut self.bottom_margin,
        }
    }
}

impl FontInfo {
    /// Loads the `FontInfo` section from `scanner` and derives the layout
    /// for the given notation mode.
    ///
    /// Content before `%BEGIN FontInfo` is skipped. Subsections with unknown
    /// names are ignored; a `FontInfo` section missing its end marker simply
    /// runs to the end of the stream.
    pub fn load<R: BufRead>(
        scanner: &mut SectionScanner<R>,
        notation: bool,
    ) -> Result<FontInfo, FontError> {
        loop {
            match scanner.next_begin()? {
                Some(name) if name == FONT_INFO_SECTION => break,
                Some(_) => {}
                None => {
                    return Err(FontError::MissingFontInfo {
                        path: Default::default(),
                    });
                }
            }
        }

        let mut info = FontInfo::default();
        while let Some(mark) = scanner.next_mark()? {
            let section = match mark {
                Mark::End(name) if name == FONT_INFO_SECTION => break,
                Mark::End(_) => continue,
                Mark::Begin(name) => name,
            };
            match Slot::lookup(&section) {
                Some(Slot::Text(field)) => {
                    *info.meta.field_mut(field) = read_string(scanner, &section)?;
                }
                Some(Slot::Number(field)) => {
                    *info.dims.field_mut(field) = read_number(scanner, &section)?;
                }
                Some(Slot::Dimension(field)) => {
                    *info.dims.field_mut(field) = read_dimension(scanner, &section)?;
                }
                None => {
                    debug!(section = section.as_str(), "ignoring unknown FontInfo entry");
                    continue;
                }
            }
            debug!(section = section.as_str(), "loaded FontInfo entry");
        }

        info.layout = Layout::derive(&info.dims, notation);
        debug!(
            scale = info.layout.scale,
            bbox_x = info.layout.bounding_box.x,
            bbox_y = info.layout.bounding_box.y,
            translate_x = info.layout.translate.x,
            translate_y = info.layout.translate.y,
            "derived layout"
        );
        Ok(info)
    }
}
