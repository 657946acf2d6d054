//! Rendering options shared by decoding, export and layout

/// How diagrams are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw rank digits and file letters in the frame.
    pub notation: bool,
    /// Rotate the board by 180 degrees (black at the bottom).
    pub reverse: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            notation: true,
            reverse: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notation(mut self, notation: bool) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
