use wordlens_types::{HighlightResult, PanelPosition};

/// Geometry of the text block, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Wrap width in columns
    pub columns: u16,
    pub char_width: f32,
    pub line_height: f32,
    /// Top-left corner of the text block
    pub origin_left: f32,
    pub origin_top: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            columns: 72,
            char_width: 10.0,
            line_height: 32.0,
            origin_left: 0.0,
            origin_top: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// One token placed on the wrapped text block
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBox {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub marked: bool,
    pub rect: Rect,
}

/// Greedy word wrap of a highlighted token sequence
#[derive(Debug, Clone, Copy)]
pub struct TextLayout {
    metrics: LayoutMetrics,
}

impl TextLayout {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn lay_out(&self, highlight: &HighlightResult) -> Vec<TokenBox> {
        let columns = usize::from(self.metrics.columns.max(1));
        let mut boxes = Vec::with_capacity(highlight.tokens.len());
        let mut row = 0;
        let mut col = 0;

        for token in &highlight.tokens {
            let len = token.text.chars().count();

            // Tokens wider than the block still start their own line
            if col > 0 && col + 1 + len > columns {
                row += 1;
                col = 0;
            } else if col > 0 {
                col += 1;
            }

            boxes.push(TokenBox {
                index: token.index,
                row,
                col,
                text: token.text.clone(),
                marked: token.marked,
                rect: self.rect(row, col, len),
            });

            col += len;
        }

        boxes
    }

    /// Bounding box of the marked token, if any
    pub fn marked_rect(&self, highlight: &HighlightResult) -> Option<Rect> {
        highlight.marked_index()?;
        self.lay_out(highlight)
            .into_iter()
            .find(|b| b.marked)
            .map(|b| b.rect)
    }

    /// Panel position below the marked token, `None` when nothing matched
    pub fn panel_position(&self, highlight: &HighlightResult, offset: f32) -> Option<PanelPosition> {
        self.marked_rect(highlight).map(|rect| PanelPosition {
            left: rect.left,
            top: rect.top + offset,
        })
    }

    fn rect(&self, row: usize, col: usize, len: usize) -> Rect {
        Rect {
            left: self.metrics.origin_left + col as f32 * self.metrics.char_width,
            top: self.metrics.origin_top + row as f32 * self.metrics.line_height,
            width: len as f32 * self.metrics.char_width,
            height: self.metrics.line_height,
        }
    }
}
