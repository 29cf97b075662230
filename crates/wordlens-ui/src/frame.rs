use wordlens_config::ui::UiConfig;
use wordlens_core::{LayoutMetrics, TextLayout};
use wordlens_types::{PanelView, ScreenView};

use crate::panel::panel_lines;

/// Rows above the text block: title, search field, spacer
pub const TEXT_ORIGIN_ROW: usize = 3;
/// Left margin of the text block in columns
pub const TEXT_ORIGIN_COL: usize = 2;

const TITLE: &str = "Find Term and Dictionary";
const HELP: &str = ":n next  :p prev  :a N audio  :q quit";

/// Layout geometry matching what `render_frame` draws
pub fn layout_metrics(config: &UiConfig) -> LayoutMetrics {
    let defaults = UiConfig::default();
    let char_width = positive_or("char_width", config.char_width, defaults.char_width);
    let line_height = positive_or("line_height", config.line_height, defaults.line_height);

    LayoutMetrics {
        columns: config.text_width.max(1),
        char_width,
        line_height,
        origin_left: TEXT_ORIGIN_COL as f32 * char_width,
        origin_top: TEXT_ORIGIN_ROW as f32 * line_height,
    }
}

/// `value` when finite and positive, `fallback` otherwise
fn positive_or(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!("[UI] Ignoring {} = {}, using {}", name, value, fallback);
        fallback
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub metrics: LayoutMetrics,
    pub panel_width: usize,
    /// ANSI reverse video for the match, brackets otherwise
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            metrics: layout_metrics(config),
            panel_width: usize::from(config.panel_width),
            color: config
                .color
                .unwrap_or_else(|| atty::is(atty::Stream::Stdout)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    marked: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    marked: false,
};

/// Character grid the frame is composed on
struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn put(&mut self, row: usize, col: usize, ch: char, marked: bool) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let line = &mut self.rows[row];
        if line.len() <= col {
            line.resize(col + 1, BLANK);
        }
        line[col] = Cell { ch, marked };
    }

    fn write(&mut self, row: usize, col: usize, text: &str, marked: bool) {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i, ch, marked);
        }
    }

    fn render(&self, color: bool) -> String {
        let mut out = String::new();

        for line in &self.rows {
            let end = line.iter().rposition(|c| *c != BLANK).map_or(0, |i| i + 1);
            let mut in_mark = false;

            for cell in &line[..end] {
                if color && cell.marked != in_mark {
                    out.push_str(if cell.marked { "\x1b[7m" } else { "\x1b[0m" });
                    in_mark = cell.marked;
                }
                out.push(cell.ch);
            }
            if in_mark {
                out.push_str("\x1b[0m");
            }
            out.push('\n');
        }

        out
    }
}

/// Compose one frame: header, sample text with the match marked, and the
/// translation panel floating at its position
pub fn render_frame(view: &ScreenView, options: &RenderOptions) -> String {
    let metrics = &options.metrics;
    let mut grid = Grid::new();

    grid.write(0, 0, TITLE, false);
    grid.write(1, 0, &format!("Search: {}", view.term), false);

    let boxes = TextLayout::new(*metrics).lay_out(&view.highlight);
    let mut last_row = TEXT_ORIGIN_ROW;

    for b in &boxes {
        let row = TEXT_ORIGIN_ROW + b.row;
        let col = TEXT_ORIGIN_COL + b.col;
        grid.write(row, col, &b.text, b.marked);
        last_row = last_row.max(row);

        if b.marked && !options.color {
            grid.put(row, col.saturating_sub(1), '[', false);
            grid.put(row, col + b.text.chars().count(), ']', false);
        }
    }

    grid.write(last_row + 2, 0, HELP, false);

    if view.panel != PanelView::Hidden {
        let lines = panel_lines(&view.panel, options.panel_width);

        let row = (view.position.top / metrics.line_height).ceil().max(0.0) as usize;
        let col = (view.position.left / metrics.char_width).round().max(0.0) as usize;

        // Keep the panel inside the text block's right edge when it can be
        let right_edge = TEXT_ORIGIN_COL + usize::from(metrics.columns);
        let col = col.min(right_edge.saturating_sub(options.panel_width));

        for (i, line) in lines.iter().enumerate() {
            grid.write(row + i, col, line, false);
        }
    }

    grid.render(options.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlens_core::{Highlighter, SampleText};
    use wordlens_types::PanelPosition;

    fn options(color: bool) -> RenderOptions {
        RenderOptions {
            metrics: layout_metrics(&UiConfig {
                text_width: 24,
                ..UiConfig::default()
            }),
            panel_width: 16,
            color,
        }
    }

    fn view(term: &str, panel: PanelView) -> ScreenView {
        let sample = SampleText::new("the hero of hyrule sets out to find the legend");
        let highlight = Highlighter::new(sample.shared_tokens()).highlight(term);
        let options = options(false);
        let position = TextLayout::new(options.metrics)
            .panel_position(&highlight, 25.0)
            .unwrap_or_default();

        ScreenView {
            term: term.to_string(),
            highlight,
            position,
            panel,
        }
    }

    #[test]
    fn test_plain_frame_brackets_match() {
        let frame = render_frame(&view("hyrule", PanelView::Hidden), &options(false));

        assert!(frame.starts_with(TITLE));
        assert!(frame.contains("Search: hyrule"));
        assert!(frame.contains("[hyrule]"));
        assert!(!frame.contains('\x1b'));
    }

    #[test]
    fn test_color_frame_uses_reverse_video() {
        let frame = render_frame(&view("legend", PanelView::Hidden), &options(true));
        assert!(frame.contains("\x1b[7mlegend\x1b[0m"));
    }

    #[test]
    fn test_placeholder_drawn_below_match() {
        let frame = render_frame(&view("hero", PanelView::NoResults), &options(false));
        let lines: Vec<&str> = frame.lines().collect();

        let text_row = lines.iter().position(|l| l.contains("[hero]")).unwrap();
        assert!(lines[text_row + 1].contains('┌'));
        assert!(lines[text_row + 2].contains("No Results"));
    }

    #[test]
    fn test_unmatched_placeholder_uses_default_position() {
        let mut view = view("ganon", PanelView::NoResults);
        view.position = PanelPosition::default();
        let frame = render_frame(&view, &options(false));

        assert!(frame.lines().next().unwrap().starts_with('┌'));
        assert!(!frame.contains('['));
    }

    #[test]
    fn test_degenerate_units_fall_back_to_defaults() {
        let config = UiConfig {
            char_width: 0.0,
            line_height: -4.0,
            text_width: 0,
            ..UiConfig::default()
        };
        let metrics = layout_metrics(&config);

        assert_eq!(metrics.char_width, 10.0);
        assert_eq!(metrics.line_height, 32.0);
        assert_eq!(metrics.columns, 1);

        let options = RenderOptions {
            metrics,
            panel_width: 16,
            color: false,
        };
        let sample = SampleText::new("the hero of hyrule");
        let highlight = Highlighter::new(sample.shared_tokens()).highlight("hyrule");
        let position = TextLayout::new(metrics)
            .panel_position(&highlight, 25.0)
            .unwrap_or_default();
        let view = ScreenView {
            term: "hyrule".to_string(),
            highlight,
            position,
            panel: PanelView::NoResults,
        };

        let frame = render_frame(&view, &options);
        assert!(frame.contains("[hyrule]"));
        assert!(frame.contains("No Results"));
    }
}
