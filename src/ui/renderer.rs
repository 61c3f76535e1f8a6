use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::widgets::traits::{Drawable, RenderContext};

#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
    /// Screen position of the widget's first cell.
    pub widget_origin: CursorPos,
}

const HINT: &str = "Type to search, Up/Down to browse, Enter to pick, Esc to quit.";

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Lays out a title line, a hint line, a spacer, then the widget.
    pub fn render(&self, title: &str, widget: &dyn Drawable) -> RenderFrame {
        let mut frame = RenderFrame::default();
        frame.lines.push(vec![Span::styled(title, self.theme.title)]);
        frame.lines.push(vec![Span::styled(HINT, self.theme.hint)]);
        frame.lines.push(Vec::new());

        let origin = CursorPos {
            col: 0,
            row: frame.lines.len() as u16,
        };
        let ctx = RenderContext {
            theme: self.theme.clone(),
        };
        let out = widget.draw(&ctx);
        frame.cursor = widget.cursor_pos().map(|local| CursorPos {
            col: origin.col.saturating_add(local.col),
            row: origin.row.saturating_add(local.row),
        });
        frame.widget_origin = origin;
        frame.lines.extend(out.lines);
        frame
    }
}
