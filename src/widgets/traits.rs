use crate::runtime::effect::Effect;
use crate::runtime::event::WidgetEvent;
use crate::terminal::{CursorPos, KeyEvent, PointerEvent};
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;
use crate::widgets::inputs::text_edit;

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub theme: Theme,
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub effects: Vec<Effect>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Handled, but nothing visible changed.
    pub fn consumed() -> Self {
        Self {
            handled: true,
            request_render: false,
            effects: Vec::new(),
        }
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

// ---------------------------------------------------------------------------
// TextAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

impl TextAction {
    pub(crate) fn apply(self, value: &mut String, cursor: &mut usize) -> bool {
        match self {
            Self::DeleteWordLeft => text_edit::delete_word_left(value, cursor),
            Self::DeleteWordRight => text_edit::delete_word_right(value, cursor),
        }
    }
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

pub trait Interactive: Send {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn on_text_action(&mut self, _action: TextAction) -> InteractionResult {
        InteractionResult::ignored()
    }

    /// Pointer events arrive in widget-local coordinates.
    fn on_pointer(&mut self, _event: PointerEvent) -> InteractionResult {
        InteractionResult::ignored()
    }

    fn on_event(&mut self, _event: &WidgetEvent) -> InteractionResult {
        InteractionResult::ignored()
    }
}
