//! Search-as-you-type dropdown.
//!
//! Keystrokes edit the query immediately and re-arm a debounce timer; the
//! suggestion list is only recomputed when that timer fires, so a burst of
//! typing filters once. The highlighted row moves cyclically with the arrow
//! keys and follows the pointer while it hovers. A commit (Enter or click)
//! calls the `save` callback exactly once and hides the panel. A pointer
//! press outside the widget hides the panel without committing.

mod render;
mod state;

use crate::core::NodeId;
use crate::core::search::filter::{contains_exact, filter};
use crate::runtime::effect::Effect;
use crate::runtime::event::WidgetEvent;
use crate::runtime::scheduler::{SchedulerCommand, TimerGuard, TimerId};
use crate::runtime::subscription::{PointerRouter, Subscription};
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers, PointerEvent, PointerKind};
use crate::widgets::inputs::text_edit;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextAction,
};
use render::{cursor_column, input_line, no_match_line, suggestion_line};
use state::{HitRegion, Hover, ensure_visible, next_index, prev_index};
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

pub use state::PanelState;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);
pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Receives every committed value.
pub type SaveCallback = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    pub words: Vec<String>,
    pub placeholder: String,
    pub delay: Duration,
    /// Width in cells of the input and panel; bounds pointer hit-testing.
    pub width: u16,
    /// Panel rows shown at once; `0` shows every suggestion.
    pub max_visible: usize,
}

impl DropdownConfig {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            placeholder: String::new(),
            delay: DEFAULT_DELAY,
            width: DEFAULT_WIDTH,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }
}

pub struct Dropdown {
    id: NodeId,
    config: DropdownConfig,
    query: String,
    cursor: usize,
    suggestions: Vec<String>,
    highlight: Option<usize>,
    panel: PanelState,
    scroll_offset: usize,
    hover: Option<Hover>,
    pressed: Option<usize>,
    pending: Option<TimerGuard>,
    timer_seq: u64,
    subscription: Option<Subscription>,
    save: SaveCallback,
}

impl Dropdown {
    pub fn new(
        id: impl Into<NodeId>,
        config: DropdownConfig,
        save: impl FnMut(&str) + Send + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            config,
            query: String::new(),
            cursor: 0,
            suggestions: Vec::new(),
            highlight: None,
            panel: PanelState::Dismissed,
            scroll_offset: 0,
            hover: None,
            pressed: None,
            pending: None,
            timer_seq: 0,
            subscription: None,
            save: Box::new(save),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.config.words
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlight
            .and_then(|index| self.suggestions.get(index))
            .map(String::as_str)
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel
    }

    pub fn is_visible(&self) -> bool {
        self.panel.is_visible()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Registers for pointer events, including presses outside the widget.
    /// Mounting again replaces the previous registration.
    pub fn mount(&mut self, router: &PointerRouter) {
        self.subscription = Some(router.subscribe(self.id.clone()));
    }

    /// Releases the pointer subscription and cancels any pending timer.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.pending = None;
        self.hover = None;
        self.pressed = None;
    }

    // --- keyboard ---

    fn query_changed(&mut self) -> InteractionResult {
        self.highlight = None;
        self.hover = None;
        self.pressed = None;
        self.panel = PanelState::Settling;
        InteractionResult::handled().with_effect(Effect::Schedule(self.arm_timer()))
    }

    fn arm_timer(&mut self) -> SchedulerCommand {
        self.timer_seq = self.timer_seq.wrapping_add(1);
        let timer = TimerId(self.timer_seq);
        let guard = TimerGuard::new(timer);
        let token = guard.token();
        // Replacing the guard cancels the previous timer.
        self.pending = Some(guard);
        trace!(id = %self.id, %timer, query = %self.query, "filter debounced");

        SchedulerCommand::Debounce {
            token,
            delay: self.config.delay,
            event: WidgetEvent::TimerElapsed {
                target: self.id.clone(),
                timer,
            },
        }
    }

    fn settle(&mut self) {
        self.suggestions = filter(&self.query, &self.config.words);
        self.highlight = None;
        self.hover = None;
        self.pressed = None;
        self.scroll_offset = 0;
        self.panel = if self.suggestions.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Open
        };
        debug!(
            id = %self.id,
            query = %self.query,
            matches = self.suggestions.len(),
            "suggestions settled"
        );
    }

    fn move_highlight(
        &mut self,
        step: fn(Option<usize>, usize) -> Option<usize>,
    ) -> InteractionResult {
        if self.panel != PanelState::Open {
            return InteractionResult::consumed();
        }
        // Keyboard navigation replaces any hover override.
        self.hover = None;
        self.highlight = step(self.highlight, self.suggestions.len());
        self.keep_highlight_visible();
        InteractionResult::handled()
    }

    fn keep_highlight_visible(&mut self) {
        ensure_visible(
            &mut self.scroll_offset,
            self.config.max_visible,
            self.highlight,
            self.suggestions.len(),
        );
    }

    fn submit(&mut self) -> InteractionResult {
        if !self.query.is_empty() {
            match self.highlight {
                None => {
                    if contains_exact(&self.query, &self.suggestions) {
                        let value = std::mem::take(&mut self.query);
                        self.cursor = 0;
                        self.commit(&value);
                    }
                }
                Some(index) => self.commit_suggestion(index),
            }
        }
        self.hide();
        InteractionResult::handled()
    }

    // --- commit & dismissal ---

    fn commit_suggestion(&mut self, index: usize) {
        let Some(value) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.cursor = text_edit::char_count(&value);
        self.query = value.clone();
        self.highlight = None;
        self.commit(&value);
    }

    fn commit(&mut self, value: &str) {
        debug!(id = %self.id, value, "selection committed");
        (self.save)(value);
    }

    /// Back to the resting state: no list, no highlight, nothing pending.
    fn hide(&mut self) {
        self.panel = PanelState::Dismissed;
        self.pending = None;
        self.suggestions.clear();
        self.scroll_offset = 0;
        self.highlight = None;
        self.hover = None;
        self.pressed = None;
    }

    fn dismiss(&mut self) -> InteractionResult {
        if self.panel == PanelState::Dismissed && self.pending.is_none() {
            return InteractionResult::ignored();
        }
        debug!(id = %self.id, "panel dismissed by outside interaction");
        self.hide();
        InteractionResult::handled()
    }

    // --- pointer ---

    fn panel_rows(&self) -> usize {
        match self.panel {
            PanelState::Open => self.visible_range().len(),
            PanelState::Empty => 1,
            PanelState::Settling | PanelState::Dismissed => 0,
        }
    }

    fn visible_range(&self) -> std::ops::Range<usize> {
        let len = self.suggestions.len();
        if self.config.max_visible == 0 {
            return 0..len;
        }
        let start = self.scroll_offset.min(len);
        start..(start + self.config.max_visible).min(len)
    }

    fn hit_test(&self, event: PointerEvent) -> HitRegion {
        let width = i32::from(self.config.width);
        if event.col < 0 || event.col >= width || event.row < 0 {
            return HitRegion::Outside;
        }
        let row = event.row as usize;
        if row == 0 {
            return HitRegion::Input;
        }
        if row > self.panel_rows() {
            return HitRegion::Outside;
        }
        match self.panel {
            PanelState::Open => HitRegion::Suggestion(self.visible_range().start + row - 1),
            _ => HitRegion::Panel,
        }
    }

    fn hover_row(&mut self, index: usize) -> InteractionResult {
        if self.hover.is_some_and(|hover| hover.row == index) {
            return InteractionResult::consumed();
        }
        let restore = match self.hover {
            Some(hover) => hover.restore,
            None => self.highlight,
        };
        self.hover = Some(Hover {
            row: index,
            restore,
        });
        self.highlight = Some(index);
        InteractionResult::handled()
    }

    fn leave_rows(&mut self) -> InteractionResult {
        let Some(hover) = self.hover.take() else {
            return InteractionResult::ignored();
        };
        self.highlight = hover
            .restore
            .filter(|index| *index < self.suggestions.len());
        InteractionResult::handled()
    }
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.id)
            .field("query", &self.query)
            .field("suggestions", &self.suggestions)
            .field("highlight", &self.highlight)
            .field("panel", &self.panel)
            .field("pending", &self.pending.as_ref().map(TimerGuard::id))
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl Drawable for Dropdown {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let theme = &ctx.theme;
        let width = self.config.width;
        let mut lines = vec![input_line(&self.query, &self.config.placeholder, theme)];

        match self.panel {
            PanelState::Open => {
                for index in self.visible_range() {
                    lines.push(suggestion_line(
                        &self.suggestions[index],
                        self.highlight == Some(index),
                        width,
                        theme,
                    ));
                }
            }
            PanelState::Empty => lines.push(no_match_line(width, theme)),
            PanelState::Settling | PanelState::Dismissed => {}
        }

        DrawOutput { lines }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        Some(CursorPos {
            col: cursor_column(&self.query, self.cursor),
            row: 0,
        })
    }
}

impl Interactive for Dropdown {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if key.modifiers != KeyModifiers::NONE && key.modifiers != KeyModifiers::SHIFT {
            return InteractionResult::ignored();
        }

        match key.code {
            KeyCode::Char(ch) if !ch.is_control() => {
                text_edit::insert_char(&mut self.query, &mut self.cursor, ch);
                self.query_changed()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.query, &mut self.cursor) {
                    self.query_changed()
                } else {
                    InteractionResult::consumed()
                }
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.query, &mut self.cursor) {
                    self.query_changed()
                } else {
                    InteractionResult::consumed()
                }
            }
            KeyCode::Left => moved(text_edit::move_left(&mut self.cursor, &self.query)),
            KeyCode::Right => moved(text_edit::move_right(&mut self.cursor, &self.query)),
            KeyCode::Home => moved(text_edit::move_home(&mut self.cursor)),
            KeyCode::End => moved(text_edit::move_end(&mut self.cursor, &self.query)),
            KeyCode::Down => self.move_highlight(next_index),
            KeyCode::Up => self.move_highlight(prev_index),
            KeyCode::Enter => self.submit(),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        if action.apply(&mut self.query, &mut self.cursor) {
            self.query_changed()
        } else {
            InteractionResult::consumed()
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) -> InteractionResult {
        let region = self.hit_test(event);
        match (event.kind, region) {
            (PointerKind::Down, HitRegion::Outside) => {
                self.pressed = None;
                self.dismiss()
            }
            (PointerKind::Down, HitRegion::Suggestion(index)) => {
                self.pressed = Some(index);
                self.hover_row(index)
            }
            (PointerKind::Down, _) => {
                self.pressed = None;
                InteractionResult::consumed()
            }
            (PointerKind::Up, HitRegion::Suggestion(index)) if self.pressed == Some(index) => {
                self.commit_suggestion(index);
                self.hide();
                InteractionResult::handled()
            }
            (PointerKind::Up, _) => {
                self.pressed = None;
                InteractionResult::ignored()
            }
            (PointerKind::Moved, HitRegion::Suggestion(index)) => self.hover_row(index),
            (PointerKind::Moved, _) => self.leave_rows(),
        }
    }

    fn on_event(&mut self, event: &WidgetEvent) -> InteractionResult {
        match event {
            WidgetEvent::TimerElapsed { target, timer } if *target == self.id => {
                let armed = self.pending.as_ref().map(TimerGuard::id);
                if armed != Some(*timer) {
                    trace!(id = %self.id, %timer, "stale timer ignored");
                    return InteractionResult::ignored();
                }
                self.pending = None;
                self.settle();
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }
}

fn moved(changed: bool) -> InteractionResult {
    if changed {
        InteractionResult::handled()
    } else {
        InteractionResult::consumed()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dropdown, DropdownConfig, PanelState};
    use crate::runtime::effect::Effect;
    use crate::runtime::event::WidgetEvent;
    use crate::runtime::scheduler::SchedulerCommand;
    use crate::runtime::subscription::PointerRouter;
    use crate::terminal::{KeyCode, KeyEvent, PointerEvent, PointerKind};
    use crate::ui::span::line_text;
    use crate::ui::theme::Theme;
    use crate::widgets::traits::{Drawable, Interactive, RenderContext};
    use std::sync::{Arc, Mutex};

    type Saved = Arc<Mutex<Vec<String>>>;

    fn dropdown(words: &[&str]) -> (Dropdown, Saved) {
        let saved: Saved = Arc::default();
        let sink = Arc::clone(&saved);
        let config = DropdownConfig::new(words.iter().map(|w| w.to_string()).collect())
            .with_placeholder("Enter search")
            .with_width(30);
        let widget = Dropdown::new("people", config, move |value: &str| {
            sink.lock().expect("sink").push(value.to_string());
        });
        (widget, saved)
    }

    /// Types `text` and fires the last armed timer directly.
    fn type_and_settle(widget: &mut Dropdown, text: &str) {
        let mut last = None;
        for ch in text.chars() {
            let result = widget.on_key(KeyEvent::plain(KeyCode::Char(ch)));
            last = result.effects.into_iter().last();
        }
        let Some(Effect::Schedule(SchedulerCommand::Debounce { event, .. })) = last else {
            panic!("typing should arm a debounce timer");
        };
        widget.on_event(&event);
    }

    fn ctx() -> RenderContext {
        RenderContext {
            theme: Theme::default_theme(),
        }
    }

    #[test]
    fn starts_hidden_with_empty_query() {
        let (widget, _) = dropdown(&["Agnes Obel"]);
        assert_eq!(widget.query(), "");
        assert!(widget.suggestions().is_empty());
        assert_eq!(widget.highlight_index(), None);
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
        assert!(!widget.has_pending_timer());
    }

    #[test]
    fn keystroke_enters_settling_and_arms_timer() {
        let (mut widget, _) = dropdown(&["Agnes Obel"]);
        let result = widget.on_key(KeyEvent::plain(KeyCode::Char('a')));
        assert!(result.handled);
        assert_eq!(widget.query(), "a");
        assert_eq!(widget.panel_state(), PanelState::Settling);
        assert!(widget.has_pending_timer());
        assert_eq!(result.effects.len(), 1);
    }

    #[test]
    fn stale_timer_event_is_ignored() {
        let (mut widget, _) = dropdown(&["Agnes Obel"]);
        let first = widget.on_key(KeyEvent::plain(KeyCode::Char('a')));
        widget.on_key(KeyEvent::plain(KeyCode::Char('g')));

        let Some(Effect::Schedule(SchedulerCommand::Debounce { event, token, .. })) =
            first.effects.into_iter().next()
        else {
            panic!("expected debounce");
        };
        assert!(token.is_cancelled());
        let result = widget.on_event(&event);
        assert!(!result.handled);
        assert_eq!(widget.panel_state(), PanelState::Settling);
    }

    #[test]
    fn timer_for_other_widget_is_ignored() {
        let (mut widget, _) = dropdown(&["Agnes Obel"]);
        widget.on_key(KeyEvent::plain(KeyCode::Char('a')));
        let event = WidgetEvent::TimerElapsed {
            target: "other".into(),
            timer: crate::runtime::scheduler::TimerId(1),
        };
        assert!(!widget.on_event(&event).handled);
    }

    #[test]
    fn arrows_are_noop_while_hidden_or_empty() {
        let (mut widget, _) = dropdown(&["Agnes Obel"]);
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.highlight_index(), None);

        type_and_settle(&mut widget, "zz");
        assert_eq!(widget.panel_state(), PanelState::Empty);
        widget.on_key(KeyEvent::plain(KeyCode::Up));
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.highlight_index(), None);
    }

    #[test]
    fn enter_without_highlight_commits_exact_match_and_clears_input() {
        let (mut widget, saved) = dropdown(&["Anna", "Annabel"]);
        type_and_settle(&mut widget, "Anna");
        assert_eq!(widget.suggestions(), ["Anna", "Annabel"]);

        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(*saved.lock().expect("saved"), vec!["Anna".to_string()]);
        assert_eq!(widget.query(), "");
        assert_eq!(widget.cursor(), 0);
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
    }

    #[test]
    fn enter_without_highlight_ignores_partial_match() {
        let (mut widget, saved) = dropdown(&["Annabel"]);
        type_and_settle(&mut widget, "anna");
        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert!(saved.lock().expect("saved").is_empty());
        assert_eq!(widget.query(), "anna");
        assert!(!widget.is_visible());
    }

    #[test]
    fn enter_on_empty_query_commits_nothing() {
        let (mut widget, saved) = dropdown(&[""]);
        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert!(saved.lock().expect("saved").is_empty());
    }

    #[test]
    fn enter_with_highlight_writes_value_into_input() {
        let (mut widget, saved) = dropdown(&["Carolus Haverbeke", "Agnes Obel"]);
        type_and_settle(&mut widget, "e");
        widget.on_key(KeyEvent::plain(KeyCode::Up));
        assert_eq!(widget.highlighted(), Some("Agnes Obel"));

        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(widget.query(), "Agnes Obel");
        assert_eq!(widget.cursor(), 10);
        assert_eq!(widget.highlight_index(), None);
        assert_eq!(*saved.lock().expect("saved"), vec!["Agnes Obel".to_string()]);
    }

    #[test]
    fn cursor_keys_do_not_refilter() {
        let (mut widget, _) = dropdown(&["Agnes Obel"]);
        type_and_settle(&mut widget, "ag");
        let result = widget.on_key(KeyEvent::plain(KeyCode::Left));
        assert!(result.effects.is_empty());
        assert_eq!(widget.panel_state(), PanelState::Open);

        widget.on_key(KeyEvent::plain(KeyCode::Char('x')));
        assert_eq!(widget.query(), "axg");
    }

    #[test]
    fn hover_overrides_and_leave_restores() {
        let (mut widget, _) = dropdown(&["Ada", "Abe", "Amy"]);
        type_and_settle(&mut widget, "a");
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.highlight_index(), Some(0));

        widget.on_pointer(PointerEvent::new(PointerKind::Moved, 3, 3));
        assert_eq!(widget.highlight_index(), Some(2));
        widget.on_pointer(PointerEvent::new(PointerKind::Moved, 3, 2));
        assert_eq!(widget.highlight_index(), Some(1));

        widget.on_pointer(PointerEvent::new(PointerKind::Moved, 3, 0));
        assert_eq!(widget.highlight_index(), Some(0));
    }

    #[test]
    fn click_commits_row() {
        let (mut widget, saved) = dropdown(&["Ada", "Abe", "Amy"]);
        type_and_settle(&mut widget, "a");
        widget.on_pointer(PointerEvent::new(PointerKind::Down, 1, 2));
        widget.on_pointer(PointerEvent::new(PointerKind::Up, 1, 2));

        assert_eq!(*saved.lock().expect("saved"), vec!["Abe".to_string()]);
        assert_eq!(widget.query(), "Abe");
        assert_eq!(widget.highlight_index(), None);
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
    }

    #[test]
    fn release_on_different_row_does_not_commit() {
        let (mut widget, saved) = dropdown(&["Ada", "Abe", "Amy"]);
        type_and_settle(&mut widget, "a");
        widget.on_pointer(PointerEvent::new(PointerKind::Down, 1, 1));
        widget.on_pointer(PointerEvent::new(PointerKind::Up, 1, 3));
        assert!(saved.lock().expect("saved").is_empty());
        assert!(widget.is_visible());
    }

    #[test]
    fn press_outside_dismisses_without_commit() {
        let (mut widget, saved) = dropdown(&["Ada", "Abe"]);
        type_and_settle(&mut widget, "a");
        widget.on_key(KeyEvent::plain(KeyCode::Down));

        let result = widget.on_pointer(PointerEvent::new(PointerKind::Down, 50, 1));
        assert!(result.handled);
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
        assert_eq!(widget.query(), "a");
        assert_eq!(widget.highlight_index(), None);
        assert!(saved.lock().expect("saved").is_empty());

        let again = widget.on_pointer(PointerEvent::new(PointerKind::Down, 0, -1));
        assert!(!again.handled);
    }

    #[test]
    fn press_outside_cancels_pending_filter() {
        let (mut widget, _) = dropdown(&["Ada"]);
        widget.on_key(KeyEvent::plain(KeyCode::Char('a')));
        assert!(widget.has_pending_timer());
        widget.on_pointer(PointerEvent::new(PointerKind::Down, 0, 10));
        assert!(!widget.has_pending_timer());
    }

    #[test]
    fn rows_below_panel_are_outside() {
        let (mut widget, _) = dropdown(&["Ada"]);
        type_and_settle(&mut widget, "a");
        widget.on_pointer(PointerEvent::new(PointerKind::Down, 1, 2));
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
    }

    #[test]
    fn draw_shows_placeholder_rows_and_no_match() {
        let (mut widget, _) = dropdown(&["Ada", "Abe"]);
        let lines = widget.draw(&ctx()).lines;
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "> Enter search");

        type_and_settle(&mut widget, "a");
        let lines = widget.draw(&ctx()).lines;
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[1]).trim_end(), " Ada");

        type_and_settle(&mut widget, "q");
        let lines = widget.draw(&ctx()).lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[1]).trim(), "No matching suggestions");
    }

    #[test]
    fn long_lists_scroll_with_highlight() {
        let words: Vec<String> = (0..12).map(|i| format!("item {i}")).collect();
        let config = DropdownConfig::new(words).with_max_visible(4);
        let mut widget = Dropdown::new("items", config, |_: &str| {});
        type_and_settle(&mut widget, "item");
        assert_eq!(widget.draw(&ctx()).lines.len(), 5);

        widget.on_key(KeyEvent::plain(KeyCode::Up));
        assert_eq!(widget.highlight_index(), Some(11));
        let lines = widget.draw(&ctx()).lines;
        assert_eq!(line_text(&lines[4]).trim(), "item 11");

        widget.on_pointer(PointerEvent::new(PointerKind::Moved, 2, 1));
        assert_eq!(widget.highlight_index(), Some(8));
    }

    #[test]
    fn commit_resets_list_and_second_enter_saves_nothing() {
        let (mut widget, saved) = dropdown(&["Carolus Haverbeke", "Agnes Obel"]);
        type_and_settle(&mut widget, "ag");
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        widget.on_key(KeyEvent::plain(KeyCode::Enter));

        assert_eq!(widget.query(), "Agnes Obel");
        assert!(widget.suggestions().is_empty());
        assert_eq!(widget.highlight_index(), None);
        assert_eq!(widget.panel_state(), PanelState::Dismissed);
        assert!(!widget.has_pending_timer());

        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(*saved.lock().expect("saved"), vec!["Agnes Obel".to_string()]);
    }

    #[test]
    fn enter_while_settling_checks_last_settled_list() {
        let (mut widget, saved) = dropdown(&["Ada", "Adam"]);
        type_and_settle(&mut widget, "Ada");
        assert_eq!(widget.suggestions(), ["Ada", "Adam"]);

        // "Adam" is in the list settled for "Ada", so Enter commits it
        // before the new filter pass runs.
        widget.on_key(KeyEvent::plain(KeyCode::Char('m')));
        assert_eq!(widget.panel_state(), PanelState::Settling);
        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert_eq!(*saved.lock().expect("saved"), vec!["Adam".to_string()]);
        assert!(!widget.has_pending_timer());
    }

    #[test]
    fn enter_while_settling_ignores_words_not_yet_listed() {
        let (mut widget, saved) = dropdown(&["Ada", "Bob"]);
        type_and_settle(&mut widget, "a");
        assert_eq!(widget.suggestions(), ["Ada"]);

        widget.on_key(KeyEvent::plain(KeyCode::Backspace));
        for ch in "Bob".chars() {
            widget.on_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
        widget.on_key(KeyEvent::plain(KeyCode::Enter));
        assert!(saved.lock().expect("saved").is_empty());
    }

    #[test]
    fn leaving_after_arrow_keys_keeps_keyboard_highlight() {
        let (mut widget, _) = dropdown(&["Ada", "Abe", "Amy"]);
        type_and_settle(&mut widget, "a");
        widget.on_pointer(PointerEvent::new(PointerKind::Moved, 3, 1));
        assert_eq!(widget.highlight_index(), Some(0));

        widget.on_key(KeyEvent::plain(KeyCode::Down));
        widget.on_key(KeyEvent::plain(KeyCode::Down));
        assert_eq!(widget.highlight_index(), Some(2));

        let result = widget.on_pointer(PointerEvent::new(PointerKind::Moved, 3, 0));
        assert!(!result.handled);
        assert_eq!(widget.highlight_index(), Some(2));
    }

    #[test]
    fn remount_keeps_pointer_subscription() {
        let router = PointerRouter::new();
        let (mut widget, _) = dropdown(&["Ada"]);
        widget.mount(&router);
        widget.mount(&router);
        assert!(widget.is_mounted());
        assert!(router.is_listening("people"));
        assert_eq!(router.listener_count(), 1);

        widget.unmount();
        assert!(!router.is_listening("people"));
    }
}
