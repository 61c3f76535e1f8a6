use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widgets::traits::TextAction;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    /// Keys without a binding fall through to the focused widget.
    pub fn resolve(&self, event: KeyEvent) -> Command {
        self.bindings
            .get(&KeyBinding::from_event(event))
            .cloned()
            .unwrap_or(Command::InputKey(event))
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Exit);
        self.bind(
            KeyBinding::ctrl(KeyCode::Backspace),
            Command::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('w')),
            Command::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Delete),
            Command::TextAction(TextAction::DeleteWordRight),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyBinding, KeyBindings};
    use crate::runtime::command::Command;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::widgets::traits::TextAction;

    #[test]
    fn defaults_resolve_exit_and_word_delete() {
        let bindings = KeyBindings::new();
        assert!(matches!(
            bindings.resolve(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Exit
        ));
        assert!(matches!(
            bindings.resolve(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            Command::TextAction(TextAction::DeleteWordLeft)
        ));
    }

    #[test]
    fn unbound_keys_fall_through_to_widget() {
        let mut bindings = KeyBindings::new();
        let down = KeyEvent::plain(KeyCode::Down);
        assert!(matches!(bindings.resolve(down), Command::InputKey(key) if key == down));

        bindings.unbind(&KeyBinding::key(KeyCode::Esc));
        assert!(matches!(
            bindings.resolve(KeyEvent::plain(KeyCode::Esc)),
            Command::InputKey(_)
        ));
    }
}
