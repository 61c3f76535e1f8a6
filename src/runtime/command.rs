use crate::terminal::KeyEvent;
use crate::widgets::traits::TextAction;

#[derive(Debug, Clone)]
pub enum Command {
    Exit,
    InputKey(KeyEvent),
    TextAction(TextAction),
}
