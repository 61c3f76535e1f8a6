pub mod backend;
pub mod event;

pub use backend::Terminal;
pub use event::{
    CursorPos, KeyCode, KeyEvent, KeyModifiers, PointerEvent, PointerKind, TerminalEvent,
    TerminalSize,
};
