use crate::runtime::command::Command;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::session::Session;
use crate::terminal::{CursorPos, Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const IDLE_POLL: Duration = Duration::from_millis(120);

/// Produces the header line shown above the widget on every render.
pub type TitleSource = Box<dyn Fn() -> String + Send>;

pub struct Runtime {
    session: Session,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
    title: TitleSource,
    widget_origin: CursorPos,
    should_exit: bool,
}

impl Runtime {
    pub fn new(session: Session, terminal: Terminal) -> Self {
        Self {
            session,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
            title: Box::new(String::new),
            widget_origin: CursorPos::default(),
            should_exit: false,
        }
    }

    pub fn with_title(mut self, title: impl Fn() -> String + Send + 'static) -> Self {
        self.title = Box::new(title);
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        info!("runtime started");

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.should_exit {
                if self.session.advance(Instant::now()) {
                    self.render()?;
                }

                let timeout = self.session.poll_timeout(Instant::now(), IDLE_POLL);
                let event = self.terminal.poll_event(timeout)?;
                self.dispatch(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        info!("runtime stopped");
        run_result.and(exit_result)
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        let now = Instant::now();
        let render = match event {
            TerminalEvent::Key(key) => {
                let command = self.key_bindings.resolve(key);
                self.process_command(command, now)
            }
            TerminalEvent::Pointer(pointer) => {
                let local = pointer.offset(
                    i32::from(self.widget_origin.col),
                    i32::from(self.widget_origin.row),
                );
                self.session.handle_pointer(local, now)
            }
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                true
            }
            TerminalEvent::Tick => false,
        };

        if render { self.render() } else { Ok(()) }
    }

    fn process_command(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Exit => {
                debug!("exit requested");
                self.should_exit = true;
                false
            }
            Command::InputKey(key) => self.session.handle_key(key, now),
            Command::TextAction(action) => self.session.handle_text_action(action, now),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let title = (self.title)();
        let frame = self.renderer.render(&title, self.session.dropdown());
        self.widget_origin = frame.widget_origin;
        self.terminal.render_frame(&frame)
    }
}
