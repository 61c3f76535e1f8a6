pub mod command;
pub mod effect;
pub mod event;
pub mod key_bindings;
pub mod runner;
pub mod scheduler;
pub mod session;
pub mod subscription;

pub use runner::Runtime;
pub use session::Session;
