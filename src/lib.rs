pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::core::search::filter::filter;
pub use error::{Error, Result};
pub use runtime::{Runtime, Session};
pub use widgets::components::dropdown::{Dropdown, DropdownConfig, PanelState};
