//! Terminal user interface.
//!
//! - `render`: pure frame and title rendering
//! - `shortcuts`: key to action mapping
//! - `panel`: the settings editor
//! - `prompt`: the notification permission question

pub mod panel;
pub mod prompt;
pub mod render;
pub mod shortcuts;

pub use panel::{Field, PanelResponse, SettingsPanel};
pub use prompt::PROMPT_DELAY;
pub use render::{format_time, render, title, View};
pub use shortcuts::{map_key, Action};
