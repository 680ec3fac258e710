//! Modal dialogs and overlays

mod help;
mod info;

pub use help::render_help;
pub use info::{max_scroll, render_info_modal};
