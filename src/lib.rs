mod ai;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod history;
mod logging;
mod oracle;
mod session;
mod ship;
mod shot;
mod ui;
mod view;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use history::*;
pub use logging::init_logging;
pub use oracle::*;
pub use session::*;
pub use ship::*;
pub use shot::*;
pub use ui::*;
pub use view::*;
