//! Application state module

mod app_state;
mod controlled;
mod drawer_state;
mod forms;

pub use app_state::*;
pub use controlled::*;
pub use drawer_state::*;
pub use forms::*;
