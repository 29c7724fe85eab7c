//! Reusable UI components

mod button;
mod checkbox;

pub use button::{render_button, ButtonProps, BUTTON_HEIGHT};
pub use checkbox::render_checkbox;
