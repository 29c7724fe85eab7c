//! Form rendering module
//!
//! - `field_renderer`: Field rendering with validation messages
//! - `form_example`: The example form view

mod field_renderer;
mod form_example;

pub use form_example::draw;
