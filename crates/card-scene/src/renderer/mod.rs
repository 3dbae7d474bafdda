//! Card renderer entry module.
//!
//! The implementation is split into:
//! - `core`: `CardRenderer` and the recursive dispatcher
//! - `bindings`: node id → interaction lookup for the last pass
//! - `events`: change/click handling and form submission

mod bindings;
mod core;
mod events;

pub use self::core::CardRenderer;
pub use events::{EventResult, UiEvent};

#[cfg(test)]
mod tests;
