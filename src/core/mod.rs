//! Frontend-neutral input and view contracts.

pub mod event;
pub mod view;

pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
