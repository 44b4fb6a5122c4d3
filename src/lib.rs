//! neli-hr - terminal client for the HR records screen
//!
//! Modules:
//! - core: input events and the `View` trait
//! - kernel: headless state, actions, effects and the backend ports/adapters
//! - models: records exchanged with the REST backend
//! - app: the workbench screen and theme
//! - tui: terminal setup/teardown

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
