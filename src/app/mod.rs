//! Terminal front end: theme and the records workbench.

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
