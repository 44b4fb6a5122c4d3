//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the record logic has no terminal
//! dependency.

pub mod terminal_guard;
