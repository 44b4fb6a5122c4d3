//! Service adapters: HTTP/runtime/filesystem implementations.

pub mod api;
pub mod runtime;
pub mod settings;

pub use api::{decode_records, HttpHrApi};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, ensure_settings_file_at, get_log_dir, get_settings_path,
    load_settings_from,
};
