//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: HTTP/runtime/filesystem implementations.

pub mod adapters;
pub mod ports;
