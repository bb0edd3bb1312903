//! Huescope - color detection and analysis server
//!
//! HTTP collaborator around `huescope-engine`: image upload and sampling,
//! per-session history and palettes, and palette tools.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
