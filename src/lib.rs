//! Workspace-level integration tests for intpow live in `tests/`.
pub use intpow_core::{cube, square};
