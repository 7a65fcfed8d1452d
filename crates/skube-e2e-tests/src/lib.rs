//! Test-only crate. The scenarios live under `tests/`.
