//! End-to-end export tests
//!
//! Commitments JSON → collation → template rendering.
