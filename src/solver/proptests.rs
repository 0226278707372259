//! Property-based tests for the per-number search.
