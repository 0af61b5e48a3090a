//! Container integration tests
//!
//! Exercises the public container surface the way downstream consumers use
//! it: ordered field maps, growable result sets, cursor-driven iteration,
//! and the serialization boundary.

mod consumer_tests;
mod cursor_tests;
mod serialization_tests;
