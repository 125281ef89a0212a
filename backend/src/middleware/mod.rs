//! Request middleware.
//!
//! Purpose: wrap every request in its trace scope and echo the identifier on
//! the response.

pub mod trace;

pub use trace::Trace;
