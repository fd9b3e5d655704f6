//! Domain vocabulary for the app directory.
//!
//! Everything in this crate is pure logic with no I/O so it can be shared by
//! the storage backends and the HTTP layer alike.

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;
pub mod validation;
