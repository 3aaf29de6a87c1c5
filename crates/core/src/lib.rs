//! Domain types and pure logic shared across the backend crates.
//!
//! Everything in this crate is I/O-free: vocabulary constants and
//! validators, the folder hierarchy algorithms, placement rules, and the
//! trash retention math. Persistence lives in `notestash-db`, the HTTP
//! surface in `notestash-api`.

pub mod domain;
pub mod error;
pub mod hierarchy;
pub mod placement;
pub mod retention;
pub mod types;
