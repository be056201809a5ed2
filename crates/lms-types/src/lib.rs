//! Foundation types for the library catalog (LMS).
//!
//! The store and server crates build on the types defined here.
//!
//! # Key Types
//!
//! - [`Book`] — Immutable catalog record, identified by its ISBN

pub mod book;

pub use book::Book;
