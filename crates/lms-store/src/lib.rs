//! Book storage for the library catalog.
//!
//! A repository is an ordered collection of [`Book`](lms_types::Book)
//! values, unique by ISBN.
//!
//! # Storage Backends
//!
//! All backends implement the [`BookStore`] trait:
//!
//! - [`InMemoryBookRepository`] -- `Vec`-based store, the only backend
//!
//! # Design Rules
//!
//! 1. At most one book per distinct ISBN, the empty string included.
//! 2. Insertion order is preserved and is the only ordering guarantee.
//! 3. Lookups and removals of unknown ISBNs are not errors.
//! 4. Reads hand out copies; callers never observe later mutation.
//! 5. ISBNs are compared by exact, case-sensitive string equality.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBookRepository;
pub use traits::BookStore;
