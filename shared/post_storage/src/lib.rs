//! Local persistence for saved generated posts
//!
//! Keeps an ordered list of [`SavedPost`] records behind a swappable
//! [`StorageBackend`]. Every mutation writes the full list back through
//! the backend; a failed write is reported but the in-memory list keeps
//! the change, so memory and storage re-converge on the next successful
//! write. Deletion is two-phase: a first call marks an index pending and
//! a confirming call within a bounded window commits the removal.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use store::{DeleteOutcome, PostStore, SavedPost, DELETE_CONFIRM_WINDOW};
