//! Ordered post list with confirm-before-delete semantics

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::backend::StorageBackend;
use crate::error::StorageResult;

/// How long a pending delete stays confirmable
pub const DELETE_CONFIRM_WINDOW: Duration = Duration::from_secs(4);

/// A generated post committed to local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPost {
    /// Topic the post was generated from
    pub title: String,
    /// Generated body text
    pub content: String,
    /// Tone the post was generated with
    pub tone: String,
}

/// Outcome of a [`PostStore::delete`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The index is marked for deletion and needs a confirming call
    Pending,
    /// The post was removed
    Removed,
    /// The index was out of range, nothing changed
    Ignored,
}

/// Delete confirmation state machine.
///
/// A pending index is only ever set for a valid position, and every other
/// mutation resets to `Idle`, so a pending index is always in range when
/// it is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteState {
    Idle,
    Pending { index: usize, deadline: Instant },
}

/// Ordered list of saved posts persisted through a [`StorageBackend`]
pub struct PostStore<B: StorageBackend> {
    backend: B,
    posts: Vec<SavedPost>,
    delete_state: DeleteState,
    confirm_window: Duration,
}

impl<B: StorageBackend> PostStore<B> {
    /// Opens the store, loading any previously persisted posts.
    ///
    /// A stored value that is present but unparseable is discarded with a
    /// warning and the store starts empty; the next successful write
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read
    pub fn open(backend: B) -> StorageResult<Self> {
        let posts = match backend.load()? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(posts) => posts,
                Err(err) => {
                    tracing::warn!("Discarding unparseable post list: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            backend,
            posts,
            delete_state: DeleteState::Idle,
            confirm_window: DELETE_CONFIRM_WINDOW,
        })
    }

    /// Overrides the delete confirmation window
    #[must_use]
    pub const fn with_confirm_window(mut self, window: Duration) -> Self {
        self.confirm_window = window;
        self
    }

    /// Returns the full ordered post list
    #[must_use]
    pub fn read(&self) -> &[SavedPost] {
        &self.posts
    }

    /// Appends a post and persists the updated list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the write fails; the in-memory list
    /// keeps the post either way
    pub fn create(&mut self, post: SavedPost) -> StorageResult<()> {
        self.delete_state = DeleteState::Idle;
        self.posts.push(post);
        self.persist()
    }

    /// Replaces the content of the post at `index`.
    ///
    /// An out-of-range index is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the write fails; the in-memory edit is
    /// kept either way
    pub fn edit(&mut self, index: usize, new_content: impl Into<String>) -> StorageResult<()> {
        self.delete_state = DeleteState::Idle;

        let Some(post) = self.posts.get_mut(index) else {
            tracing::debug!("Ignoring edit of out-of-range index {index}");
            return Ok(());
        };

        post.content = new_content.into();
        self.persist()
    }

    /// Marks `index` for deletion, or removes the post when `index` is
    /// already pending and the confirmation window has not expired.
    ///
    /// A delete on a different index re-arms the pending state for that
    /// index; an expired window makes the call a fresh first phase.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the write after a removal fails; the
    /// in-memory removal is kept either way
    pub fn delete(&mut self, index: usize) -> StorageResult<DeleteOutcome> {
        let now = Instant::now();

        if let DeleteState::Pending {
            index: pending,
            deadline,
        } = self.delete_state
        {
            self.delete_state = DeleteState::Idle;

            if pending == index && now <= deadline {
                self.posts.remove(index);
                self.persist()?;
                return Ok(DeleteOutcome::Removed);
            }
        }

        if index >= self.posts.len() {
            tracing::debug!("Ignoring delete of out-of-range index {index}");
            return Ok(DeleteOutcome::Ignored);
        }

        self.delete_state = DeleteState::Pending {
            index,
            deadline: now + self.confirm_window,
        };

        Ok(DeleteOutcome::Pending)
    }

    /// Writes the full list back through the backend
    fn persist(&self) -> StorageResult<()> {
        let raw = serde_json::to_string(&self.posts)?;
        self.backend.store(&raw)
    }
}
