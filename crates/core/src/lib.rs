//! Domain rules for the training log: error taxonomy, exercise visibility,
//! workout ordering, set synchronisation, and paging.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates call into
//! these functions to decide *what* to write before they write it.

pub mod error;
pub mod exercise;
pub mod ordering;
pub mod paging;
pub mod patch;
pub mod set_sync;
pub mod training_session;
pub mod types;
