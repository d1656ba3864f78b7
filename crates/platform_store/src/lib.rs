//! Persistence-gateway contract for durable desktop-shell state.
//!
//! The shell engine consumes storage through the narrow [`DesktopStore`]
//! trait: three keyed collections (windows, workspaces, settings) behind
//! async get/put/delete methods. Concrete per-origin backends (IndexedDB and
//! friends) live with the host composition layer; this crate ships the
//! in-memory and no-op adapters used by headless hosts and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod store;

pub use store::{DesktopStore, MemoryDesktopStore, NoopDesktopStore, StoreFuture};
