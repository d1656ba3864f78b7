//! Shared desktop-shell data model consumed by the window-manager engine and
//! the persistence layer.
//!
//! This crate is the API-first boundary between the shell runtime and its
//! storage adapters: window, workspace, and settings records plus the
//! compiled-in numeric configuration they rely on. Behavior lives in
//! `desktop_engine`; storage contracts live in `platform_store`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod model;

pub use model::{
    SettingsPatch, ShelfPosition, SystemSettings, ThemeMode, WallpaperKind, WindowId, WindowRecord,
    Workspace, WorkspaceId, DEFAULT_WALLPAPER_ID, DEFAULT_WORKSPACE_ID, SETTINGS_KEY, SHELF_SIZE,
    WINDOW_CASCADE_ORIGIN, WINDOW_CASCADE_STEP, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
    WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH, WINDOW_Z_INDEX_BASE,
};
