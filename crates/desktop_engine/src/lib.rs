pub mod actions;
pub mod apps;
pub mod engine;
pub mod geometry;

pub use actions::WindowActions;
pub use apps::{app_by_id, app_registry, AppDescriptor};
pub use engine::{SyncError, WindowManagerEngine};
pub use geometry::{constrain_window, Rect, Viewport};
