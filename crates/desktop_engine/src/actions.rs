//! Presentation-facing command facade over [`WindowManagerEngine`].
//!
//! UI call sites (title-bar buttons, taskbar, launcher, context menus) speak
//! in gesture verbs; this wrapper renames the engine's command surface
//! accordingly and adds nothing else.

use desktop_contract::{SettingsPatch, WindowId, WorkspaceId};

use crate::{apps, engine::WindowManagerEngine};

/// Thin command handle borrowed from the engine for the duration of one
/// UI event dispatch.
pub struct WindowActions<'a> {
    engine: &'a mut WindowManagerEngine,
}

impl<'a> WindowActions<'a> {
    /// Wraps an engine borrow.
    pub fn new(engine: &'a mut WindowManagerEngine) -> Self {
        Self { engine }
    }

    /// Opens a window for an app with an explicit title.
    pub fn open(&mut self, app_id: &str, title: &str) -> WindowId {
        self.engine.add_window(app_id, title)
    }

    /// Opens a window for a registered app, titled from the registry.
    /// Returns `None` for ids the registry does not know.
    pub fn launch(&mut self, app_id: &str) -> Option<WindowId> {
        let app = apps::app_by_id(app_id)?;
        Some(self.engine.add_window(app.app_id, app.name))
    }

    /// Closes a window.
    pub fn close(&mut self, id: WindowId) {
        self.engine.remove_window(id);
    }

    /// Focuses a window.
    pub fn focus(&mut self, id: WindowId) {
        self.engine.focus_window(id);
    }

    /// Minimizes a window.
    pub fn minimize(&mut self, id: WindowId) {
        self.engine.minimize_window(id);
    }

    /// Maximizes a window.
    pub fn maximize(&mut self, id: WindowId) {
        self.engine.maximize_window(id);
    }

    /// Restores a window.
    pub fn restore(&mut self, id: WindowId) {
        self.engine.restore_window(id);
    }

    /// Raises a window to the top of the stack.
    pub fn raise(&mut self, id: WindowId) {
        self.engine.bring_to_front(id);
    }

    /// Moves a window during a pointer drag.
    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) {
        self.engine.update_window_position(id, x, y);
    }

    /// Resizes a window during an edge drag.
    pub fn resize_to(&mut self, id: WindowId, width: i32, height: i32) {
        self.engine.update_window_size(id, width, height);
    }

    /// Switches the visible workspace.
    pub fn switch_workspace(&mut self, id: WorkspaceId) {
        self.engine.set_active_workspace(id);
    }

    /// Creates a workspace.
    pub fn create_workspace(&mut self, name: &str) -> WorkspaceId {
        self.engine.add_workspace(name)
    }

    /// Applies a settings overlay.
    pub fn apply_settings(&mut self, patch: SettingsPatch) {
        self.engine.update_settings(patch);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_store::NoopDesktopStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn facade_delegates_to_the_engine_without_extra_logic() {
        let mut engine = WindowManagerEngine::new(Rc::new(NoopDesktopStore));
        let mut actions = WindowActions::new(&mut engine);

        let id = actions.open("terminal", "Terminal");
        actions.move_to(id, 20, 30);
        actions.minimize(id);
        actions.restore(id);
        actions.close(id);

        assert!(engine.windows().is_empty());
    }

    #[test]
    fn launch_uses_the_registry_title_and_rejects_unknown_apps() {
        let mut engine = WindowManagerEngine::new(Rc::new(NoopDesktopStore));
        let mut actions = WindowActions::new(&mut engine);

        let id = actions.launch("files").expect("files is registered");
        assert!(actions.launch("no-such-app").is_none());

        assert_eq!(engine.window(id).unwrap().title, "Files");
    }
}
