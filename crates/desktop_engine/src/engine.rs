//! Authoritative window-manager state engine for the desktop shell.
//!
//! The engine owns the in-memory window list, stacking order, workspace
//! membership, and settings singleton. Commands mutate that state
//! synchronously and mark the engine dirty; the host drains dirtiness by
//! awaiting [`WindowManagerEngine::sync`], which mirrors the state into the
//! injected [`DesktopStore`] best-effort. In-memory state is always the
//! read model of record for the running session.

use std::{collections::BTreeSet, rc::Rc};

use thiserror::Error;

use desktop_contract::{
    SettingsPatch, SystemSettings, WindowId, WindowRecord, Workspace, WorkspaceId,
    DEFAULT_WORKSPACE_ID, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH, WINDOW_MIN_HEIGHT,
    WINDOW_MIN_WIDTH, WINDOW_Z_INDEX_BASE,
};
use platform_store::DesktopStore;

use crate::geometry::{self, Viewport};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure crossing the async persistence boundary (`initialize`/`sync`).
pub enum SyncError {
    /// The storage backend rejected an operation.
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Window-manager engine instance; create one per shell session and pass it
/// by handle to all callers.
///
/// Commands run synchronously on a single logical thread and never fail:
/// a command referencing an unknown id is a silent no-op, matching the
/// fire-and-forget nature of UI event dispatch where a stale id can arrive
/// after its window already closed.
pub struct WindowManagerEngine {
    store: Rc<dyn DesktopStore>,
    windows: Vec<WindowRecord>,
    workspaces: Vec<Workspace>,
    settings: SystemSettings,
    active_window_id: Option<WindowId>,
    current_workspace_id: WorkspaceId,
    z_index_counter: u32,
    next_window_id: u64,
    next_workspace_id: u64,
    viewport: Viewport,
    pending_deletes: BTreeSet<WindowId>,
    needs_sync: bool,
}

impl WindowManagerEngine {
    /// Creates an engine with compiled-in defaults and the given store.
    ///
    /// Call [`Self::initialize`] afterwards to replace the defaults with the
    /// previous session's persisted state.
    pub fn new(store: Rc<dyn DesktopStore>) -> Self {
        Self {
            store,
            windows: Vec::new(),
            workspaces: vec![Workspace::default_workspace()],
            settings: SystemSettings::default(),
            active_window_id: None,
            current_workspace_id: DEFAULT_WORKSPACE_ID,
            z_index_counter: WINDOW_Z_INDEX_BASE,
            next_window_id: 1,
            next_workspace_id: 1,
            viewport: Viewport::default(),
            pending_deletes: BTreeSet::new(),
            needs_sync: false,
        }
    }

    // ---- commands -------------------------------------------------------

    /// Opens a window for `app_id`, cascading its position from existing
    /// windows of the same kind and focusing it.
    pub fn add_window(&mut self, app_id: impl Into<String>, title: impl Into<String>) -> WindowId {
        let app_id = app_id.into();
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);

        let same_kind = self.windows.iter().filter(|w| w.app_id == app_id).count();
        let area = geometry::work_area(self.viewport, &self.settings);
        let (x, y) =
            geometry::cascade_position(same_kind, area, WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);

        for window in &mut self.windows {
            window.is_focused = false;
        }
        self.z_index_counter += 1;
        self.windows.push(WindowRecord {
            id,
            app_id,
            title: title.into(),
            x,
            y,
            width: WINDOW_DEFAULT_WIDTH,
            height: WINDOW_DEFAULT_HEIGHT,
            z_index: self.z_index_counter,
            minimized: false,
            maximized: false,
            is_focused: true,
        });
        self.active_window_id = Some(id);
        let current = self.current_workspace_id;
        if let Some(workspace) = self.workspace_mut(current) {
            workspace.window_ids.push(id);
        }
        self.mark_dirty();
        id
    }

    /// Closes a window: drops it from memory, detaches it from the current
    /// workspace, and queues its id for deletion from storage.
    pub fn remove_window(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return;
        }
        if self.active_window_id == Some(id) {
            self.active_window_id = None;
        }
        let current = self.current_workspace_id;
        if let Some(workspace) = self.workspace_mut(current) {
            workspace.window_ids.retain(|window_id| *window_id != id);
        }
        self.pending_deletes.insert(id);
        self.mark_dirty();
    }

    /// Gives `id` exclusive focus. Minimized windows cannot take focus;
    /// callers restore first.
    pub fn focus_window(&mut self, id: WindowId) {
        let Some(target) = self.windows.iter().find(|w| w.id == id) else {
            return;
        };
        if target.minimized {
            return;
        }
        for window in &mut self.windows {
            window.is_focused = window.id == id;
        }
        self.active_window_id = Some(id);
        self.mark_dirty();
    }

    /// Minimizes a window, dropping its focus.
    pub fn minimize_window(&mut self, id: WindowId) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        window.minimized = true;
        window.is_focused = false;
        if self.active_window_id == Some(id) {
            self.active_window_id = None;
        }
        self.mark_dirty();
    }

    /// Maximizes a window. Position and size are retained untouched so a
    /// later restore returns to the prior geometry.
    pub fn maximize_window(&mut self, id: WindowId) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        window.maximized = true;
        self.mark_dirty();
    }

    /// Restores a window out of the minimized and maximized states and gives
    /// it exclusive focus.
    pub fn restore_window(&mut self, id: WindowId) {
        if !self.windows.iter().any(|w| w.id == id) {
            return;
        }
        for window in &mut self.windows {
            if window.id == id {
                window.minimized = false;
                window.maximized = false;
                window.is_focused = true;
            } else {
                window.is_focused = false;
            }
        }
        self.active_window_id = Some(id);
        self.mark_dirty();
    }

    /// Raises `id` above every other window, recomputing the global maximum
    /// at call time so rapid focus switching stays collision-free.
    pub fn bring_to_front(&mut self, id: WindowId) {
        let Some(target) = self.windows.iter().find(|w| w.id == id) else {
            return;
        };
        if target.minimized {
            return;
        }
        let max_z = self
            .windows
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0)
            .max(self.z_index_counter);
        self.z_index_counter = max_z + 1;
        for window in &mut self.windows {
            window.is_focused = window.id == id;
            if window.id == id {
                window.z_index = max_z + 1;
            }
        }
        self.active_window_id = Some(id);
        self.mark_dirty();
    }

    /// Overwrites a window's position without revalidating bounds.
    ///
    /// This is the pointer-drag hot path: the caller constrains the
    /// candidate through [`crate::geometry::constrain_window`] first.
    pub fn update_window_position(&mut self, id: WindowId, x: i32, y: i32) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        window.x = x;
        window.y = y;
        self.mark_dirty();
    }

    /// Overwrites a window's size, flooring it at the compiled-in minimums.
    /// Bounds against the container are the caller's contract, as with
    /// [`Self::update_window_position`].
    pub fn update_window_size(&mut self, id: WindowId, width: i32, height: i32) {
        let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
            return;
        };
        window.width = width.max(WINDOW_MIN_WIDTH);
        window.height = height.max(WINDOW_MIN_HEIGHT);
        self.mark_dirty();
    }

    /// Switches the current workspace pointer; unknown ids are ignored.
    pub fn set_active_workspace(&mut self, id: WorkspaceId) {
        if !self.workspaces.iter().any(|ws| ws.id == id) {
            return;
        }
        self.current_workspace_id = id;
        self.mark_dirty();
    }

    /// Appends a new empty workspace and returns its id.
    pub fn add_workspace(&mut self, name: impl Into<String>) -> WorkspaceId {
        let id = WorkspaceId(self.next_workspace_id);
        self.next_workspace_id = self.next_workspace_id.saturating_add(1);
        self.workspaces.push(Workspace::new(id, name));
        self.mark_dirty();
        id
    }

    /// Overlays a settings patch onto the settings singleton.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
        self.mark_dirty();
    }

    /// Records the current desktop container size, reported by the
    /// presentation layer on resize. Placement inputs are derived state and
    /// are not persisted.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = Viewport { width, height };
    }

    // ---- queries --------------------------------------------------------

    /// All windows in memory, in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Looks up one window by id.
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Windows referenced by the current workspace that still exist in
    /// memory; dangling references are silently filtered.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let Some(workspace) = self
            .workspaces
            .iter()
            .find(|ws| ws.id == self.current_workspace_id)
        else {
            return Vec::new();
        };
        workspace
            .window_ids
            .iter()
            .filter_map(|id| self.windows.iter().find(|w| w.id == *id))
            .collect()
    }

    /// Id of the focused window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    /// All workspaces, default first.
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// Id of the current workspace.
    pub fn current_workspace_id(&self) -> WorkspaceId {
        self.current_workspace_id
    }

    /// The settings singleton.
    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Whether state has mutated since the last sync snapshot was taken.
    /// Hosts may debounce: one sync covering many commands is sufficient.
    pub fn needs_sync(&self) -> bool {
        self.needs_sync
    }

    // ---- persistence boundary -------------------------------------------

    /// One-shot hydration from the store, replacing in-memory windows,
    /// workspaces, and settings with persisted values or compiled-in
    /// defaults when absent.
    ///
    /// The stacking counter is re-derived as the maximum observed z-index
    /// (or the base floor) so windows created afterwards never collide with
    /// restored ones; id counters are re-derived the same way. The focus
    /// invariant is re-established in case the persisted records predate it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Backend`] when the store fails; the caller logs
    /// and continues with defaults.
    pub async fn initialize(&mut self) -> Result<(), SyncError> {
        let windows = self.store.list_windows().await.map_err(SyncError::Backend)?;
        let workspaces = self
            .store
            .list_workspaces()
            .await
            .map_err(SyncError::Backend)?;
        let settings = self.store.get_settings().await.map_err(SyncError::Backend)?;

        self.windows = windows;
        self.workspaces = workspaces;
        if !self
            .workspaces
            .iter()
            .any(|ws| ws.id == DEFAULT_WORKSPACE_ID)
        {
            self.workspaces.insert(0, Workspace::default_workspace());
        }
        self.settings = settings.unwrap_or_default();
        if !self
            .workspaces
            .iter()
            .any(|ws| ws.id == self.current_workspace_id)
        {
            self.current_workspace_id = DEFAULT_WORKSPACE_ID;
        }

        self.z_index_counter = self
            .windows
            .iter()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0)
            .max(WINDOW_Z_INDEX_BASE);
        self.next_window_id = self
            .windows
            .iter()
            .map(|w| w.id.0)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.next_workspace_id = self
            .workspaces
            .iter()
            .map(|ws| ws.id.0)
            .max()
            .unwrap_or(0)
            .saturating_add(1);

        self.normalize_focus();
        self.pending_deletes.clear();
        self.needs_sync = false;
        Ok(())
    }

    /// Mirrors the current state into the store: queued deletions first,
    /// then every window, workspace, and the settings singleton.
    ///
    /// The snapshot is whatever the state is at fire time, so debounced
    /// callers still converge on the final in-memory state. Queued deletions
    /// are consumed by the attempt and not re-queued on failure; memory is
    /// never rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Backend`] on the first store failure, after
    /// logging it.
    pub async fn sync(&mut self) -> Result<(), SyncError> {
        self.needs_sync = false;
        let deletes = std::mem::take(&mut self.pending_deletes);
        let result = self.write_snapshot(&deletes).await;
        if let Err(err) = &result {
            log::warn!("desktop state sync failed: {err}");
        }
        result
    }

    async fn write_snapshot(&self, deletes: &BTreeSet<WindowId>) -> Result<(), SyncError> {
        for id in deletes {
            self.store
                .delete_window(*id)
                .await
                .map_err(SyncError::Backend)?;
        }
        for window in &self.windows {
            self.store
                .put_window(window)
                .await
                .map_err(SyncError::Backend)?;
        }
        for workspace in &self.workspaces {
            self.store
                .put_workspace(workspace)
                .await
                .map_err(SyncError::Backend)?;
        }
        self.store
            .put_settings(&self.settings)
            .await
            .map_err(SyncError::Backend)
    }

    // ---- internals ------------------------------------------------------

    fn workspace_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.id == id)
    }

    fn mark_dirty(&mut self) {
        self.needs_sync = true;
    }

    /// Re-establishes the focus invariant: at most one focused window, never
    /// minimized, and holding the maximum z-index among focus candidates.
    fn normalize_focus(&mut self) {
        let top = self
            .windows
            .iter()
            .filter(|w| w.is_focused && !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id);
        for window in &mut self.windows {
            window.is_focused = Some(window.id) == top;
        }
        self.active_window_id = top;
    }
}
