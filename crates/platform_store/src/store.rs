//! Desktop storage contract and baseline adapters.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

use desktop_contract::{SystemSettings, WindowId, WindowRecord, Workspace, WorkspaceId};

/// Object-safe boxed future used by [`DesktopStore`] async methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Async key-value gateway for the three persisted shell collections.
///
/// All operations are best-effort: the engine treats storage as a mirror of
/// its in-memory state, never as the source of truth during a live session.
/// Failures surface as `Err(String)` and are logged at the sync boundary.
pub trait DesktopStore {
    /// Lists every persisted window record.
    fn list_windows(&self) -> StoreFuture<'_, Result<Vec<WindowRecord>, String>>;

    /// Inserts or replaces a window record keyed by its id.
    fn put_window<'a>(&'a self, window: &'a WindowRecord) -> StoreFuture<'a, Result<(), String>>;

    /// Deletes a window record; absent ids succeed silently.
    fn delete_window(&self, id: WindowId) -> StoreFuture<'_, Result<(), String>>;

    /// Lists every persisted workspace record.
    fn list_workspaces(&self) -> StoreFuture<'_, Result<Vec<Workspace>, String>>;

    /// Inserts or replaces a workspace record keyed by its id.
    fn put_workspace<'a>(
        &'a self,
        workspace: &'a Workspace,
    ) -> StoreFuture<'a, Result<(), String>>;

    /// Loads the settings singleton, if one has been persisted. Keyed
    /// backends store it under [`desktop_contract::SETTINGS_KEY`].
    fn get_settings(&self) -> StoreFuture<'_, Result<Option<SystemSettings>, String>>;

    /// Replaces the settings singleton.
    fn put_settings<'a>(
        &'a self,
        settings: &'a SystemSettings,
    ) -> StoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for targets without durable storage and baseline tests.
pub struct NoopDesktopStore;

impl DesktopStore for NoopDesktopStore {
    fn list_windows(&self) -> StoreFuture<'_, Result<Vec<WindowRecord>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn put_window<'a>(&'a self, _window: &'a WindowRecord) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_window(&self, _id: WindowId) -> StoreFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn list_workspaces(&self) -> StoreFuture<'_, Result<Vec<Workspace>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn put_workspace<'a>(
        &'a self,
        _workspace: &'a Workspace,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn get_settings(&self) -> StoreFuture<'_, Result<Option<SystemSettings>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn put_settings<'a>(
        &'a self,
        _settings: &'a SystemSettings,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by record id; the reference backend for tests and
/// headless hosts.
pub struct MemoryDesktopStore {
    windows: Rc<RefCell<BTreeMap<WindowId, WindowRecord>>>,
    workspaces: Rc<RefCell<BTreeMap<WorkspaceId, Workspace>>>,
    settings: Rc<RefCell<Option<SystemSettings>>>,
}

impl DesktopStore for MemoryDesktopStore {
    fn list_windows(&self) -> StoreFuture<'_, Result<Vec<WindowRecord>, String>> {
        Box::pin(async move { Ok(self.windows.borrow().values().cloned().collect()) })
    }

    fn put_window<'a>(&'a self, window: &'a WindowRecord) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.windows.borrow_mut().insert(window.id, window.clone());
            Ok(())
        })
    }

    fn delete_window(&self, id: WindowId) -> StoreFuture<'_, Result<(), String>> {
        Box::pin(async move {
            self.windows.borrow_mut().remove(&id);
            Ok(())
        })
    }

    fn list_workspaces(&self) -> StoreFuture<'_, Result<Vec<Workspace>, String>> {
        Box::pin(async move { Ok(self.workspaces.borrow().values().cloned().collect()) })
    }

    fn put_workspace<'a>(
        &'a self,
        workspace: &'a Workspace,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.workspaces
                .borrow_mut()
                .insert(workspace.id, workspace.clone());
            Ok(())
        })
    }

    fn get_settings(&self) -> StoreFuture<'_, Result<Option<SystemSettings>, String>> {
        Box::pin(async move { Ok(self.settings.borrow().clone()) })
    }

    fn put_settings<'a>(
        &'a self,
        settings: &'a SystemSettings,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            *self.settings.borrow_mut() = Some(settings.clone());
            Ok(())
        })
    }
}
