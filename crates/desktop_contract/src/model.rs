//! Window, workspace, and settings records shared across the shell.

use serde::{Deserialize, Serialize};

/// Minimum managed window width in logical pixels.
pub const WINDOW_MIN_WIDTH: i32 = 400;
/// Minimum managed window height in logical pixels.
pub const WINDOW_MIN_HEIGHT: i32 = 300;
/// Default width for newly opened windows.
pub const WINDOW_DEFAULT_WIDTH: i32 = 800;
/// Default height for newly opened windows.
pub const WINDOW_DEFAULT_HEIGHT: i32 = 600;
/// Floor for the stacking counter; restored sessions never drop below this.
pub const WINDOW_Z_INDEX_BASE: u32 = 1000;
/// Top-left origin of the cascade used when placing new windows.
pub const WINDOW_CASCADE_ORIGIN: i32 = 100;
/// Per-window stagger applied to the cascade origin.
pub const WINDOW_CASCADE_STEP: i32 = 50;
/// Thickness of the shelf edge reserved from the viewport when visible.
pub const SHELF_SIZE: i32 = 64;
/// Fixed record key for the settings singleton in durable storage.
pub const SETTINGS_KEY: &str = "main";
/// Wallpaper preset id selected when no persisted settings exist.
pub const DEFAULT_WALLPAPER_ID: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque identifier for one open window, unique for the process lifetime.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque identifier for one workspace.
pub struct WorkspaceId(pub u64);

/// Id of the built-in workspace that always exists and is never deleted.
pub const DEFAULT_WORKSPACE_ID: WorkspaceId = WorkspaceId(0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One open application window: geometry, stacking, and visibility state.
pub struct WindowRecord {
    /// Unique window id, assigned at creation and immutable.
    pub id: WindowId,
    /// Foreign key into the launcher's app registry; not interpreted here.
    pub app_id: String,
    /// Title-bar display string.
    pub title: String,
    /// Top-left x in viewport coordinates; ignored while maximized.
    pub x: i32,
    /// Top-left y in viewport coordinates; ignored while maximized.
    pub y: i32,
    /// Logical width, never below [`WINDOW_MIN_WIDTH`].
    pub width: i32,
    /// Logical height, never below [`WINDOW_MIN_HEIGHT`].
    pub height: i32,
    /// Stacking key; strictly increases as windows gain focus.
    pub z_index: u32,
    /// Whether the window is hidden from the desktop surface.
    pub minimized: bool,
    /// Whether the window fills the work area; geometry fields are retained.
    pub maximized: bool,
    /// Whether this is the focused window; at most one record holds `true`.
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named, ordered reference set of window ids forming one virtual desktop.
///
/// The workspace holds references only; the engine's window list owns the
/// actual records, and dangling references are filtered at read time.
pub struct Workspace {
    /// Unique workspace id.
    pub id: WorkspaceId,
    /// Display name.
    pub name: String,
    /// Referenced window ids, in attach order.
    pub window_ids: Vec<WindowId>,
}

impl Workspace {
    /// Creates an empty workspace with the given id and name.
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            window_ids: Vec::new(),
        }
    }

    /// Returns the built-in default workspace.
    pub fn default_workspace() -> Self {
        Self::new(DEFAULT_WORKSPACE_ID, "Desktop")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Shell color-scheme preference.
pub enum ThemeMode {
    /// Force the light palette.
    Light,
    /// Force the dark palette.
    Dark,
    /// Follow the host environment preference.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// How the wallpaper value in [`SystemSettings`] is interpreted.
pub enum WallpaperKind {
    /// Named gradient preset.
    #[default]
    Gradient,
    /// Single solid color value.
    Solid,
    /// User-supplied image reference.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
/// Viewport edge the shelf docks to, reserving that edge from window placement.
pub enum ShelfPosition {
    /// Dock along the bottom edge.
    #[default]
    Bottom,
    /// Dock along the left edge.
    Left,
    /// Dock along the right edge.
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Singleton shell settings record, persisted under [`SETTINGS_KEY`].
///
/// Every field carries a serde default so records persisted by an older
/// schema hydrate by merging with the compiled-in defaults instead of
/// failing.
pub struct SystemSettings {
    /// Color-scheme preference.
    #[serde(default)]
    pub theme: ThemeMode,
    /// Wallpaper preset id, color value, or image reference per `wallpaper_kind`.
    #[serde(default = "default_wallpaper")]
    pub wallpaper: String,
    /// Interpretation of the `wallpaper` value.
    #[serde(default)]
    pub wallpaper_kind: WallpaperKind,
    /// Whether the shelf is visible and reserves its edge.
    #[serde(default = "default_show_shelf")]
    pub show_shelf: bool,
    /// Edge the shelf docks to.
    #[serde(default)]
    pub shelf_position: ShelfPosition,
}

fn default_wallpaper() -> String {
    DEFAULT_WALLPAPER_ID.to_string()
}

fn default_show_shelf() -> bool {
    true
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            wallpaper: default_wallpaper(),
            wallpaper_kind: WallpaperKind::Gradient,
            show_shelf: true,
            shelf_position: ShelfPosition::Bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Field-by-field overlay applied to [`SystemSettings`]; `None` keeps the
/// current value.
pub struct SettingsPatch {
    /// New theme mode, if any.
    pub theme: Option<ThemeMode>,
    /// New wallpaper value, if any.
    pub wallpaper: Option<String>,
    /// New wallpaper interpretation, if any.
    pub wallpaper_kind: Option<WallpaperKind>,
    /// New shelf visibility, if any.
    pub show_shelf: Option<bool>,
    /// New shelf edge, if any.
    pub shelf_position: Option<ShelfPosition>,
}

impl SystemSettings {
    /// Overlays the patch onto the current settings, field by field.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(wallpaper) = patch.wallpaper {
            self.wallpaper = wallpaper;
        }
        if let Some(wallpaper_kind) = patch.wallpaper_kind {
            self.wallpaper_kind = wallpaper_kind;
        }
        if let Some(show_shelf) = patch.show_shelf {
            self.show_shelf = show_shelf;
        }
        if let Some(shelf_position) = patch.shelf_position {
            self.shelf_position = shelf_position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_first_boot_expectations() {
        let settings = SystemSettings::default();
        assert_eq!(settings.theme, ThemeMode::Auto);
        assert_eq!(settings.wallpaper, DEFAULT_WALLPAPER_ID);
        assert_eq!(settings.wallpaper_kind, WallpaperKind::Gradient);
        assert!(settings.show_shelf);
        assert_eq!(settings.shelf_position, ShelfPosition::Bottom);
    }

    #[test]
    fn settings_with_missing_fields_merge_with_defaults() {
        let settings: SystemSettings =
            serde_json::from_str(r#"{"theme":"dark"}"#).expect("partial record should hydrate");
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.wallpaper, DEFAULT_WALLPAPER_ID);
        assert!(settings.show_shelf);
        assert_eq!(settings.shelf_position, ShelfPosition::Bottom);
    }

    #[test]
    fn settings_enums_use_lowercase_wire_values() {
        let settings = SystemSettings {
            theme: ThemeMode::Dark,
            wallpaper: "ocean".to_string(),
            wallpaper_kind: WallpaperKind::Solid,
            show_shelf: false,
            shelf_position: ShelfPosition::Left,
        };
        let value = serde_json::to_value(&settings).expect("serialize settings");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["wallpaper_kind"], "solid");
        assert_eq!(value["shelf_position"], "left");
    }

    #[test]
    fn settings_patch_overlays_only_provided_fields() {
        let mut settings = SystemSettings::default();
        settings.apply(SettingsPatch {
            theme: Some(ThemeMode::Dark),
            show_shelf: Some(false),
            ..SettingsPatch::default()
        });
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(!settings.show_shelf);
        assert_eq!(settings.wallpaper, DEFAULT_WALLPAPER_ID);
        assert_eq!(settings.shelf_position, ShelfPosition::Bottom);
    }

    #[test]
    fn window_record_round_trips_through_json() {
        let record = WindowRecord {
            id: WindowId(7),
            app_id: "files".to_string(),
            title: "Files".to_string(),
            x: 120,
            y: 80,
            width: WINDOW_DEFAULT_WIDTH,
            height: WINDOW_DEFAULT_HEIGHT,
            z_index: WINDOW_Z_INDEX_BASE + 3,
            minimized: false,
            maximized: true,
            is_focused: true,
        };
        let raw = serde_json::to_string(&record).expect("serialize window");
        let decoded: WindowRecord = serde_json::from_str(&raw).expect("deserialize window");
        assert_eq!(decoded, record);
    }

    #[test]
    fn default_workspace_has_reserved_id_and_no_references() {
        let workspace = Workspace::default_workspace();
        assert_eq!(workspace.id, DEFAULT_WORKSPACE_ID);
        assert_eq!(workspace.name, "Desktop");
        assert!(workspace.window_ids.is_empty());
    }
}
