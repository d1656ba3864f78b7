//! Built-in app registry consumed by the launcher and shelf.
//!
//! The engine treats `app_id` as an opaque foreign key; this table is what
//! the presentation layer resolves it against.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static description of one launchable app.
pub struct AppDescriptor {
    /// Stable app identifier referenced by window records.
    pub app_id: &'static str,
    /// Launcher display name, also the default window title.
    pub name: &'static str,
    /// Launcher icon glyph.
    pub icon: &'static str,
    /// Launcher tile background color.
    pub tile_color: &'static str,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        app_id: "chrome",
        name: "Chrome",
        icon: "\u{1f310}",
        tile_color: "#4285f4",
    },
    AppDescriptor {
        app_id: "files",
        name: "Files",
        icon: "\u{1f4c1}",
        tile_color: "#1a73e8",
    },
    AppDescriptor {
        app_id: "calculator",
        name: "Calculator",
        icon: "\u{1f9ee}",
        tile_color: "#34a853",
    },
    AppDescriptor {
        app_id: "settings",
        name: "Settings",
        icon: "\u{2699}\u{fe0f}",
        tile_color: "#5f6368",
    },
    AppDescriptor {
        app_id: "terminal",
        name: "Terminal",
        icon: "\u{1f4bb}",
        tile_color: "#202124",
    },
];

/// All registered apps in launcher order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Looks up one app by id.
pub fn app_by_id(app_id: &str) -> Option<&'static AppDescriptor> {
    APP_REGISTRY.iter().find(|app| app.app_id == app_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        for (index, app) in APP_REGISTRY.iter().enumerate() {
            assert!(
                !APP_REGISTRY[index + 1..].iter().any(|other| other.app_id == app.app_id),
                "duplicate app id {}",
                app.app_id
            );
        }
    }

    #[test]
    fn lookup_finds_registered_apps_only() {
        assert_eq!(app_by_id("terminal").map(|app| app.name), Some("Terminal"));
        assert!(app_by_id("paint").is_none());
    }
}
