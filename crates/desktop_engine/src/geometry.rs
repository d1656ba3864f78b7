//! Pure geometry helpers for window placement within the desktop viewport.
//!
//! Everything here is stateless and deterministic; the engine and the
//! presentation layer share these functions so drag/resize constraint logic
//! stays in one place.

use desktop_contract::{
    ShelfPosition, SystemSettings, SHELF_SIZE, WINDOW_CASCADE_ORIGIN, WINDOW_CASCADE_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Logical size of the desktop container.
pub struct Viewport {
    /// Container width in logical pixels.
    pub width: i32,
    /// Container height in logical pixels.
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Axis-aligned rectangle in viewport coordinates.
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Clamps `value` into `[min, max]`, collapsing to `min` when the range is
/// empty. Callers relying on the degenerate case (window larger than its
/// container) get the container origin back instead of a negative bound.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

/// Constrains a window's top-left corner so the full rectangle stays inside
/// the container. When the window exceeds the container on an axis, that
/// axis pins to `0`.
pub fn constrain_window(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    container_width: i32,
    container_height: i32,
) -> (i32, i32) {
    (
        clamp(x, 0, container_width - width),
        clamp(y, 0, container_height - height),
    )
}

/// Returns the viewport region available for window placement after
/// subtracting the shelf-reserved edge.
pub fn work_area(viewport: Viewport, settings: &SystemSettings) -> Rect {
    let mut area = Rect {
        x: 0,
        y: 0,
        width: viewport.width,
        height: viewport.height,
    };
    if settings.show_shelf {
        match settings.shelf_position {
            ShelfPosition::Bottom => area.height -= SHELF_SIZE,
            ShelfPosition::Left => {
                area.x += SHELF_SIZE;
                area.width -= SHELF_SIZE;
            }
            ShelfPosition::Right => area.width -= SHELF_SIZE,
        }
    }
    area.width = area.width.max(0);
    area.height = area.height.max(0);
    area
}

/// Computes the staggered initial position for the `n`th window of one app
/// kind, constrained into the work area.
pub fn cascade_position(same_kind_count: usize, area: Rect, width: i32, height: i32) -> (i32, i32) {
    let offset = WINDOW_CASCADE_STEP.saturating_mul(same_kind_count as i32);
    (
        clamp(
            WINDOW_CASCADE_ORIGIN + offset,
            area.x,
            area.x + area.width - width,
        ),
        clamp(
            WINDOW_CASCADE_ORIGIN + offset,
            area.y,
            area.y + area.height - height,
        ),
    )
}

#[cfg(test)]
mod tests {
    use desktop_contract::SHELF_SIZE;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_holds_value_inside_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(14, 0, 10), 10);
    }

    #[test]
    fn clamp_collapses_empty_range_to_min() {
        assert_eq!(clamp(5, 0, -200), 0);
        assert_eq!(clamp(-5, 10, 2), 10);
    }

    #[test]
    fn constrain_window_keeps_rect_inside_container() {
        assert_eq!(constrain_window(50, 60, 400, 300, 1280, 720), (50, 60));
        assert_eq!(constrain_window(-40, -10, 400, 300, 1280, 720), (0, 0));
        assert_eq!(
            constrain_window(2000, 2000, 400, 300, 1280, 720),
            (880, 420)
        );
    }

    #[test]
    fn constrain_window_pins_oversized_windows_to_origin() {
        assert_eq!(constrain_window(100, 100, 1500, 300, 1280, 720), (0, 100));
        assert_eq!(constrain_window(100, 100, 400, 900, 1280, 720), (100, 0));
        assert_eq!(constrain_window(100, 100, 1500, 900, 1280, 720), (0, 0));
    }

    #[test]
    fn work_area_reserves_the_shelf_edge() {
        let viewport = Viewport {
            width: 1280,
            height: 720,
        };
        let mut settings = SystemSettings::default();

        let bottom = work_area(viewport, &settings);
        assert_eq!(bottom.height, 720 - SHELF_SIZE);
        assert_eq!((bottom.x, bottom.y, bottom.width), (0, 0, 1280));

        settings.shelf_position = ShelfPosition::Left;
        let left = work_area(viewport, &settings);
        assert_eq!((left.x, left.width, left.height), (SHELF_SIZE, 1280 - SHELF_SIZE, 720));

        settings.shelf_position = ShelfPosition::Right;
        let right = work_area(viewport, &settings);
        assert_eq!((right.x, right.width, right.height), (0, 1280 - SHELF_SIZE, 720));

        settings.show_shelf = false;
        let hidden = work_area(viewport, &settings);
        assert_eq!((hidden.width, hidden.height), (1280, 720));
    }

    #[test]
    fn work_area_never_goes_negative_on_tiny_viewports() {
        let area = work_area(
            Viewport {
                width: 40,
                height: 40,
            },
            &SystemSettings::default(),
        );
        assert_eq!(area.height, 0);
    }

    #[test]
    fn cascade_position_staggers_and_stays_in_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 1280,
            height: 656,
        };
        assert_eq!(cascade_position(0, area, 800, 600), (100, 56));
        assert_eq!(cascade_position(1, area, 800, 600), (150, 56));
        // Far along the cascade the x offset hits the right edge.
        assert_eq!(cascade_position(9, area, 800, 600), (480, 56));
    }

    #[test]
    fn cascade_position_respects_a_left_docked_shelf() {
        let area = Rect {
            x: SHELF_SIZE,
            y: 0,
            width: 1280 - SHELF_SIZE,
            height: 720,
        };
        let (x, y) = cascade_position(0, area, 800, 600);
        assert_eq!((x, y), (100, 100));
        let (x, _) = cascade_position(20, area, 800, 600);
        assert_eq!(x, SHELF_SIZE + 1280 - SHELF_SIZE - 800);
    }
}
