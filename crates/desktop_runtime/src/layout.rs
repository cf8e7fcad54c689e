//! Snap and maximize geometry plus edge-resize math.

use desktop_app_contract::{WindowPosition, WindowRect, WindowSize};

use crate::model::{HotCorner, PointerPosition, ResizeEdge, SnapPosition, Viewport, WindowRecord};

/// Snap preview for a pointer at `pointer_x` while dragging.
pub fn snap_preview_at(pointer_x: i32, viewport: Viewport, threshold: i32) -> Option<SnapPosition> {
    if pointer_x < threshold {
        Some(SnapPosition::Left)
    } else if pointer_x > viewport.width.saturating_sub(threshold) {
        Some(SnapPosition::Right)
    } else {
        None
    }
}

/// Target rectangle for `snap`. Corner positions are reserved and yield `None`.
pub fn snap_rect(snap: SnapPosition, viewport: Viewport) -> Option<WindowRect> {
    let area = viewport.available_area();
    let half_width = area.w / 2;
    match snap {
        SnapPosition::Left => Some(WindowRect {
            x: area.x,
            y: area.y,
            w: half_width,
            h: area.h,
        }),
        SnapPosition::Right => Some(WindowRect {
            x: area.x + half_width,
            y: area.y,
            w: half_width,
            h: area.h,
        }),
        SnapPosition::TopLeft
        | SnapPosition::TopRight
        | SnapPosition::BottomLeft
        | SnapPosition::BottomRight => None,
    }
}

/// Geometry a maximized window returns to, falling back to its current geometry.
pub fn restore_geometry(window: &WindowRecord) -> (WindowPosition, WindowSize) {
    (
        window.prev_position.unwrap_or(window.position),
        window.prev_size.unwrap_or(window.size),
    )
}

/// Corner square the pointer sits in, if any.
pub fn hot_corner_at(pointer: PointerPosition, viewport: Viewport, size: i32) -> Option<HotCorner> {
    let right = viewport.width.saturating_sub(size);
    let bottom = viewport.height.saturating_sub(size);
    [
        (HotCorner::TopLeft, 0, 0),
        (HotCorner::TopRight, right, 0),
        (HotCorner::BottomLeft, 0, bottom),
        (HotCorner::BottomRight, right, bottom),
    ]
    .into_iter()
    .find(|(_, x, y)| {
        WindowRect {
            x: *x,
            y: *y,
            w: size,
            h: size,
        }
        .contains(pointer.x, pointer.y)
    })
    .map(|(corner, _, _)| corner)
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let grow_east = start.w.saturating_add(dx);
    let grow_west = start.w.saturating_sub(dx);
    let grow_south = start.h.saturating_add(dy);
    let grow_north = start.h.saturating_sub(dy);
    let shift_x = start.x.saturating_add(dx);
    let shift_y = start.y.saturating_add(dy);
    match edge {
        ResizeEdge::East => WindowRect {
            w: grow_east,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: shift_x,
            w: grow_west,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: grow_south,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: shift_y,
            h: grow_north,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: shift_y,
            h: grow_north,
            w: grow_east,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: shift_x,
            y: shift_y,
            w: grow_west,
            h: grow_north,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: grow_east,
            h: grow_south,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: shift_x,
            w: grow_west,
            h: grow_south,
            ..start
        },
    }
}

/// Enforces a minimum size on a resized rect, keeping the edge opposite the dragged one fixed.
pub fn clamp_resized(
    start: WindowRect,
    resized: WindowRect,
    edge: ResizeEdge,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let size = resized.size().clamped_min(min_w, min_h);
    let mut rect = WindowRect {
        w: size.width,
        h: size.height,
        ..resized
    };
    let start_right = start.x.saturating_add(start.w);
    let start_bottom = start.y.saturating_add(start.h);
    if resized.w < min_w
        && matches!(
            edge,
            ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
        )
    {
        rect.x = start_right.saturating_sub(min_w);
    }
    if resized.h < min_h
        && matches!(
            edge,
            ResizeEdge::North | ResizeEdge::NorthWest | ResizeEdge::NorthEast
        )
    {
        rect.y = start_bottom.saturating_sub(min_h);
    }
    rect
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
        taskbar_height: 48,
    };

    #[test]
    fn preview_triggers_inside_threshold_of_either_edge() {
        assert_eq!(snap_preview_at(2, VIEWPORT, 5), Some(SnapPosition::Left));
        assert_eq!(snap_preview_at(5, VIEWPORT, 5), None);
        assert_eq!(snap_preview_at(640, VIEWPORT, 5), None);
        assert_eq!(snap_preview_at(1276, VIEWPORT, 5), Some(SnapPosition::Right));
        assert_eq!(snap_preview_at(1275, VIEWPORT, 5), None);
    }

    #[test]
    fn half_screen_rects_exclude_taskbar() {
        assert_eq!(
            snap_rect(SnapPosition::Left, VIEWPORT),
            Some(WindowRect {
                x: 0,
                y: 0,
                w: 640,
                h: 752
            })
        );
        assert_eq!(
            snap_rect(SnapPosition::Right, VIEWPORT),
            Some(WindowRect {
                x: 640,
                y: 0,
                w: 640,
                h: 752
            })
        );
    }

    #[test]
    fn corner_snaps_are_reserved() {
        for snap in [
            SnapPosition::TopLeft,
            SnapPosition::TopRight,
            SnapPosition::BottomLeft,
            SnapPosition::BottomRight,
        ] {
            assert_eq!(snap_rect(snap, VIEWPORT), None);
        }
    }

    #[test]
    fn hot_corners_cover_the_four_squares() {
        assert_eq!(
            hot_corner_at(PointerPosition::new(0, 0), VIEWPORT, 16),
            Some(HotCorner::TopLeft)
        );
        assert_eq!(
            hot_corner_at(PointerPosition::new(1279, 799), VIEWPORT, 16),
            Some(HotCorner::BottomRight)
        );
        assert_eq!(
            hot_corner_at(PointerPosition::new(1270, 3), VIEWPORT, 16),
            Some(HotCorner::TopRight)
        );
        assert_eq!(hot_corner_at(PointerPosition::new(400, 0), VIEWPORT, 16), None);
    }

    #[test]
    fn west_resize_clamp_keeps_right_edge() {
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 200,
        };
        let resized = resize_rect(start, ResizeEdge::West, 250, 0);
        let clamped = clamp_resized(start, resized, ResizeEdge::West, 220, 140);
        assert_eq!(clamped.w, 220);
        assert_eq!(clamped.x + clamped.w, start.x + start.w);
    }

    #[test]
    fn south_east_resize_grows_from_origin() {
        let start = WindowRect {
            x: 10,
            y: 20,
            w: 300,
            h: 200,
        };
        assert_eq!(
            resize_rect(start, ResizeEdge::SouthEast, 40, 25),
            WindowRect {
                x: 10,
                y: 20,
                w: 340,
                h: 225
            }
        );
    }
}
