//! Display and multi-monitor layout types.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// A single monitor in the virtual screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Platform device name (e.g. `\\.\DISPLAY1`) or a configured label.
    pub name: String,
    /// Bounds in global coordinates.
    pub bounds: Rect,
}

impl Display {
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Screen-layout equality: two displays are the same monitor when they
    /// occupy the same rectangle, regardless of name.
    #[must_use]
    pub fn same_layout(&self, other: &Display) -> bool {
        self.bounds == other.bounds
    }
}

/// Snapshot of every connected display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub displays: Vec<Display>,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(displays: Vec<Display>) -> Self {
        Self { displays }
    }

    #[must_use]
    pub fn is_multi_display(&self) -> bool {
        self.displays.len() > 1
    }

    /// The display containing `p`, or the nearest one when `p` falls in a
    /// gap between monitors. `None` only for an empty layout.
    #[must_use]
    pub fn display_at(&self, p: Point) -> Option<&Display> {
        self.displays
            .iter()
            .find(|d| d.bounds.contains(p))
            .or_else(|| {
                self.displays
                    .iter()
                    .min_by_key(|d| d.bounds.distance_squared(p))
            })
    }

    /// Look up a display by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Display> {
        self.displays.iter().find(|d| d.name == name)
    }

    /// Bounding rectangle of all displays (the Win32 "virtual screen").
    #[must_use]
    pub fn virtual_bounds(&self) -> Option<Rect> {
        let mut iter = self.displays.iter().map(|d| d.bounds);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(&r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side() -> ScreenLayout {
        ScreenLayout::new(vec![
            Display::new("A", Rect::new(0, 0, 1920, 1080)),
            Display::new("B", Rect::new(1920, 0, 1920, 1080)),
        ])
    }

    #[test]
    fn display_at_picks_containing_display() {
        let layout = side_by_side();
        assert_eq!(layout.display_at(Point::new(2000, 50)).unwrap().name, "B");
        assert_eq!(layout.display_at(Point::new(10, 10)).unwrap().name, "A");
    }

    #[test]
    fn display_at_falls_back_to_nearest() {
        let layout = side_by_side();
        assert_eq!(layout.display_at(Point::new(5000, 50)).unwrap().name, "B");
        assert_eq!(layout.display_at(Point::new(-40, 2000)).unwrap().name, "A");
    }

    #[test]
    fn empty_layout_has_no_display() {
        let layout = ScreenLayout::default();
        assert!(layout.display_at(Point::new(0, 0)).is_none());
        assert!(layout.virtual_bounds().is_none());
        assert!(!layout.is_multi_display());
    }

    #[test]
    fn virtual_bounds_spans_all_displays() {
        let mut layout = side_by_side();
        layout
            .displays
            .push(Display::new("C", Rect::new(-1280, -200, 1280, 1024)));
        assert_eq!(
            layout.virtual_bounds(),
            Some(Rect::new(-1280, -200, 5120, 1280))
        );
    }

    #[test]
    fn same_layout_ignores_name() {
        let a = Display::new("\\\\.\\DISPLAY1", Rect::new(0, 0, 1920, 1080));
        let b = Display::new("primary", Rect::new(0, 0, 1920, 1080));
        let c = Display::new("primary", Rect::new(0, 0, 2560, 1440));
        assert!(a.same_layout(&b));
        assert!(!b.same_layout(&c));
    }
}
