//! Global cursor coordinates → surface-local coordinates.

use backdrop_types::{ArrangementMode, Display, Point, ScreenLayout};

/// Translate a global position into the coordinate space of a wallpaper on
/// `target`.
///
/// - single display: unchanged;
/// - span: relative to the virtual-screen origin, which may be negative;
/// - per-display / duplicate: relative to the target display's origin.
#[must_use]
pub fn normalize(
    global: Point,
    target: &Display,
    layout: &ScreenLayout,
    arrangement: ArrangementMode,
) -> Point {
    if !layout.is_multi_display() {
        return global;
    }
    match arrangement {
        ArrangementMode::Span => match layout.virtual_bounds() {
            Some(bounds) => global.relative_to(bounds.origin()),
            None => global,
        },
        ArrangementMode::PerDisplay | ArrangementMode::Duplicate => {
            global.relative_to(target.bounds.origin())
        }
    }
}

#[cfg(test)]
mod tests {
    use backdrop_types::Rect;

    use super::*;

    fn layout(displays: &[(i32, i32)]) -> ScreenLayout {
        ScreenLayout::new(
            displays
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| Display::new(format!("d{i}"), Rect::new(x, y, 1920, 1080)))
                .collect(),
        )
    }

    #[test]
    fn single_display_is_identity() {
        let single = layout(&[(100, -50)]);
        let target = &single.displays[0];
        for arrangement in [
            ArrangementMode::PerDisplay,
            ArrangementMode::Duplicate,
            ArrangementMode::Span,
        ] {
            for p in [Point::new(0, 0), Point::new(150, 20), Point::new(-5, 9000)] {
                assert_eq!(normalize(p, target, &single, arrangement), p);
            }
        }
    }

    #[test]
    fn span_subtracts_virtual_origin() {
        let side_by_side = layout(&[(0, 0), (1920, 0)]);
        let p = Point::new(2000, 50);
        assert_eq!(
            normalize(p, &side_by_side.displays[0], &side_by_side, ArrangementMode::Span),
            Point::new(2000, 50)
        );

        let negative = layout(&[(-1920, -300), (0, 0)]);
        assert_eq!(
            normalize(p, &negative.displays[1], &negative, ArrangementMode::Span),
            Point::new(3920, 350)
        );
    }

    #[test]
    fn per_display_subtracts_display_origin() {
        let side_by_side = layout(&[(0, 0), (1920, 0)]);
        let p = Point::new(2000, 50);
        for arrangement in [ArrangementMode::PerDisplay, ArrangementMode::Duplicate] {
            assert_eq!(
                normalize(p, &side_by_side.displays[1], &side_by_side, arrangement),
                Point::new(80, 50)
            );
        }

        let above = layout(&[(0, 0), (-500, -1080)]);
        assert_eq!(
            normalize(
                Point::new(-400, -1000),
                &above.displays[1],
                &above,
                ArrangementMode::PerDisplay
            ),
            Point::new(100, 80)
        );
    }
}
