//! Time-bounded reuse of surface snapshots.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use backdrop_types::Surface;
use tracing::trace;

use crate::SurfaceRegistry;

/// Reuses the inner registry's snapshot for `ttl` before resolving again.
///
/// Live resolution walks monitors and windows; dispatch asks for a snapshot
/// on every notification, including each mouse move.
pub struct CachedSurfaces<R> {
    inner: R,
    ttl: Duration,
    snapshot: Mutex<Option<(Instant, Vec<Surface>)>>,
}

impl<R: SurfaceRegistry> CachedSurfaces<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: Mutex::new(None),
        }
    }
}

impl<R: SurfaceRegistry> SurfaceRegistry for CachedSurfaces<R> {
    fn surfaces(&self) -> Vec<Surface> {
        let mut snapshot = match self.snapshot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some((taken, surfaces)) = snapshot.as_ref() {
            if taken.elapsed() < self.ttl {
                return surfaces.clone();
            }
        }
        let surfaces = self.inner.surfaces();
        trace!(count = surfaces.len(), "surface snapshot refreshed");
        *snapshot = Some((Instant::now(), surfaces.clone()));
        surfaces
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use backdrop_types::{Display, NativeHandle, Rect, SurfaceKind};

    use super::*;

    #[derive(Clone, Default)]
    struct Counting(Arc<AtomicUsize>);

    impl SurfaceRegistry for Counting {
        fn surfaces(&self) -> Vec<Surface> {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            let display = Display::new("A", Rect::new(0, 0, 100, 100));
            vec![Surface {
                handle: NativeHandle(isize::try_from(n).unwrap()),
                bounds: display.bounds,
                display,
                kind: SurfaceKind::Web,
            }]
        }
    }

    #[test]
    fn snapshot_reused_within_ttl() {
        let inner = Counting::default();
        let cached = CachedSurfaces::new(inner.clone(), Duration::from_secs(3600));
        assert_eq!(cached.surfaces()[0].handle, NativeHandle(0));
        assert_eq!(cached.surfaces()[0].handle, NativeHandle(0));
        assert_eq!(inner.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn snapshot_refreshed_after_ttl() {
        let inner = Counting::default();
        let cached = CachedSurfaces::new(inner.clone(), Duration::ZERO);
        cached.surfaces();
        assert_eq!(cached.surfaces()[0].handle, NativeHandle(1));
        assert_eq!(inner.0.load(Ordering::SeqCst), 2);
    }
}
