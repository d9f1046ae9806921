//! In-memory registry of generated draws.
//!
//! Each generate call publishes a new immutable [`Draw`]. Callers look draws up
//! by id; the most recently published draw is the fallback for callers that
//! have none of their own. Idle draws are evicted by [`DrawRegistry::evict_idle`].

use crate::models::{Draw, DrawId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Draws not looked at for this long are removed.
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Per-draw entry: the draw + last activity time (for auto-cleanup).
struct DrawEntry {
    draw: Arc<Draw>,
    last_activity: Instant,
}

#[derive(Default)]
struct Inner {
    draws: HashMap<DrawId, DrawEntry>,
    latest: Option<DrawId>,
}

/// Shared, lock-protected store of draws.
#[derive(Default)]
pub struct DrawRegistry {
    inner: RwLock<Inner>,
}

/// The registry lock was poisoned by a panicking writer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LockError;

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lock error")
    }
}

impl std::error::Error for LockError {}

impl DrawRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `draw` and make it the latest one.
    pub fn publish(&self, draw: Draw) -> Result<Arc<Draw>, LockError> {
        let draw = Arc::new(draw);
        let mut g = self.inner.write().map_err(|_| LockError)?;
        g.draws.insert(
            draw.id,
            DrawEntry {
                draw: Arc::clone(&draw),
                last_activity: Instant::now(),
            },
        );
        g.latest = Some(draw.id);
        Ok(draw)
    }

    /// Draw by id. Touching it refreshes its activity time.
    pub fn get(&self, id: DrawId) -> Result<Option<Arc<Draw>>, LockError> {
        let mut g = self.inner.write().map_err(|_| LockError)?;
        Ok(g.draws.get_mut(&id).map(|entry| {
            entry.last_activity = Instant::now();
            Arc::clone(&entry.draw)
        }))
    }

    /// Most recently published draw, if any.
    pub fn latest(&self) -> Result<Option<Arc<Draw>>, LockError> {
        let latest = self.inner.read().map_err(|_| LockError)?.latest;
        match latest {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }

    /// Remove draws idle for at least `max_idle`. The latest draw is kept.
    /// Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> Result<usize, LockError> {
        let mut g = self.inner.write().map_err(|_| LockError)?;
        let latest = g.latest;
        let before = g.draws.len();
        g.draws
            .retain(|id, entry| Some(*id) == latest || entry.last_activity.elapsed() < max_idle);
        Ok(before - g.draws.len())
    }

    pub fn len(&self) -> Result<usize, LockError> {
        Ok(self.inner.read().map_err(|_| LockError)?.draws.len())
    }

    pub fn is_empty(&self) -> Result<bool, LockError> {
        Ok(self.len()? == 0)
    }
}
