// SPDX-License-Identifier: MPL-2.0
//! Page-level scroll suppression with guaranteed release.
//!
//! The gallery overlay must keep the card list from scrolling underneath it,
//! and the suppression has to end on *every* exit path: backdrop press, close
//! button, Escape, or the owning card being torn down while the overlay is
//! still open. Modeling the lock as an RAII guard makes the release
//! unconditional instead of relying on matching set/unset calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared, counted handle to the page scroll lock.
///
/// Cloning is cheap; all clones observe the same lock count. The count allows
/// overlapping holders, so the page stays locked until the last guard drops.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any guard is currently held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Relaxed) > 0
    }

    /// Acquires the lock. Scrolling stays suppressed until the returned guard
    /// is dropped.
    #[must_use]
    pub fn acquire(&self) -> ScrollGuard {
        self.holders.fetch_add(1, Ordering::Relaxed);
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

/// Holder of one scroll-lock acquisition. Releases on drop.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_unlocked() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
    }

    #[test]
    fn acquire_locks_and_drop_releases() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_observe_the_same_lock() {
        let lock = ScrollLock::new();
        let observer = lock.clone();
        let _guard = lock.acquire();
        assert!(observer.is_locked());
    }

    #[test]
    fn overlapping_guards_keep_lock_held() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }

    #[test]
    fn guard_releases_when_owner_is_torn_down() {
        struct Owner {
            _guard: ScrollGuard,
        }

        let lock = ScrollLock::new();
        let owner = Owner {
            _guard: lock.acquire(),
        };
        assert!(lock.is_locked());
        drop(owner);
        assert!(!lock.is_locked());
    }
}
