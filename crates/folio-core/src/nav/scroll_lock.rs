//! Page scroll lock owned by the mobile menu

/// Process-wide scroll-lock flag
///
/// Single-writer contract: only [`NavBar`](super::NavBar) menu handling
/// sets or clears this, which the crate enforces by keeping the setter
/// `pub(crate)`. The shell mirrors the flag to `body.style.overflow`
/// after each menu event.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    /// Create a released lock
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether page scroll is currently locked
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn set(&mut self, locked: bool) {
        self.locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_starts_released() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn test_set_and_release() {
        let mut lock = ScrollLock::new();
        lock.set(true);
        assert!(lock.is_locked());
        lock.set(false);
        assert!(!lock.is_locked());
    }
}
