//! Clock implementations

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use mnemo_core::GameTime;

/// Source of monotonic game time
pub trait Clock {
    /// Current game time
    /// INVARIANT: never decreases between calls
    fn now(&self) -> GameTime;
}

/// Clock backed by the OS monotonic clock
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> GameTime {
        GameTime::from_millis(self.origin.elapsed().as_millis() as u64)
    }
}

/// Manually advanced clock for tests and simulations
///
/// Clones share the same reading, so a test can keep a handle while the
/// engine owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, dt: Duration) -> GameTime {
        let dt = dt.as_millis() as u64;
        let previous = self.millis.fetch_add(dt, Ordering::SeqCst);
        GameTime::from_millis(previous.saturating_add(dt))
    }

    /// Jump to a time; ignored if it would move backwards
    pub fn set(&self, time: GameTime) {
        self.millis.fetch_max(time.as_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> GameTime {
        GameTime::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> GameTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();

        let t1 = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        let t2 = clock.now();

        assert!(t2 > t1);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), GameTime::from_millis(250));
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        clock.set(GameTime::from_secs(1));
        assert_eq!(clock.now(), GameTime::from_secs(5));

        clock.set(GameTime::from_secs(7));
        assert_eq!(clock.now(), GameTime::from_secs(7));
    }
}
