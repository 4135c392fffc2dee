//! Time primitives for Mnemo
//!
//! Game time is a monotonic millisecond count since the clock's origin.
//! Hosts never see wall-clock time; only elapsed durations matter.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Monotonic game time in milliseconds since clock origin
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GameTime(pub u64);

impl GameTime {
    pub const ZERO: GameTime = GameTime(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        GameTime(millis)
    }

    #[inline]
    pub fn from_secs(secs: u64) -> Self {
        GameTime(secs.saturating_mul(1000))
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        GameTime(self.0.saturating_add(duration.as_millis() as u64))
    }

    /// Elapsed time since an earlier instant, zero if `earlier` is later
    #[inline]
    pub fn since(self, earlier: GameTime) -> Duration {
        self - earlier
    }
}

impl Add<Duration> for GameTime {
    type Output = GameTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<GameTime> for GameTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: GameTime) -> Self::Output {
        Duration::from_millis(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for GameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({}ms)", self.0)
    }
}
