use std::any::Any;

use chrono::{DateTime, Duration, Utc};

use crate::State;

/// The app clock, stored as a state so tests can mock it.
///
/// The app shell calls [`Time::tick`] once per frame; everything that needs a
/// deadline (search debounce, modal auto-close) compares against this value
/// instead of calling `Utc::now()` directly.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Time {
    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    /// Advance to the real wall clock. Never called from tests.
    pub fn tick(&mut self) {
        self.virt = Utc::now();
    }

    /// Pin the clock to a fixed instant (test hook).
    pub fn set(&mut self, at: DateTime<Utc>) {
        self.virt = at;
    }

    /// Move the clock forward by a duration (test hook).
    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_advance() {
        let start = Utc::now();
        let mut time = Time::default();
        time.set(start);
        assert_eq!(time.now(), start);

        time.advance(Duration::milliseconds(350));
        assert_eq!(time.now() - start, Duration::milliseconds(350));
    }

    #[test]
    fn tick_moves_forward() {
        let mut time = Time::default();
        let before = time.now();
        time.tick();
        assert!(time.now() >= before);
    }
}
