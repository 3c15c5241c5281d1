//! Trailing-edge debounce driven by host timers.
//!
//! The plugin cannot sleep; it can only ask the host for a timer and wait for
//! the `Timer` event. Every change schedules a timer of the full delay and all
//! timers have the same length, so they fire in the order they were set. The
//! value settles when the timer belonging to the most recent change fires,
//! which is exactly when the input has been stable for one delay.

use std::time::Duration;

/// Delays propagation of a rapidly changing value.
///
/// # Examples
///
/// ```
/// use character_browser::app::Debouncer;
/// use std::time::Duration;
///
/// let mut search = Debouncer::new(String::new(), Duration::from_millis(500));
/// search.push("R".to_string());
/// search.push("Ri".to_string());
///
/// assert_eq!(search.on_timer(), None); // timer for "R"
/// assert_eq!(search.on_timer(), Some("Ri".to_string()));
/// assert_eq!(search.settled(), "Ri");
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: usize,
    latest: T,
    settled: T,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            pending: 0,
            latest: initial.clone(),
            settled: initial,
        }
    }

    /// Records a new input value and returns the timer delay to schedule.
    pub fn push(&mut self, value: T) -> Duration {
        self.latest = value;
        self.pending += 1;
        self.delay
    }

    /// Handles one fired timer.
    ///
    /// Returns the newly settled value when this was the last outstanding
    /// timer and the value differs from the previously settled one.
    pub fn on_timer(&mut self) -> Option<T> {
        if self.pending == 0 {
            return None;
        }
        self.pending -= 1;

        if self.pending > 0 || self.latest == self.settled {
            return None;
        }

        self.settled = self.latest.clone();
        Some(self.settled.clone())
    }

    #[must_use]
    pub const fn settled(&self) -> &T {
        &self.settled
    }

    #[must_use]
    pub const fn latest(&self) -> &T {
        &self.latest
    }

    /// Whether a change is still waiting for its timer.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer<String> {
        Debouncer::new(String::new(), Duration::from_millis(500))
    }

    #[test]
    fn push_returns_configured_delay() {
        let mut d = debouncer();
        assert_eq!(d.push("a".into()), Duration::from_millis(500));
        assert!(d.is_pending());
        assert_eq!(d.latest(), "a");
        assert_eq!(d.settled(), "");
    }

    #[test]
    fn only_last_timer_settles() {
        let mut d = debouncer();
        for text in ["M", "Mo", "Mor"] {
            d.push(text.into());
        }
        assert_eq!(d.on_timer(), None);
        assert_eq!(d.on_timer(), None);
        assert_eq!(d.settled(), "");
        assert_eq!(d.on_timer(), Some("Mor".to_string()));
        assert!(!d.is_pending());
    }

    #[test]
    fn returning_to_settled_value_reports_no_change() {
        let mut d = debouncer();
        d.push("x".into());
        d.push(String::new());
        assert_eq!(d.on_timer(), None);
        assert_eq!(d.on_timer(), None);
        assert_eq!(d.settled(), "");
    }

    #[test]
    fn stray_timer_is_ignored() {
        let mut d = debouncer();
        assert_eq!(d.on_timer(), None);
        d.push("a".into());
        assert_eq!(d.on_timer(), Some("a".to_string()));
        assert_eq!(d.on_timer(), None);
    }
}
