use std::time::Duration;
use tokio::time::Instant;

/// Owned debounce timer handle.
///
/// The timer is just a deadline with named operations: `reset` arms it one
/// quiet period from now (re-arming an armed timer replaces the deadline,
/// which is the implicit cancellation debouncing relies on), `cancel`
/// disarms it. The owner polls `deadline()` and sleeps via `sleep_until`.
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer one quiet period from now.
    pub fn reset(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Sleep until a captured deadline; pends forever for `None`.
    ///
    /// Takes the deadline by value so a `select!` arm does not hold a borrow
    /// of the timer while the handler mutates its owner.
    pub async fn sleep_until(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}
