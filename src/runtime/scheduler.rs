use crate::runtime::event::WidgetEvent;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Observer side of a timer's cancellation flag. The scheduler holds one
/// per delayed task; the owning widget holds the matching `TimerGuard`.
#[derive(Debug, Clone)]
pub struct TimerToken {
    cancelled: Arc<AtomicBool>,
}

impl TimerToken {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Owning side of a timer. Dropping the guard cancels the timer, so a
/// widget that re-arms, dismisses, or goes away can never be called back
/// by a stale deadline.
#[derive(Debug)]
pub struct TimerGuard {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
}

impl TimerGuard {
    pub fn new(id: TimerId) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn token(&self) -> TimerToken {
        TimerToken {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    /// Emit `event` after `delay` unless `token` is cancelled first.
    Debounce {
        token: TimerToken,
        delay: Duration,
        event: WidgetEvent,
    },
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    seq: u64,
    token: TimerToken,
    event: WidgetEvent,
}

#[derive(Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::Debounce {
                token,
                delay,
                event,
            } => {
                self.discard_cancelled();
                let seq = self.next_seq;
                self.next_seq = self.next_seq.wrapping_add(1);
                trace!(?delay, pending = self.delayed.len(), "debounce armed");
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    seq,
                    token,
                    event,
                });
            }
        }
    }

    /// Due events in deadline order. Cancelled tasks are dropped without
    /// firing.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<WidgetEvent> {
        self.discard_cancelled();

        let mut due = Vec::new();
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                due.push(self.delayed.swap_remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|task| (task.due_at, task.seq));

        due.into_iter().map(|task| task.event).collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.delayed
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .map(|task| task.due_at.saturating_duration_since(now))
            .fold(default_timeout, Duration::min)
    }

    pub fn pending_count(&self) -> usize {
        self.delayed
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .count()
    }

    fn discard_cancelled(&mut self) {
        self.delayed.retain(|task| !task.token.is_cancelled());
    }
}
