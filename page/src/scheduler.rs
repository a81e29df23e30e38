//! Delayed work.
//!
//! Handlers never sleep. They hand a [`Task`] to a [`Scheduler`], and the
//! runtime feeds it back as [`PageEvent::Timer`](crate::PageEvent::Timer)
//! once the delay has passed. Browsers back this with real timers; tests use
//! [`ManualScheduler`] and move the clock by hand.

use std::time::Duration;

/// Work to perform once a delay elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// The simulated contact form send has completed.
    FinishSend,
    /// Hide the form response that was shown with sequence number `seq`.
    HideResponse { seq: u64 },
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: Task);
}

/// Collects scheduled tasks so a runtime can start real timers for them
/// after the handler returns.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<(Duration, Task)>,
}

impl TaskQueue {
    pub fn drain(&mut self) -> Vec<(Duration, Task)> {
        std::mem::take(&mut self.tasks)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&mut self, delay: Duration, task: Task) {
        self.tasks.push((delay, task));
    }
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    order: u64,
    task: Task,
}

/// A fake clock. Time only moves when [`ManualScheduler::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_order: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When the earliest pending task is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Moves the clock forward and returns every task that came due, in the
    /// order the timers would have fired.
    pub fn advance(&mut self, by: Duration) -> Vec<Task> {
        self.now += by;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = pending;
        due.sort_by_key(|p| (p.due, p.order));
        due.into_iter().map(|p| p.task).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Task) {
        self.pending.push(Pending {
            due: self.now + delay,
            order: self.next_order,
            task,
        });
        self.next_order += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_in_due_order() {
        let mut clock = ManualScheduler::new();
        clock.schedule(Duration::from_millis(5000), Task::HideResponse { seq: 1 });
        clock.schedule(Duration::from_millis(1500), Task::FinishSend);

        assert!(clock.advance(Duration::from_millis(1499)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(1)), vec![Task::FinishSend]);
        assert_eq!(clock.pending(), 1);
        assert_eq!(
            clock.advance(Duration::from_secs(10)),
            vec![Task::HideResponse { seq: 1 }]
        );
        assert_eq!(clock.now(), Duration::from_millis(11500));
    }

    #[test]
    fn test_same_due_time_keeps_schedule_order() {
        let mut clock = ManualScheduler::new();
        clock.schedule(Duration::from_millis(10), Task::HideResponse { seq: 2 });
        clock.schedule(Duration::from_millis(10), Task::FinishSend);
        assert_eq!(
            clock.advance(Duration::from_millis(10)),
            vec![Task::HideResponse { seq: 2 }, Task::FinishSend]
        );
    }

    #[test]
    fn test_task_queue_drains() {
        let mut queue = TaskQueue::default();
        queue.schedule(Duration::from_millis(1500), Task::FinishSend);
        assert!(!queue.is_empty());
        assert_eq!(
            queue.drain(),
            vec![(Duration::from_millis(1500), Task::FinishSend)]
        );
        assert!(queue.is_empty());
    }
}
