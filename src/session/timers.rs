use std::time::Duration;

struct Timer<E> {
    deadline: Duration,
    seq: u64,
    event: E,
}

/// Deferred callbacks for the UI loop. Times are offsets from a fixed start instant,
/// so the queue never reads a clock itself.
pub struct TimerQueue<E> {
    pending: Vec<Timer<E>>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self { pending: Vec::new(), next_seq: 0 }
    }

    pub fn schedule(&mut self, deadline: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer { deadline, seq, event });
    }

    /// Removes the earliest timer due at `now`. Equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
            .map(|(i, _)| i)?;

        let timer = self.pending.swap_remove(position);
        Some((timer.deadline, timer.event))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(30), "c");
        queue.schedule(ms(10), "a");
        queue.schedule(ms(10), "b");

        assert_eq!(queue.next_deadline(), Some(ms(10)));
        assert_eq!(queue.pop_due(ms(5)), None);
        assert_eq!(queue.pop_due(ms(40)), Some((ms(10), "a")));
        assert_eq!(queue.pop_due(ms(40)), Some((ms(10), "b")));
        assert_eq!(queue.pop_due(ms(20)), None);
        assert_eq!(queue.pop_due(ms(40)), Some((ms(30), "c")));
        assert!(queue.is_empty());
    }
}
