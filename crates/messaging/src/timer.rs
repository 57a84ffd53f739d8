//! One-second timer service.
//!
//! A fixed pool of timer slots driven by a 1 Hz tick. Each armed timer
//! counts down and, on expiry, posts a configured message to a configured
//! inbox. `tick()` returns the expired posts instead of sending them so the
//! service stays synchronous and host-testable; the owning task routes them.

use heapless::Vec;

use crate::message::{Message, MsgType};
use crate::queues::QueueId;

/// Number of timer slots in the pool.
pub const MAX_TIMERS: usize = 8;

/// Handle to an allocated timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId(usize);

#[derive(Debug, Clone, Copy)]
struct TimerSlot {
    allocated: bool,
    running: bool,
    /// Reload value in seconds.
    period: u32,
    /// Seconds until expiry while running.
    remaining: u32,
    repeat: bool,
    queue: QueueId,
    msg_type: MsgType,
    options: u8,
}

impl TimerSlot {
    const fn vacant() -> Self {
        TimerSlot {
            allocated: false,
            running: false,
            period: 0,
            remaining: 0,
            repeat: false,
            queue: QueueId::Display,
            msg_type: MsgType::IdleUpdate,
            options: 0,
        }
    }
}

/// Fixed-pool countdown timer service.
///
/// Slots are allocated once at startup and keep their identity for the life
/// of the firmware; there is no free operation.
pub struct TimerService {
    slots: [TimerSlot; MAX_TIMERS],
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService {
    /// An empty pool.
    #[must_use]
    pub const fn new() -> Self {
        TimerService {
            slots: [TimerSlot::vacant(); MAX_TIMERS],
        }
    }

    /// Claim a vacant slot. Returns `None` when the pool is exhausted.
    pub fn allocate(&mut self) -> Option<TimerId> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.allocated {
                slot.allocated = true;
                return Some(TimerId(index));
            }
        }
        log::error!("timer pool exhausted");
        None
    }

    /// Configure a timer without starting it.
    ///
    /// `period` is in seconds. A repeating timer reloads on expiry; a
    /// one-shot stops. Re-arming a running timer stops it first.
    pub fn arm(
        &mut self,
        id: TimerId,
        period: u32,
        repeat: bool,
        queue: QueueId,
        msg_type: MsgType,
        options: u8,
    ) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.running = false;
            slot.period = period;
            slot.remaining = 0;
            slot.repeat = repeat;
            slot.queue = queue;
            slot.msg_type = msg_type;
            slot.options = options;
        }
    }

    /// Start (or restart) a timer from its configured period.
    pub fn start(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.remaining = slot.period;
            slot.running = slot.period > 0;
        }
    }

    /// Stop a timer without firing it.
    pub fn stop(&mut self, id: TimerId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.running = false;
        }
    }

    /// Returns `true` while the timer is counting down.
    #[must_use]
    pub fn is_running(&self, id: TimerId) -> bool {
        self.slots.get(id.0).is_some_and(|slot| slot.running)
    }

    /// Advance all running timers by one second.
    ///
    /// Returns the posts for every timer that expired on this tick; the
    /// caller routes them onto the bus.
    pub fn tick(&mut self) -> Vec<(QueueId, Message), MAX_TIMERS> {
        let mut fired = Vec::new();
        for slot in &mut self.slots {
            if !slot.running {
                continue;
            }
            slot.remaining = slot.remaining.saturating_sub(1);
            if slot.remaining == 0 {
                if slot.repeat {
                    slot.remaining = slot.period;
                } else {
                    slot.running = false;
                }
                let msg = Message::new(slot.msg_type, slot.options);
                // Pool size equals slot count, so push cannot fail.
                let _ = fired.push((slot.queue, msg));
            }
        }
        fired
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)] // Tests index the fired-post list
mod tests {
    use super::*;

    fn one_shot(service: &mut TimerService, period: u32) -> TimerId {
        let id = service.allocate().unwrap();
        service.arm(
            id,
            period,
            false,
            QueueId::Display,
            MsgType::SplashTimeout,
            0,
        );
        id
    }

    #[test]
    fn test_one_shot_fires_once_after_period() {
        let mut service = TimerService::new();
        let id = one_shot(&mut service, 3);
        service.start(id);

        assert!(service.tick().is_empty());
        assert!(service.tick().is_empty());
        let fired = service.tick();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1.msg_type, MsgType::SplashTimeout);
        assert!(!service.is_running(id));
        assert!(service.tick().is_empty());
    }

    #[test]
    fn test_repeating_timer_reloads() {
        let mut service = TimerService::new();
        let id = service.allocate().unwrap();
        service.arm(id, 2, true, QueueId::Display, MsgType::WatchStatus, 0);
        service.start(id);

        assert!(service.tick().is_empty());
        assert_eq!(service.tick().len(), 1);
        assert!(service.is_running(id));
        assert!(service.tick().is_empty());
        assert_eq!(service.tick().len(), 1);
    }

    #[test]
    fn test_restart_resets_the_countdown() {
        let mut service = TimerService::new();
        let id = one_shot(&mut service, 3);
        service.start(id);
        assert!(service.tick().is_empty());
        assert!(service.tick().is_empty());

        // One second from expiry; a restart rewinds to the full period.
        service.start(id);
        assert!(service.tick().is_empty());
        assert!(service.tick().is_empty());
        assert_eq!(service.tick().len(), 1);
    }

    #[test]
    fn test_stop_prevents_expiry() {
        let mut service = TimerService::new();
        let id = one_shot(&mut service, 1);
        service.start(id);
        service.stop(id);
        assert!(service.tick().is_empty());
    }

    #[test]
    fn test_pool_exhaustion_returns_none() {
        let mut service = TimerService::new();
        for _ in 0..MAX_TIMERS {
            assert!(service.allocate().is_some());
        }
        assert!(service.allocate().is_none());
    }

    #[test]
    fn test_rearm_while_running_stops_the_timer() {
        let mut service = TimerService::new();
        let id = one_shot(&mut service, 5);
        service.start(id);
        service.arm(id, 2, false, QueueId::Display, MsgType::ModeTimeout, 1);
        assert!(!service.is_running(id));
        service.start(id);
        assert!(service.tick().is_empty());
        let fired = service.tick();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1.msg_type, MsgType::ModeTimeout);
        assert_eq!(fired[0].1.options, 1);
    }
}
