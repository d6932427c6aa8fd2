//! Cancellable pending callbacks
//!
//! Repeating continuations are plain tokens polled from the tick, so
//! tearing down a session is just `cancel_all`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u32);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Release visible static items during a demolish
    DemolishSweep,
    /// Auto-spawn the next item
    ItemRain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timer {
    token: TimerToken,
    kind: TimerKind,
    due_at: f64,
    interval: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timers {
    timers: Vec<Timer>,
    next_token: u32,
}

impl Timers {
    /// Fire every `interval` ms, first at `now + interval`
    pub fn repeating(&mut self, kind: TimerKind, now: f64, interval: f64) -> TimerToken {
        let interval = interval.max(1.0);
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.timers.push(Timer {
            token,
            kind,
            due_at: now + interval,
            interval,
        });
        token
    }

    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.token != token);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("Cancelling {} pending timers", self.timers.len());
        }
        self.timers.clear();
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.timers.iter().any(|t| t.token == token)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Collect every timer due at `now`, in scheduling order.
    ///
    /// A timer fires at most once per poll and is pushed back by its
    /// interval. One that has fallen behind the clock by more than an
    /// interval is re-anchored to `now` instead of firing in a burst.
    pub fn fire_due(&mut self, now: f64) -> Vec<(TimerToken, TimerKind)> {
        let mut fired = Vec::new();
        for timer in self.timers.iter_mut().filter(|t| t.due_at <= now) {
            fired.push((timer.token, timer.kind));
            timer.due_at += timer.interval;
            if timer.due_at <= now {
                log::debug!("{:?} timer fell behind the clock, re-anchoring", timer.kind);
                timer.due_at = now + timer.interval;
            }
        }
        fired
    }
}
