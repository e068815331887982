#![forbid(unsafe_code)]

//! Slot-keyed timer table.
//!
//! Each [`TimerSlot`] holds at most one armed timer; arming an occupied slot
//! replaces the previous timer. The host never owns individual timers. It
//! asks for [`Timers::next_deadline`], sleeps until then with whatever
//! primitive it has, and hands control back so due timers can be popped in
//! deadline order.
//!
//! A late wake-up fires each due slot once. Missed interval occurrences are
//! dropped rather than replayed, the way a throttled browser interval
//! behaves.

use core::time::Duration;

/// Floor applied to interval periods so a zero period cannot spin forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Named timer slots owned by the carousel controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Periodic advance to the next slide.
    Autoplay,
    /// Per-frame fill animation of the active indicator.
    Fill,
    /// One-shot start of the first fill animation after mount.
    FillKickoff,
}

impl TimerSlot {
    pub const ALL: [Self; 3] = [Self::Autoplay, Self::Fill, Self::FillKickoff];

    const fn index(self) -> usize {
        match self {
            Self::Autoplay => 0,
            Self::Fill => 1,
            Self::FillKickoff => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    deadline: Duration,
    period: Option<Duration>,
    /// Arming order; breaks deadline ties.
    seq: u64,
}

#[derive(Debug, Default, Clone)]
pub struct Timers {
    slots: [Option<Armed>; 3],
    next_seq: u64,
}

impl Timers {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; 3],
            next_seq: 0,
        }
    }

    /// Arm a recurring timer firing every `period`, first at `now + period`.
    pub fn arm_interval(&mut self, slot: TimerSlot, now: Duration, period: Duration) {
        let period = period.max(MIN_PERIOD);
        self.arm(slot, now.saturating_add(period), Some(period));
    }

    /// Arm a one-shot timer firing at `now + delay`.
    pub fn arm_once(&mut self, slot: TimerSlot, now: Duration, delay: Duration) {
        self.arm(slot, now.saturating_add(delay), None);
    }

    fn arm(&mut self, slot: TimerSlot, deadline: Duration, period: Option<Duration>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[slot.index()] = Some(Armed {
            deadline,
            period,
            seq,
        });
    }

    /// Disarm `slot`. Returns whether a timer was live.
    pub fn cancel(&mut self, slot: TimerSlot) -> bool {
        self.slots[slot.index()].take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    #[must_use]
    pub fn deadline(&self, slot: TimerSlot) -> Option<Duration> {
        self.slots[slot.index()].map(|armed| armed.deadline)
    }

    /// Number of live timers across all slots.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Earliest deadline among all live timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.slots.iter().flatten().map(|armed| armed.deadline).min()
    }

    /// Pop the earliest timer due at or before `now`.
    ///
    /// Intervals are re-armed at their first period boundary after `now`, so
    /// missed occurrences coalesce into one and each slot fires at most once
    /// per wake-up. One-shots are removed.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerSlot, Duration)> {
        let slot = TimerSlot::ALL
            .into_iter()
            .filter_map(|slot| self.slots[slot.index()].map(|armed| (slot, armed)))
            .filter(|(_, armed)| armed.deadline <= now)
            .min_by_key(|(_, armed)| (armed.deadline, armed.seq))
            .map(|(slot, _)| slot)?;

        let entry = &mut self.slots[slot.index()];
        let armed = (*entry)?;
        *entry = armed.period.and_then(|period| {
            let deadline = next_boundary(armed.deadline, period, now);
            // Only unreachable when the deadline saturates at Duration::MAX.
            (deadline > now).then_some(Armed { deadline, ..armed })
        });
        Some((slot, armed.deadline))
    }
}

/// First `fired + k * period` (k >= 1) strictly after `now`.
fn next_boundary(fired: Duration, period: Duration, now: Duration) -> Duration {
    let behind = now.saturating_sub(fired).as_nanos() / period.as_nanos();
    let skips = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
    fired.saturating_add(period.saturating_mul(skips))
}
