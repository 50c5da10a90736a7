//! Pulse-ordered timer queue.
//!
//! Timers are keyed by `(due pulse, sequence)` so events due on the same pulse
//! fire in the order they were scheduled. Each event is owned by a character
//! and carries a [`TimerKind`]; the engine decides what the kind means.

use std::collections::BTreeMap;

use crate::state::{CharacterId, Pulse, TimerFlags};

/// Self-rescheduling timers a character can have queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerKind {
    HitRegen,
    ManaRegen,
    MoveRegen,
    Rage,
    /// One-shot: lands a character whose flight ended while airborne.
    FallToGround,
}

impl TimerKind {
    /// The pending bit guarding this kind on the owner.
    pub const fn flag(self) -> TimerFlags {
        match self {
            Self::HitRegen => TimerFlags::HIT_REGEN,
            Self::ManaRegen => TimerFlags::MANA_REGEN,
            Self::MoveRegen => TimerFlags::MOVE_REGEN,
            Self::Rage => TimerFlags::RAGE,
            Self::FallToGround => TimerFlags::FALL_TO_GROUND,
        }
    }
}

/// What a timer handler wants done with its event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Fire again after this many pulses (at least one).
    Reschedule(u64),
    /// Drop the event.
    Done,
}

/// Stable handle of a queued event, usable for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventHandle(pub u64);

/// An event taken off the queue because its pulse arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DueEvent {
    pub handle: EventHandle,
    pub owner: CharacterId,
    pub kind: TimerKind,
    pub due: Pulse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    owner: CharacterId,
    kind: TimerKind,
    key: (Pulse, u64),
}

/// Deterministic timer queue.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    /// Ordered by due pulse, then by scheduling order.
    pending: BTreeMap<(Pulse, u64), EventHandle>,
    /// Registry for cancellation: handle -> queue position.
    events: BTreeMap<EventHandle, Scheduled>,
    /// Sequence counter for deterministic ordering.
    sequence: u64,
    next_handle: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, handle: EventHandle) -> bool {
        self.events.contains_key(&handle)
    }

    /// Number of queued events owned by `owner`.
    pub fn owned_by(&self, owner: CharacterId) -> usize {
        self.events.values().filter(|event| event.owner == owner).count()
    }

    /// Timer kind behind `handle`, if still queued.
    pub fn kind_of(&self, handle: EventHandle) -> Option<TimerKind> {
        self.events.get(&handle).map(|event| event.kind)
    }

    /// Pulse at which `handle` fires, if still queued.
    pub fn due_at(&self, handle: EventHandle) -> Option<Pulse> {
        self.events.get(&handle).map(|event| event.key.0)
    }

    /// Queues a new event `delay` pulses after `now`. Zero delays fire next pulse.
    pub fn schedule(
        &mut self,
        owner: CharacterId,
        kind: TimerKind,
        now: Pulse,
        delay: u64,
    ) -> EventHandle {
        let handle = EventHandle(self.next_handle);
        self.next_handle += 1;
        self.insert(handle, owner, kind, now, delay);
        handle
    }

    /// Puts a fired event back on the queue under its original handle.
    pub fn requeue(&mut self, event: DueEvent, now: Pulse, delay: u64) {
        self.insert(event.handle, event.owner, event.kind, now, delay);
    }

    /// Removes a queued event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: EventHandle) -> bool {
        match self.events.remove(&handle) {
            Some(event) => {
                self.pending.remove(&event.key);
                true
            }
            None => false,
        }
    }

    /// Removes every event owned by `owner` and returns how many were dropped.
    pub fn cancel_owned(&mut self, owner: CharacterId) -> usize {
        let handles: Vec<_> = self
            .events
            .iter()
            .filter(|(_, event)| event.owner == owner)
            .map(|(handle, _)| *handle)
            .collect();
        handles.into_iter().filter(|handle| self.cancel(*handle)).count()
    }

    /// Takes the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: Pulse) -> Option<DueEvent> {
        let (&key, &handle) = self.pending.first_key_value()?;
        if key.0 > now {
            return None;
        }
        self.pending.remove(&key);
        let event = self.events.remove(&handle)?;
        Some(DueEvent {
            handle,
            owner: event.owner,
            kind: event.kind,
            due: key.0,
        })
    }

    fn insert(
        &mut self,
        handle: EventHandle,
        owner: CharacterId,
        kind: TimerKind,
        now: Pulse,
        delay: u64,
    ) {
        self.sequence += 1;
        let key = (now + delay.max(1), self.sequence);
        self.pending.insert(key, handle);
        self.events.insert(handle, Scheduled { owner, kind, key });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CharacterId = CharacterId(1);
    const B: CharacterId = CharacterId(2);

    #[test]
    fn events_fire_in_pulse_then_schedule_order() {
        let mut queue = EventQueue::new();
        let late = queue.schedule(A, TimerKind::Rage, Pulse(0), 5);
        let first = queue.schedule(B, TimerKind::HitRegen, Pulse(0), 2);
        let second = queue.schedule(A, TimerKind::MoveRegen, Pulse(0), 2);

        assert!(queue.pop_due(Pulse(1)).is_none());
        assert_eq!(queue.pop_due(Pulse(2)).map(|e| e.handle), Some(first));
        assert_eq!(queue.pop_due(Pulse(2)).map(|e| e.handle), Some(second));
        assert!(queue.pop_due(Pulse(4)).is_none());
        assert_eq!(queue.pop_due(Pulse(5)).map(|e| e.handle), Some(late));
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_delay_fires_on_next_pulse() {
        let mut queue = EventQueue::new();
        let handle = queue.schedule(A, TimerKind::Rage, Pulse(10), 0);
        assert_eq!(queue.due_at(handle), Some(Pulse(11)));
    }

    #[test]
    fn requeue_keeps_the_handle() {
        let mut queue = EventQueue::new();
        let handle = queue.schedule(A, TimerKind::HitRegen, Pulse(0), 1);
        let due = queue.pop_due(Pulse(1)).expect("due");
        queue.requeue(due, Pulse(1), 30);
        assert_eq!(queue.due_at(handle), Some(Pulse(31)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn cancel_owned_leaves_other_owners_alone() {
        let mut queue = EventQueue::new();
        queue.schedule(A, TimerKind::HitRegen, Pulse(0), 3);
        queue.schedule(A, TimerKind::Rage, Pulse(0), 1);
        let kept = queue.schedule(B, TimerKind::Rage, Pulse(0), 1);

        assert_eq!(queue.cancel_owned(A), 2);
        assert_eq!(queue.owned_by(A), 0);
        assert!(queue.contains(kept));
        assert!(!queue.cancel(EventHandle(999)));
    }
}
