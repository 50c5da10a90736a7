//! Per-character view of the world used by every engine handler.

use crate::env::Env;
use crate::notice::Notice;
use crate::schedule::{EventQueue, TimerKind};
use crate::state::{Character, Pulse, Rooms};

/// One character borrowed mutably alongside the shared parts of the world it
/// may touch: rooms for light bookkeeping, the queue for timers and the
/// notice outbox.
pub(crate) struct CharacterContext<'w> {
    pub ch: &'w mut Character,
    pub rooms: &'w mut Rooms,
    pub queue: &'w mut EventQueue,
    pub notices: &'w mut Vec<Notice>,
    pub env: Env<'w>,
    pub now: Pulse,
}

impl CharacterContext<'_> {
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Queues `kind` and records the handle on the owner.
    pub fn schedule(&mut self, kind: TimerKind, delay: u64) {
        let handle = self.queue.schedule(self.ch.id, kind, self.now, delay);
        self.ch.timers.insert(kind.flag());
        self.ch.events.push(handle);
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.ch.timers.contains(kind.flag())
    }

    /// Clears the pending bit; called by handlers that return `Done`.
    pub fn clear_pending(&mut self, kind: TimerKind) {
        self.ch.timers.remove(kind.flag());
    }

    /// Drops any queued event of `kind` owned by this character.
    pub fn cancel_queued(&mut self, kind: TimerKind) {
        let queue = &mut *self.queue;
        self.ch
            .events
            .retain(|handle| !(queue.kind_of(*handle) == Some(kind) && queue.cancel(*handle)));
    }

    pub fn sector(&self) -> Option<crate::state::Sector> {
        self.ch
            .room
            .and_then(|id| self.rooms.get(&id))
            .map(|room| room.sector)
    }
}
