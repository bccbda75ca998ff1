//! Per-tick event queue drained by the host.

use arrayvec::ArrayVec;

use crate::types::GameEvent;

/// Maximum events held between two drains.
pub const EVENT_CAPACITY: usize = 16;

/// Fixed-capacity FIFO of [`GameEvent`]s.
///
/// Stack-only. When full, new events are dropped: feedback is fire-and-forget
/// and must never stall the simulation.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event. Returns false if it was dropped.
    pub fn push(&mut self, event: GameEvent) -> bool {
        self.events.try_push(event).is_ok()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and yield all queued events in emission order
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollisionKind;

    #[test]
    fn test_drain_preserves_order() {
        let mut q = EventQueue::new();
        q.push(GameEvent::Jump);
        q.push(GameEvent::Scored);
        q.push(GameEvent::Collision(CollisionKind::Ground));

        let drained: Vec<GameEvent> = q.drain().collect();
        assert_eq!(
            drained,
            vec![
                GameEvent::Jump,
                GameEvent::Scored,
                GameEvent::Collision(CollisionKind::Ground)
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn test_overflow_drops_newest() {
        let mut q = EventQueue::new();
        for _ in 0..EVENT_CAPACITY {
            assert!(q.push(GameEvent::Jump));
        }
        assert!(!q.push(GameEvent::Scored));
        assert_eq!(q.len(), EVENT_CAPACITY);
        assert!(q.as_slice().iter().all(|e| *e == GameEvent::Jump));
    }
}
