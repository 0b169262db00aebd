//! Bounded history of engine and beam transitions.
//!
//! [`TransitionLog`] is an [`EventSink`] that keeps the most recent
//! transitions in a fixed-size ring, each stamped with the tick it happened
//! on and the ticks elapsed since the previous entry.  Chain it with the
//! log sink as a `(LogEventSink, TransitionLog)` pair.

use heapless::{HistoryBuffer, OldestOrdered};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::ignition::IgnoreReason;

/// Number of transitions retained.
pub const TRANSITION_LOG_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Engine { running: bool },
    IgnitionIgnored(IgnoreReason),
    LowBeams { on: bool },
    HighBeams { on: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub tick: u64,
    pub kind: TransitionKind,
    /// Ticks since the previous record; `None` for the first one.
    pub since_previous: Option<u64>,
}

pub struct TransitionLog {
    ring: HistoryBuffer<TransitionRecord, TRANSITION_LOG_CAPACITY>,
    total: u32,
}

impl TransitionLog {
    pub const fn new() -> Self {
        Self {
            ring: HistoryBuffer::new(),
            total: 0,
        }
    }

    pub fn record(&mut self, tick: u64, kind: TransitionKind) {
        let since_previous = self.ring.recent().map(|prev| tick.saturating_sub(prev.tick));
        self.ring.write(TransitionRecord {
            tick,
            kind,
            since_previous,
        });
        self.total = self.total.saturating_add(1);
    }

    /// Retained records, oldest first.
    pub fn oldest_first(&self) -> OldestOrdered<'_, TransitionRecord, TRANSITION_LOG_CAPACITY> {
        self.ring.oldest_ordered()
    }

    pub fn latest(&self) -> Option<&TransitionRecord> {
        self.ring.recent()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Transitions seen since startup, including those evicted.
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TransitionLog {
    fn emit(&mut self, event: &AppEvent) {
        let (tick, kind) = match *event {
            AppEvent::EngineChanged { running, tick } => (tick, TransitionKind::Engine { running }),
            AppEvent::IgnitionIgnored { reason, tick } => {
                (tick, TransitionKind::IgnitionIgnored(reason))
            }
            AppEvent::LowBeamsChanged { on, tick } => (tick, TransitionKind::LowBeams { on }),
            AppEvent::HighBeamsChanged { on, tick } => (tick, TransitionKind::HighBeams { on }),
            _ => return,
        };
        self.record(tick, kind);
    }
}
