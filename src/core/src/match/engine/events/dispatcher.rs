use crate::r#match::events::{EventKind, MatchEvent};
use log::error;
use std::collections::HashMap;
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub type ListenerResult = Result<(), Box<dyn Error + Send + Sync>>;

type Listener = Box<dyn FnMut(&MatchEvent) -> ListenerResult + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Events raised during one frame, dispatched once the frame is complete.
#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<MatchEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection { events: Vec::new() }
    }

    pub fn add(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    pub fn to_vec(self) -> Vec<MatchEvent> {
        self.events
    }
}

/// Synchronous publish/subscribe registry keyed by event kind.
#[derive(Default)]
pub struct EventRegistry {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl EventRegistry {
    pub fn new() -> Self {
        EventRegistry::default()
    }

    pub fn on<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&MatchEvent) -> ListenerResult + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));

        id
    }

    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        match self.listeners.get_mut(&kind) {
            Some(listeners) => {
                let before = listeners.len();
                listeners.retain(|(listener_id, _)| *listener_id != id);
                listeners.len() != before
            }
            None => false,
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, |listeners| listeners.len())
    }

    /// Calls every listener registered for the event's kind, in registration order.
    /// A failing or panicking listener is logged and skipped. Returns the number of failures.
    pub fn dispatch(&mut self, event: &MatchEvent) -> usize {
        let Some(listeners) = self.listeners.get_mut(&event.kind()) else {
            return 0;
        };

        let mut failures = 0;

        for (id, listener) in listeners.iter_mut() {
            match catch_unwind(AssertUnwindSafe(|| listener(event))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    failures += 1;
                    error!("listener {:?} failed on {:?}: {}", id, event.kind(), err);
                }
                Err(_) => {
                    failures += 1;
                    error!("listener {:?} panicked on {:?}", id, event.kind());
                }
            }
        }

        failures
    }

    pub fn dispatch_all(&mut self, events: EventCollection) -> usize {
        events
            .to_vec()
            .iter()
            .map(|event| self.dispatch(event))
            .sum()
    }
}
