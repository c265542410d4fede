//! Event system for page lifecycle and pointer dispatch.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::NodeId;
use crate::page::Page;

/// The event types the page behaviors subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DomContentLoaded,
    Load,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DOMContentLoaded" => Some(Self::DomContentLoaded),
            "load" => Some(Self::Load),
            "mouseenter" => Some(Self::MouseEnter),
            "mouseleave" => Some(Self::MouseLeave),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::Load => "load",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

/// What a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Window,
    Document,
    Node(NodeId),
}

/// A dispatched event, handed to every matching listener.
#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    /// The element the event fired on. `None` for window and document
    /// lifecycle events.
    pub target: Option<NodeId>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, target: None }
    }

    pub fn with_target(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target: Some(target),
        }
    }
}

/// A listener callback. Receives the page environment so it can mutate the
/// tree, schedule timers or log to the console.
pub type Callback = Rc<dyn Fn(&Page, &Event)>;

/// Handle for removing a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    once: bool,
    callback: Callback,
}

/// Listener storage, keyed by target and event kind.
///
/// Dispatch never runs callbacks from in here: [`ListenerRegistry::collect`]
/// clones the matching callbacks out (dropping `once` entries as it goes) so
/// the caller can release its state borrow before invoking them. Callbacks
/// re-enter the page environment freely that way.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: HashMap<(Target, EventKind), Vec<Listener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: Target,
        kind: EventKind,
        once: bool,
        callback: Callback,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry((target, kind))
            .or_default()
            .push(Listener { id, once, callback });
        id
    }

    pub fn remove(&mut self, target: Target, kind: EventKind, id: ListenerId) {
        if let Some(slot) = self.listeners.get_mut(&(target, kind)) {
            slot.retain(|l| l.id != id);
        }
    }

    /// Callbacks registered for this target and kind, in registration order.
    /// `once` listeners are unregistered by this call; the clones returned
    /// here are their final run.
    pub fn collect(&mut self, target: Target, kind: EventKind) -> Vec<Callback> {
        let Some(slot) = self.listeners.get_mut(&(target, kind)) else {
            return Vec::new();
        };
        let callbacks = slot.iter().map(|l| Rc::clone(&l.callback)).collect();
        slot.retain(|l| !l.once);
        callbacks
    }

    pub fn count(&self, target: Target, kind: EventKind) -> usize {
        self.listeners
            .get(&(target, kind))
            .map_or(0, |slot| slot.len())
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total: usize = self.listeners.values().map(Vec::len).sum();
        f.debug_struct("ListenerRegistry")
            .field("listeners", &total)
            .finish()
    }
}
