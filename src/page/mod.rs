//! The page environment.
//!
//! [`Page`] is a cheap clonable handle over the shared [`PageState`]. All
//! mutation funnels through it: lifecycle events, pointer movement, timers,
//! scrolling and the element helpers behaviors lean on. Dispatch follows a
//! strict borrow discipline: collect the callbacks under a short borrow,
//! release it, then invoke, so listener and timer callbacks can re-enter
//! the page without tripping the `RefCell`.

pub mod console;
mod state;
pub mod timers;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::device::DeviceProfile;
use crate::dom::{Document, NodeId, Rect, Selector};
use crate::error::Result;
use crate::event::{Callback, Event, EventKind, ListenerId, Target};

pub use console::{Console, LogEntry, Segment};
pub use state::PageState;
pub use timers::{TimerId, TimerQueue};

#[derive(Clone)]
pub struct Page {
    state: Rc<RefCell<PageState>>,
}

impl Page {
    pub fn new(dom: Document, device: DeviceProfile) -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState::new(dom, device))),
        }
    }

    /// Parse markup into a tree and wrap it in a fresh page.
    pub fn from_markup(source: &str, device: DeviceProfile) -> Result<Self> {
        Ok(Self::new(crate::markup::parse_document(source)?, device))
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn with_state_mut<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub fn device(&self) -> DeviceProfile {
        self.state.borrow().device.clone()
    }

    // ---- tree access -------------------------------------------------

    pub fn body(&self) -> Option<NodeId> {
        self.state.borrow().dom.body()
    }

    pub fn query(&self, selector: &Selector) -> Vec<NodeId> {
        self.state.borrow().dom.select(selector)
    }

    pub fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        self.state.borrow().dom.select_first(selector)
    }

    pub fn query_selector(&self, source: &str) -> Result<Option<NodeId>> {
        self.state.borrow().dom.query_selector(source)
    }

    pub fn query_selector_all(&self, source: &str) -> Result<Vec<NodeId>> {
        self.state.borrow().dom.query_selector_all(source)
    }

    pub fn create_element(&self, tag: &str) -> NodeId {
        self.state.borrow_mut().dom.create_element(tag)
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.state.borrow_mut().dom.append_child(parent, child);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .dom
            .get(id)
            .is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&self, id: NodeId, class: &str) {
        if let Some(el) = self.state.borrow_mut().dom.get_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&self, id: NodeId, class: &str) {
        if let Some(el) = self.state.borrow_mut().dom.get_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.state
            .borrow()
            .dom
            .get(id)
            .and_then(|el| el.attr(name).map(str::to_owned))
    }

    pub fn set_attr(&self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.state.borrow_mut().dom.get_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.state
            .borrow_mut()
            .dom
            .get_mut(id)
            .and_then(|el| el.remove_attr(name))
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.state
            .borrow()
            .dom
            .get(id)
            .and_then(|el| el.style(property).map(str::to_owned))
    }

    pub fn set_style(&self, id: NodeId, property: &str, value: &str) {
        if let Some(el) = self.state.borrow_mut().dom.get_mut(id) {
            el.set_style(property, value);
        }
    }

    pub fn text(&self, id: NodeId) -> Option<String> {
        self.state.borrow().dom.get(id).map(|el| el.text.clone())
    }

    pub fn set_text(&self, id: NodeId, text: &str) {
        if let Some(el) = self.state.borrow_mut().dom.get_mut(id) {
            el.text = text.to_owned();
        }
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.state.borrow().dom.get(id).and_then(|el| el.rect)
    }

    // ---- events ------------------------------------------------------

    pub fn add_listener(&self, target: Target, kind: EventKind, callback: Callback) -> ListenerId {
        self.state
            .borrow_mut()
            .listeners
            .add(target, kind, false, callback)
    }

    /// Register a listener that unregisters itself after its first run.
    pub fn add_listener_once(
        &self,
        target: Target,
        kind: EventKind,
        callback: Callback,
    ) -> ListenerId {
        self.state
            .borrow_mut()
            .listeners
            .add(target, kind, true, callback)
    }

    pub fn remove_listener(&self, target: Target, kind: EventKind, id: ListenerId) {
        self.state.borrow_mut().listeners.remove(target, kind, id);
    }

    fn dispatch(&self, target: Target, event: &Event) {
        let callbacks = self
            .state
            .borrow_mut()
            .listeners
            .collect(target, event.kind);
        if callbacks.is_empty() {
            return;
        }
        tracing::trace!(
            kind = event.kind.as_str(),
            count = callbacks.len(),
            "dispatch"
        );
        for callback in callbacks {
            callback(self, event);
        }
    }

    /// Signal that the tree is parsed. Fires `DOMContentLoaded` on the
    /// document; readiness cannot regress, repeat calls are no-ops.
    pub fn fire_ready(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.ready_fired {
                return;
            }
            state.ready_fired = true;
        }
        tracing::debug!("document ready");
        self.dispatch(Target::Document, &Event::new(EventKind::DomContentLoaded));
    }

    /// Signal that the page finished loading. Implies readiness. A load can
    /// be signalled more than once; listeners decide whether a repeat means
    /// anything to them.
    pub fn fire_load(&self) {
        self.fire_ready();
        self.state.borrow_mut().load_fired = true;
        tracing::debug!("window load");
        self.dispatch(Target::Window, &Event::new(EventKind::Load));
    }

    pub fn ready_fired(&self) -> bool {
        self.state.borrow().ready_fired
    }

    pub fn load_fired(&self) -> bool {
        self.state.borrow().load_fired
    }

    // ---- pointer -----------------------------------------------------

    /// Move the pointer to a viewport position and fire the resulting
    /// leave/enter pair against the deepest element hit. Positions outside
    /// the device viewport hover nothing, as if the pointer left the window.
    pub fn move_pointer(&self, x: f32, y: f32) {
        let hit = {
            let state = self.state.borrow();
            let inside = x >= 0.0
                && y >= 0.0
                && x < state.device.viewport_width
                && y < state.device.viewport_height;
            if inside { state.dom.hit_test(x, y) } else { None }
        };
        self.apply_hover(hit);
    }

    /// Put the pointer over an element directly, without geometry.
    pub fn hover(&self, id: NodeId) {
        self.apply_hover(Some(id));
    }

    /// Take the pointer off whatever it was over.
    pub fn clear_hover(&self) {
        self.apply_hover(None);
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.state.borrow().hovered
    }

    fn apply_hover(&self, next: Option<NodeId>) {
        let prev = {
            let mut state = self.state.borrow_mut();
            let prev = state.hovered;
            if prev == next {
                return;
            }
            // Hover state flips before either handler runs, so handlers
            // observe the new pointer position.
            state.hovered = next;
            prev
        };
        if let Some(node) = prev {
            self.dispatch(
                Target::Node(node),
                &Event::with_target(EventKind::MouseLeave, node),
            );
        }
        if let Some(node) = next {
            self.dispatch(
                Target::Node(node),
                &Event::with_target(EventKind::MouseEnter, node),
            );
        }
    }

    // ---- scrolling ---------------------------------------------------

    pub fn scroll_to(&self, x: f32, y: f32) {
        let mut state = self.state.borrow_mut();
        state.scroll_x = x;
        state.scroll_y = y;
    }

    pub fn scroll_x(&self) -> f32 {
        self.state.borrow().scroll_x
    }

    pub fn scroll_y(&self) -> f32 {
        self.state.borrow().scroll_y
    }

    // ---- timers ------------------------------------------------------

    pub fn now(&self) -> Duration {
        self.state.borrow().timers.now()
    }

    pub fn set_timeout(&self, delay: Duration, callback: impl FnOnce(&Page) + 'static) -> TimerId {
        self.state
            .borrow_mut()
            .timers
            .schedule(delay, Box::new(callback))
    }

    /// Advance the virtual clock, firing every timer due inside the window.
    pub fn advance(&self, dt: Duration) {
        let target = self.state.borrow().timers.now() + dt;
        loop {
            let timer = self.state.borrow_mut().timers.pop_due(target);
            let Some(timer) = timer else { break };
            tracing::trace!(at = ?timer.fire_at, "timer fired");
            (timer.callback)(self);
        }
        self.state.borrow_mut().timers.advance_clock(target);
    }

    /// Advance until no timer is pending, including timers scheduled by
    /// timers along the way.
    pub fn run_until_idle(&self) {
        loop {
            let step = {
                let state = self.state.borrow();
                state.timers.last_fire_at().map(|at| at - state.timers.now())
            };
            match step {
                Some(dt) => self.advance(dt),
                None => break,
            }
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.pending_count()
    }

    // ---- console -----------------------------------------------------

    pub fn console_log(&self, format: &str, styles: &[&str]) {
        self.state.borrow_mut().console.log(format, styles);
    }

    pub fn console_entries(&self) -> Vec<LogEntry> {
        self.state.borrow().console.entries().to_vec()
    }

    pub fn drain_console(&self) -> Vec<LogEntry> {
        self.state.borrow_mut().console.drain()
    }
}
