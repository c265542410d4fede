//! Mutable page state behind the environment handle.

use crate::device::DeviceProfile;
use crate::dom::{Document, NodeId};
use crate::event::ListenerRegistry;
use crate::page::console::Console;
use crate::page::timers::TimerQueue;

/// Everything a page owns: the element tree, device capabilities, scroll
/// position, pointer state, timers, console and listeners.
///
/// Lives inside `Rc<RefCell<..>>` behind a [`Page`](crate::page::Page)
/// handle; callbacks reach it through that handle and must not hold a
/// borrow across dispatch.
#[derive(Debug)]
pub struct PageState {
    pub dom: Document,
    pub device: DeviceProfile,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub hovered: Option<NodeId>,
    pub timers: TimerQueue,
    pub console: Console,
    pub listeners: ListenerRegistry,
    pub ready_fired: bool,
    pub load_fired: bool,
}

impl PageState {
    pub fn new(dom: Document, device: DeviceProfile) -> Self {
        Self {
            dom,
            device,
            scroll_x: 0.0,
            scroll_y: 0.0,
            hovered: None,
            timers: TimerQueue::new(),
            console: Console::new(),
            listeners: ListenerRegistry::new(),
            ready_fired: false,
            load_fired: false,
        }
    }
}
