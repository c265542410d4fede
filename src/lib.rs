//! IdentityPage simulator
//!
//! A headless environment for exercising the personal-site behavior layer
//! outside a browser. Hosts a small retained element tree, a virtual event
//! loop with one-shot timers, and the three page behaviors: the preloader
//! flag, the hero hover tooltip and the console credits.

pub mod behavior;
pub mod device;
pub mod dom;
pub mod dump;
pub mod error;
pub mod event;
pub mod markup;
pub mod page;

pub use device::DeviceProfile;
pub use dom::{Document, Element, NodeId, Rect, Selector};
pub use error::{Error, Result};
pub use page::Page;
