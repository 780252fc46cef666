//! Input surface the picker listens on.
//!
//! The host owns an [`InputHub`] and feeds it pointer events in
//! render-target coordinates. Pickers subscribe at construction and
//! unsubscribe on destroy. Pointer-up is broadcast to every listener, so a
//! drag ends wherever the pointer is released.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use floem::kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Single-threaded pointer-event dispatcher. Clones share the same registry.
#[derive(Clone, Default)]
pub struct InputHub {
    inner: Rc<RefCell<HubInner>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&PointerEvent) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Deliver `event` to every listener registered when the call starts.
    ///
    /// Listeners may subscribe or unsubscribe while being called.
    pub fn dispatch(&self, event: &PointerEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        tracing::trace!(?event, listeners = listeners.len(), "dispatching pointer event");
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for InputHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
