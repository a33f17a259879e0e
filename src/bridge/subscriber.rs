//! Subscriber Registry
//!
//! Explicit listener registration for bridge notifications. Listeners run
//! synchronously, in registration order, on the caller's thread.

use super::event::BridgeEvent;

/// Handle returned by registration, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BridgeEvent)>;

pub(crate) struct SubscriberRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        SubscriberRegistry {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BridgeEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn notify(&mut self, event: &BridgeEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_run_in_registration_order() {
        let mut registry = SubscriberRegistry::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = order.clone();
        registry.add(move |_| first.borrow_mut().push("first"));
        let second = order.clone();
        registry.add(move |_| second.borrow_mut().push("second"));

        registry.notify(&BridgeEvent::LogicsFinished);
        assert_eq!(order.borrow().as_slice(), ["first", "second"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = SubscriberRegistry::new();
        let count = Rc::new(RefCell::new(0u32));

        let sink = count.clone();
        let id = registry.add(move |_| *sink.borrow_mut() += 1);

        registry.remove(id);
        registry.remove(id);
        registry.notify(&BridgeEvent::LogicsFinished);

        assert_eq!(*count.borrow(), 0);
    }
}
