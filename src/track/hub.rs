//! Shared event source with subscription fan-out.
//!
//! A [`Hub`] owns at most one underlying listener no matter how many consumers
//! subscribe. The listener is attached on the first subscription and detached
//! when the last one goes away; every published value is delivered to all
//! current subscribers.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

type Callback<T> = Rc<dyn Fn(&T)>;
type Detach = Box<dyn FnOnce()>;
type Attach<T> = Box<dyn FnMut(Publisher<T>) -> Detach>;

struct HubState<T> {
    attach: Option<Attach<T>>,
    detach: Option<Detach>,
    attached: bool,
    epoch: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    latest: Option<T>,
}

pub struct Hub<T> {
    state: Rc<RefCell<HubState<T>>>,
}

impl<T> Clone for Hub<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Hub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Hub")
            .field("attached", &state.attached)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Hub<T> {
    /// `attach` installs the underlying listener and returns the closure that
    /// removes it again.
    pub fn new<F, D>(mut attach: F) -> Self
    where
        F: FnMut(Publisher<T>) -> D + 'static,
        D: FnOnce() + 'static,
    {
        let attach: Attach<T> =
            Box::new(move |publisher| -> Detach { Box::new(attach(publisher)) });
        Self {
            state: Rc::new(RefCell::new(HubState {
                attach: Some(attach),
                detach: None,
                attached: false,
                epoch: 0,
                next_id: 0,
                subscribers: Vec::new(),
                latest: None,
            })),
        }
    }

    /// Registers `callback` and attaches the listener if this is the first
    /// subscriber. A later subscriber is handed the latest value straight away.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let (id, needs_attach, epoch, replay) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.subscribers.push((id, Rc::clone(&callback)));
            let needs_attach = !state.attached;
            if needs_attach {
                state.attached = true;
                state.epoch += 1;
            }
            let replay = if needs_attach {
                None
            } else {
                state.latest.clone()
            };
            (id, needs_attach, state.epoch, replay)
        };

        if let Some(value) = replay {
            callback(&value);
        }

        if needs_attach {
            // the borrow is released so the source may publish while attaching
            let attach = self.state.borrow_mut().attach.take();
            if let Some(mut attach) = attach {
                let detach = attach(Publisher {
                    state: Rc::downgrade(&self.state),
                    epoch,
                });
                let mut state = self.state.borrow_mut();
                state.attach = Some(attach);
                if state.attached && state.epoch == epoch {
                    state.detach = Some(detach);
                } else {
                    // every subscriber left while we were attaching
                    drop(state);
                    detach();
                }
            }
        }

        Subscription {
            state: Rc::downgrade(&self.state) as Weak<dyn Unsubscribe>,
            id,
            cancelled: Cell::new(false),
        }
    }

    pub fn latest(&self) -> Option<T> {
        self.state.borrow().latest.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached
    }
}

/// Handle given to the underlying source for pushing values to subscribers.
pub struct Publisher<T> {
    state: Weak<RefCell<HubState<T>>>,
    epoch: u64,
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
            epoch: self.epoch,
        }
    }
}

impl<T: Clone + 'static> Publisher<T> {
    /// Delivers `value` to every subscriber. Values published by a listener
    /// that has since been detached are dropped.
    pub fn publish(&self, value: T) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let callbacks = {
            let mut state = state.borrow_mut();
            if !state.attached || state.epoch != self.epoch {
                return;
            }
            state.latest = Some(value.clone());
            state
                .subscribers
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect::<Vec<_>>()
        };
        for cb in callbacks {
            cb(&value);
        }
    }

    pub fn is_live(&self) -> bool {
        self.state
            .upgrade()
            .map(|s| {
                let s = s.borrow();
                s.attached && s.epoch == self.epoch
            })
            .unwrap_or(false)
    }
}

trait Unsubscribe {
    fn unsubscribe(&self, id: u64);
}

impl<T> Unsubscribe for RefCell<HubState<T>> {
    fn unsubscribe(&self, id: u64) {
        let detach = {
            let mut state = self.borrow_mut();
            state.subscribers.retain(|(sid, _)| *sid != id);
            if state.subscribers.is_empty() && state.attached {
                state.attached = false;
                state.latest = None;
                state.detach.take()
            } else {
                None
            }
        };
        if let Some(detach) = detach {
            detach();
        }
    }
}

/// Keeps a callback registered with a [`Hub`]. Cancelling is idempotent and
/// happens automatically on drop.
pub struct Subscription {
    state: Weak<dyn Unsubscribe>,
    id: u64,
    cancelled: Cell<bool>,
}

impl Subscription {
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            state.unsubscribe(self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("cancelled", &self.cancelled.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Source {
        attaches: Rc<Cell<usize>>,
        detaches: Rc<Cell<usize>>,
        publisher: Rc<RefCell<Option<Publisher<i32>>>>,
    }

    fn source_hub() -> (Hub<i32>, Source) {
        let source = Source {
            attaches: Rc::new(Cell::new(0)),
            detaches: Rc::new(Cell::new(0)),
            publisher: Rc::new(RefCell::new(None)),
        };
        let (attaches, detaches, slot) = (
            source.attaches.clone(),
            source.detaches.clone(),
            source.publisher.clone(),
        );
        let hub = Hub::new(move |publisher: Publisher<i32>| {
            attaches.set(attaches.get() + 1);
            *slot.borrow_mut() = Some(publisher);
            let detaches = detaches.clone();
            move || detaches.set(detaches.get() + 1)
        });
        (hub, source)
    }

    fn publish(source: &Source, value: i32) {
        if let Some(p) = source.publisher.borrow().as_ref() {
            p.publish(value);
        }
    }

    #[test]
    fn test_single_listener_for_many_subscribers() {
        let (hub, source) = source_hub();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subs = (0..3)
            .map(|i| {
                let seen = seen.clone();
                hub.subscribe(move |v: &i32| seen.borrow_mut().push((i, *v)))
            })
            .collect::<Vec<_>>();
        assert_eq!(source.attaches.get(), 1);
        assert_eq!(hub.subscriber_count(), 3);

        publish(&source, 7);
        assert_eq!(*seen.borrow(), vec![(0, 7), (1, 7), (2, 7)]);
        assert_eq!(hub.latest(), Some(7));

        drop(subs);
        assert_eq!(source.detaches.get(), 1);
        assert!(!hub.is_attached());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (hub, source) = source_hub();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = hub.subscribe(move |_| c.set(c.get() + 1));
        sub.cancel();
        sub.cancel();
        drop(sub);
        assert_eq!(source.detaches.get(), 1);

        publish(&source, 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_stale_publisher_ignored_after_reattach() {
        let (hub, source) = source_hub();
        let first = hub.subscribe(|_| {});
        let stale = source.publisher.borrow().clone().unwrap();
        first.cancel();

        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _second = hub.subscribe(move |_| c.set(c.get() + 1));
        assert_eq!(source.attaches.get(), 2);
        assert!(!stale.is_live());

        stale.publish(3);
        assert_eq!(count.get(), 0);
        publish(&source, 4);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_late_subscriber_gets_current_value() {
        let hub = Hub::new(|publisher: Publisher<f64>| {
            // the source reports where it already is on attach
            publisher.publish(800.0);
            || {}
        });
        let first = Rc::new(Cell::new(0.0));
        let second = Rc::new(Cell::new(0.0));
        let f = first.clone();
        let _a = hub.subscribe(move |v: &f64| f.set(*v));
        let s = second.clone();
        let _b = hub.subscribe(move |v: &f64| s.set(*v));

        assert_eq!(first.get(), 800.0);
        assert_eq!(second.get(), 800.0);
        assert_eq!(hub.latest(), Some(800.0));
    }

    #[test]
    fn test_latest_cleared_on_detach() {
        let (hub, source) = source_hub();
        let sub = hub.subscribe(|_| {});
        publish(&source, 5);
        drop(sub);
        assert_eq!(hub.latest(), None);

        // a fresh attach must not replay the previous session's value
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _sub = hub.subscribe(move |v: &i32| s.borrow_mut().push(*v));
        let t = seen.clone();
        let _late = hub.subscribe(move |v: &i32| t.borrow_mut().push(*v));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_hub() {
        let (hub, _source) = source_hub();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        sub.cancel();
        assert!(sub.is_cancelled());
    }
}
