use super::view::ImageView;
use crate::image::ImageError;
use slotmap::{SlotMap, new_key_type};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

new_key_type! {
    /// Registration token returned by `add_observer`.
    pub struct ObserverId;
}

/// A listener kept consistent with an image it does not own.
pub trait DataObserver {
    /// Called after the image changed shape or values, with read-only access
    /// to the new state. The image stays borrowed for the whole notification
    /// round, so it cannot be mutated from inside the callback. An error
    /// aborts the round and is returned to the caller of the mutation.
    fn on_update(&mut self, image: &ImageView<'_>) -> Result<(), ImageError>;

    /// Called once, right before the image buffer is freed.
    fn on_destroy(&mut self);
}

pub(crate) type ObserverRef = Rc<RefCell<dyn DataObserver>>;

/// Weak back-references to observers, kept in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: SlotMap<ObserverId, Weak<RefCell<dyn DataObserver>>>,
    order: Vec<ObserverId>,
}

impl ObserverRegistry {
    /// Registers `observer`, returning its existing id if already present.
    pub fn add(&mut self, observer: &ObserverRef) -> ObserverId {
        if let Some(id) = self.find(observer) {
            return id;
        }
        let id = self.observers.insert(Rc::downgrade(observer));
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: ObserverId) -> bool {
        if self.observers.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&other| other != id);
        true
    }

    pub fn remove_ref(&mut self, observer: &ObserverRef) -> bool {
        self.find(observer).is_some_and(|id| self.remove(id))
    }

    pub fn find(&self, observer: &ObserverRef) -> Option<ObserverId> {
        let target = Rc::downgrade(observer);
        self.order
            .iter()
            .copied()
            .find(|&id| self.observers.get(id).is_some_and(|w| w.ptr_eq(&target)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Drops registrations whose observer no longer exists and returns the
    /// live ones in registration order.
    pub fn live(&mut self) -> Vec<ObserverRef> {
        let observers = &mut self.observers;
        let mut live = Vec::with_capacity(self.order.len());
        self.order.retain(|&id| match observers.get(id).and_then(Weak::upgrade) {
            Some(observer) => {
                live.push(observer);
                true
            }
            None => {
                observers.remove(id);
                false
            }
        });
        live
    }

    /// Empties the registry, returning the live observers in registration order.
    pub fn drain(&mut self) -> Vec<ObserverRef> {
        let live = self.live();
        self.observers.clear();
        self.order.clear();
        live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl DataObserver for Quiet {
        fn on_update(&mut self, _image: &ImageView<'_>) -> Result<(), ImageError> {
            Ok(())
        }

        fn on_destroy(&mut self) {}
    }

    fn observer() -> ObserverRef {
        Rc::new(RefCell::new(Quiet))
    }

    #[test]
    fn adding_twice_keeps_one_registration() {
        let mut registry = ObserverRegistry::default();
        let a = observer();
        let first = registry.add(&a);
        let second = registry.add(&a);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removing_unknown_observer_is_a_no_op() {
        let mut registry = ObserverRegistry::default();
        let a = observer();
        let b = observer();
        let id = registry.add(&a);
        assert!(!registry.remove_ref(&b));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn live_preserves_order_and_prunes_dropped_observers() {
        let mut registry = ObserverRegistry::default();
        let a = observer();
        let b = observer();
        let c = observer();
        registry.add(&a);
        registry.add(&b);
        registry.add(&c);
        drop(b);

        let live = registry.live();
        assert_eq!(live.len(), 2);
        assert!(Rc::ptr_eq(&live[0], &a));
        assert!(Rc::ptr_eq(&live[1], &c));
        assert_eq!(registry.len(), 2);
    }
}
