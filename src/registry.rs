use std::collections::{HashMap};
use std::rc::{Rc};

use super::model::{Array, Object};

/// A value that has an identity, and can therefore be visited twice.
#[derive(Clone)]
pub enum Container {
    Array(Rc<Array>),
    Object(Rc<Object>),
}

impl Container {
    fn address(&self) -> *const () {
        match self {
            Self::Array(array) => Rc::as_ptr(array) as *const (),
            Self::Object(object) => Rc::as_ptr(object) as *const (),
        }
    }
}

impl From<&Rc<Array>> for Container {
    fn from(array: &Rc<Array>) -> Self { Self::Array(array.clone()) }
}

impl From<&Rc<Object>> for Container {
    fn from(object: &Rc<Object>) -> Self { Self::Object(object.clone()) }
}

// ----------------------------------------------------------------------------

/// Assigns ids to the containers visited during one dump.
///
/// Ids count up from `1` in the order of [`register`](Self::register) calls.
/// Every registered container is kept alive until the registry is dropped,
/// so its address cannot be reused by a different container.
#[derive(Default)]
pub struct Registry {
    ids: HashMap<*const (), usize>,
    pinned: Vec<Container>,
}

impl Registry {
    /// The number of containers registered so far.
    pub fn len(&self) -> usize { self.pinned.len() }

    /// Returns the id of `container` if it has been registered.
    pub fn find(&self, container: &Container) -> Option<usize> {
        self.ids.get(&container.address()).copied()
    }

    /// Assign the next id to `container`, which must not be registered yet.
    pub fn register(&mut self, container: Container) -> usize {
        debug_assert!(self.find(&container).is_none());
        self.pinned.push(container.clone());
        let id = self.pinned.len();
        self.ids.insert(container.address(), id);
        id
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_from_one() {
        let a = Array::new([]);
        let b = Object::new();
        let mut registry = Registry::default();
        assert_eq!(registry.find(&(&a).into()), None);
        assert_eq!(registry.register((&a).into()), 1);
        assert_eq!(registry.register((&b).into()), 2);
        assert_eq!(registry.find(&(&a).into()), Some(1));
        assert_eq!(registry.find(&(&b).into()), Some(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn identity_is_not_equality() {
        let a = Array::new([]);
        let b = Array::new([]);
        let mut registry = Registry::default();
        registry.register((&a).into());
        assert_eq!(registry.find(&(&a.clone()).into()), Some(1));
        assert_eq!(registry.find(&(&b).into()), None);
    }

    #[test]
    fn registered_containers_stay_alive() {
        let mut registry = Registry::default();
        let weak = {
            let temporary = Object::new();
            registry.register((&temporary).into());
            Rc::downgrade(&temporary)
        };
        assert!(weak.upgrade().is_some());
        drop(registry);
        assert!(weak.upgrade().is_none());
    }
}
