use std::rc::Rc;

pub trait Observer<S: ?Sized, E: Clone> {
    fn update(&self, source: &S, event: E);
}

/// Outcome of [`Subject::register_observer`]. Registering twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Attached,
    AlreadyAttached,
}

/// Outcome of [`Subject::unregister_observer`]. Removing an unknown observer is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unregistration {
    Detached,
    Nonexistent,
}

pub trait Subject<E: Clone> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>) -> Registration;
    fn unregister_observer(&mut self, observer: &Rc<dyn Observer<Self, E>>) -> Unregistration;
    fn notify_observers(&self, event: E);
}

pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

/// Appends `observer` unless the same allocation is already in `observers`.
pub fn attach<S: ?Sized, E: Clone>(
    observers: &mut SharedObservers<S, E>,
    observer: Rc<dyn Observer<S, E>>,
) -> Registration {
    if observers.iter().any(|obs| Rc::ptr_eq(obs, &observer)) {
        return Registration::AlreadyAttached;
    }
    observers.push(observer);
    Registration::Attached
}

pub fn detach<S: ?Sized, E: Clone>(
    observers: &mut SharedObservers<S, E>,
    observer: &Rc<dyn Observer<S, E>>,
) -> Unregistration {
    match observers.iter().position(|obs| Rc::ptr_eq(obs, observer)) {
        Some(index) => {
            observers.remove(index);
            Unregistration::Detached
        }
        None => Unregistration::Nonexistent,
    }
}
