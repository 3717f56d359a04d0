//! A context delegating its requests to a swappable state object.
//!
//! The [`Context`] exclusively owns its current [`State`]. While a handler runs, the state
//! only sees a [`ContextRef`], a non-owning back-reference through which it can print and
//! request a transition. The transition is applied by the context as soon as the handler
//! returns, so the old state is gone before any other handler runs.

mod concrete_states;
mod context;

pub use concrete_states::{ConcreteStateA, ConcreteStateB};
pub use context::{Context, ContextRef};

pub trait State {
    fn name(&self) -> &'static str;

    fn handle1(&self, context: &mut ContextRef);

    fn handle2(&self, context: &mut ContextRef);
}
