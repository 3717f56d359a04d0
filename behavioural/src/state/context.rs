use std::rc::Rc;

use common::console::Console;
use log::{debug, trace};
use strum::Display;

use super::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Request {
    #[strum(serialize = "request1")]
    First,
    #[strum(serialize = "request2")]
    Second,
}

pub struct Context {
    state: Box<dyn State>,
    console: Rc<dyn Console>,
    transitions: usize,
}

impl Context {
    /// Builds the context and activates `initial`, which counts as the first transition.
    pub fn new(initial: impl State + 'static, console: Rc<dyn Console>) -> Self {
        let mut context = Context {
            state: Box::new(initial),
            console,
            transitions: 0,
        };
        context.announce_transition();
        context
    }

    pub fn transition_to(&mut self, state: impl State + 'static) {
        self.replace_state(Box::new(state));
    }

    pub fn request1(&mut self) {
        self.dispatch(Request::First);
    }

    pub fn request2(&mut self) {
        self.dispatch(Request::Second);
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn transitions(&self) -> usize {
        self.transitions
    }

    fn dispatch(&mut self, request: Request) {
        trace!("{} dispatched to {}", request, self.state.name());
        let mut context_ref = ContextRef::new(self.console.clone());
        match request {
            Request::First => self.state.handle1(&mut context_ref),
            Request::Second => self.state.handle2(&mut context_ref),
        }
        if let Some(next) = context_ref.requested {
            self.replace_state(next);
        }
    }

    fn replace_state(&mut self, state: Box<dyn State>) {
        debug!("Transition from {} to {}", self.state.name(), state.name());
        self.state = state;
        self.announce_transition();
    }

    fn announce_transition(&mut self) {
        self.transitions += 1;
        self.console
            .print_line(&format!("Context: Transition to {}.", self.state.name()));
    }
}

/// Back-reference handed to a state while one of its handlers runs.
pub struct ContextRef {
    console: Rc<dyn Console>,
    requested: Option<Box<dyn State>>,
}

impl ContextRef {
    fn new(console: Rc<dyn Console>) -> Self {
        ContextRef {
            console,
            requested: None,
        }
    }

    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }

    /// Asks the owning context to switch state once the handler returns. Last request wins.
    pub fn transition_to(&mut self, state: impl State + 'static) {
        if let Some(previous) = self.requested.replace(Box::new(state)) {
            debug!("Transition request to {} overridden", previous.name());
        }
    }
}
