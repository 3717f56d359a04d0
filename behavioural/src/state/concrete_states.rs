use super::{ContextRef, State};

/// Moves to [`ConcreteStateB`] on request1.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteStateA;

/// Moves back to [`ConcreteStateA`] on request2.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteStateB;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn handle1(&self, context: &mut ContextRef) {
        context.console().print_line("ConcreteStateA handles request1.");
        context
            .console()
            .print_line("ConcreteStateA wants to change the state of the context.");
        context.transition_to(ConcreteStateB);
    }

    fn handle2(&self, context: &mut ContextRef) {
        context.console().print_line("ConcreteStateA handles request2.");
    }
}

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn handle1(&self, context: &mut ContextRef) {
        context.console().print_line("ConcreteStateB handles request1.");
    }

    fn handle2(&self, context: &mut ContextRef) {
        context.console().print_line("ConcreteStateB handles request2.");
        context
            .console()
            .print_line("ConcreteStateB wants to change the state of the context.");
        context.transition_to(ConcreteStateA);
    }
}
