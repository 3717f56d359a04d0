use std::rc::Rc;

use behavioural::state::{ConcreteStateA, Context};
use common::console::Console;

pub fn run(console: Rc<dyn Console>) {
    let mut context = Context::new(ConcreteStateA, console);
    context.request1();
    context.request2();
}
