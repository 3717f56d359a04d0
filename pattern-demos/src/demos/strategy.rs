use std::rc::Rc;

use behavioural::strategy::{
    ConcreteFly, ConcreteNoFly, ConcreteNoQuack, ConcreteQuack, Duck, StrategyError,
};
use common::console::Console;
use log::warn;

pub fn run(console: Rc<dyn Console>) -> Result<(), StrategyError> {
    let mut city_duck = Duck::builder("City Duck")
        .fly(ConcreteFly)
        .quack(ConcreteQuack)
        .build(console.clone());
    city_duck.perform_fly(None)?;
    city_duck.perform_quack(None)?;
    city_duck.perform_quack(Some(Box::new(ConcreteNoQuack)))?;

    let mut rubber_duck = Duck::builder("Rubber Duck")
        .fly(ConcreteNoFly)
        .quack(ConcreteNoQuack)
        .build(console.clone());
    rubber_duck.perform_fly(None)?;
    rubber_duck.perform_fly(Some(Box::new(ConcreteFly)))?;
    rubber_duck.perform_quack(None)?;

    // Neither duck was given a sleep strategy.
    if let Err(error) = rubber_duck.perform_sleep(None) {
        warn!("{error}");
        console.print_line(&format!("Error: {error}"));
    }
    Ok(())
}
