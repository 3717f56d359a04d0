use std::rc::Rc;

use common::console::Console;
use log::debug;
use strum::Display;
use thiserror::Error;

use super::{FlyStrategy, QuackStrategy, SleepStrategy, SwimStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
    Fly,
    Quack,
    Sleep,
    Swim,
}

#[derive(Error, Debug, PartialEq)]
pub enum StrategyError {
    #[error("Unset strategy: {duck} has no {slot} strategy")]
    UnsetStrategy { duck: String, slot: Slot },
}

pub struct Duck {
    name: String,
    fly: Option<Box<dyn FlyStrategy>>,
    quack: Option<Box<dyn QuackStrategy>>,
    sleep: Option<Box<dyn SleepStrategy>>,
    swim: Option<Box<dyn SwimStrategy>>,
    console: Rc<dyn Console>,
}

pub struct DuckBuilder {
    name: String,
    fly: Option<Box<dyn FlyStrategy>>,
    quack: Option<Box<dyn QuackStrategy>>,
    sleep: Option<Box<dyn SleepStrategy>>,
    swim: Option<Box<dyn SwimStrategy>>,
}

impl DuckBuilder {
    pub fn fly(mut self, strategy: impl FlyStrategy + 'static) -> Self {
        self.fly = Some(Box::new(strategy));
        self
    }

    pub fn quack(mut self, strategy: impl QuackStrategy + 'static) -> Self {
        self.quack = Some(Box::new(strategy));
        self
    }

    pub fn sleep(mut self, strategy: impl SleepStrategy + 'static) -> Self {
        self.sleep = Some(Box::new(strategy));
        self
    }

    pub fn swim(mut self, strategy: impl SwimStrategy + 'static) -> Self {
        self.swim = Some(Box::new(strategy));
        self
    }

    pub fn build(self, console: Rc<dyn Console>) -> Duck {
        Duck {
            name: self.name,
            fly: self.fly,
            quack: self.quack,
            sleep: self.sleep,
            swim: self.swim,
            console,
        }
    }
}

impl Duck {
    pub fn builder(name: impl Into<String>) -> DuckBuilder {
        DuckBuilder {
            name: name.into(),
            fly: None,
            quack: None,
            sleep: None,
            swim: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_strategy(&self, slot: Slot) -> bool {
        match slot {
            Slot::Fly => self.fly.is_some(),
            Slot::Quack => self.quack.is_some(),
            Slot::Sleep => self.sleep.is_some(),
            Slot::Swim => self.swim.is_some(),
        }
    }

    /// Flies with `strategy` when given, keeping it for later calls, or with the stored one.
    pub fn perform_fly(
        &mut self,
        strategy: Option<Box<dyn FlyStrategy>>,
    ) -> Result<(), StrategyError> {
        let line = resolve(&mut self.fly, strategy, Slot::Fly, &self.name)?.fly(&self.name);
        self.console.print_line(&line);
        Ok(())
    }

    pub fn perform_quack(
        &mut self,
        strategy: Option<Box<dyn QuackStrategy>>,
    ) -> Result<(), StrategyError> {
        let line = resolve(&mut self.quack, strategy, Slot::Quack, &self.name)?.quack(&self.name);
        self.console.print_line(&line);
        Ok(())
    }

    pub fn perform_sleep(
        &mut self,
        strategy: Option<Box<dyn SleepStrategy>>,
    ) -> Result<(), StrategyError> {
        let line = resolve(&mut self.sleep, strategy, Slot::Sleep, &self.name)?.sleep(&self.name);
        self.console.print_line(&line);
        Ok(())
    }

    pub fn perform_swim(
        &mut self,
        strategy: Option<Box<dyn SwimStrategy>>,
    ) -> Result<(), StrategyError> {
        let line = resolve(&mut self.swim, strategy, Slot::Swim, &self.name)?.swim(&self.name);
        self.console.print_line(&line);
        Ok(())
    }
}

fn resolve<'a, T: ?Sized>(
    current: &'a mut Option<Box<T>>,
    replacement: Option<Box<T>>,
    slot: Slot,
    duck: &str,
) -> Result<&'a T, StrategyError> {
    if let Some(replacement) = replacement {
        debug!("{duck} switches its {slot} strategy");
        *current = Some(replacement);
    }
    current
        .as_deref()
        .ok_or_else(|| StrategyError::UnsetStrategy {
            duck: duck.to_owned(),
            slot,
        })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common_test::RecordingConsole;
    use mockall::mock;

    use crate::strategy::{
        ConcreteFly, ConcreteNoFly, ConcreteNoQuack, ConcreteQuack, ConcreteSleep, ConcreteSwim,
        FlyStrategy,
    };

    use super::{Duck, Slot, StrategyError};

    mock! {
        Wings {}

        impl FlyStrategy for Wings {
            fn fly(&self, name: &str) -> String;
        }
    }

    fn city_duck() -> (Duck, RecordingConsole) {
        let console = RecordingConsole::new();
        let duck = Duck::builder("City Duck")
            .fly(ConcreteFly)
            .quack(ConcreteQuack)
            .build(Rc::new(console.clone()));
        (duck, console)
    }

    #[test]
    fn test_builder() {
        let (duck, _) = city_duck();

        assert_eq!("City Duck", duck.name());
        assert!(duck.has_strategy(Slot::Fly));
        assert!(duck.has_strategy(Slot::Quack));
        assert!(!duck.has_strategy(Slot::Sleep));
        assert!(!duck.has_strategy(Slot::Swim));
    }

    #[test]
    fn test_perform_with_stored_strategies() {
        // Given
        let (mut duck, console) = city_duck();

        // When
        duck.perform_fly(None).unwrap();
        duck.perform_quack(None).unwrap();

        // Then
        assert_eq!(vec!["City Duck is flying", "City Duck, Quacks"], console.lines());
    }

    #[test]
    fn test_perform_unset_strategy_should_fail() {
        // Given
        let (mut duck, console) = city_duck();

        // When
        let sleep = duck.perform_sleep(None);
        let swim = duck.perform_swim(None);

        // Then
        assert_eq!(
            Err(StrategyError::UnsetStrategy {
                duck: "City Duck".to_string(),
                slot: Slot::Sleep
            }),
            sleep
        );
        assert_eq!(
            Err(StrategyError::UnsetStrategy {
                duck: "City Duck".to_string(),
                slot: Slot::Swim
            }),
            swim
        );
        assert!(console.lines().is_empty(), "Should not print anything on failure");
    }

    #[test]
    fn test_unset_strategy_error_message() {
        let error = StrategyError::UnsetStrategy {
            duck: "Rubber Duck".to_string(),
            slot: Slot::Sleep,
        };

        assert_eq!(
            "Unset strategy: Rubber Duck has no sleep strategy",
            error.to_string()
        );
    }

    #[test]
    fn test_override_should_persist() {
        // Given
        let (mut duck, console) = city_duck();

        // When
        duck.perform_quack(Some(Box::new(ConcreteNoQuack))).unwrap();
        duck.perform_quack(None).unwrap();

        // Then
        assert_eq!(
            vec!["City Duck, No Quack", "City Duck, No Quack"],
            console.lines(),
            "Should keep the override for subsequent calls"
        );
    }

    #[test]
    fn test_override_should_fill_unset_slot() {
        // Given
        let (mut duck, console) = city_duck();

        // When
        duck.perform_sleep(Some(Box::new(ConcreteSleep))).unwrap();
        duck.perform_swim(Some(Box::new(ConcreteSwim))).unwrap();
        duck.perform_sleep(None).unwrap();

        // Then
        assert!(duck.has_strategy(Slot::Sleep));
        assert!(duck.has_strategy(Slot::Swim));
        assert_eq!(
            vec![
                "City Duck is sleeping",
                "City Duck is swimming",
                "City Duck is sleeping"
            ],
            console.lines()
        );
    }

    #[test]
    fn test_strategies_are_independent_per_duck() {
        // Given
        let (mut city, city_console) = city_duck();
        let rubber_console = RecordingConsole::new();
        let mut rubber = Duck::builder("Rubber Duck")
            .fly(ConcreteNoFly)
            .quack(ConcreteNoQuack)
            .build(Rc::new(rubber_console.clone()));

        // When
        rubber.perform_fly(Some(Box::new(ConcreteFly))).unwrap();
        city.perform_fly(None).unwrap();

        // Then
        assert_eq!(vec!["Rubber Duck is flying"], rubber_console.lines());
        assert_eq!(vec!["City Duck is flying"], city_console.lines());
    }

    #[test]
    fn test_perform_fly_should_pass_duck_name() {
        // Given
        let console = RecordingConsole::new();
        let mut wings = MockWings::new();
        wings
            .expect_fly()
            .withf(|name| name.to_string() == "Mallard")
            .times(1)
            .returning(|name| format!("{name} glides"));
        let mut duck = Duck::builder("Mallard").build(Rc::new(console.clone()));

        // When
        let result = duck.perform_fly(Some(Box::new(wings)));

        // Then
        assert!(result.is_ok());
        assert_eq!(vec!["Mallard glides"], console.lines());
    }
}
