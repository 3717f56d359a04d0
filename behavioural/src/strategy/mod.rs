mod behaviors;
mod duck;

pub use behaviors::{
    ConcreteFly, ConcreteNoFly, ConcreteNoQuack, ConcreteQuack, ConcreteSleep, ConcreteSwim,
    FlyStrategy, QuackStrategy, SleepStrategy, SwimStrategy,
};
pub use duck::{Duck, DuckBuilder, Slot, StrategyError};
