pub trait FlyStrategy {
    fn fly(&self, name: &str) -> String;
}

pub trait QuackStrategy {
    fn quack(&self, name: &str) -> String;
}

pub trait SleepStrategy {
    fn sleep(&self, name: &str) -> String;
}

pub trait SwimStrategy {
    fn swim(&self, name: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteFly;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteNoFly;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteQuack;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteNoQuack;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteSleep;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteSwim;

impl FlyStrategy for ConcreteFly {
    fn fly(&self, name: &str) -> String {
        format!("{name} is flying")
    }
}

impl FlyStrategy for ConcreteNoFly {
    fn fly(&self, name: &str) -> String {
        format!("{name} can't fly")
    }
}

impl QuackStrategy for ConcreteQuack {
    fn quack(&self, name: &str) -> String {
        format!("{name}, Quacks")
    }
}

impl QuackStrategy for ConcreteNoQuack {
    fn quack(&self, name: &str) -> String {
        format!("{name}, No Quack")
    }
}

impl SleepStrategy for ConcreteSleep {
    fn sleep(&self, name: &str) -> String {
        format!("{name} is sleeping")
    }
}

impl SwimStrategy for ConcreteSwim {
    fn swim(&self, name: &str) -> String {
        format!("{name} is swimming")
    }
}
