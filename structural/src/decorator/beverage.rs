use super::{Condiment, Condimented};

pub trait Beverage {
    fn description(&self) -> String;

    fn cost(&self) -> f64;

    fn size(&self) -> u32;
}

pub trait BeverageExt: Beverage + Sized + 'static {
    fn with(self, condiment: Condiment) -> Condimented {
        Condimented::new(Box::new(self), condiment)
    }
}

impl<B: Beverage + 'static> BeverageExt for B {}

impl Beverage for Box<dyn Beverage> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn size(&self) -> u32 {
        (**self).size()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Espresso;

#[derive(Debug, Default, Clone, Copy)]
pub struct HouseBlend;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> f64 {
        1.99
    }

    fn size(&self) -> u32 {
        1
    }
}

impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.50
    }

    fn size(&self) -> u32 {
        1
    }
}
