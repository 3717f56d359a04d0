use log::trace;
use strum::{Display, EnumIter};

use super::Beverage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Condiment {
    Mocha,
    Soy,
}

impl Condiment {
    pub fn price(self) -> f64 {
        match self {
            Condiment::Mocha => 0.20,
            Condiment::Soy => 0.15,
        }
    }
}

/// A beverage with one more condiment on top.
pub struct Condimented {
    beverage: Box<dyn Beverage>,
    condiment: Condiment,
}

impl Condimented {
    pub fn new(beverage: Box<dyn Beverage>, condiment: Condiment) -> Self {
        trace!("Adding {condiment} to {}", beverage.description());
        Condimented {
            beverage,
            condiment,
        }
    }

    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    pub fn inner(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }
}

impl Beverage for Condimented {
    fn description(&self) -> String {
        format!("{}, {}", self.beverage.description(), self.condiment)
    }

    fn cost(&self) -> f64 {
        self.beverage.cost() + self.condiment.price()
    }

    fn size(&self) -> u32 {
        self.beverage.size()
    }
}
