mod display;
mod station;

use std::fmt;

pub use display::{DisplayKind, WeatherDisplay};
pub use station::WeatherStation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Readings {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Readings { a, b, c }
    }
}

impl Default for Readings {
    fn default() -> Self {
        Readings::new(1.0, 2.0, 3.0)
    }
}

impl fmt::Display for Readings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.a, self.b, self.c)
    }
}

/// Capability observers rely on instead of the concrete subject type.
pub trait WeatherData {
    /// `None` until the subject has computed a state.
    fn readings(&self) -> Option<Readings>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherEvent {
    Measured,
    Broadcast,
}
