use std::rc::Rc;

use common::{console::Console, subject_observer::Observer};
use log::trace;
use strum::Display;

use super::{WeatherData, WeatherEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DisplayKind {
    #[strum(serialize = "MobileWeatherDisplay")]
    Mobile,
    #[strum(serialize = "WebWeatherDisplay")]
    Web,
}

/// Prints the readings of whatever subject notifies it.
pub struct WeatherDisplay {
    kind: DisplayKind,
    console: Rc<dyn Console>,
}

impl WeatherDisplay {
    pub fn new(kind: DisplayKind, console: Rc<dyn Console>) -> Self {
        WeatherDisplay { kind, console }
    }

    pub fn mobile(console: Rc<dyn Console>) -> Self {
        Self::new(DisplayKind::Mobile, console)
    }

    pub fn web(console: Rc<dyn Console>) -> Self {
        Self::new(DisplayKind::Web, console)
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }
}

impl<S> Observer<S, WeatherEvent> for WeatherDisplay
where
    S: WeatherData + ?Sized,
{
    fn update(&self, source: &S, event: WeatherEvent) {
        match source.readings() {
            Some(readings) => self
                .console
                .print_line(&format!("{}: {readings}", self.kind)),
            None => trace!("{} ignored {event:?}: no readings available", self.kind),
        }
    }
}
