use std::rc::Rc;

use common::{
    console::Console,
    subject_observer::{
        attach, detach, Observer, Registration, SharedObservers, Subject, Unregistration,
    },
};
use log::{debug, trace};

use super::{Readings, WeatherData, WeatherEvent};

pub struct WeatherStation {
    observers: SharedObservers<Self, WeatherEvent>,
    readings: Option<Readings>,
    console: Rc<dyn Console>,
}

impl WeatherStation {
    pub fn new(console: Rc<dyn Console>) -> Self {
        WeatherStation {
            observers: vec![],
            readings: None,
            console,
        }
    }

    /// Replaces the whole state record, then notifies every observer.
    pub fn compute_state(&mut self, readings: Readings) {
        self.readings = Some(readings);
        debug!("Weather station state set to {readings}");
        self.console
            .print_line(&format!("Subject: My state has just changed to: {readings}"));
        self.notify_observers(WeatherEvent::Measured);
    }

    pub fn notify_all(&self) {
        self.notify_observers(WeatherEvent::Broadcast);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl WeatherData for WeatherStation {
    fn readings(&self) -> Option<Readings> {
        self.readings
    }
}

impl Subject<WeatherEvent> for WeatherStation {
    fn register_observer(
        &mut self,
        observer: Rc<dyn Observer<Self, WeatherEvent>>,
    ) -> Registration {
        let registration = attach(&mut self.observers, observer);
        match registration {
            Registration::Attached => self.console.print_line("Subject: Attached an observer."),
            Registration::AlreadyAttached => self
                .console
                .print_line("Subject: Observer has been attached already."),
        }
        debug!(
            "{registration:?}, {} observer(s) registered",
            self.observers.len()
        );
        registration
    }

    fn unregister_observer(
        &mut self,
        observer: &Rc<dyn Observer<Self, WeatherEvent>>,
    ) -> Unregistration {
        let unregistration = detach(&mut self.observers, observer);
        match unregistration {
            Unregistration::Detached => self.console.print_line("Subject: Detached an observer."),
            Unregistration::Nonexistent => self.console.print_line("Subject: Nonexistent observer."),
        }
        debug!(
            "{unregistration:?}, {} observer(s) registered",
            self.observers.len()
        );
        unregistration
    }

    fn notify_observers(&self, event: WeatherEvent) {
        self.console.print_line("Subject: Notifying observers...");
        trace!("Notifying {} observer(s) of {event:?}", self.observers.len());
        for obs in &self.observers {
            obs.update(self, event);
        }
    }
}
