use std::rc::Rc;

use behavioural::observer::{Readings, WeatherDisplay, WeatherEvent, WeatherStation};
use common::{
    console::Console,
    subject_observer::{Observer, Subject},
};

use crate::gauges::GaugeDisplay;

type StationObserver = Rc<dyn Observer<WeatherStation, WeatherEvent>>;

pub fn run(console: Rc<dyn Console>, publish_gauges: bool) {
    let mut station = WeatherStation::new(console.clone());
    let mobile: StationObserver = Rc::new(WeatherDisplay::mobile(console.clone()));
    let web: StationObserver = Rc::new(WeatherDisplay::web(console));

    station.register_observer(mobile.clone());
    station.register_observer(web.clone());
    station.register_observer(mobile);
    if publish_gauges {
        station.register_observer(Rc::new(GaugeDisplay::new()));
    }

    station.compute_state(Readings::default());
    station.compute_state(Readings::new(5.0, 6.0, 7.0));

    station.unregister_observer(&web);
    station.unregister_observer(&web);
    station.compute_state(Readings::default());
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common_test::RecordingConsole;

    use super::run;

    #[test]
    fn test_observer_demo_output() {
        let console = RecordingConsole::new();

        run(Rc::new(console.clone()), false);

        assert_eq!(
            vec![
                "Subject: Attached an observer.",
                "Subject: Attached an observer.",
                "Subject: Observer has been attached already.",
                "Subject: My state has just changed to: 1, 2, 3",
                "Subject: Notifying observers...",
                "MobileWeatherDisplay: 1, 2, 3",
                "WebWeatherDisplay: 1, 2, 3",
                "Subject: My state has just changed to: 5, 6, 7",
                "Subject: Notifying observers...",
                "MobileWeatherDisplay: 5, 6, 7",
                "WebWeatherDisplay: 5, 6, 7",
                "Subject: Detached an observer.",
                "Subject: Nonexistent observer.",
                "Subject: My state has just changed to: 1, 2, 3",
                "Subject: Notifying observers...",
                "MobileWeatherDisplay: 1, 2, 3",
            ],
            console.lines()
        );
    }

    #[test]
    fn test_observer_demo_with_gauges() {
        let console = RecordingConsole::new();

        run(Rc::new(console.clone()), true);

        let lines = console.lines();
        assert_eq!(
            3,
            lines
                .iter()
                .filter(|line| *line == "Subject: Attached an observer.")
                .count(),
            "Should register the gauge display as a third observer"
        );
        assert_eq!(17, lines.len(), "Gauges should not write to the console");
    }
}
