use behavioural::observer::{WeatherData, WeatherEvent};
use common::subject_observer::Observer;
use const_format::concatcp;
use dipstick::{Input, InputScope, Log, LogScope};
use log::{trace, Level};

pub const GAUGE_LEVEL: Level = Level::Info;

const GAUGE_PREFIX: &str = "weather.";
const GAUGE_A: &str = concatcp!(GAUGE_PREFIX, "a");
const GAUGE_B: &str = concatcp!(GAUGE_PREFIX, "b");
const GAUGE_C: &str = concatcp!(GAUGE_PREFIX, "c");

/// Where gauge values end up.
pub trait GaugeSink {
    fn publish(&self, name: &str, value: f64);
}

impl GaugeSink for LogScope {
    fn publish(&self, name: &str, value: f64) {
        self.gauge(name).value(value);
    }
}

/// Publishes the readings of the notifying subject as gauges, on the log output by default.
pub struct GaugeDisplay<T = LogScope> {
    sink: T,
}

impl GaugeDisplay<LogScope> {
    pub fn new() -> Self {
        Self::with_sink(Log::to_log().level(GAUGE_LEVEL).metrics())
    }
}

impl Default for GaugeDisplay<LogScope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GaugeSink> GaugeDisplay<T> {
    pub fn with_sink(sink: T) -> Self {
        GaugeDisplay { sink }
    }
}

impl<S, T> Observer<S, WeatherEvent> for GaugeDisplay<T>
where
    S: WeatherData + ?Sized,
    T: GaugeSink,
{
    fn update(&self, source: &S, event: WeatherEvent) {
        if let Some(readings) = source.readings() {
            trace!("Publishing gauges on {event:?}: {readings}");
            self.sink.publish(GAUGE_A, readings.a);
            self.sink.publish(GAUGE_B, readings.b);
            self.sink.publish(GAUGE_C, readings.c);
        }
    }
}
