use env_logger::{Builder, Env};

use crate::gauges::GAUGE_LEVEL;

const DEFAULT_FILTER: &str = "warn";
const GAUGE_TARGET: &str = "dipstick";

/// Default filter directives, letting gauge records through when they are published.
fn default_filter(publish_gauges: bool) -> String {
    if publish_gauges {
        format!(
            "{DEFAULT_FILTER},{GAUGE_TARGET}={}",
            GAUGE_LEVEL.as_str().to_lowercase()
        )
    } else {
        DEFAULT_FILTER.to_string()
    }
}

pub fn init(publish_gauges: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(publish_gauges))).init();
}

#[cfg(test)]
mod tests {
    use env_logger::Builder;
    use log::{Level, Log, Metadata};

    use super::default_filter;

    fn is_enabled(filter: &str, target: &str, level: Level) -> bool {
        let logger = Builder::new().parse_filters(filter).build();
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_default_filter() {
        assert_eq!("warn", default_filter(false));
        assert_eq!("warn,dipstick=info", default_filter(true));
    }

    #[test]
    fn test_default_filter_should_only_let_gauges_through_when_published() {
        // Given
        let without_gauges = default_filter(false);
        let with_gauges = default_filter(true);

        // Then
        assert!(!is_enabled(&without_gauges, "dipstick::output::log", Level::Info));
        assert!(
            is_enabled(&with_gauges, "dipstick::output::log", Level::Info),
            "Should let gauge records through"
        );
        assert!(
            !is_enabled(&with_gauges, "behavioural::observer", Level::Info),
            "Should keep other targets at warn"
        );
        assert!(is_enabled(&with_gauges, "pattern_demos", Level::Warn));
    }
}
