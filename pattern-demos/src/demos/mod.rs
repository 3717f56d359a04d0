mod decorator;
mod observer;
mod state;
mod strategy;

use std::rc::Rc;

use common::console::Console;
use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{config::app::AppConfig, error::AppError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Demo {
    Observer,
    State,
    Strategy,
    Decorator,
}

pub fn run(demo: Demo, console: Rc<dyn Console>, config: &AppConfig) -> Result<(), AppError> {
    info!("Running {demo} demo");
    match demo {
        Demo::Observer => observer::run(console, config.publish_gauges),
        Demo::State => state::run(console),
        Demo::Strategy => strategy::run(console)?,
        Demo::Decorator => decorator::run(console),
    }
    Ok(())
}

/// Runs `demos` in order, separated by a blank line and introduced by a banner when enabled.
pub fn run_all(
    demos: &[Demo],
    console: Rc<dyn Console>,
    config: &AppConfig,
) -> Result<(), AppError> {
    for (index, &demo) in demos.iter().enumerate() {
        if index > 0 {
            console.print_line("");
        }
        if config.banner {
            console.print_line(&format!("=== {demo} ==="));
        }
        run(demo, console.clone(), config)?;
    }
    Ok(())
}
