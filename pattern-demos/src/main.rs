mod config;
mod demos;
mod error;
mod gauges;

use std::{env, rc::Rc};

use common::console::StdoutConsole;
use log::debug;

use crate::{config::app::AppConfig, demos::Demo, error::AppError};

fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::new()?;
    config::log::init(app_config.publish_gauges);
    debug!("Loaded configuration: {:?}", app_config);

    let demos = select_demos(env::args().skip(1), &app_config)?;
    demos::run_all(&demos, Rc::new(StdoutConsole), &app_config)?;
    Ok(())
}

/// Demos named on the command line take precedence over the configured ones.
fn select_demos<I>(args: I, app_config: &AppConfig) -> Result<Vec<Demo>, AppError>
where
    I: Iterator<Item = String>,
{
    let requested = args
        .map(|arg| arg.parse::<Demo>().map_err(|_| AppError::UnknownDemo(arg)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(if requested.is_empty() {
        app_config.demos.clone()
    } else {
        requested
    })
}
