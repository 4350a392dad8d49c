//! Cornwell Room: a cube and a sphere under two lights.
//!
//! Keys: `M` toggles the mirror material, `T` toggles transparency,
//! `L` toggles light one.

mod app;
mod config;
mod exit;
mod scene;
mod state;

use cornwell_engine::device::GpuInit;
use cornwell_engine::logging::{LoggingConfig, init_logging};
use cornwell_engine::window::Runtime;

use crate::app::CornwellApp;
use crate::config::SceneConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = SceneConfig::default();
    let result = Runtime::run(config.runtime_config(), GpuInit::default(), CornwellApp::new(config));

    if let Err(err) = &result {
        log::error!("{err}");
    }
    std::process::exit(exit::exit_code(&result));
}
