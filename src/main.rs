//! Regenerate every report figure into `figures/remade/`

use std::process::ExitCode;

use sensor_figures::prelude::*;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    match FigureGenerator::new(ReportPaths::from_crate_root()).generate_all() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
