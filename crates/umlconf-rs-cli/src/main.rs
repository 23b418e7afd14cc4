// crates/umlconf-rs-cli/src/main.rs

use log::{error, info};
use std::process::ExitCode;
use umlconf_rs_cli::{PipelineConfig, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&PipelineConfig::default()) {
        Ok(report) => {
            info!(
                "Done: {} classes, {} metadata entries, {} configuration changes",
                report.classes, report.metadata_entries, report.delta_changes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
