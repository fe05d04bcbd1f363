#![forbid(unsafe_code)]

//! PawDesk slideout walkthrough
//!
//! Drives a scripted front-desk session through the slideout stack and prints
//! every frame the renderer would draw.
//!
//! # Running
//!
//! ```sh
//! cargo run -p pawdesk-demo
//! cargo run -p pawdesk-demo -- --config slideout.toml --json-logs
//! PAWDESK_LOG=debug cargo run -p pawdesk-demo
//! ```

mod cli;
mod forms;
mod logging;
mod session;

use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use pawdesk_runtime::{PanelController, QueryCache, SlideoutConfig};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.json_logs);

    let config = match &args.config {
        Some(path) => match SlideoutConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("pawdesk-demo: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SlideoutConfig::default(),
    };
    for problem in config.validate() {
        tracing::warn!(%problem, "slideout config");
    }

    let cache = Rc::new(QueryCache::new());
    let ctl = match PanelController::from_config(&config, cache.clone()) {
        Ok(ctl) => ctl,
        Err(err) => {
            eprintln!("pawdesk-demo: {err}");
            return ExitCode::FAILURE;
        }
    };

    let transcript = session::run(&ctl, &cache, args.script);
    for line in transcript {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
