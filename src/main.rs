//! Ortho Pong entry point
//!
//! Usage: `ortho-pong [settings.json]` or `ortho-pong --print-settings`.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use ortho_pong::Settings;
use ortho_pong::platform;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--print-settings") {
        return match Settings::default().to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("failed to serialize settings: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let settings_path = arg.map(PathBuf::from);
    let settings = match Settings::load_or_default(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Ortho Pong starting...");
    match platform::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
