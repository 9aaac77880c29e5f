// SPDX-License-Identifier: MPL-2.0
use gpxif::app::{self, Command};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gpxif=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = std::env::args_os().skip(1).collect();
    let options = match app::parse_args(args) {
        Ok(Command::Help) => {
            print!("{}", app::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Tag(options)) => options,
        Err(err) => {
            eprintln!("{err}\n\n{}", app::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match app::run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // Display already includes the photo and stage context.
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
