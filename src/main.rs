#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use std::process::ExitCode;

use clap::Parser;
use thisslime::TracingError;
use tracing::{debug, info, trace};

use numguess::{
    cli::{Cli, Command},
    framework::{self, ConfigSetup},
    functions::games::number_guess::{random, Session},
    terminal, Error,
};

mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    framework::logging::init_tracing();

    match dotenv {
        Ok(path) => debug!(?path, "loaded .env"),
        Err(err) => trace!(%err, "no .env loaded"),
    }

    let build = if built_info::DEBUG {
        format!("development build {}", built_info::PKG_VERSION)
    } else {
        format!("release {}", built_info::PKG_VERSION)
    };

    info!("{build}");

    let cli = Cli::parse();

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.trace();
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: Cli) -> Result<(), Error> {
    let config = ConfigSetup::load(&cli)?;

    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}")
    }

    match cli.subcommand() {
        Command::Config => {
            info!(path = ?config.path(), "printing config");
            println!("{}", config.to_toml()?);
            Ok(())
        }
        Command::Play => {
            let rng = random::seeded(config.seed());
            let mut session = Session::new(config.catalog().clone(), config.difficulty(), rng);

            info!(difficulty = %session.difficulty(), "starting game");

            terminal::play(&mut session).await?;
            Ok(())
        }
    }
}
