//! Hatch - bootstrap Gradle projects with Travis CI publishing.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hatch::cli::output;
use hatch::cli::{execute, Cli};
use hatch::error::{EncryptError, Error, RunnerError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("HATCH_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hatch=debug")
        } else {
            EnvFilter::new("hatch=warn")
        }
    });

    // Logs go to stderr so `hatch pipeline` output can be redirected.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Encrypt(EncryptError::KeystoreNotFound(_)) => {
                Some("export your signing keyring or set `keystore` in ~/.hatch.toml")
            }
            Error::Encrypt(EncryptError::MissingProperty(_)) => {
                Some("add it to ~/.gradle/gradle.properties or set `properties` in ~/.hatch.toml")
            }
            Error::Runner(RunnerError::NotFound(_)) => Some("install the client: gem install travis"),
            Error::Runner(RunnerError::Failed { .. }) => Some("run: travis login"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
