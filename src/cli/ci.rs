//! CI stage shared by `new` and `pipeline`.

use std::fs;
use tracing::info;

use crate::core::config::Config;
use crate::core::encrypt::{encrypt_secrets, EncryptRequest, Encrypted};
use crate::core::project::Project;
use crate::core::properties::Properties;
use crate::core::runner::{Runner, Travis};
use crate::error::Result;

/// Load user configuration and run the encryption stage for `project`.
///
/// The project directory is created first; the CI tool runs inside it
/// and drops the encrypted keystore there.
pub fn encrypt(project: &Project) -> Result<Encrypted> {
    let config = Config::load()?;
    fs::create_dir_all(project.root())?;

    let runner = Travis::new(&config.tool, project.root())?;
    let version = runner.run(&["version"])?;
    info!(version = version.trim(), "ci tool ready");

    let properties = Properties::load(&config.properties)?;
    let request = EncryptRequest {
        properties: &properties,
        names: &config.secure,
        keystore: &config.keystore,
        project: project.root(),
    };
    encrypt_secrets(&request, &runner)
}
