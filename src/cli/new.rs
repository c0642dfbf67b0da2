//! New command - scaffold a project directory.

use std::path::Path;
use tracing::{info, warn};

use crate::cli::{ci, output};
use crate::core::encrypt::encrypted_keystore_path;
use crate::core::project::Project;
use crate::core::scaffold::{self, Outcome, Report};
use crate::core::template::{self, ScaffoldContext, Templates};
use crate::core::types::KeyId;
use crate::error::{Result, ScaffoldError};

/// Create every missing project file under `project`.
///
/// With `travis`, credentials are encrypted first and `.travis.yml` is
/// added to the set. A failing CI stage drops only `.travis.yml`: the
/// remaining files are still written and the CI error is returned after.
pub fn execute(project: &Path, description: &str, travis: bool, json: bool) -> Result<()> {
    let project = Project::new(project)?;
    info!(
        project = project.name(),
        root = %project.root().display(),
        travis,
        "scaffolding"
    );

    let mut context = ScaffoldContext::new(project.name(), description);
    let mut ci_error = None;

    if travis {
        match ci::encrypt(&project) {
            Ok(encrypted) => context = context.with_ci(encrypted.key, encrypted.secure),
            Err(e) => {
                warn!(error = %e, "ci stage failed, skipping .travis.yml");
                ci_error = Some(e);
            }
        }
    }

    let entries = template::entries(project.name(), context.has_ci());
    let templates = Templates::new(&entries)?;
    let report = scaffold::render_all(project.root(), &entries, &context, &templates);

    let stale = stale_pipeline(&context, &report);
    if let Some(key) = stale {
        warn!(key = %key, "kept existing .travis.yml with a re-encrypted keystore");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&project, &context, &report);
        if let Some(key) = stale {
            println!();
            output::warn(&format!(
                "kept existing .travis.yml, but secring.gpg.enc was re-encrypted with key id {}",
                key
            ));
            output::hint("update the $encrypted_*_key and $encrypted_*_iv names in .travis.yml");
        }
    }

    if let Some(e) = ci_error {
        return Err(e);
    }

    let failed = report.failed().count();
    if failed > 0 {
        return Err(ScaffoldError::EntriesFailed(failed).into());
    }

    Ok(())
}

/// Key id of a fresh encryption whose pipeline file was left untouched.
fn stale_pipeline<'a>(context: &'a ScaffoldContext, report: &Report) -> Option<&'a KeyId> {
    let skipped = report.skipped().any(|e| e.name == template::PIPELINE);
    if skipped {
        context.key.as_ref()
    } else {
        None
    }
}

fn print_report(project: &Project, context: &ScaffoldContext, report: &Report) {
    output::section("Scaffold");
    output::kv("project:", project.name());
    output::kv("location:", project.root().display());
    if let Some(key) = &context.key {
        output::kv("key id:", key);
        output::kv(
            "keystore:",
            encrypted_keystore_path(project.root()).display(),
        );
    }
    println!();

    for entry in &report.entries {
        let path = output::path(entry.path.display());
        match &entry.outcome {
            Outcome::Created => output::success(&format!("created {}", path)),
            Outcome::Skipped => output::warn(&format!("skipped {}: already exists", path)),
            Outcome::Failed(reason) => output::error(&format!("failed {}: {}", path, reason)),
        }
    }

    println!();
    output::kv("created:", report.created().count());
    output::kv("skipped:", report.skipped().count());
}
