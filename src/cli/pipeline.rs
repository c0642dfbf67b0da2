//! Pipeline command - print the rendered .travis.yml.

use std::path::Path;

use crate::cli::ci;
use crate::core::project::Project;
use crate::core::template::{self, ScaffoldContext, Templates};
use crate::error::Result;

/// Run the CI stage and print the pipeline file to stdout.
///
/// Nothing but the encrypted keystore is written to the project.
pub fn execute(project: &Path) -> Result<()> {
    let project = Project::new(project)?;
    let encrypted = ci::encrypt(&project)?;

    let context =
        ScaffoldContext::new(project.name(), "").with_ci(encrypted.key, encrypted.secure);
    let entries: Vec<_> = template::entries(project.name(), true)
        .into_iter()
        .filter(|e| e.name == template::PIPELINE)
        .collect();
    let templates = Templates::new(&entries)?;

    for entry in &entries {
        print!("{}", templates.render(entry, &context)?);
    }
    Ok(())
}
