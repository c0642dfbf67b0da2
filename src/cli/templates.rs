//! Templates command - list the bundled catalog.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::project::Project;
use crate::core::template::CATALOG;
use crate::error::Result;

#[derive(Serialize)]
struct Listing {
    name: &'static str,
    path: PathBuf,
    travis_only: bool,
}

/// List templates with destinations resolved for `project`.
pub fn execute(project: Option<&Path>, json: bool) -> Result<()> {
    let (root, name) = match project {
        Some(p) => {
            let project = Project::new(p)?;
            (project.root().to_path_buf(), project.name().to_string())
        }
        None => (PathBuf::new(), "<project>".to_string()),
    };

    let listings: Vec<_> = CATALOG
        .iter()
        .map(|t| Listing {
            name: t.name,
            path: root.join(t.path(&name)),
            travis_only: t.needs_ci,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    output::section("Templates");
    for l in &listings {
        let note = if l.travis_only { "  (--travis)" } else { "" };
        println!("  {:<14}{}{}", l.name, output::path(l.path.display()), note);
    }
    Ok(())
}
