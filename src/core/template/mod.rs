//! Bundled project templates.
//!
//! Template bodies are embedded with [`include_str!`] in [`embedded`] and
//! rendered with Handlebars. Every template sees the same
//! [`ScaffoldContext`]:
//!
//! - `{{project}}`: project name (last component of the target directory)
//! - `{{description}}`: project description
//! - `{{key}}`: key id of the encrypted keystore (empty without CI)
//! - `{{ci}}`: whether the CI stage ran
//! - `{{secure}}`: encrypted secrets, in declaration order
//!
//! ## Adding a new template
//!
//! 1. Create the `.hbs` file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a [`Template`] to [`CATALOG`]

pub mod embedded;

use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::core::types::{EncryptedSecret, KeyId};
use crate::error::{Result, TemplateError};

/// Where a template lands, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dest {
    /// Directly under the project root.
    Root(&'static str),
    /// Under the module directory named after the project.
    Module(&'static str),
}

/// A bundled template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub dest: Dest,
    pub body: &'static str,
    /// Only rendered when the CI stage produced a key id.
    pub needs_ci: bool,
}

/// Name of the `.travis.yml` template.
pub const PIPELINE: &str = "travis";

/// All bundled templates, in write order.
pub const CATALOG: &[Template] = &[
    Template {
        name: PIPELINE,
        dest: Dest::Root(".travis.yml"),
        body: embedded::TRAVIS,
        needs_ci: true,
    },
    Template {
        name: "dependencies",
        dest: Dest::Root("buildSrc/src/main/kotlin/Dependencies.kt"),
        body: embedded::DEPENDENCIES,
        needs_ci: false,
    },
    Template {
        name: "buildsrc",
        dest: Dest::Root("buildSrc/build.gradle.kts"),
        body: embedded::BUILDSRC,
        needs_ci: false,
    },
    Template {
        name: "gitignore",
        dest: Dest::Root(".gitignore"),
        body: embedded::GITIGNORE,
        needs_ci: false,
    },
    Template {
        name: "root-build",
        dest: Dest::Root("build.gradle.kts"),
        body: embedded::ROOT_BUILD,
        needs_ci: false,
    },
    Template {
        name: "settings",
        dest: Dest::Root("settings.gradle.kts"),
        body: embedded::SETTINGS,
        needs_ci: false,
    },
    Template {
        name: "module-build",
        dest: Dest::Module("build.gradle.kts"),
        body: embedded::MODULE_BUILD,
        needs_ci: false,
    },
    Template {
        name: "main",
        dest: Dest::Module("src/main/kotlin/Main.kt"),
        body: embedded::MAIN,
        needs_ci: false,
    },
    Template {
        name: "main-test",
        dest: Dest::Module("src/test/kotlin/MainTest.kt"),
        body: embedded::MAIN_TEST,
        needs_ci: false,
    },
    Template {
        name: "properties",
        dest: Dest::Root("gradle.properties"),
        body: embedded::GRADLE_PROPERTIES,
        needs_ci: false,
    },
];

/// Look up a bundled template by name.
pub fn find(name: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.name == name)
}

/// A template bound to its destination for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: &'static str,
    /// Destination relative to the project root.
    pub path: PathBuf,
    pub body: &'static str,
}

impl Template {
    /// Destination relative to the project root.
    pub fn path(&self, project: &str) -> PathBuf {
        match self.dest {
            Dest::Root(rel) => PathBuf::from(rel),
            Dest::Module(rel) => Path::new(project).join(rel),
        }
    }

    pub fn entry(&self, project: &str) -> TemplateEntry {
        TemplateEntry {
            name: self.name,
            path: self.path(project),
            body: self.body,
        }
    }
}

/// Bind the catalog to a project.
///
/// The pipeline template is included only when `with_ci` is set.
pub fn entries(project: &str, with_ci: bool) -> Vec<TemplateEntry> {
    CATALOG
        .iter()
        .filter(|t| with_ci || !t.needs_ci)
        .map(|t| t.entry(project))
        .collect()
}

/// Substitution values shared by every template in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldContext {
    pub project: String,
    pub description: String,
    pub key: Option<KeyId>,
    pub secure: Vec<EncryptedSecret>,
}

impl ScaffoldContext {
    /// Context without CI values.
    pub fn new(project: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            description: description.into(),
            key: None,
            secure: Vec::new(),
        }
    }

    /// Attach the output of the encryption stage.
    pub fn with_ci(mut self, key: KeyId, secure: Vec<EncryptedSecret>) -> Self {
        self.key = Some(key);
        self.secure = secure;
        self
    }

    pub fn has_ci(&self) -> bool {
        self.key.is_some()
    }

    fn view(&self) -> View<'_> {
        View {
            project: &self.project,
            description: &self.description,
            key: self.key.as_ref().map(KeyId::as_str).unwrap_or_default(),
            key_var: self.key.as_ref().map(KeyId::key_var).unwrap_or_default(),
            iv_var: self.key.as_ref().map(KeyId::iv_var).unwrap_or_default(),
            ci: self.has_ci(),
            secure: &self.secure,
        }
    }
}

/// What the templates see.
#[derive(Serialize)]
struct View<'a> {
    project: &'a str,
    description: &'a str,
    key: &'a str,
    key_var: String,
    iv_var: String,
    ci: bool,
    secure: &'a [EncryptedSecret],
}

/// Compiled templates for one run.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Compile the bodies of `entries`.
    ///
    /// Output is not HTML-escaped and unknown placeholders fail the render.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Register` if a body does not parse.
    pub fn new(entries: &[TemplateEntry]) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        for entry in entries {
            registry
                .register_template_string(entry.name, entry.body)
                .map_err(|source| TemplateError::Register {
                    name: entry.name,
                    source: Box::new(source),
                })?;
        }

        Ok(Self { registry })
    }

    /// Render one entry against `context`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Render` on a missing placeholder or an
    /// entry that was not compiled by [`Templates::new`].
    pub fn render(&self, entry: &TemplateEntry, context: &ScaffoldContext) -> Result<String> {
        trace!(template = entry.name, "rendering");
        self.registry
            .render(entry.name, &context.view())
            .map_err(|source| {
                TemplateError::Render {
                    name: entry.name,
                    source: Box::new(source),
                }
                .into()
            })
    }
}
