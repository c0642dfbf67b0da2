//! Hatch - bootstrap Gradle/Kotlin projects with Travis CI publishing.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── new           # Scaffold a project directory
//! │   ├── pipeline      # Print the rendered .travis.yml
//! │   ├── templates     # List bundled templates
//! │   ├── ci            # Encryption stage wiring
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.hatch.toml
//!     ├── properties    # Java-style credentials file
//!     ├── runner        # External CI tool seam
//!     ├── encrypt       # Secret encryption stage
//!     ├── template/     # Embedded templates and rendering
//!     └── scaffold      # Idempotent, atomic file writer
//! ```
//!
//! # Flow
//!
//! 1. Credentials named in the config are encrypted one by one with
//!    `travis encrypt`, then the signing keystore with `travis encrypt-file`.
//! 2. Every template is rendered against the shared context and written
//!    only where no file exists yet.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::encrypt::{encrypt_secrets, parse_key_id, EncryptRequest, Encrypted};
pub use crate::core::project::Project;
pub use crate::core::properties::Properties;
pub use crate::core::runner::{Runner, Travis};
pub use crate::core::scaffold::{render_all, EntryReport, Outcome, Report};
pub use crate::core::template::{ScaffoldContext, TemplateEntry, Templates};
pub use crate::core::types::{EncryptedSecret, KeyId};
