//! Template sources compiled into the binary.
//!
//! Paths are relative to this file and checked at compile time.

pub const TRAVIS: &str = include_str!("../../../templates/travis.yml.hbs");
pub const DEPENDENCIES: &str = include_str!("../../../templates/dependencies.kt.hbs");
pub const BUILDSRC: &str = include_str!("../../../templates/buildsrc.gradle.kts.hbs");
pub const GITIGNORE: &str = include_str!("../../../templates/gitignore.hbs");
pub const ROOT_BUILD: &str = include_str!("../../../templates/build.gradle.kts.hbs");
pub const SETTINGS: &str = include_str!("../../../templates/settings.gradle.kts.hbs");
pub const MODULE_BUILD: &str = include_str!("../../../templates/module.gradle.kts.hbs");
pub const MAIN: &str = include_str!("../../../templates/main.kt.hbs");
pub const MAIN_TEST: &str = include_str!("../../../templates/main_test.kt.hbs");
pub const GRADLE_PROPERTIES: &str = include_str!("../../../templates/gradle.properties.hbs");
