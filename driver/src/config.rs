use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory, relative to the workspace, holding the Java snippets used as test fixtures
pub const CLASS_BASKET_DIR: &'static str = "class_basket";

/// Directory, relative to the workspace, in which the byte mods tool is run
pub const BYTE_MODS_DIR: &'static str = "scripts/byte_mods/src";

/// Selects which flavor of the JVM is built by `buildjvm`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildMode {
    Release,
    Development,
}
impl BuildMode {
    /// The environment variable consulted by [`BuildMode::from_env`]
    pub const ENV: &'static str = "BUBBLE_RELEASE";

    /// Reads the build mode from `BUBBLE_RELEASE`
    pub fn from_env() -> Self {
        Self::from_value(env::var(Self::ENV).ok().as_deref())
    }

    /// Only the exact value `true` selects a release build; anything else,
    /// including an unset variable, is a development build.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Release,
            _ => Self::Development,
        }
    }

    #[inline]
    pub fn is_release(self) -> bool {
        self == Self::Release
    }

    /// The arguments given to `cargo` to build the JVM in this mode
    pub fn cargo_build_args(self) -> &'static [&'static str] {
        match self {
            Self::Release => &["build", "--verbose", "--release"],
            Self::Development => &["build", "--verbose"],
        }
    }
}
impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Release => f.write_str("release"),
            Self::Development => f.write_str("development"),
        }
    }
}

/// Configuration for a single dispatch
#[derive(Debug, Clone)]
pub struct Options {
    /// Root directory all external tools are run relative to
    pub workspace: PathBuf,
    pub mode: BuildMode,
    /// When set, failed steps are reflected in the exit code
    pub strict: bool,
}
impl Options {
    pub fn new(workspace: PathBuf, mode: BuildMode, strict: bool) -> Self {
        Self {
            workspace,
            mode,
            strict,
        }
    }

    #[inline]
    pub fn workspace(&self) -> &Path {
        self.workspace.as_path()
    }

    pub fn class_basket_dir(&self) -> PathBuf {
        self.workspace.join(CLASS_BASKET_DIR)
    }

    pub fn byte_mods_dir(&self) -> PathBuf {
        self.workspace.join(BYTE_MODS_DIR)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_exact_true_selects_release() {
        assert_eq!(BuildMode::from_value(Some("true")), BuildMode::Release);
        assert_eq!(BuildMode::from_value(None), BuildMode::Development);
        assert_eq!(BuildMode::from_value(Some("")), BuildMode::Development);
        assert_eq!(BuildMode::from_value(Some("TRUE")), BuildMode::Development);
        assert_eq!(BuildMode::from_value(Some("1")), BuildMode::Development);
        assert_eq!(BuildMode::from_value(Some("true ")), BuildMode::Development);
    }

    #[test]
    fn release_build_adds_release_flag() {
        assert_eq!(
            BuildMode::Release.cargo_build_args(),
            &["build", "--verbose", "--release"]
        );
        assert_eq!(
            BuildMode::Development.cargo_build_args(),
            &["build", "--verbose"]
        );
    }

    #[test]
    fn fixture_directories_are_relative_to_workspace() {
        let options = Options::new(PathBuf::from("/work"), BuildMode::Development, false);
        assert_eq!(options.class_basket_dir(), Path::new("/work/class_basket"));
        assert_eq!(
            options.byte_mods_dir(),
            Path::new("/work/scripts/byte_mods/src")
        );
    }
}
