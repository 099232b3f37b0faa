//! Source and destination path resolution.
//!
//! The source directory defaults to the process's current working directory
//! and the destination root is the user's home directory.  Both are looked
//! up through [`Environment`] so tests can inject their own values.
use std::io;
use std::path::{Path, PathBuf};

use crate::config::MappingEntry;
use crate::error::ConfigError;

/// Home directory variables in lookup order; the first non-empty one wins.
#[cfg(windows)]
pub const HOME_VARS: [&str; 2] = ["USERPROFILE", "HOME"];
/// Home directory variables in lookup order; the first non-empty one wins.
#[cfg(not(windows))]
pub const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// Process environment queried during path resolution.
pub trait Environment: Send + Sync {
    /// Value of the environment variable `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory has been removed or is unreadable.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Production [`Environment`] backed by [`std::env`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Look up the home directory.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotFound`] when no variable in [`HOME_VARS`]
/// holds a non-empty value.
pub fn home_dir(env: &dyn Environment) -> Result<PathBuf, ConfigError> {
    HOME_VARS
        .iter()
        .find_map(|key| env.var(key).filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .ok_or(ConfigError::HomeNotFound {
            primary: HOME_VARS[0],
            fallback: HOME_VARS[1],
        })
}

/// Absolute paths for one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// What the link should point to.
    pub source: PathBuf,
    /// Where the link lives.
    pub dest: PathBuf,
    /// Home directory `dest` lives under.  Never created by the manager.
    pub home: PathBuf,
}

/// Joins entry names onto the source and home directories.
///
/// Built once per operation; never reused across operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    source_dir: PathBuf,
    home_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver from explicit directories.
    #[must_use]
    pub const fn new(source_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            source_dir,
            home_dir,
        }
    }

    /// Resolve both directories from `env`.
    ///
    /// `source_override` replaces the current working directory as the
    /// source directory when given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the home directory is unset, or if the
    /// current working directory is needed and cannot be read.
    pub fn from_env(
        env: &dyn Environment,
        source_override: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let home_dir = home_dir(env)?;
        let source_dir = match source_override {
            Some(dir) => dir.to_path_buf(),
            None => env
                .current_dir()
                .map_err(|source| ConfigError::CurrentDir { source })?,
        };
        Ok(Self::new(source_dir, home_dir))
    }

    /// Directory the sources are read from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory the links are created in.
    #[must_use]
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Compute the paths for `entry`.  No normalization or filesystem access.
    #[must_use]
    pub fn resolve(&self, entry: &MappingEntry) -> ResolvedPaths {
        ResolvedPaths {
            source: self.source_dir.join(&entry.source),
            dest: self.home_dir.join(&entry.dest),
            home: self.home_dir.clone(),
        }
    }
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::test_helpers::FakeEnvironment;
    use super::*;

    #[test]
    fn home_dir_prefers_first_variable() {
        let env = FakeEnvironment::new()
            .with_var(HOME_VARS[0], "/first")
            .with_var(HOME_VARS[1], "/second");
        assert_eq!(home_dir(&env).unwrap(), PathBuf::from("/first"));
    }

    #[test]
    fn home_dir_falls_back_to_second_variable() {
        let env = FakeEnvironment::new().with_var(HOME_VARS[1], "/second");
        assert_eq!(home_dir(&env).unwrap(), PathBuf::from("/second"));
    }

    #[test]
    fn home_dir_skips_empty_value() {
        let env = FakeEnvironment::new()
            .with_var(HOME_VARS[0], "")
            .with_var(HOME_VARS[1], "/second");
        assert_eq!(home_dir(&env).unwrap(), PathBuf::from("/second"));
    }

    #[test]
    fn home_dir_missing_is_config_error() {
        let err = home_dir(&FakeEnvironment::new()).unwrap_err();
        assert!(matches!(err, ConfigError::HomeNotFound { .. }));
    }

    #[test]
    fn from_env_uses_cwd_as_source_dir() {
        let env = FakeEnvironment::new()
            .with_var(HOME_VARS[0], "/home/user")
            .with_cwd("/src/dotfiles");
        let resolver = PathResolver::from_env(&env, None).unwrap();
        assert_eq!(resolver.source_dir(), Path::new("/src/dotfiles"));
        assert_eq!(resolver.home_dir(), Path::new("/home/user"));
    }

    #[test]
    fn from_env_override_skips_cwd() {
        let env = FakeEnvironment::new().with_var(HOME_VARS[0], "/home/user");
        let resolver = PathResolver::from_env(&env, Some(Path::new("/override"))).unwrap();
        assert_eq!(resolver.source_dir(), Path::new("/override"));
    }

    #[test]
    fn from_env_unreadable_cwd_is_config_error() {
        let env = FakeEnvironment::new().with_var(HOME_VARS[0], "/home/user");
        let err = PathResolver::from_env(&env, None).unwrap_err();
        assert!(matches!(err, ConfigError::CurrentDir { .. }));
    }

    #[test]
    fn from_env_missing_home_wins_over_cwd() {
        let env = FakeEnvironment::new().with_cwd("/src");
        let err = PathResolver::from_env(&env, None).unwrap_err();
        assert!(matches!(err, ConfigError::HomeNotFound { .. }));
    }

    #[test]
    fn resolve_joins_names() {
        let resolver = PathResolver::new(PathBuf::from("/src"), PathBuf::from("/home/user"));
        let paths = resolver.resolve(&MappingEntry::new("a.conf", ".a_conf"));
        assert_eq!(paths.source, PathBuf::from("/src/a.conf"));
        assert_eq!(paths.dest, PathBuf::from("/home/user/.a_conf"));
        assert_eq!(paths.home, PathBuf::from("/home/user"));
    }

    #[test]
    fn resolve_keeps_nested_dest() {
        let resolver = PathResolver::new(PathBuf::from("/src"), PathBuf::from("/home/user"));
        let paths = resolver.resolve(&MappingEntry::new("git/config", ".config/git/config"));
        assert_eq!(paths.dest, PathBuf::from("/home/user/.config/git/config"));
    }
}
