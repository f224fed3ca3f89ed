use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{PipesError, Result};

/// Matches `group/repo` at the end of a short name, HTTP URL or SSH
/// remote, with an optional `.git` suffix.
static GIT_SHORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*[/:])?(?P<group>[^/:\s]+)/(?P<repo>[^/:\s]+?)(?:\.git)?/?$")
        .expect("git short pattern is valid")
});

/// Application identifier passed into template rendering.
///
/// Derived from the repository's git short name as `{repo}{group}`,
/// lower-cased: `forrest/core` becomes `coreforrest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName(String);

impl AppName {
    pub fn from_git_short(git_short: &str) -> Result<Self> {
        let caps = GIT_SHORT
            .captures(git_short.trim())
            .ok_or_else(|| PipesError::InvalidGitShort {
                value: git_short.to_string(),
            })?;

        let name = format!("{}{}", &caps["repo"], &caps["group"]).to_lowercase();
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name() {
        let app = AppName::from_git_short("forrest/core").unwrap();
        assert_eq!(app.as_str(), "coreforrest");
    }

    #[test]
    fn mixed_case_is_lowered() {
        let app = AppName::from_git_short("Forrest/Core").unwrap();
        assert_eq!(app.as_str(), "coreforrest");
    }

    #[test]
    fn ssh_remote_with_git_suffix() {
        let app = AppName::from_git_short("git@gitlab.example.com:forrest/core.git").unwrap();
        assert_eq!(app.as_str(), "coreforrest");
    }

    #[test]
    fn http_url_uses_last_two_segments() {
        let app = AppName::from_git_short("https://gitlab.example.com/forrest/core/").unwrap();
        assert_eq!(app.as_str(), "coreforrest");
    }

    #[test]
    fn missing_group_is_rejected() {
        let err = AppName::from_git_short("core").unwrap_err();
        assert!(matches!(err, PipesError::InvalidGitShort { .. }));
        assert!(AppName::from_git_short("").is_err());
        assert!(AppName::from_git_short("forrest/").is_err());
    }
}
