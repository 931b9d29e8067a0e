//! Build configuration, resolved once at startup and passed down explicitly.

use std::fmt;
use std::path::PathBuf;

/// Content API the site is generated from
pub const DEFAULT_API_BASE: &str = "https://migronis-admin-api-production.up.railway.app/api";

/// Subpath the production site is served under
pub const PRODUCTION_BASE_PATH: &str = "/migronis-brazil";

/// Deployment environment, which decides the URL prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Production if forced by flag or if `SITE_ENV=production`
    pub fn detect(force_production: bool) -> Self {
        let from_env = std::env::var("SITE_ENV")
            .map(|value| value.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        if force_production || from_env {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

/// URL prefix applied to every internal link and asset reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => BasePath(String::new()),
            Environment::Production => BasePath(PRODUCTION_BASE_PATH.to_string()),
        }
    }

    /// Prefix an absolute site path (`"/"`, `"/assets/site.js"`, ...)
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn home(&self) -> String {
        self.link("/")
    }

    pub fn property(&self, id: u64) -> String {
        self.link(&format!("/property/{}/", id))
    }

    pub fn asset(&self, name: &str) -> String {
        self.link(&format!("/assets/{}", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the generator needs to know about this build
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_base: String,
    pub out_dir: PathBuf,
    pub environment: Environment,
    pub base_path: BasePath,
}

impl SiteConfig {
    pub fn new(api_base: impl Into<String>, out_dir: impl Into<PathBuf>, environment: Environment) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            out_dir: out_dir.into(),
            environment,
            base_path: BasePath::for_environment(environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_links_have_no_prefix() {
        let base = BasePath::for_environment(Environment::Development);
        assert_eq!(base.home(), "/");
        assert_eq!(base.property(4), "/property/4/");
    }

    #[test]
    fn test_production_links_use_subpath() {
        let base = BasePath::for_environment(Environment::Production);
        assert_eq!(base.home(), "/migronis-brazil/");
        assert_eq!(base.property(4), "/migronis-brazil/property/4/");
        assert_eq!(base.asset("site.js"), "/migronis-brazil/assets/site.js");
    }

    #[test]
    fn test_config_derives_base_path_once() {
        let config = SiteConfig::new("https://api.test/api/", "out", Environment::Production);
        assert_eq!(config.api_base, "https://api.test/api");
        assert_eq!(config.base_path.as_str(), PRODUCTION_BASE_PATH);
    }
}
