//! Configuration management

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteError};
use crate::nav::data::{default_contacts, default_nav, ContactLine, SiteData, DEFAULT_SITE_NAME};
use crate::nav::parse_nav;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub site: SiteConfig,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_emergency")]
    pub emergency: String,
    #[serde(default = "default_lifeline")]
    pub lifeline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: default_site_name(),
            emergency: default_emergency(),
            lifeline: default_lifeline(),
        }
    }
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_emergency() -> String {
    default_contacts()[0].number.clone()
}

fn default_lifeline() -> String {
    default_contacts()[1].number.clone()
}

impl SiteConfig {
    pub fn contacts(&self) -> Vec<ContactLine> {
        vec![
            ContactLine {
                label: "Emergency".to_string(),
                number: self.emergency.clone(),
            },
            ContactLine {
                label: "Hospital Lifeline".to_string(),
                number: self.lifeline.clone(),
            },
        ]
    }
}

/// Subdirectory holding site data files
const CONFIG_SUBDIR_NAME: &str = "medcenter";

/// Navigation data override file
pub const NAV_FILE_NAME: &str = "navbar.json";

/// Get config directory (MEDCENTER_CONFIG_DIR or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDCENTER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/medcenter-web");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("medcenter-web");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/medcenter-web");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("medcenter-web");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Get config subdirectory for site data files
pub fn get_config_subdir() -> PathBuf {
    get_config_dir().join(CONFIG_SUBDIR_NAME)
}

/// Locate a data file: subdirectory first, then the config dir root
pub fn find_config_file(filename: &str) -> Option<PathBuf> {
    let subdir_path = get_config_subdir().join(filename);
    if subdir_path.exists() {
        return Some(subdir_path);
    }

    let root_path = get_config_dir().join(filename);
    if root_path.exists() {
        return Some(root_path);
    }

    None
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SiteError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (MEDCENTER_SITE__NAME, etc.)
        .add_source(
            ::config::Environment::with_prefix("MEDCENTER")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: MEDCENTER_PORT > PORT > config > default
    if let Ok(port) = std::env::var("MEDCENTER_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

/// Load the site menu, falling back to the built-in one.
///
/// A missing file is normal. A file that cannot be read or parsed is logged
/// and ignored so a typo never takes the site down.
pub fn load_navigation() -> Vec<crate::nav::NavItem> {
    let Some(path) = find_config_file(NAV_FILE_NAME) else {
        tracing::debug!("No {} found, using built-in navigation", NAV_FILE_NAME);
        return default_nav();
    };

    match read_file(&path).and_then(|content| parse_nav(&content)) {
        Ok(items) => {
            tracing::info!(
                "Loaded {} navigation entries from {}",
                items.len(),
                path.display()
            );
            items
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            default_nav()
        }
    }
}

/// Assemble everything the pages render from configuration.
pub fn load_site(config: &Config) -> SiteData {
    SiteData {
        name: config.site.name.clone(),
        contacts: config.site.contacts(),
        navigation: load_navigation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        env::set_var("MEDCENTER_CONFIG_DIR", "/tmp/medcenter-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.site.name, DEFAULT_SITE_NAME);
        assert_eq!(config.site.emergency, "121");
        assert_eq!(config.site.lifeline, "7028587790");
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        env::set_var("MEDCENTER_CONFIG_DIR", "/tmp/medcenter-test-nonexistent");

        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_medcenter_port_takes_precedence_over_port() {
        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        env::set_var("MEDCENTER_CONFIG_DIR", "/tmp/medcenter-test-nonexistent");

        env::set_var("MEDCENTER_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        env::set_var("MEDCENTER_CONFIG_DIR", "/tmp/medcenter-test-nonexistent");

        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(config.port, 8080, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn test_site_settings_from_config_file() {
        env::remove_var("MEDCENTER_PORT");
        env::remove_var("PORT");
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "port = 9100\n[site]\nname = \"St. Elsewhere\"\nemergency = \"112\"\n",
        )
        .expect("write config");
        env::set_var("MEDCENTER_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(config.port, 9100);
        assert_eq!(config.site.name, "St. Elsewhere");
        assert_eq!(config.site.contacts()[0].number, "112");
        assert_eq!(config.site.lifeline, "7028587790");
    }

    #[test]
    #[serial]
    fn test_navigation_prefers_subdir_file() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let subdir = temp_dir.path().join("medcenter");
        std::fs::create_dir_all(&subdir).expect("create subdir");
        std::fs::write(
            subdir.join(NAV_FILE_NAME),
            r#"[{"name": "Home"}, {"name": "Visit"}]"#,
        )
        .expect("write subdir nav");
        std::fs::write(
            temp_dir.path().join(NAV_FILE_NAME),
            r#"[{"name": "Legacy"}]"#,
        )
        .expect("write root nav");
        env::set_var("MEDCENTER_CONFIG_DIR", temp_dir.path());

        let items = load_navigation();

        env::remove_var("MEDCENTER_CONFIG_DIR");

        let labels: Vec<_> = items.iter().map(|i| i.label().to_string()).collect();
        assert_eq!(labels, vec!["Home", "Visit"]);
    }

    #[test]
    #[serial]
    fn test_navigation_falls_back_to_root_file() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join(NAV_FILE_NAME),
            r#"[{"name": "About Us", "items": ["Our Team"]}]"#,
        )
        .expect("write root nav");
        env::set_var("MEDCENTER_CONFIG_DIR", temp_dir.path());

        let items = load_navigation();

        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].children()[0].path, "/about/our-team");
    }

    #[test]
    #[serial]
    fn test_invalid_navigation_uses_builtin() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join(NAV_FILE_NAME), r#"[{"name": ""}]"#)
            .expect("write nav");
        env::set_var("MEDCENTER_CONFIG_DIR", temp_dir.path());

        let items = load_navigation();

        env::remove_var("MEDCENTER_CONFIG_DIR");

        assert_eq!(items, default_nav());
    }
}
