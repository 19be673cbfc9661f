use serde::{Serialize, Deserialize};
use serde_yaml;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Configuration defaults
pub mod defaults {
    pub fn currency() -> String { String::from("THB") }
}

/// Tracker settings, captured once at construction and immutable afterwards
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    /// The analytics property receiving events; its prefix picks the schema
    pub tracking_id: String,
    /// ISO 4217 code stamped on every outbound monetary field
    #[serde(default = "defaults::currency")]
    pub currency: String,
    /// Log every inbound event and outbound payload at debug level
    #[serde(default)]
    pub debug: bool,
}

impl Settings {
    /// Default settings around a tracking id
    pub fn for_tracking_id<S: Into<String>>(tracking_id: S) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            currency: defaults::currency(),
            debug: false,
        }
    }
}

/// Parse a settings file given a path
fn parse_settings_file(path: &Path) -> Result<Settings, String> {
    let path_str = path.to_string_lossy();
    let file = File::open(path).map_err(|e| format!("{}: {}", path_str, e))?;
    let settings = serde_yaml::from_reader(file).map_err(|e| format!("{}: {}", path_str, e))?;
    Ok(settings)
}

/// Locates and parses the settings file
pub fn get_settings(cmd_arg: Option<&String>) -> Result<Settings, String> {
    let given_location = cmd_arg
        .map(|s| PathBuf::from(s))
        .or(std::env::var("ECOMMERCE_GTAG_CONFIG").map(|s| PathBuf::from(s)).ok());

    /* If a path was given on the command line, ignore all other options */
    if let Some(path) = given_location {
        return parse_settings_file(path.as_path());
    }

    /* Otherwise, try the working directory */
    let inferred_locations = [
        std::env::current_dir().map(|p| p.join("ecommerce-gtag.yml")).ok(),
        std::env::current_dir().map(|p| p.join("ecommerce-gtag.yaml")).ok(),
    ];

    let settings = inferred_locations.iter()
        .flatten()
        .filter(|p| p.as_path().is_file())
        .map(|p| parse_settings_file(p))
        .flatten()
        .next();

    settings.ok_or(String::from("no valid settings file found"))
}
