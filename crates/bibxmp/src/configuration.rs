//! Reader preferences.
//!
//! Preferences are stored as TOML:
//!
//! ```toml
//! keyword_separator  = "; "
//! use_privacy_filter = true
//! privacy_filter     = ["abstract", "owner"]
//! ```
//!
//! Every key is optional; missing keys take their [`Default`] values.

use super::*;

/// Options controlling how metadata is turned into entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmpPreferences {
  /// Separator placed between Dublin Core subjects in the `keywords` field
  pub keyword_separator:  String,
  /// Whether fields listed in [`privacy_filter`](Self::privacy_filter) are dropped
  pub use_privacy_filter: bool,
  /// Field names removed from every entry when the filter is enabled
  pub privacy_filter:     BTreeSet<String>,
}

impl Default for XmpPreferences {
  fn default() -> Self {
    Self {
      keyword_separator:  ", ".to_string(),
      use_privacy_filter: false,
      privacy_filter:     BTreeSet::new(),
    }
  }
}

impl XmpPreferences {
  /// Reads preferences from a TOML file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading preferences from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Loads preferences from `path` if given, else from [`default_path`](Self::default_path)
  /// when that file exists, else falls back to the defaults.
  ///
  /// # Errors
  ///
  /// An explicitly given path that does not exist is a [`BibXmpError::Config`] error.
  pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) if !path.exists() =>
        Err(BibXmpError::Config(format!("Preferences file {} does not exist", path.display()))),
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.exists() {
          Self::from_path(default_path)
        } else {
          trace!("No preferences at {}, using defaults", default_path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Returns the default location of the preferences file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.config/bibxmp/config.toml`
  /// - On macOS: `~/Library/Application Support/bibxmp/config.toml`
  /// - On Windows: `%APPDATA%\bibxmp\config.toml`
  /// - Fallback: `./bibxmp/config.toml` in the current directory
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("bibxmp").join("config.toml")
  }

  /// Whether `field` must be dropped from extracted entries.
  pub fn is_filtered(&self, field: &str) -> bool {
    self.use_privacy_filter
      && self.privacy_filter.iter().any(|filtered| filtered.eq_ignore_ascii_case(field))
  }

  /// Removes all filtered fields from `entry`.
  pub fn apply_privacy_filter(&self, entry: &mut BibEntry) {
    if !self.use_privacy_filter {
      return;
    }
    for field in &self.privacy_filter {
      if entry.remove_field(field).is_some() {
        trace!("Privacy filter removed field {field}");
      }
    }
  }
}
