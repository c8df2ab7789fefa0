//! Output markers, markable entity types and fallback tuning.
//!
//! Read once from TOML. The embedded `default_settings.toml` is used unless
//! `init_custom` installs another document before the first `settings()`.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE: OnceLock<String> = OnceLock::new();

/// Validate `toml_content` and install it in place of the defaults.
///
/// Only takes effect before the first `settings()` call. A second override
/// is rejected.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    OVERRIDE
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| {
        let source = OVERRIDE.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(source).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML: {0}")]
    Parse(String),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("custom settings must be installed before first use")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub markers: MarkerSettings,
    pub entities: EntitySettings,
    pub fallback: FallbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkerSettings {
    /// Prepended to proper-noun renderings.
    pub namer: String,
    /// Lexicon-entry prefix that suppresses the namer mark.
    pub initialism: String,
    /// Appended after affix or plural reconstruction.
    pub constructed: String,
    /// Appended after phoneme-derived renderings.
    pub phonetic: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntitySettings {
    pub namer_types: BTreeSet<String>,
}

impl EntitySettings {
    pub fn is_markable(&self, label: &str) -> bool {
        self.namer_types.contains(label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    pub unresolved_mark: char,
    pub strip_marks: Vec<char>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(markers.namer);
    check_non_empty!(markers.initialism);
    check_non_empty!(markers.constructed);
    check_non_empty!(markers.phonetic);

    if s.markers.initialism.chars().count() != 1 {
        return Err(SettingsError::InvalidValue {
            field: "markers.initialism".to_string(),
            reason: "must be a single character".to_string(),
        });
    }

    if s.fallback.unresolved_mark.is_alphabetic() {
        return Err(SettingsError::InvalidValue {
            field: "fallback.unresolved_mark".to_string(),
            reason: "must not be a letter".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.markers.namer, "·");
        assert_eq!(s.markers.initialism, "⸰");
        assert_eq!(s.markers.constructed, "[c]");
        assert_eq!(s.markers.phonetic, "[p]");
        assert_eq!(s.entities.namer_types.len(), 9);
        assert!(s.entities.is_markable("PERSON"));
        assert!(s.entities.is_markable("WORK_OF_ART"));
        assert!(!s.entities.is_markable("DATE"));
        assert_eq!(s.fallback.unresolved_mark, '*');
        assert_eq!(s.fallback.strip_marks, vec!['ˈ', 'ˌ', 'ː', 'ˑ']);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r##"
[markers]
namer = "^"
initialism = "~"
constructed = "{c}"
phonetic = "{p}"

[entities]
namer_types = ["PERSON"]

[fallback]
unresolved_mark = "#"
strip_marks = []
"##;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.markers.namer, "^");
        assert!(s.entities.is_markable("PERSON"));
        assert!(!s.entities.is_markable("ORG"));
        assert_eq!(s.fallback.unresolved_mark, '#');
        assert!(s.fallback.strip_marks.is_empty());
    }

    #[test]
    fn error_empty_marker() {
        let toml = r#"
[markers]
namer = ""
initialism = "⸰"
constructed = "[c]"
phonetic = "[p]"

[entities]
namer_types = []

[fallback]
unresolved_mark = "*"
strip_marks = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("markers.namer"));
    }

    #[test]
    fn error_multi_char_initialism() {
        let toml = r#"
[markers]
namer = "·"
initialism = "⸰⸰"
constructed = "[c]"
phonetic = "[p]"

[entities]
namer_types = []

[fallback]
unresolved_mark = "*"
strip_marks = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("markers.initialism"));
    }

    #[test]
    fn error_letter_unresolved_mark() {
        let toml = r#"
[markers]
namer = "·"
initialism = "⸰"
constructed = "[c]"
phonetic = "[p]"

[entities]
namer_types = []

[fallback]
unresolved_mark = "x"
strip_marks = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("fallback.unresolved_mark"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[markers]
namer = "·"
initialism = "⸰"
constructed = "[c]"
phonetic = "[p]"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
