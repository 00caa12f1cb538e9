use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

fn fresh_id() -> Uuid {
    Uuid::new_v4()
}

/// One inventory record.
///
/// The persisted shape is exactly `{name, khr, usd}`. The `id` exists only in
/// memory so callers can keep addressing a record while positions shift
/// underneath them; a fresh one is assigned on every hydration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    pub name: String,
    /// Cleaned KHR amount: digits and an optional decimal point, or empty
    /// when the price is unknown.
    pub khr: String,
    /// Two-decimal USD amount, or empty when unknown. Tracks `khr` at the
    /// fixed rate unless it was supplied explicitly (manual override).
    pub usd: String,
    #[serde(skip, default = "fresh_id")]
    pub id: Uuid,
}

impl BookRecord {
    pub fn new(name: String, khr: String, usd: String) -> Self {
        Self {
            name,
            khr,
            usd,
            id: fresh_id(),
        }
    }
}

/// Display theme for the terminal renderer, persisted as a bare string slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!(
                "Unknown theme \"{}\" (expected \"light\" or \"dark\")",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_shape_omits_id() {
        let record = BookRecord::new("Alpha".into(), "4000".into(), "1.00".into());
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("id"));
        assert!(json.contains("\"name\":\"Alpha\""));
    }

    #[test]
    fn hydration_assigns_fresh_ids() {
        let raw = r#"{"name":"Alpha","khr":"4000","usd":"1.00"}"#;
        let a: BookRecord = serde_json::from_str(raw).unwrap();
        let b: BookRecord = serde_json::from_str(raw).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn theme_parsing() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
    }
}
