//! Metric and dimension catalog entries.
//!
//! `GET metrics` and `GET dimensions` both return an array of
//! `{short_name, aliases}` objects. The UI shows each entry with a label
//! derived from those two fields; [`display_label`] is that derivation.

use serde::{Deserialize, Serialize};

/// A catalog entry describing one metric or dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Canonical short name (e.g. `HR`).
    pub short_name: String,
    /// Alternative names, in server order. Absent on the wire means empty.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Descriptor {
    /// Create a descriptor from its parts.
    pub fn new(short_name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            short_name: short_name.into(),
            aliases,
        }
    }
}

/// Human-readable label for a descriptor.
///
/// `short_name` alone when there are no aliases, otherwise
/// `short_name` followed by two spaces and the comma-joined aliases in
/// brackets: `HR  [heart_rate, hr]`. Recomputed on every call.
pub fn display_label(descriptor: &Descriptor) -> String {
    if descriptor.aliases.is_empty() {
        return descriptor.short_name.clone();
    }
    format!(
        "{}  [{}]",
        descriptor.short_name,
        descriptor.aliases.join(", ")
    )
}

impl core::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&display_label(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_aliases() {
        let hr = Descriptor::new("HR", vec!["heart_rate".to_owned(), "hr".to_owned()]);
        assert_eq!(display_label(&hr), "HR  [heart_rate, hr]");
    }

    #[test]
    fn label_without_aliases_has_no_brackets() {
        let hr = Descriptor::new("HR", Vec::new());
        assert_eq!(display_label(&hr), "HR");
    }

    #[test]
    fn label_tracks_field_changes() {
        let mut d = Descriptor::new("SpO2", Vec::new());
        assert_eq!(d.to_string(), "SpO2");
        d.aliases.push("oxygen".to_owned());
        assert_eq!(d.to_string(), "SpO2  [oxygen]");
    }

    #[test]
    fn missing_aliases_deserialize_empty() {
        let parsed: Result<Descriptor, _> = serde_json::from_str(r#"{"short_name": "HRV"}"#);
        let d = parsed.ok();
        assert_eq!(d.as_ref().map(|d| d.aliases.len()), Some(0));
        assert_eq!(d.map(|d| display_label(&d)).as_deref(), Some("HRV"));
    }
}
