//! Typed profile section ordering
//!
//! Stored as a JSON array whose elements are either bare section ids or
//! `{"section": id, "visible": bool}` records. Reading never fails: a
//! missing, malformed or empty value resolves to the default order.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DEFAULT_SECTION_ORDER;

/// Profile page section identifier
///
/// Unknown ids are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Education,
    Experience,
    Papers,
    Interests,
    ExternalRoles,
    Achievements,
    Other(String),
}

impl SectionId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::About => "about-section",
            Self::Education => "education-section",
            Self::Experience => "experience-section",
            Self::Papers => "papers-section",
            Self::Interests => "interests-section",
            Self::ExternalRoles => "external-roles-section",
            Self::Achievements => "achievements-section",
            Self::Other(id) => id,
        }
    }

    pub fn parse(id: &str) -> Self {
        match id {
            "about-section" => Self::About,
            "education-section" => Self::Education,
            "experience-section" => Self::Experience,
            "papers-section" => Self::Papers,
            "interests-section" => Self::Interests,
            "external-roles-section" => Self::ExternalRoles,
            "achievements-section" => Self::Achievements,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::parse(&id))
    }
}

fn default_visible() -> bool {
    true
}

/// One element of a section order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
    Id(SectionId),
    Record {
        section: SectionId,
        #[serde(default = "default_visible")]
        visible: bool,
    },
}

impl SectionEntry {
    pub fn section(&self) -> &SectionId {
        match self {
            Self::Id(id) => id,
            Self::Record { section, .. } => section,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Id(_) => true,
            Self::Record { visible, .. } => *visible,
        }
    }
}

/// Ordered list of profile sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionEntry>);

impl Default for SectionOrder {
    fn default() -> Self {
        Self(DEFAULT_SECTION_ORDER.iter().map(|id| SectionEntry::Id(SectionId::parse(id))).collect())
    }
}

impl SectionOrder {
    pub fn new(entries: Vec<SectionEntry>) -> Self {
        Self(entries)
    }

    /// Parse a client-supplied value.
    ///
    /// Rejects anything that is not a JSON array, and arrays whose elements
    /// are neither strings nor `{section, visible}` records.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, String> {
        if !value.is_array() {
            return Err("section order must be a list".to_string());
        }
        Vec::<SectionEntry>::deserialize(value)
            .map(Self)
            .map_err(|e| format!("invalid section order entry: {e}"))
    }

    /// Resolve a stored column value, falling back to the default
    pub fn resolve(stored: Option<&str>) -> Self {
        stored
            .and_then(|raw| serde_json::from_str::<Vec<SectionEntry>>(raw).ok())
            .filter(|entries| !entries.is_empty())
            .map(Self)
            .unwrap_or_default()
    }

    /// JSON text for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.0
    }

    /// Sections to render, in order
    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionId> {
        self.0.iter().filter(|entry| entry.is_visible()).map(SectionEntry::section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_order_lists_every_known_section_visible() {
        let order = SectionOrder::default();
        assert_eq!(order.len(), 7);
        assert!(order.entries().iter().all(|e| e.section().is_known() && e.is_visible()));
        assert_eq!(order.entries()[0].section(), &SectionId::About);
    }

    #[test]
    fn accepts_bare_ids_and_records() {
        let order = SectionOrder::from_value(&json!([
            "papers-section",
            {"section": "about-section", "visible": false},
            {"section": "education-section"}
        ]))
        .unwrap();

        assert_eq!(order.entries()[0], SectionEntry::Id(SectionId::Papers));
        assert_eq!(
            order.entries()[1],
            SectionEntry::Record { section: SectionId::About, visible: false }
        );
        assert!(order.entries()[2].is_visible());
        assert_eq!(order.visible_sections().count(), 2);
    }

    #[test]
    fn unknown_ids_are_kept_verbatim() {
        let order = SectionOrder::from_value(&json!(["custom-section"])).unwrap();
        assert_eq!(order.entries()[0].section(), &SectionId::Other("custom-section".into()));
        assert_eq!(order.to_json().unwrap(), r#"["custom-section"]"#);
    }

    #[test]
    fn rejects_non_arrays_and_bad_elements() {
        assert!(SectionOrder::from_value(&json!({"section": "about-section"})).is_err());
        assert!(SectionOrder::from_value(&json!("about-section")).is_err());
        assert!(SectionOrder::from_value(&json!([42])).is_err());
        assert!(SectionOrder::from_value(&json!([{"visible": true}])).is_err());
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(SectionOrder::resolve(None), SectionOrder::default());
        assert_eq!(SectionOrder::resolve(Some("not json")), SectionOrder::default());
        assert_eq!(SectionOrder::resolve(Some("[]")), SectionOrder::default());
        assert_eq!(SectionOrder::resolve(Some(r#"{"a": 1}"#)), SectionOrder::default());
    }

    #[test]
    fn stored_value_round_trips() {
        let order = SectionOrder::from_value(&json!([
            {"section": "achievements-section", "visible": true},
            {"section": "about-section", "visible": false}
        ]))
        .unwrap();
        let stored = order.to_json().unwrap();
        assert_eq!(SectionOrder::resolve(Some(&stored)), order);
    }
}
