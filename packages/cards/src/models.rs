//! # Domain models for schools and the people carrying their cards
//!
//! [`School`] mirrors the `school` object of the dataset document and is shared by
//! every [`Person`] through one `Arc`. A [`Person`] holds the fields common to
//! students and teachers; the type-specific fields live in [`PersonKind`], so every
//! consumer matches exhaustively instead of probing for optional fields.
//!
//! Identifiers are unique per type only: `(PersonType, id)` is the lookup key.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// School letterhead data, shared by all cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub address: String,
    #[serde(default)]
    pub contact: SchoolContact,
    #[serde(default, deserialize_with = "text_or_number")]
    pub session: String,
    #[serde(default, deserialize_with = "lenient")]
    pub codes: Option<SchoolCodes>,
    #[serde(default, deserialize_with = "non_blank")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub building: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolContact {
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: String,
}

/// Administrative codes printed on the card back and the verification panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolCodes {
    /// UDISE registration code ("Dise Code").
    #[serde(default, deserialize_with = "non_blank")]
    pub udise: Option<String>,
    #[serde(
        default,
        rename = "Scholar",
        alias = "scholar",
        deserialize_with = "non_blank"
    )]
    pub scholar: Option<String>,
}

impl School {
    pub fn udise_code(&self) -> Option<&str> {
        self.codes.as_ref().and_then(|c| c.udise.as_deref())
    }

    pub fn scholar_code(&self) -> Option<&str> {
        self.codes.as_ref().and_then(|c| c.scholar.as_deref())
    }
}

/// A teacher's relative or guardian listed on the card ("father", "spouse", ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedPerson {
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub name: String,
}

/// Discriminant of a [`Person`]; also the `type` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
    Student,
    Teacher,
}

impl PersonType {
    pub const ALL: [PersonType; 2] = [PersonType::Student, PersonType::Teacher];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonType::Student => "student",
            PersonType::Teacher => "teacher",
        }
    }

    /// Capitalized form used in headings: "Student" / "Teacher".
    pub fn label(self) -> &'static str {
        match self {
            PersonType::Student => "Student",
            PersonType::Teacher => "Teacher",
        }
    }

    /// Parse the exact lowercase tag. Anything else is not a person type.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(PersonType::Student),
            "teacher" => Some(PersonType::Teacher),
            _ => None,
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific card fields.
#[derive(Clone, Debug, PartialEq)]
pub enum PersonKind {
    Student {
        class: String,
        father: Option<String>,
        dob: String,
    },
    Teacher {
        designation: String,
        related_persons: Vec<RelatedPerson>,
    },
}

/// A student or teacher record after the load-time annotation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub photo: Option<String>,
    pub kind: PersonKind,
    pub school: Arc<School>,
}

impl Person {
    pub fn person_type(&self) -> PersonType {
        match self.kind {
            PersonKind::Student { .. } => PersonType::Student,
            PersonKind::Teacher { .. } => PersonType::Teacher,
        }
    }

    /// Element id of the card's verification-code slot: `qr-<type>-<id>`.
    pub fn code_slot_id(&self) -> String {
        format!("qr-{}-{}", self.person_type(), self.id)
    }

    pub fn matches(&self, person_type: PersonType, id: &str) -> bool {
        self.person_type() == person_type && self.id == id
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accepts a JSON string, number or null. Numbers keep their decimal text form.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Optional string where blank, null or a non-string value counts as missing.
pub(crate) fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        #[allow(dead_code)]
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Optional nested value that degrades to `None` when it has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_type_tags() {
        assert_eq!(PersonType::parse("student"), Some(PersonType::Student));
        assert_eq!(PersonType::parse("teacher"), Some(PersonType::Teacher));
        assert_eq!(PersonType::parse("Teacher"), None);
        assert_eq!(PersonType::parse(""), None);
        assert_eq!(PersonType::Teacher.to_string(), "teacher");
        assert_eq!(PersonType::Student.label(), "Student");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("father"), "Father");
        assert_eq!(capitalize("spouse name"), "Spouse name");
        assert_eq!(capitalize("éa"), "Éa");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_school_codes_optional() {
        let school: School = serde_json::from_str(
            r#"{"name": "Indus", "contact": {"phone": 98765, "email": "a@b.c"},
                "codes": {"udise": "0912", "Scholar": " "}, "logo": ""}"#,
        )
        .unwrap();
        assert_eq!(school.contact.phone, "98765");
        assert_eq!(school.udise_code(), Some("0912"));
        assert_eq!(school.scholar_code(), None);
        assert!(school.logo.is_none());
        assert!(school.building.is_none());
    }

    #[test]
    fn test_malformed_optional_school_fields() {
        let school: School = serde_json::from_str(
            r#"{"name": "Indus", "codes": "0912", "logo": 7, "building": {"src": "b.jpg"}}"#,
        )
        .unwrap();
        assert!(school.codes.is_none());
        assert!(school.logo.is_none());
        assert!(school.building.is_none());

        let school: School =
            serde_json::from_str(r#"{"name": "Indus", "codes": {"udise": 912, "Scholar": "S-1"}}"#)
                .unwrap();
        assert_eq!(school.udise_code(), None);
        assert_eq!(school.scholar_code(), Some("S-1"));
    }

    #[test]
    fn test_code_slot_id() {
        let person = Person {
            id: "T3".to_string(),
            name: "r. sen".to_string(),
            contact: String::new(),
            address: String::new(),
            photo: None,
            kind: PersonKind::Teacher {
                designation: "PRT".to_string(),
                related_persons: Vec::new(),
            },
            school: Arc::new(School::default()),
        };
        assert_eq!(person.code_slot_id(), "qr-teacher-T3");
        assert!(person.matches(PersonType::Teacher, "T3"));
        assert!(!person.matches(PersonType::Student, "T3"));
    }
}
