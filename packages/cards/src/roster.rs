//! # Roster — the loaded dataset document
//!
//! The document has the shape `{ "school": {...}, "students": [...], "teachers": [...] }`.
//! [`Roster::from_json`] parses it and runs the single annotation pass: every record gets
//! the document's school (one shared `Arc`, never cloned per record) and its type tag.
//! After that the roster is read-only.
//!
//! Lookups are exact-match linear scans over students followed by teachers. Duplicate
//! `(type, id)` pairs are accepted as-is; the first match wins and a warning is logged.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::CardsError;
use crate::models::{non_blank, text_or_number, Person, PersonKind, PersonType, RelatedPerson, School};

#[derive(Debug, Deserialize)]
struct Document {
    school: School,
    #[serde(default)]
    students: Vec<StudentRecord>,
    #[serde(default)]
    teachers: Vec<TeacherRecord>,
}

#[derive(Debug, Deserialize)]
struct StudentRecord {
    #[serde(deserialize_with = "text_or_number")]
    id: String,
    name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    contact: String,
    #[serde(default, deserialize_with = "text_or_number")]
    address: String,
    #[serde(default, deserialize_with = "non_blank")]
    photo: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    class: String,
    #[serde(default, deserialize_with = "non_blank")]
    father: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    dob: String,
}

#[derive(Debug, Deserialize)]
struct TeacherRecord {
    #[serde(deserialize_with = "text_or_number")]
    id: String,
    name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    contact: String,
    #[serde(default, deserialize_with = "text_or_number")]
    address: String,
    #[serde(default, deserialize_with = "non_blank")]
    photo: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    designation: String,
    #[serde(default)]
    related_persons: Vec<RelatedPerson>,
}

/// All people from one dataset document, annotated with their school and type.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    pub school: Arc<School>,
    pub students: Vec<Person>,
    pub teachers: Vec<Person>,
}

impl Roster {
    /// Parse a dataset document and annotate its records.
    pub fn from_json(s: &str) -> Result<Self, CardsError> {
        let document: Document = serde_json::from_str(s)?;
        let roster = Self::from_document(document);
        tracing::debug!(
            students = roster.students.len(),
            teachers = roster.teachers.len(),
            "roster loaded"
        );
        for (person_type, id) in roster.duplicate_keys() {
            tracing::warn!("duplicate {person_type} id {id}: lookups resolve to the first record");
        }
        Ok(roster)
    }

    fn from_document(document: Document) -> Self {
        let school = Arc::new(document.school);

        let students = document
            .students
            .into_iter()
            .map(|r| Person {
                id: r.id,
                name: r.name,
                contact: r.contact,
                address: r.address,
                photo: r.photo,
                kind: PersonKind::Student {
                    class: r.class,
                    father: r.father,
                    dob: r.dob,
                },
                school: Arc::clone(&school),
            })
            .collect();

        let teachers = document
            .teachers
            .into_iter()
            .map(|r| Person {
                id: r.id,
                name: r.name,
                contact: r.contact,
                address: r.address,
                photo: r.photo,
                kind: PersonKind::Teacher {
                    designation: r.designation,
                    related_persons: r.related_persons,
                },
                school: Arc::clone(&school),
            })
            .collect();

        Roster {
            school,
            students,
            teachers,
        }
    }

    /// People of one type, in document order.
    pub fn group(&self, person_type: PersonType) -> &[Person] {
        match person_type {
            PersonType::Student => &self.students,
            PersonType::Teacher => &self.teachers,
        }
    }

    /// Students followed by teachers.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.students.iter().chain(self.teachers.iter())
    }

    pub fn len(&self) -> usize {
        self.students.len() + self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, person_type: PersonType, id: &str) -> Option<&Person> {
        self.people().find(|p| p.matches(person_type, id))
    }

    /// Lookup with an unparsed type tag, as it arrives in a query string.
    pub fn lookup(&self, raw_type: &str, id: &str) -> Option<&Person> {
        PersonType::parse(raw_type).and_then(|t| self.find(t, id))
    }

    fn duplicate_keys(&self) -> Vec<(PersonType, &str)> {
        let mut seen = HashSet::new();
        self.people()
            .filter(|p| !seen.insert((p.person_type(), p.id.as_str())))
            .map(|p| (p.person_type(), p.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
        "school": {
            "name": "Indus Nursery School",
            "address": "Station Road, Bhopal",
            "contact": {"phone": "0755-2400000", "email": "office@indus.example"},
            "session": "2025-26",
            "codes": {"udise": "23320310101", "Scholar": "SCH-7"},
            "logo": "logo.png",
            "building": "building.jpg"
        },
        "students": [
            {"id": "S1", "name": "asha roy", "class": "5", "father": "Bikash Roy",
             "dob": "2015-04-02", "contact": "9000000001", "address": "12, Lake View", "photo": "s1.jpg"},
            {"id": "S2", "name": "kabir das", "class": "3", "dob": "2017-01-20",
             "contact": 9000000002, "address": "4, Hill Lane"}
        ],
        "teachers": [
            {"id": "T1", "name": "meera iyer", "designation": "PRT", "contact": "9000000010",
             "address": "Civil Lines", "related_persons": [{"relation": "husband", "name": "Ravi Iyer"}]},
            {"id": "S1", "name": "sunil rao", "designation": "TGT", "contact": "9000000011",
             "address": "MP Nagar", "photo": ""}
        ]
    }"#;

    pub(crate) fn sample() -> Roster {
        Roster::from_json(SAMPLE).unwrap()
    }

    #[test]
    fn test_annotates_type_and_shared_school() {
        let roster = sample();
        assert_eq!(roster.students.len(), 2);
        assert_eq!(roster.teachers.len(), 2);

        for person in &roster.students {
            assert_eq!(person.person_type(), PersonType::Student);
            assert!(Arc::ptr_eq(&person.school, &roster.school));
        }
        for person in &roster.teachers {
            assert_eq!(person.person_type(), PersonType::Teacher);
            assert!(Arc::ptr_eq(&person.school, &roster.school));
        }
        assert_eq!(roster.school.name, "Indus Nursery School");
    }

    #[test]
    fn test_people_keeps_document_order() {
        let roster = sample();
        let ids: Vec<&str> = roster.people().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "T1", "S1"]);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_optional_fields() {
        let roster = sample();
        let kabir = &roster.students[1];
        assert_eq!(kabir.contact, "9000000002");
        assert!(kabir.photo.is_none());
        match &kabir.kind {
            PersonKind::Student { father, .. } => assert!(father.is_none()),
            other => panic!("expected student, got {other:?}"),
        }
        assert!(roster.teachers[1].photo.is_none());
    }

    #[test]
    fn test_find_uses_type_and_id() {
        let roster = sample();
        // Same id in both groups resolves by type.
        assert_eq!(roster.find(PersonType::Student, "S1").unwrap().name, "asha roy");
        assert_eq!(roster.find(PersonType::Teacher, "S1").unwrap().name, "sunil rao");
        assert!(roster.find(PersonType::Teacher, "T9").is_none());
        assert!(roster.lookup("teacher", "T1").is_some());
        assert!(roster.lookup("principal", "T1").is_none());
    }

    #[test]
    fn test_every_key_matches_exactly_one_record() {
        let roster = sample();
        for person in roster.people() {
            let matches = roster
                .people()
                .filter(|p| p.matches(person.person_type(), &person.id))
                .count();
            assert_eq!(matches, 1);
        }
    }

    #[test]
    fn test_duplicate_keys_are_reported() {
        let json = r#"{"school": {"name": "X"},
            "students": [{"id": "A", "name": "one"}, {"id": "A", "name": "two"}]}"#;
        let roster = Roster::from_json(json).unwrap();
        assert_eq!(roster.duplicate_keys(), vec![(PersonType::Student, "A")]);
        assert_eq!(roster.find(PersonType::Student, "A").unwrap().name, "one");
    }

    #[test]
    fn test_non_string_optional_fields_are_missing() {
        let json = r#"{"school": {"name": "X"},
            "students": [{"id": "S1", "name": "asha", "father": 42},
                         {"id": "S2", "name": "kabir", "photo": 0}],
            "teachers": [{"id": "T1", "name": "meera", "photo": false}]}"#;
        let roster = Roster::from_json(json).unwrap();
        match &roster.students[0].kind {
            PersonKind::Student { father, .. } => assert!(father.is_none()),
            other => panic!("expected student, got {other:?}"),
        }
        assert!(roster.students[1].photo.is_none());
        assert!(roster.teachers[0].photo.is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let roster = Roster::from_json(r#"{"school": {"name": "X"}}"#).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(
            Roster::from_json("{not json"),
            Err(CardsError::Parse(_))
        ));
        assert!(matches!(
            Roster::from_json(r#"{"students": []}"#),
            Err(CardsError::Parse(_))
        ));
    }
}
