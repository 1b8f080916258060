//! # Verification — URL codec, lookup and the detail panel
//!
//! Every card encodes `<origin><path>?type=<type>&id=<id>`. Opening that URL runs a
//! single lookup at load: [`PageLocation::verification_query`] pulls the pair out of
//! the query string, [`VerificationOutcome::resolve`] searches the roster, and the
//! outcome yields a [`VerificationStatus`] plus, on a match, a [`VerificationDetail`].

use url::form_urlencoded;
use url::Url;

use crate::card::{CardView, ImageView, InfoLine, NOT_AVAILABLE};
use crate::config::CardsConfig;
use crate::error::CardsError;
use crate::models::{capitalize, Person, PersonKind, PersonType};
use crate::roster::Roster;

/// The parts of the current page address the app reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLocation {
    /// Scheme, host and port: "https://cards.example"
    pub origin: String,
    /// Path only: "/index.html"
    pub path: String,
    /// Raw query string, with or without the leading '?'
    pub query: String,
}

impl PageLocation {
    pub fn parse(url: &str) -> Result<Self, CardsError> {
        let url = Url::parse(url)?;
        Ok(Self {
            origin: url.origin().ascii_serialization(),
            path: url.path().to_string(),
            query: url.query().unwrap_or_default().to_string(),
        })
    }

    /// Verification URL for one person on this page.
    pub fn verification_url(&self, person: &Person) -> String {
        self.url_for(&VerificationQuery::for_person(person))
    }

    pub fn url_for(&self, query: &VerificationQuery) -> String {
        query.to_url(&self.origin, &self.path)
    }

    pub fn verification_query(&self) -> Option<VerificationQuery> {
        VerificationQuery::from_query(&self.query)
    }

    /// Resolve a possibly relative reference (e.g. the dataset path) against this page.
    pub fn resolve(&self, reference: &str) -> Result<String, CardsError> {
        let base = Url::parse(&format!("{}{}", self.origin, self.path))?;
        Ok(base.join(reference)?.to_string())
    }
}

/// The `(type, id)` pair carried by a verification URL.
///
/// The type stays a raw string: an unknown type is still reported back by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationQuery {
    pub person_type: String,
    pub id: String,
}

impl VerificationQuery {
    pub fn for_person(person: &Person) -> Self {
        Self {
            person_type: person.person_type().as_str().to_string(),
            id: person.id.clone(),
        }
    }

    /// Both `type` and `id` must be present and non-empty. The first occurrence wins.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut person_type = None;
        let mut id = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "type" if person_type.is_none() => person_type = Some(value.into_owned()),
                "id" if id.is_none() => id = Some(value.into_owned()),
                _ => {}
            }
        }
        match (person_type, id) {
            (Some(person_type), Some(id)) if !person_type.is_empty() && !id.is_empty() => {
                Some(Self { person_type, id })
            }
            _ => None,
        }
    }

    pub fn for_card(card: &CardView) -> Self {
        Self {
            person_type: card.person_type.as_str().to_string(),
            id: card.id.clone(),
        }
    }

    pub fn from_url(url: &str) -> Result<Option<Self>, CardsError> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub fn to_url(&self, origin: &str, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("type", &self.person_type)
            .append_pair("id", &self.id)
            .finish();
        format!("{origin}{path}?{query}")
    }
}

/// Result of looking a query up in the roster.
#[derive(Clone, Debug, PartialEq)]
pub enum VerificationOutcome {
    Verified(Person),
    NotFound { person_type: String, id: String },
}

impl VerificationOutcome {
    pub fn resolve(roster: &Roster, query: &VerificationQuery) -> Self {
        match roster.lookup(&query.person_type, &query.id) {
            Some(person) => VerificationOutcome::Verified(person.clone()),
            None => VerificationOutcome::NotFound {
                person_type: query.person_type.clone(),
                id: query.id.clone(),
            },
        }
    }

    pub fn person(&self) -> Option<&Person> {
        match self {
            VerificationOutcome::Verified(person) => Some(person),
            VerificationOutcome::NotFound { .. } => None,
        }
    }

    /// Status text; `verified_on` is the local date shown on success.
    pub fn status(&self, verified_on: &str) -> VerificationStatus {
        match self {
            VerificationOutcome::Verified(_) => VerificationStatus {
                valid: true,
                headline: "ID Verified Successfully!".to_string(),
                detail: format!("Verified on {verified_on}"),
            },
            VerificationOutcome::NotFound { person_type, id } => VerificationStatus {
                valid: false,
                headline: "Invalid ID".to_string(),
                detail: format!("No {person_type} found with ID: {id}"),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VerificationStatus {
    pub valid: bool,
    pub headline: String,
    pub detail: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailSection {
    Person,
    School,
    SchoolContact,
    Validity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailCard {
    pub section: DetailSection,
    pub title: String,
    pub lines: Vec<InfoLine>,
}

/// Everything the verification panel shows for a matched person.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationDetail {
    pub photo: ImageView,
    pub photo_caption: String,
    pub cards: Vec<DetailCard>,
}

fn line(label: impl Into<String>, value: &str) -> InfoLine {
    InfoLine::new(label, value)
}

impl VerificationDetail {
    pub fn build(person: &Person, config: &CardsConfig) -> Self {
        let school = &person.school;
        let person_type = person.person_type();

        let mut personal = vec![line("Name", &person.name)];
        match &person.kind {
            PersonKind::Student { class, father, dob } => {
                personal.push(line("Class", class));
                personal.push(line("Father's Name", father.as_deref().unwrap_or_default()));
                personal.push(line("Date of Birth", dob));
            }
            PersonKind::Teacher {
                designation,
                related_persons,
            } => {
                personal.push(line("Designation", designation));
                personal.extend(
                    related_persons
                        .iter()
                        .map(|r| line(capitalize(&r.relation), &r.name)),
                );
            }
        }
        personal.push(line("Contact", &person.contact));
        personal.push(line("Address", &person.address));

        let code_label = match person_type {
            PersonType::Student => "Scholar Code",
            PersonType::Teacher => "Staff Code",
        };

        let cards = vec![
            DetailCard {
                section: DetailSection::Person,
                title: format!("{} Information", person_type.label()),
                lines: personal,
            },
            DetailCard {
                section: DetailSection::School,
                title: "School Information".to_string(),
                lines: vec![
                    line("School Name", &school.name),
                    line("Address", &school.address),
                    line("Session", &school.session),
                    line(code_label, school.scholar_code().unwrap_or(NOT_AVAILABLE)),
                    line("Dise Code", school.udise_code().unwrap_or(NOT_AVAILABLE)),
                ],
            },
            DetailCard {
                section: DetailSection::SchoolContact,
                title: "School Contact".to_string(),
                lines: vec![
                    line("Phone", &school.contact.phone),
                    line("Email", &school.contact.email),
                ],
            },
            DetailCard {
                section: DetailSection::Validity,
                title: "Validity".to_string(),
                lines: vec![
                    line("Valid Through", &config.validity.valid_through),
                    line("Status", "Active"),
                ],
            },
        ];

        VerificationDetail {
            photo: ImageView::with_placeholder(
                person.photo.as_deref(),
                person.name.clone(),
                &config.images.verification_photo_placeholder,
            ),
            photo_caption: format!("{}'s Photo", person.name),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::tests::sample;

    fn page(query: &str) -> PageLocation {
        PageLocation {
            origin: "https://cards.example".to_string(),
            path: "/index.html".to_string(),
            query: query.to_string(),
        }
    }

    #[test]
    fn test_url_format() {
        let roster = sample();
        let url = page("").verification_url(&roster.students[0]);
        assert_eq!(url, "https://cards.example/index.html?type=student&id=S1");
    }

    #[test]
    fn test_url_decodes_to_same_pair() {
        let mut roster = sample();
        roster.teachers[0].id = "T 1&x=2".to_string();
        let location = page("");
        for person in roster.people() {
            let url = location.verification_url(person);
            let query = VerificationQuery::from_url(&url).unwrap().unwrap();
            assert_eq!(query, VerificationQuery::for_person(person));
            assert!(roster
                .lookup(&query.person_type, &query.id)
                .is_some_and(|p| p == person));
        }
    }

    #[test]
    fn test_card_and_person_share_url() {
        let roster = sample();
        let location = page("");
        let person = &roster.teachers[0];
        let card = CardView::build(person, &CardsConfig::default());
        assert_eq!(
            location.url_for(&VerificationQuery::for_card(&card)),
            location.verification_url(person)
        );
    }

    #[test]
    fn test_query_requires_both_params() {
        assert_eq!(VerificationQuery::from_query(""), None);
        assert_eq!(VerificationQuery::from_query("?id=S1"), None);
        assert_eq!(VerificationQuery::from_query("?type=student"), None);
        assert_eq!(VerificationQuery::from_query("?type=&id=S1"), None);
        assert_eq!(
            VerificationQuery::from_query("?id=S1&type=student&id=S2"),
            Some(VerificationQuery {
                person_type: "student".to_string(),
                id: "S1".to_string(),
            })
        );
    }

    #[test]
    fn test_page_location_parse_and_resolve() {
        let location = PageLocation::parse("https://cards.example:8080/id/index.html?type=teacher&id=T1").unwrap();
        assert_eq!(location.origin, "https://cards.example:8080");
        assert_eq!(location.path, "/id/index.html");
        assert!(location.verification_query().is_some());
        assert_eq!(
            location.resolve("nursery_indus_student.json").unwrap(),
            "https://cards.example:8080/id/nursery_indus_student.json"
        );
        assert_eq!(
            location.resolve("/assets/data.json").unwrap(),
            "https://cards.example:8080/assets/data.json"
        );
    }

    #[test]
    fn test_missing_teacher_reports_invalid_id() {
        let roster = sample();
        let query = page("?type=teacher&id=T9").verification_query().unwrap();
        let outcome = VerificationOutcome::resolve(&roster, &query);
        assert!(outcome.person().is_none());
        let status = outcome.status("18/10/2026");
        assert!(!status.valid);
        assert_eq!(status.headline, "Invalid ID");
        assert!(status.detail.contains("No teacher found with ID: T9"));
    }

    #[test]
    fn test_unknown_type_is_reported_by_name() {
        let roster = sample();
        let query = page("?type=principal&id=S1").verification_query().unwrap();
        let status = VerificationOutcome::resolve(&roster, &query).status("");
        assert_eq!(status.detail, "No principal found with ID: S1");
    }

    #[test]
    fn test_match_builds_detail() {
        let roster = sample();
        let query = page("?type=student&id=S1").verification_query().unwrap();
        let outcome = VerificationOutcome::resolve(&roster, &query);
        let person = outcome.person().unwrap();
        assert_eq!(person.name, "asha roy");
        assert_eq!(outcome.status("18/10/2026").detail, "Verified on 18/10/2026");

        let detail = VerificationDetail::build(person, &CardsConfig::default());
        assert_eq!(detail.photo.src, "s1.jpg");
        assert_eq!(detail.photo_caption, "asha roy's Photo");
        assert_eq!(detail.cards.len(), 4);
        assert_eq!(detail.cards[0].title, "Student Information");
        let labels: Vec<&str> = detail.cards[0].lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Name", "Class", "Father's Name", "Date of Birth", "Contact", "Address"]
        );
        assert!(detail.cards[1]
            .lines
            .iter()
            .any(|l| l.label == "Scholar Code" && l.value == "SCH-7"));
        assert_eq!(detail.cards[3].lines[0].value, "2027");
    }

    #[test]
    fn test_teacher_detail_uses_staff_code_and_placeholder() {
        let roster = sample();
        let config = CardsConfig::default();
        let detail = VerificationDetail::build(&roster.teachers[1], &config);
        assert_eq!(detail.cards[0].title, "Teacher Information");
        assert!(detail.cards[1].lines.iter().any(|l| l.label == "Staff Code"));
        assert_eq!(detail.photo.src, config.images.verification_photo_placeholder);
    }
}
