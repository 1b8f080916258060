//! Front/back card view models.
//!
//! [`CardView::build`] is the pure half of card rendering: data in, declarative
//! structure out. The `ui` package only maps these values onto elements.

use crate::config::CardsConfig;
use crate::models::{capitalize, Person, PersonKind, PersonType};
use crate::roster::Roster;

/// Text shown for a missing optional value.
pub const NOT_AVAILABLE: &str = "N/A";

/// What an image does when its source fails to load.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageFallback {
    /// Swap in this placeholder source (once).
    Placeholder(String),
    /// Hide the element.
    Hide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub fallback: ImageFallback,
}

impl ImageView {
    /// An image that always shows something: the source, or the placeholder.
    pub fn with_placeholder(src: Option<&str>, alt: impl Into<String>, placeholder: &str) -> Self {
        Self {
            src: src.unwrap_or(placeholder).to_string(),
            alt: alt.into(),
            fallback: ImageFallback::Placeholder(placeholder.to_string()),
        }
    }

    /// Source to show, given the source that last failed to load (if any).
    ///
    /// A failure only counts against the source it happened on, so a new `src`
    /// starts over. `None` means the image is hidden.
    pub fn display_src(&self, failed_src: Option<&str>) -> Option<&str> {
        if failed_src != Some(self.src.as_str()) {
            return Some(self.src.as_str());
        }
        match &self.fallback {
            ImageFallback::Placeholder(placeholder) => Some(placeholder.as_str()),
            ImageFallback::Hide => None,
        }
    }

    /// An image that is omitted when absent and hidden when it fails.
    pub fn hideable(src: Option<&str>, alt: impl Into<String>) -> Option<Self> {
        src.map(|src| Self {
            src: src.to_string(),
            alt: alt.into(),
            fallback: ImageFallback::Hide,
        })
    }
}

/// Style class of an ordinary card line.
pub const INFO_ITEM_CLASS: &str = "info-item";

/// A labelled line on a card ("Class: 5").
#[derive(Clone, Debug, PartialEq)]
pub struct InfoLine {
    pub label: String,
    pub value: String,
    /// Style class; contact and address lines carry their own for print styling.
    pub class: &'static str,
}

impl InfoLine {
    pub fn new(label: impl Into<String>, value: &str) -> Self {
        Self {
            label: label.into(),
            value: or_not_available(value),
            class: INFO_ITEM_CLASS,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }
}

pub(crate) fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchoolHeader {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub session: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardFront {
    pub header: SchoolHeader,
    /// Element id of the verification-code slot.
    pub code_slot: String,
    pub photo: ImageView,
    pub signature: ImageView,
    /// Upper-cased display name.
    pub name: String,
    pub info: Vec<InfoLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardBack {
    pub logo: Option<ImageView>,
    pub school_name: String,
    pub dise_code: String,
    pub building: Option<ImageView>,
    pub address: String,
    pub email: String,
}

/// One printable front/back pair.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub person_type: PersonType,
    pub id: String,
    pub front: CardFront,
    pub back: CardBack,
}

impl CardView {
    pub fn build(person: &Person, config: &CardsConfig) -> Self {
        let school = &person.school;
        let person_type = person.person_type();

        let mut info = Vec::new();
        match &person.kind {
            PersonKind::Student { class, father, .. } => {
                info.push(InfoLine::new("Class", class));
                info.push(InfoLine::new(
                    "Father's Name",
                    father.as_deref().unwrap_or_default(),
                ));
            }
            PersonKind::Teacher {
                designation,
                related_persons,
            } => {
                info.push(InfoLine::new("Designation", designation));
                info.extend(
                    related_persons
                        .iter()
                        .map(|r| InfoLine::new(capitalize(&r.relation), &r.name)),
                );
            }
        }
        info.push(InfoLine::new("Contact", &person.contact).with_class("Contact"));
        if let PersonKind::Student { dob, .. } = &person.kind {
            info.push(InfoLine::new("DOB", dob));
        }
        info.push(InfoLine::new("Add", &person.address).with_class("info-item address"));

        let front = CardFront {
            header: SchoolHeader {
                name: school.name.clone(),
                address: school.address.clone(),
                phone: school.contact.phone.clone(),
                session: school.session.clone(),
            },
            code_slot: person.code_slot_id(),
            photo: ImageView::with_placeholder(
                person.photo.as_deref(),
                format!("{person_type} Photo"),
                &config.images.card_photo_placeholder,
            ),
            signature: ImageView {
                src: config.images.signature.clone(),
                alt: "Chairman's Signature".to_string(),
                fallback: ImageFallback::Hide,
            },
            name: person.name.to_uppercase(),
            info,
        };

        let back = CardBack {
            logo: ImageView::hideable(school.logo.as_deref(), "School Logo"),
            school_name: school.name.clone(),
            dise_code: or_not_available(school.udise_code().unwrap_or_default()),
            building: ImageView::hideable(school.building.as_deref(), "School Building"),
            address: school.address.clone(),
            email: school.contact.email.clone(),
        };

        CardView {
            person_type,
            id: person.id.clone(),
            front,
            back,
        }
    }
}

/// Card views for both groups, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    pub students: Vec<CardView>,
    pub teachers: Vec<CardView>,
}

impl Deck {
    pub fn build(roster: &Roster, config: &CardsConfig) -> Self {
        let views = |group: PersonType| -> Vec<CardView> {
            roster
                .group(group)
                .iter()
                .map(|p| CardView::build(p, config))
                .collect()
        };
        Deck {
            students: views(PersonType::Student),
            teachers: views(PersonType::Teacher),
        }
    }

    pub fn group(&self, person_type: PersonType) -> &[CardView] {
        match person_type {
            PersonType::Student => &self.students,
            PersonType::Teacher => &self.teachers,
        }
    }
}
