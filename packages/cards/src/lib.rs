//! # Cards crate — data and view models for school identity cards
//!
//! Everything in here is platform-free: the `ui` package turns these values into
//! Dioxus elements, and the `web` package wires them to the browser.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `School`, `Person` and the student/teacher [`PersonKind`] variant |
//! | [`roster`] | Parses the dataset document and annotates every record with its school and type |
//! | [`card`] | Front/back card view models and the per-group [`Deck`] |
//! | [`verify`] | Verification URL codec, query parsing, lookup outcome and detail view model |
//! | [`view_state`] | Active tab and print session state |
//! | [`qr`] | SVG rendering of verification codes |
//! | [`config`] | `cards.toml` configuration |

pub mod card;
pub mod config;
pub mod error;
pub mod models;
pub mod qr;
pub mod roster;
pub mod verify;
pub mod view_state;

pub use card::{
    CardBack, CardFront, CardView, Deck, ImageFallback, ImageView, InfoLine, SchoolHeader,
    INFO_ITEM_CLASS, NOT_AVAILABLE,
};
pub use config::CardsConfig;
pub use error::CardsError;
pub use models::{Person, PersonKind, PersonType, RelatedPerson, School, SchoolCodes, SchoolContact};
pub use roster::Roster;
pub use verify::{
    DetailCard, DetailSection, PageLocation, VerificationDetail, VerificationOutcome,
    VerificationQuery, VerificationStatus,
};
pub use view_state::{PrintSession, Tab, ViewState};
