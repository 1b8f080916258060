//! This crate contains all UI for the ID card pages.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;

pub mod views;
pub use views::IdCardsView;

pub const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

mod roster;
pub use roster::{fetch_roster, use_roster, RosterProvider, RosterState};

mod image;
pub use image::CardImage;

mod qr_slot;
pub use qr_slot::QrSlot;

mod id_card;
pub use id_card::IdCard;

mod card_grid;
pub use card_grid::CardGrid;

mod tabs;
pub use tabs::{TabBar, TabPanel};

mod toolbar;
pub use toolbar::CardToolbar;

mod verification;
pub use verification::{StatusBanner, VerificationPanel};
