mod id_cards;
pub use id_cards::IdCardsView;
