//! Card system: definitions, catalog, and board cards.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions, doubles as the pair identity
//! - `CardDefinition`: Image, title and description of a card
//! - `CardCatalog`: Ordered definitions a deck is drawn from
//! - `GameCard`: One slot on the board

pub mod catalog;
pub mod definition;
pub mod game_card;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId};
pub use game_card::GameCard;
