//! Card catalog - the ordered list of definitions a deck is drawn from.
//!
//! Order matters: a difficulty that needs `K` pairs deals the first `K`
//! definitions. Lookup by `CardId` goes through an index so renderers can
//! resolve a face-up card without scanning.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::{DeckError, Result};

/// Ordered catalog of card definitions.
///
/// ## Example
///
/// ```
/// use wwii_memory::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Panzer IV")).unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().title, "Panzer IV");
/// assert!(catalog.register(CardDefinition::new(CardId::new(1), "Again")).is_err());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardDefinition>", into = "Vec<CardDefinition>")]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CardDefinition>,
    ) -> std::result::Result<Self, DeckError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from TOML (`[[cards]]` tables).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct CatalogFile {
            cards: Vec<CardDefinition>,
        }

        let file: CatalogFile =
            toml::from_str(source).map_err(crate::core::ConfigError::from)?;
        Ok(Self::from_definitions(file.cards)?)
    }

    /// Append a card definition.
    pub fn register(&mut self, card: CardDefinition) -> std::result::Result<(), DeckError> {
        if self.index.contains_key(&card.id) {
            return Err(DeckError::DuplicateCardId { id: card.id });
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).map(|&position| &self.cards[position])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// The first `count` definitions (fewer if the catalog is shorter).
    #[must_use]
    pub fn first(&self, count: usize) -> &[CardDefinition] {
        &self.cards[..count.min(self.cards.len())]
    }

    /// The built-in World War II catalog (eight definitions).
    #[must_use]
    pub fn wwii() -> Self {
        let mut catalog = Self::new();
        for (id, title, description, image) in WWII_CARDS {
            catalog.cards.push(
                CardDefinition::new(CardId::new(id), title)
                    .with_description(description)
                    .with_image(format!("{WIKIMEDIA}/{image}")),
            );
            catalog.index.insert(CardId::new(id), catalog.cards.len() - 1);
        }
        catalog
    }
}

impl TryFrom<Vec<CardDefinition>> for CardCatalog {
    type Error = DeckError;

    fn try_from(definitions: Vec<CardDefinition>) -> std::result::Result<Self, Self::Error> {
        Self::from_definitions(definitions)
    }
}

impl From<CardCatalog> for Vec<CardDefinition> {
    fn from(catalog: CardCatalog) -> Self {
        catalog.cards
    }
}

const WIKIMEDIA: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb";

const WWII_CARDS: [(u32, &str, &str, &str); 8] = [
    (
        1,
        "P-38 Lightning",
        "American twin-engine fighter aircraft used throughout WWII",
        "b/b5/Lockheed_P-38_Lightning_USAF.jpg/800px-Lockheed_P-38_Lightning_USAF.jpg",
    ),
    (
        2,
        "Messerschmitt Bf 109",
        "German fighter aircraft, backbone of the Luftwaffe",
        "9/99/Bundesarchiv_Bild_146-1978-043-02%2C_Messerschmitt_Me_109.jpg/800px-Bundesarchiv_Bild_146-1978-043-02%2C_Messerschmitt_Me_109.jpg",
    ),
    (
        3,
        "M4 Sherman Tank",
        "Primary American medium tank used by Allied forces",
        "2/25/Sherman_tank_WW2.jpg/800px-Sherman_tank_WW2.jpg",
    ),
    (
        4,
        "Panzer IV",
        "German medium tank, most widely used German tank of WWII",
        "f/f0/Panzer_IV_Ausf._F2.jpg/800px-Panzer_IV_Ausf._F2.jpg",
    ),
    (
        5,
        "Supermarine Spitfire",
        "British single-seat fighter, crucial in Battle of Britain",
        "4/47/Spitfire_F_VB_BM597_in_flight_2012.jpg/800px-Spitfire_F_VB_BM597_in_flight_2012.jpg",
    ),
    (
        6,
        "B-17 Flying Fortress",
        "American heavy bomber, workhorse of Allied bombing campaigns",
        "5/5a/B-17_Flying_Fortress.jpg/800px-B-17_Flying_Fortress.jpg",
    ),
    (
        7,
        "USS Enterprise",
        "Most decorated US Navy ship of WWII, fought in Pacific Theater",
        "d/d8/USS_Enterprise_%28CV-6%29_in_Puget_Sound%2C_September_1945.jpg/800px-USS_Enterprise_%28CV-6%29_in_Puget_Sound%2C_September_1945.jpg",
    ),
    (
        8,
        "StG 44",
        "First assault rifle, revolutionary German automatic weapon",
        "e/ea/Sturmgewehr_44.jpg/800px-Sturmgewehr_44.jpg",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardDefinition::new(CardId::new(1), "Test Card"))
            .unwrap();

        assert_eq!(catalog.get(CardId::new(1)).unwrap().title, "Test Card");
        assert!(catalog.get(CardId::new(99)).is_none());
        assert!(catalog.contains(CardId::new(1)));
        assert!(!catalog.contains(CardId::new(99)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new(CardId::new(1), "A")).unwrap();

        let err = catalog
            .register(CardDefinition::new(CardId::new(1), "B"))
            .unwrap_err();
        assert_eq!(err, DeckError::DuplicateCardId { id: CardId::new(1) });
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let catalog = CardCatalog::from_definitions([
            CardDefinition::new(CardId::new(30), "C"),
            CardDefinition::new(CardId::new(10), "A"),
            CardDefinition::new(CardId::new(20), "B"),
        ])
        .unwrap();

        let titles: Vec<_> = catalog.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);

        let first: Vec<_> = catalog.first(2).iter().map(|c| c.id).collect();
        assert_eq!(first, [CardId::new(30), CardId::new(10)]);
        assert_eq!(catalog.first(10).len(), 3);
    }

    #[test]
    fn test_wwii_catalog() {
        let catalog = CardCatalog::wwii();

        assert_eq!(catalog.len(), 8);
        let ids: Vec<_> = catalog.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);

        let sherman = catalog.get(CardId::new(3)).unwrap();
        assert_eq!(sherman.title, "M4 Sherman Tank");
        assert!(sherman.image.starts_with("https://upload.wikimedia.org/"));
        assert!(catalog.iter().all(|c| !c.description.is_empty()));
    }

    #[test]
    fn test_toml_catalog() {
        let catalog = CardCatalog::from_toml_str(
            r#"
            [[cards]]
            id = 5
            title = "T-34"
            image = "t34.jpg"
            description = "Soviet medium tank"

            [[cards]]
            id = 6
            title = "Yamato"
            image = "yamato.jpg"
            description = "Japanese battleship"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(CardId::new(6)).unwrap().title, "Yamato");
    }

    #[test]
    fn test_toml_catalog_duplicate() {
        let result = CardCatalog::from_toml_str(
            r#"
            [[cards]]
            id = 1
            title = "A"
            image = ""
            description = ""

            [[cards]]
            id = 1
            title = "B"
            image = ""
            description = ""
            "#,
        );

        assert!(matches!(
            result,
            Err(crate::core::Error::Deck(DeckError::DuplicateCardId { .. }))
        ));
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let catalog = CardCatalog::wwii();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: CardCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 8);
        assert_eq!(
            restored.get(CardId::new(8)).unwrap().title,
            "StG 44"
        );
    }
}
