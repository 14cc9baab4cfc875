//! Static card and god catalog
//!
//! Pure read-only data, built once at process start. Lookups return `None`
//! for anything the catalog does not know; callers treat that as a no-op.

use crate::core::{CardTemplate, God, GodName};
use rustc_hash::FxHashMap;

/// The immutable card and god tables
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardTemplate>,
    pantheon: Vec<God>,
    card_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build the standard catalog: four base cards, four gods
    pub fn standard() -> Self {
        let cards = vec![
            CardTemplate::new(GodName::Mesin, "Lightning", 'L', 1, 1, 3),
            CardTemplate::new(GodName::Beroan, "Wyrm", 'W', 5, 1, 6),
            CardTemplate::new(GodName::Tecton, "Golem", 'G', 8, 2, 8),
            CardTemplate::new(GodName::Gul, "Specter", 'S', 3, 2, 4),
        ];

        let pantheon = vec![
            God::new(
                GodName::Mesin,
                "God of Storms and Order",
                CardTemplate::new(GodName::Mesin, "Aspect of Mesin", 'Φ', 3, 1, 5),
            ),
            God::new(
                GodName::Beroan,
                "God of Wilds and Strength",
                CardTemplate::new(GodName::Beroan, "Aspect of Beroan", 'Ψ', 6, 1, 7),
            ),
            God::new(
                GodName::Tecton,
                "God of Stone and Fortitude",
                CardTemplate::new(GodName::Tecton, "Aspect of Tecton", 'Θ', 8, 2, 9),
            ),
            God::new(
                GodName::Gul,
                "God of Whispers and Decay",
                CardTemplate::new(GodName::Gul, "Aspect of Gul", 'Σ', 2, 2, 4),
            ),
        ];

        let card_index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.name.clone(), i))
            .collect();

        Catalog {
            cards,
            pantheon,
            card_index,
        }
    }

    /// All card templates, in catalog order
    pub fn cards(&self) -> &[CardTemplate] {
        &self.cards
    }

    /// All gods, in selection order
    pub fn pantheon(&self) -> &[God] {
        &self.pantheon
    }

    /// Look up a god record; absent gods are not an error
    pub fn god(&self, name: GodName) -> Option<&God> {
        self.pantheon.iter().find(|god| god.name == name)
    }

    /// Look up a card template by display name
    pub fn card(&self, name: &str) -> Option<&CardTemplate> {
        self.card_index.get(name).map(|&i| &self.cards[i])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
