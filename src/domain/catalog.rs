//! Card catalog: the fixed set of guessable items
//!
//! A catalog is an ordered, immutable list of (display name, asset
//! identifier) pairs supplied at startup. It is never mutated at runtime;
//! rounds only read from it to pick a target.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Errors produced by catalog operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is empty, nothing to select")]
    Empty,
}

/// One guessable item: display name plus the asset shown for it
///
/// Name uniqueness across a catalog is not enforced; the built-in set is
/// unique by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    name: String,
    asset: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }

    /// Display name the player has to guess
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the image asset for this entry
    pub fn asset(&self) -> &str {
        &self.asset
    }
}

/// Fixed, ordered collection of catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from the given entries
    ///
    /// An empty catalog is accepted here; selection reports the problem
    /// where it actually bites, in [`Catalog::choose`].
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Picks one entry uniformly at random
    ///
    /// # Arguments
    /// * `rng` - Random source; tests pass a seeded `StdRng`
    ///
    /// # Returns
    /// A reference to the chosen entry, or CatalogError::Empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&CatalogEntry, CatalogError> {
        self.entries.choose(rng).ok_or(CatalogError::Empty)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in 34-card set the game ships with
    pub fn builtin() -> Self {
        let cards: &[(&str, &str)] = &[
            // Common
            ("Archers", "images/archers.png"),
            ("Knight", "images/knight.png"),
            ("Goblins", "images/goblins.png"),
            ("Skeletons", "images/skeletons.png"),
            ("Zap", "images/zap.png"),
            ("Minions", "images/minions.png"),
            ("Ice Spirit", "images/ice_spirit.png"),
            ("Cannon", "images/cannon.png"),
            ("Bomber", "images/bomber.png"),
            ("Royal Giant", "images/royal_giant.png"),
            ("Arrows", "images/arrows.png"),
            // Rare
            ("Hog Rider", "images/hog_rider.png"),
            ("Mini Pekka", "images/mini_pekka.png"),
            ("Musketeer", "images/musketeer.png"),
            ("Valkyrie", "images/valkyrie.png"),
            ("Giant", "images/giant.png"),
            ("Fireball", "images/fireball.png"),
            ("Tombstone", "images/tombstone.png"),
            ("Ice Golem", "images/ice_golem.png"),
            ("Battle Ram", "images/battle_ram.png"),
            ("Wizard", "images/wizard.png"),
            // Epic
            ("Pekka", "images/pekka.png"),
            ("Baby Dragon", "images/baby_dragon.png"),
            ("Witch", "images/witch.png"),
            ("Balloon", "images/balloon.png"),
            ("Prince", "images/prince.png"),
            ("Golem", "images/golem.png"),
            ("Lightning", "images/lightning.png"),
            ("Goblin Barrel", "images/goblin_barrel.png"),
            ("Skeleton Army", "images/skeleton_army.png"),
            // Legendary
            ("The Log", "images/the_log.png"),
            ("Princess", "images/princess.png"),
            ("Electro Wizard", "images/electro_wizard.png"),
            ("Lumberjack", "images/lumberjack.png"),
        ];

        Self::new(
            cards
                .iter()
                .map(|(name, asset)| CatalogEntry::new(*name, *asset))
                .collect(),
        )
    }
}
