//! Game configuration: deck, stakes, betting structure and public card.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Where the public card comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicCard {
    /// No public card; showdowns compare private ranks only.
    Absent,
    /// Dealt from the remaining deck as part of the chance node.
    Dealt,
    /// A fixed deck-relative rank index (0 is the lowest rank).
    Fixed(u8),
    /// One rank drawn with a seeded RNG when the game is built.
    Sampled {
        /// RNG seed.
        seed: u64,
    },
}

/// Full description of a game instance.
///
/// # Example
/// ```
/// use leduc_cfr::games::leduc::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.max_raises(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of card ranks.
    pub ranks: u8,
    /// Copies of every rank in the deck.
    pub copies: u8,
    /// Chips each player puts in before the deal.
    pub ante: u32,
    /// Chips a raise adds to the outstanding bet.
    pub raise_increment: u32,
    /// Raising is legal only while the chips raised this hand are below this.
    pub raise_cap: u32,
    /// Number of betting rounds.
    pub rounds: u8,
    /// Whether fold is legal before anyone has acted in a round.
    pub open_fold: bool,
    /// Public card handling.
    pub public_card: PublicCard,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ranks: 3,
            copies: 2,
            ante: 1,
            raise_increment: 2,
            raise_cap: 4,
            rounds: 2,
            open_fold: true,
            public_card: PublicCard::Dealt,
        }
    }
}

impl GameConfig {
    /// Kuhn poker: one card each from J/Q/K, one round, one raise of one chip.
    ///
    /// The only difference from the textbook game is a weakly dominated
    /// fold after a check, so the value for player one stays -1/18.
    pub fn kuhn() -> Self {
        Self {
            ranks: 3,
            copies: 1,
            ante: 1,
            raise_increment: 1,
            raise_cap: 1,
            rounds: 1,
            open_fold: false,
            public_card: PublicCard::Absent,
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: GameConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the number of rounds.
    pub fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds;
        self
    }

    /// Builder method: set the raise cap in chips.
    pub fn with_raise_cap(mut self, cap: u32) -> Self {
        self.raise_cap = cap;
        self
    }

    /// Builder method: set the public card mode.
    pub fn with_public_card(mut self, public_card: PublicCard) -> Self {
        self.public_card = public_card;
        self
    }

    /// Builder method: allow or forbid folding before anyone has acted.
    pub fn with_open_fold(mut self, open_fold: bool) -> Self {
        self.open_fold = open_fold;
        self
    }

    /// Number of raises the cap allows in one hand.
    pub fn max_raises(&self) -> u32 {
        if self.raise_increment == 0 {
            0
        } else {
            self.raise_cap / self.raise_increment
        }
    }

    /// Number of physical cards.
    pub fn deck_size(&self) -> usize {
        self.ranks as usize * self.copies as usize
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(2..=6).contains(&self.ranks) {
            return Err(ConfigError::InvalidRanks(self.ranks));
        }
        if !(1..=4).contains(&self.copies) {
            return Err(ConfigError::InvalidCopies(self.copies));
        }
        if !(1..=3).contains(&self.rounds) {
            return Err(ConfigError::InvalidRounds(self.rounds));
        }
        if self.ante == 0 {
            return Err(ConfigError::NonPositive("ante"));
        }
        if self.raise_increment == 0 {
            return Err(ConfigError::NonPositive("raise increment"));
        }
        if self.raise_cap % self.raise_increment != 0 {
            return Err(ConfigError::UnevenCap {
                cap: self.raise_cap,
                increment: self.raise_increment,
            });
        }
        match self.public_card {
            PublicCard::Absent => {}
            _ if self.rounds < 2 => return Err(ConfigError::BoardWithoutRound),
            PublicCard::Fixed(rank) if rank >= self.ranks => {
                return Err(ConfigError::BoardOutOfDeck {
                    rank,
                    ranks: self.ranks,
                })
            }
            PublicCard::Dealt if self.deck_size() < 3 => {
                return Err(ConfigError::DeckTooSmall(self.deck_size()))
            }
            _ => {}
        }
        Ok(())
    }
}
