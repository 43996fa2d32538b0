//! Leduc-style limit poker with a configurable deck and betting structure.
//!
//! ## Game Rules
//!
//! - Deck of `ranks` ranks ending at the king (J, Q, K by default), `copies`
//!   cards of each
//! - Both players ante, then each receives one private card
//! - Actions: call/check (`c`), raise (`r`), fold (`f`)
//! - A raise adds a fixed increment; no raise once the hand's cap is reached
//! - A call that follows any action closes the round
//! - Player one acts first and the players alternate across rounds
//! - The public card is shown when round two starts; pairing it wins the
//!   showdown, otherwise the higher rank wins and equal ranks split
//!
//! ## Game Tree (one round, one raise, no open fold)
//!
//! ```text
//! P1
//! ├── c
//! │   └── P2
//! │       ├── c → showdown
//! │       ├── f → P1 wins
//! │       └── r
//! │           └── P1
//! │               ├── c → showdown
//! │               └── f → P2 wins
//! └── r
//!     └── P2
//!         ├── c → showdown
//!         └── f → P1 wins
//! ```
//!
//! With [`GameConfig::kuhn`] this is Kuhn poker plus a dominated fold after a
//! check. Its value for player one is -1/18.

pub mod action;
pub mod betting;
pub mod card;
pub mod config;
pub mod game;
pub mod history;
pub mod output;
pub mod terminals;

pub use action::{parse_line, LeducAction, NUM_ACTIONS};
pub use betting::{Betting, Step};
pub use card::{showdown, Board, Deal, Deck, Rank};
pub use config::{GameConfig, PublicCard};
pub use game::{LeducInfoKey, LeducPoker, LeducState};
pub use history::{History, Symbol};
pub use output::{sig3, SolveReport};
pub use terminals::terminal_histories;
