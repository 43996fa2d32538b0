//! # Leduc CFR
//!
//! Vanilla Counterfactual Regret Minimization (CFR) for small two-player
//! zero-sum poker games.
//!
//! ## Quick Start
//!
//! ```
//! use leduc_cfr::{CFRConfig, CFRSolver, GameConfig, LeducPoker};
//!
//! let game = LeducPoker::new(GameConfig::default()).unwrap();
//! let mut solver = CFRSolver::new(game, CFRConfig::default());
//! solver.train(10);
//!
//! let table = solver.strategy_table().unwrap();
//! assert_eq!(table.len(), solver.num_info_sets());
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: game trait, information sets and the solver
//! - [`games`]: the poker game itself
//! - [`error`]: crate error type
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              CFRSolver (generic)          │
//! │  - chance enumeration  - regret matching  │
//! │  - reach weighting     - average strategy │
//! └───────────────────────────────────────────┘
//!                      │
//!                      │ implements Game<3>
//!                      ▼
//!              ┌───────────────┐
//!              │  LeducPoker   │
//!              │ (GameConfig)  │
//!              └───────────────┘
//! ```

#![warn(missing_docs)]

/// CFR (Counterfactual Regret Minimization) solver module.
pub mod cfr;

/// Error types.
pub mod error;

/// Game implementations module.
pub mod games;

pub use cfr::{CFRConfig, CFRSolver, CFRStats, Game, InfoState, Player};
pub use error::{ConfigError, Error, Result};
pub use games::leduc::{GameConfig, LeducPoker, PublicCard, SolveReport};
