//! CFR (Counterfactual Regret Minimization) solver module.
//!
//! # Overview
//!
//! Vanilla CFR converges to a Nash equilibrium by:
//! 1. Computing counterfactual regret for each action at each decision point
//! 2. Updating strategies to minimize regret over time
//! 3. Averaging strategies across iterations
//!
//! **Regret**: the difference between the value of an action and the value
//! of the current strategy.
//! ```text
//! Regret(a) = Value(a) - Value(current_strategy)
//! ```
//!
//! **Regret Matching**: play in proportion to positive regret, uniformly over
//! the legal actions when there is none.
//! ```text
//! Strategy(a) = max(0, Regret(a)) / sum(max(0, Regret(a')))
//! ```
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete Information" (2007)
//! - Neller, T., Lanctot, M. "An Introduction to Counterfactual Regret Minimization" (2013)

pub mod config;
pub mod game;
pub mod infoset;
pub mod solver;
pub mod storage;

pub use config::{CFRConfig, CFRStats, EvPoint};
pub use game::{Action, Game, InfoState, Node, Player, Reach};
pub use infoset::{InfoSet, DEFAULT_THRESHOLD};
pub use solver::CFRSolver;
pub use storage::{InfoSetStore, StrategyTable, TableExport};
