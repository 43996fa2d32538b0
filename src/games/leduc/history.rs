//! Public action history.

use std::fmt;

use crate::cfr::game::{Action, Player};
use crate::games::leduc::action::LeducAction;
use crate::games::leduc::card::Rank;

/// One entry of the public history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A player's action.
    Act(LeducAction),
    /// A new betting round starts; carries the board once it is revealed.
    Street(Option<Rank>),
}

/// Everything both players have seen since the deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct History {
    symbols: Vec<Symbol>,
}

impl History {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn push_action(&mut self, action: LeducAction) {
        self.symbols.push(Symbol::Act(action));
    }

    /// Append a round boundary.
    pub fn push_street(&mut self, board: Option<Rank>) {
        self.symbols.push(Symbol::Street(board));
    }

    /// All symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Player actions only, in order.
    pub fn actions(&self) -> impl Iterator<Item = LeducAction> + '_ {
        self.symbols.iter().filter_map(|s| match s {
            Symbol::Act(a) => Some(*a),
            Symbol::Street(_) => None,
        })
    }

    /// Number of player actions.
    pub fn num_actions(&self) -> usize {
        self.actions().count()
    }

    /// Player to act next under strict alternation.
    pub fn player(&self) -> Player {
        Player::from_parity(self.num_actions())
    }

    /// Most recently revealed board rank.
    pub fn board(&self) -> Option<Rank> {
        self.symbols.iter().rev().find_map(|s| match s {
            Symbol::Street(board) => *board,
            Symbol::Act(_) => None,
        })
    }

    /// Action symbols without round boundaries, e.g. `crcc`.
    pub fn line(&self) -> String {
        self.actions().map(|a| a.symbol()).collect()
    }

    /// Whether no action has been taken.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            match symbol {
                Symbol::Act(a) => write!(f, "{}", a.symbol())?,
                Symbol::Street(Some(board)) => write!(f, "/{}:", board)?,
                Symbol::Street(None) => write!(f, "/")?,
            }
        }
        Ok(())
    }
}
