//! The three betting actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfr::game::Action;
use crate::error::Error;

/// Number of actions in the alphabet.
pub const NUM_ACTIONS: usize = 3;

/// A betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeducAction {
    /// Check when nothing is owed, call otherwise.
    Call,
    /// Match the outstanding bet and add one raise increment.
    Raise,
    /// Give up the hand.
    Fold,
}

impl LeducAction {
    /// Every action, in strategy-vector order.
    pub const ALL: [LeducAction; NUM_ACTIONS] =
        [LeducAction::Call, LeducAction::Raise, LeducAction::Fold];

    /// Position in strategy vectors.
    pub fn index(self) -> usize {
        match self {
            LeducAction::Call => 0,
            LeducAction::Raise => 1,
            LeducAction::Fold => 2,
        }
    }
}

impl Action for LeducAction {
    fn symbol(&self) -> char {
        match self {
            LeducAction::Call => 'c',
            LeducAction::Raise => 'r',
            LeducAction::Fold => 'f',
        }
    }
}

impl TryFrom<char> for LeducAction {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'c' => Ok(LeducAction::Call),
            'r' => Ok(LeducAction::Raise),
            'f' => Ok(LeducAction::Fold),
            other => Err(Error::Parse(other)),
        }
    }
}

impl fmt::Display for LeducAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeducAction::Call => write!(f, "Call"),
            LeducAction::Raise => write!(f, "Raise"),
            LeducAction::Fold => write!(f, "Fold"),
        }
    }
}

/// Parse a line of action symbols. Round separators (`/`) are skipped.
pub fn parse_line(line: &str) -> Result<Vec<LeducAction>, Error> {
    line.chars()
        .filter(|&c| c != '/')
        .map(LeducAction::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_roundtrip_in_order() {
        for (i, action) in LeducAction::ALL.into_iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(LeducAction::try_from(action.symbol()).unwrap(), action);
        }
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("cr/c").unwrap(),
            vec![LeducAction::Call, LeducAction::Raise, LeducAction::Call]
        );
        assert!(parse_line("").unwrap().is_empty());
        assert!(matches!(parse_line("cxr"), Err(Error::Parse('x'))));
    }
}
