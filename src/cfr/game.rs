//! Game trait definition for the CFR solver.
//!
//! Any two-player zero-sum game with a fixed action alphabet of `N` symbols
//! can be solved by implementing `Game<N>`. The solver never inspects game
//! states directly: it asks the game which kind of node a state is and then
//! follows the matching branch of the traversal.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First to act after the deal.
    One,
    /// Second to act.
    Two,
}

impl Player {
    /// Player to move after `actions` decisions under strict alternation.
    pub fn from_parity(actions: usize) -> Self {
        if actions % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Kind of node a game state sits on.
///
/// Computed once per visited state, so the traversal dispatches with a
/// single `match` instead of re-deriving the node kind from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Nature deals cards.
    Chance,
    /// A player chooses among the legal actions.
    Decision(Player),
    /// The hand is over and a payoff is due.
    Terminal,
}

/// Probability of reaching a history, factored by contributor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reach {
    players: [f64; 2],
    chance: f64,
}

impl Default for Reach {
    fn default() -> Self {
        Self {
            players: [1.0, 1.0],
            chance: 1.0,
        }
    }
}

impl Reach {
    /// Contribution of `player`'s own strategy.
    pub fn of(&self, player: Player) -> f64 {
        self.players[player.index()]
    }

    /// Contribution of chance.
    pub fn chance(&self) -> f64 {
        self.chance
    }

    /// Reach through everyone except `player`: opponent times chance.
    pub fn counterfactual(&self, player: Player) -> f64 {
        self.players[player.opponent().index()] * self.chance
    }

    /// Reach after `player` picks an action with probability `prob`.
    pub fn play(mut self, player: Player, prob: f64) -> Self {
        self.players[player.index()] *= prob;
        self
    }

    /// Reach after a chance outcome of probability `prob`.
    pub fn deal(mut self, prob: f64) -> Self {
        self.chance *= prob;
        self
    }
}

/// Trait for actions that can be taken in a game.
pub trait Action: Copy + Eq + Hash + Debug {
    /// Single-character symbol used in histories and reports.
    fn symbol(&self) -> char;
}

/// Trait for information states (what a player knows at a decision point).
///
/// Two game states that look identical to the acting player must produce
/// equal information states. The ordering is used to print strategy tables
/// deterministically.
pub trait InfoState: Clone + Eq + Hash + Ord + Debug + Display {
    /// Player who acts in this information state.
    fn player(&self) -> Player;

    /// Unique string key, used for reports and JSON export.
    fn key(&self) -> String {
        self.to_string()
    }
}

/// The main Game trait that defines the interface for any game.
///
/// `N` is the size of the action alphabet; strategies and regrets are
/// stored as `[f64; N]` indexed in the order of [`Game::actions`].
pub trait Game<const N: usize> {
    /// Complete game state, including hidden cards.
    type State: Clone + Debug;

    /// Action alphabet.
    type Action: Action;

    /// Information state seen by the acting player.
    type InfoState: InfoState;

    /// State before any card is dealt.
    fn root(&self) -> Self::State;

    /// Classify a state.
    fn node(&self, state: &Self::State) -> Node;

    /// Every outcome of a chance node with its exact probability.
    ///
    /// Probabilities must sum to 1 and each outcome must appear once.
    fn chance_outcomes(&self, state: &Self::State) -> Vec<(Self::State, f64)>;

    /// The full action alphabet in strategy-vector order.
    fn actions(&self) -> [Self::Action; N];

    /// Mask of the actions legal at a decision node.
    fn legal(&self, state: &Self::State) -> [bool; N];

    /// Apply a legal action.
    ///
    /// # Panics
    /// Applying an illegal action is an invariant violation and panics.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Information state of the player to act.
    fn info_state(&self, state: &Self::State) -> Self::InfoState;

    /// Utility at a terminal state for the player who would move next.
    fn payoff(&self, state: &Self::State) -> f64;
}
