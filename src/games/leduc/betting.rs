//! Betting state derived by replaying the action history.
//!
//! All chips-in accounting lives here: a call matches the highest stake, a
//! raise matches it and adds one increment, a fold ends the hand. The state
//! also decides when a round closes, which is the only place terminality
//! comes from.

use crate::cfr::game::Player;
use crate::games::leduc::action::{LeducAction, NUM_ACTIONS};
use crate::games::leduc::config::GameConfig;

/// What an action did to the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The round goes on.
    Continue,
    /// The round closed and the next one starts.
    NextRound,
    /// The final round closed; cards are compared.
    Showdown,
    /// A player folded.
    Folded,
}

/// Chips and round bookkeeping for one hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Betting {
    round: u8,
    round_actions: u8,
    actions: usize,
    bet_level: u32,
    stakes: [u32; 2],
    folded: Option<Player>,
    finished: bool,
}

impl Betting {
    /// Fresh hand with both antes in.
    pub fn new(ante: u32) -> Self {
        Self {
            round: 0,
            round_actions: 0,
            actions: 0,
            bet_level: 0,
            stakes: [ante, ante],
            folded: None,
            finished: false,
        }
    }

    /// Player to act next.
    pub fn to_act(&self) -> Player {
        Player::from_parity(self.actions)
    }

    /// Zero-based current round.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Chips raised so far this hand.
    pub fn bet_level(&self) -> u32 {
        self.bet_level
    }

    /// Chips `player` has committed, ante included.
    pub fn stake(&self, player: Player) -> u32 {
        self.stakes[player.index()]
    }

    /// Both stakes together.
    pub fn pot(&self) -> u32 {
        self.stakes.iter().sum()
    }

    /// Player who folded, if any.
    pub fn folded(&self) -> Option<Player> {
        self.folded
    }

    /// Whether the hand is over.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Mask of legal actions in [`LeducAction::ALL`] order.
    pub fn legal(&self, config: &GameConfig) -> [bool; NUM_ACTIONS] {
        let mut legal = [false; NUM_ACTIONS];
        if self.finished {
            return legal;
        }
        legal[LeducAction::Call.index()] = true;
        legal[LeducAction::Raise.index()] = self.bet_level < config.raise_cap;
        legal[LeducAction::Fold.index()] = config.open_fold || self.round_actions > 0;
        legal
    }

    /// Whether `action` may be taken now.
    pub fn is_legal(&self, action: LeducAction, config: &GameConfig) -> bool {
        self.legal(config)[action.index()]
    }

    /// Apply an action for the player to act.
    ///
    /// Returns `None` without touching the state if the action is illegal.
    pub fn apply(&mut self, action: LeducAction, config: &GameConfig) -> Option<Step> {
        if !self.is_legal(action, config) {
            return None;
        }
        let actor = self.to_act().index();
        let high = self.stakes[0].max(self.stakes[1]);
        self.actions += 1;

        let step = match action {
            LeducAction::Fold => {
                self.folded = Some(Player::from_parity(self.actions - 1));
                self.finished = true;
                Step::Folded
            }
            LeducAction::Raise => {
                self.stakes[actor] = high + config.raise_increment;
                self.bet_level += config.raise_increment;
                self.round_actions += 1;
                Step::Continue
            }
            LeducAction::Call if self.round_actions == 0 => {
                self.stakes[actor] = high;
                self.round_actions += 1;
                Step::Continue
            }
            LeducAction::Call => {
                self.stakes[actor] = high;
                if self.round + 1 >= config.rounds {
                    self.finished = true;
                    Step::Showdown
                } else {
                    self.round += 1;
                    self.round_actions = 0;
                    Step::NextRound
                }
            }
        };
        Some(step)
    }
}
