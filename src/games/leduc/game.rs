//! Game rules and the `Game` implementation.

use std::cmp::Ordering;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfr::game::{Action, Game, InfoState, Node, Player};
use crate::error::{Error, Result};
use crate::games::leduc::action::{parse_line, LeducAction, NUM_ACTIONS};
use crate::games::leduc::betting::{Betting, Step};
use crate::games::leduc::card::{showdown, Board, Deal, Deck, Rank};
use crate::games::leduc::config::{GameConfig, PublicCard};
use crate::games::leduc::history::History;

/// Complete game state, hidden cards included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeducState {
    /// Cards dealt; `None` at the chance root.
    pub deal: Option<Deal>,
    /// Public history.
    pub history: History,
    /// Chips and round bookkeeping replayed from the history.
    pub betting: Betting,
}

impl fmt::Display for LeducState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deal {
            Some(deal) => write!(
                f,
                "P1:{} P2:{} History:{} Pot:{}",
                deal.holes[0],
                deal.holes[1],
                self.history,
                self.betting.pot()
            ),
            None => write!(f, "undealt"),
        }
    }
}

/// What the acting player knows: their private rank and the public history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeducInfoKey {
    /// Acting player's private rank.
    pub hole: Rank,
    /// Public history, including any revealed board.
    pub history: History,
}

impl InfoState for LeducInfoKey {
    fn player(&self) -> Player {
        self.history.player()
    }
}

impl fmt::Display for LeducInfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.history.is_empty() {
            write!(f, "{}", self.hole)
        } else {
            write!(f, "{} {}", self.hole, self.history)
        }
    }
}

/// The configurable limit poker game.
#[derive(Debug, Clone)]
pub struct LeducPoker {
    config: GameConfig,
    deck: Deck,
    board: Board,
}

impl LeducPoker {
    /// Build a game from a validated configuration.
    ///
    /// A sampled public card is drawn here, once, so the game stays
    /// deterministic for a given seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let deck = Deck::new(config.ranks, config.copies);
        let board = match config.public_card {
            PublicCard::Absent => Board::Absent,
            PublicCard::Dealt => Board::Dealt,
            PublicCard::Fixed(index) => Board::Fixed(Self::deck_rank(&deck, index)?),
            PublicCard::Sampled { seed } => {
                let index = StdRng::seed_from_u64(seed).gen_range(0..config.ranks);
                let rank = Self::deck_rank(&deck, index)?;
                log::trace!("sampled public card {} from seed {}", rank, seed);
                Board::Fixed(rank)
            }
        };
        Ok(Self { config, deck, board })
    }

    fn deck_rank(deck: &Deck, index: u8) -> Result<Rank> {
        deck.rank(index).ok_or_else(|| {
            crate::error::ConfigError::BoardOutOfDeck {
                rank: index,
                ranks: deck.ranks().len() as u8,
            }
            .into()
        })
    }

    /// The configuration this game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Public card that every deal shares, if the board is fixed.
    pub fn fixed_board(&self) -> Option<Rank> {
        match self.board {
            Board::Fixed(rank) => Some(rank),
            Board::Absent | Board::Dealt => None,
        }
    }

    /// Every chance outcome with its probability.
    pub fn deals(&self) -> Vec<(Deal, f64)> {
        self.deck.deals(self.board)
    }

    /// True only before the cards are dealt.
    pub fn is_chance_node(&self, state: &LeducState) -> bool {
        state.deal.is_none()
    }

    /// Player who acts next at `state`.
    pub fn player_to_move(&self, state: &LeducState) -> Player {
        state.betting.to_act()
    }

    /// Replay an action line through the betting rules.
    pub fn replay(&self, line: &[LeducAction]) -> Result<Betting> {
        let mut betting = Betting::new(self.config.ante);
        for (i, &action) in line.iter().enumerate() {
            if betting.apply(action, &self.config).is_none() {
                return Err(Error::IllegalAction {
                    history: line[..i].iter().map(|a| a.symbol()).collect(),
                    action: action.symbol(),
                });
            }
        }
        Ok(betting)
    }

    /// Whether an action line ends the hand.
    ///
    /// Lines that break the rules are not terminal.
    pub fn is_terminal(&self, line: &[LeducAction]) -> bool {
        self.replay(line)
            .map(|betting| betting.is_finished())
            .unwrap_or(false)
    }

    /// Same as [`LeducPoker::is_terminal`] for a line of symbols like `"crc"`.
    pub fn is_terminal_str(&self, line: &str) -> bool {
        parse_line(line)
            .map(|actions| self.is_terminal(&actions))
            .unwrap_or(false)
    }

    /// Legal actions in alphabet order.
    pub fn legal_actions(&self, betting: &Betting) -> Vec<LeducAction> {
        let legal = betting.legal(&self.config);
        LeducAction::ALL
            .into_iter()
            .filter(|a| legal[a.index()])
            .collect()
    }

    /// Utility of a terminal state for the player who would move next.
    ///
    /// The loser gives up their whole stake: the folder's on a fold, either
    /// (equal) stake at showdown. Ties pay nothing.
    pub fn payoff(&self, state: &LeducState) -> f64 {
        debug_assert!(state.betting.is_finished(), "payoff of a live hand: {}", state);
        let mover = state.betting.to_act();
        if let Some(folder) = state.betting.folded() {
            let stake = state.betting.stake(folder) as f64;
            return if folder == mover { -stake } else { stake };
        }

        let Some(deal) = state.deal else {
            return 0.0;
        };
        let opponent = mover.opponent();
        let stake = state.betting.stake(opponent) as f64;
        match showdown(
            deal.holes[mover.index()],
            deal.holes[opponent.index()],
            state.history.board(),
        ) {
            Ordering::Greater => stake,
            Ordering::Less => -stake,
            Ordering::Equal => 0.0,
        }
    }

    /// Information key for a private rank and an action line.
    ///
    /// `board` is the rank shown when a new round starts, if any.
    pub fn info_key(&self, hole: char, board: Option<char>, line: &str) -> Result<LeducInfoKey> {
        let hole = self.deck_symbol(hole)?;
        let board = board.map(|symbol| self.deck_symbol(symbol)).transpose()?;
        let mut state = LeducState {
            deal: Some(Deal {
                holes: [hole, hole],
                board,
            }),
            history: History::new(),
            betting: Betting::new(self.config.ante),
        };
        for action in parse_line(line)? {
            state = self.step(&state, action)?;
        }
        Ok(LeducInfoKey {
            hole,
            history: state.history,
        })
    }

    fn deck_symbol(&self, symbol: char) -> Result<Rank> {
        Rank::from_symbol(symbol)
            .filter(|rank| self.deck.ranks().contains(rank))
            .ok_or(Error::UnknownRank(symbol))
    }

    /// Apply an action, reporting illegal ones as errors.
    pub fn step(&self, state: &LeducState, action: LeducAction) -> Result<LeducState> {
        let mut next = state.clone();
        let step = next
            .betting
            .apply(action, &self.config)
            .ok_or_else(|| Error::IllegalAction {
                history: state.history.to_string(),
                action: action.symbol(),
            })?;
        next.history.push_action(action);
        if step == Step::NextRound {
            next.history.push_street(state.deal.and_then(|d| d.board));
        }
        Ok(next)
    }
}

impl Game<NUM_ACTIONS> for LeducPoker {
    type State = LeducState;
    type Action = LeducAction;
    type InfoState = LeducInfoKey;

    fn root(&self) -> Self::State {
        LeducState {
            deal: None,
            history: History::new(),
            betting: Betting::new(self.config.ante),
        }
    }

    fn node(&self, state: &Self::State) -> Node {
        if self.is_chance_node(state) {
            Node::Chance
        } else if state.betting.is_finished() {
            Node::Terminal
        } else {
            Node::Decision(state.betting.to_act())
        }
    }

    fn chance_outcomes(&self, state: &Self::State) -> Vec<(Self::State, f64)> {
        self.deals()
            .into_iter()
            .map(|(deal, prob)| {
                let mut next = state.clone();
                next.deal = Some(deal);
                (next, prob)
            })
            .collect()
    }

    fn actions(&self) -> [Self::Action; NUM_ACTIONS] {
        LeducAction::ALL
    }

    fn legal(&self, state: &Self::State) -> [bool; NUM_ACTIONS] {
        state.betting.legal(&self.config)
    }

    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State {
        match self.step(state, action) {
            Ok(next) => next,
            Err(err) => panic!("invariant violated at {}: {}", state, err),
        }
    }

    fn info_state(&self, state: &Self::State) -> Self::InfoState {
        let mover = state.betting.to_act();
        let hole = match state.deal {
            Some(deal) => deal.holes[mover.index()],
            None => panic!("information state requested before the deal"),
        };
        LeducInfoKey {
            hole,
            history: state.history.clone(),
        }
    }

    fn payoff(&self, state: &Self::State) -> f64 {
        LeducPoker::payoff(self, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn one_round(max_raises: u32, open_fold: bool) -> LeducPoker {
        let config = GameConfig {
            copies: 1,
            raise_cap: 2 * max_raises,
            rounds: 1,
            open_fold,
            public_card: PublicCard::Absent,
            ..GameConfig::default()
        };
        LeducPoker::new(config).unwrap()
    }

    fn dealt(game: &LeducPoker, p1: char, p2: char, board: Option<char>, line: &str) -> LeducState {
        let deal = Deal {
            holes: [Rank::from_symbol(p1).unwrap(), Rank::from_symbol(p2).unwrap()],
            board: board.and_then(Rank::from_symbol),
        };
        let mut state = game.root();
        state.deal = Some(deal);
        for action in parse_line(line).unwrap() {
            state = game.apply(&state, action);
        }
        state
    }

    /// Every terminal line reachable by following `legal_actions`.
    fn reachable_terminals(game: &LeducPoker) -> BTreeSet<String> {
        fn walk(game: &LeducPoker, state: &LeducState, out: &mut BTreeSet<String>) {
            if state.betting.is_finished() {
                out.insert(state.history.line());
                return;
            }
            for action in game.legal_actions(&state.betting) {
                walk(game, &game.apply(state, action), out);
            }
        }
        let mut out = BTreeSet::new();
        let (deal, _) = game.deals()[0];
        let mut root = game.root();
        root.deal = Some(deal);
        walk(game, &root, &mut out);
        out
    }

    #[test]
    fn test_node_kinds() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        let root = game.root();
        assert_eq!(game.node(&root), Node::Chance);
        assert!(game.is_chance_node(&root));

        let state = dealt(&game, 'J', 'Q', Some('K'), "");
        assert_eq!(game.node(&state), Node::Decision(Player::One));
        let state = dealt(&game, 'J', 'Q', Some('K'), "r");
        assert_eq!(game.node(&state), Node::Decision(Player::Two));
        let state = dealt(&game, 'J', 'Q', Some('K'), "rf");
        assert_eq!(game.node(&state), Node::Terminal);
    }

    #[test]
    fn test_single_round_single_raise_terminals() {
        let game = one_round(1, false);
        let expected: BTreeSet<String> = ["cc", "crc", "crf", "cf", "rc", "rf"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(reachable_terminals(&game), expected);

        for line in &expected {
            assert!(game.is_terminal_str(line), "{} should be terminal", line);
        }
        for line in ["", "c", "r", "cr", "f", "rr", "crr", "ccc", "rcc", "x"] {
            assert!(!game.is_terminal_str(line), "{} should not be terminal", line);
        }
    }

    #[test]
    fn test_single_round_cap_four_terminals() {
        let game = one_round(2, true);
        let expected: BTreeSet<String> = [
            "f", "cc", "cf", "crc", "crf", "crrc", "crrf", "rc", "rf", "rrc", "rrf",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(reachable_terminals(&game), expected);
    }

    #[test]
    fn test_payoff_immediate_fold() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        let state = dealt(&game, 'K', 'J', Some('Q'), "f");
        // Player two is to move and collects player one's ante.
        assert_eq!(game.player_to_move(&state), Player::Two);
        assert_eq!(game.payoff(&state), 1.0);
    }

    #[test]
    fn test_payoff_raise_call() {
        let game = one_round(2, true);
        let state = dealt(&game, 'K', 'J', None, "rc");
        assert_eq!(state.betting.pot(), 6);
        // Player one to move again, holding the winner.
        assert_eq!(game.payoff(&state), 3.0);

        let state = dealt(&game, 'J', 'K', None, "rc");
        assert_eq!(game.payoff(&state), -3.0);
    }

    #[test]
    fn test_payoff_cap_reached() {
        let game = one_round(2, true);
        let state = dealt(&game, 'Q', 'K', None, "rrc");
        assert_eq!(state.betting.pot(), 10);
        assert_eq!(game.player_to_move(&state), Player::Two);
        assert_eq!(game.payoff(&state), 5.0);

        let state = dealt(&game, 'Q', 'K', None, "rrf");
        // Player one folds a stake of 3 to player two.
        assert_eq!(game.payoff(&state), 3.0);
    }

    #[test]
    fn test_board_pair_wins_showdown() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        let state = dealt(&game, 'J', 'K', Some('J'), "cc/cc");
        assert_eq!(state.history.to_string(), "cc/J:cc");
        assert_eq!(game.payoff(&state), 1.0);

        let state = dealt(&game, 'J', 'K', Some('Q'), "rc/rc");
        assert_eq!(game.payoff(&state), -5.0);
    }

    #[test]
    fn test_info_key_hides_opponent_card() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        let a = dealt(&game, 'J', 'Q', Some('K'), "cc");
        let b = dealt(&game, 'J', 'K', Some('K'), "cc");
        assert_eq!(game.info_state(&a), game.info_state(&b));

        let c = dealt(&game, 'J', 'Q', Some('Q'), "cc");
        assert_ne!(game.info_state(&a), game.info_state(&c));
        assert_eq!(game.info_state(&a).to_string(), "J cc/K:");
        assert_eq!(game.info_key('J', Some('K'), "cc").unwrap(), game.info_state(&a));
    }

    #[test]
    fn test_illegal_lines_are_errors() {
        let game = one_round(1, false);
        match game.replay(&parse_line("rr").unwrap()) {
            Err(Error::IllegalAction { history, action }) => {
                assert_eq!(history, "r");
                assert_eq!(action, 'r');
            }
            other => panic!("expected illegal action, got {:?}", other),
        }
        assert!(game.info_key('J', None, "f").is_err());
    }

    #[test]
    fn test_info_key_rejects_ranks_outside_the_deck() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        assert!(matches!(
            game.info_key('A', None, ""),
            Err(Error::UnknownRank('A'))
        ));
        assert!(matches!(
            game.info_key('2', None, "r"),
            Err(Error::UnknownRank('2'))
        ));
        assert!(matches!(
            game.info_key('J', Some('T'), "cc"),
            Err(Error::UnknownRank('T'))
        ));
        assert!(matches!(
            game.info_key('x', None, ""),
            Err(Error::UnknownRank('x'))
        ));
        assert!(game.info_key('k', Some('q'), "cc").is_ok());

        let wide = LeducPoker::new(GameConfig {
            ranks: 5,
            ..GameConfig::default()
        })
        .unwrap();
        assert!(wide.info_key('9', None, "").is_ok());
        assert!(wide.info_key('A', None, "").is_err());
    }

    #[test]
    #[should_panic(expected = "invariant violated")]
    fn test_applying_illegal_action_panics() {
        let game = one_round(1, false);
        let state = dealt(&game, 'J', 'Q', None, "r");
        game.apply(&state, LeducAction::Raise);
    }

    #[test]
    fn test_sampled_board_is_deterministic() {
        let config = GameConfig::default().with_public_card(PublicCard::Sampled { seed: 11 });
        let a = LeducPoker::new(config.clone()).unwrap();
        let b = LeducPoker::new(config).unwrap();
        assert!(a.fixed_board().is_some());
        assert_eq!(a.fixed_board(), b.fixed_board());
    }

    #[test]
    fn test_chance_outcomes_partition() {
        let game = LeducPoker::new(GameConfig::default()).unwrap();
        let outcomes = game.chance_outcomes(&game.root());
        let total: f64 = outcomes.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(outcomes.iter().all(|(s, _)| game.node(s) == Node::Decision(Player::One)));
    }
}
