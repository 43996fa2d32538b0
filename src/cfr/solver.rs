//! Vanilla Counterfactual Regret Minimization solver.
//!
//! Every iteration walks the whole game tree once, enumerating chance
//! outcomes exhaustively, and updates the regrets of both players in the
//! same pass. Strategies are re-matched only after the walk, so a single
//! iteration always sees one fixed strategy profile.
//!
//! The solver is generic over any game that implements the `Game` trait.

use std::time::Instant;

use crate::cfr::config::{CFRConfig, CFRStats};
use crate::cfr::game::{Game, Node, Player, Reach};
use crate::cfr::storage::{InfoSetStore, StrategyTable};
use crate::error::Result;

/// The main CFR solver.
///
/// # Example
/// ```
/// use leduc_cfr::cfr::{CFRConfig, CFRSolver};
/// use leduc_cfr::games::leduc::{GameConfig, LeducPoker};
///
/// let game = LeducPoker::new(GameConfig::kuhn()).unwrap();
/// let mut solver = CFRSolver::new(game, CFRConfig::default());
/// solver.train(100);
/// let [p1, p2] = solver.expected_value();
/// assert_eq!(p1, -p2);
/// ```
pub struct CFRSolver<G: Game<N>, const N: usize> {
    /// The game being solved.
    game: G,

    /// Configuration for the solver.
    config: CFRConfig,

    /// Every information set visited so far.
    store: InfoSetStore<G::InfoState, N>,

    /// Completed iterations.
    iteration: u64,

    /// Sum of the root values of all completed iterations.
    value_sum: f64,

    /// Statistics tracking.
    stats: CFRStats,
}

impl<G: Game<N>, const N: usize> CFRSolver<G, N> {
    /// Create a new CFR solver for the given game.
    pub fn new(game: G, config: CFRConfig) -> Self {
        Self {
            game,
            config,
            store: InfoSetStore::new(),
            iteration: 0,
            value_sum: 0.0,
            stats: CFRStats::new(),
        }
    }

    /// Create a solver with pre-allocated storage capacity.
    pub fn with_capacity(game: G, config: CFRConfig, capacity: usize) -> Self {
        Self {
            store: InfoSetStore::with_capacity(capacity),
            ..Self::new(game, config)
        }
    }

    /// Run one iteration: traverse, then advance every information set.
    ///
    /// Returns the root value of this iteration for player one.
    pub fn run_iteration(&mut self) -> f64 {
        let root = self.game.root();
        let value = self.cfr(&root, Reach::default());
        self.value_sum += value;
        self.store.advance_all();
        self.iteration += 1;
        value
    }

    /// Run the configured number of iterations.
    pub fn solve(&mut self) -> &CFRStats {
        let iterations = self.config.iterations;
        self.train(iterations)
    }

    /// Train the solver for a specified number of iterations.
    pub fn train(&mut self, iterations: u64) -> &CFRStats {
        self.train_with_callback(iterations, u64::MAX, |_| {})
    }

    /// Train with a callback for progress tracking.
    ///
    /// # Arguments
    /// * `iterations` - Number of iterations to run
    /// * `callback_interval` - How often to call the callback
    /// * `callback` - Function called every `callback_interval` iterations
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        callback_interval: u64,
        mut callback: F,
    ) -> &CFRStats
    where
        F: FnMut(&CFRStats),
    {
        let start_time = Instant::now();
        let callback_interval = callback_interval.max(1);
        let trace_interval = self.config.trace_interval.max(1);
        log::info!(
            "training {} iterations from iteration {}",
            iterations,
            self.iteration
        );

        for i in 0..iterations {
            self.run_iteration();

            if self.iteration % trace_interval == 0 {
                let ev = self.expected_value()[0];
                self.stats.record_ev(self.iteration, ev);
                log::debug!(
                    "iteration {:>8}  info sets {:>6}  expected value {:+.6}",
                    self.iteration,
                    self.store.len(),
                    ev
                );
            }

            if (i + 1) % callback_interval == 0 {
                self.refresh_stats(start_time);
                callback(&self.stats);
            }
        }

        self.refresh_stats(start_time);
        log::info!(
            "trained {} iterations over {} info sets in {:.2}s (ev {:+.6})",
            self.stats.iterations,
            self.stats.info_sets,
            self.stats.elapsed_seconds,
            self.stats.expected_value
        );
        &self.stats
    }

    fn refresh_stats(&mut self, start_time: Instant) {
        self.stats.iterations = self.iteration;
        self.stats.info_sets = self.store.len();
        self.stats.expected_value = self.expected_value()[0];
        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        self.stats.update_rate();
    }

    /// Counterfactual value of `state` for the player who acts there.
    ///
    /// Chance nodes pass the value of the first decision through unchanged;
    /// decision nodes negate their children because the child belongs to the
    /// opponent.
    fn cfr(&mut self, state: &G::State, reach: Reach) -> f64 {
        match self.game.node(state) {
            Node::Chance => self.chance(state, reach),
            Node::Terminal => self.game.payoff(state),
            Node::Decision(player) => self.decide(state, player, reach),
        }
    }

    /// Probability-weighted value over every chance outcome.
    fn chance(&mut self, state: &G::State, reach: Reach) -> f64 {
        let outcomes = self.game.chance_outcomes(state);
        debug_assert!(
            (outcomes.iter().map(|(_, p)| p).sum::<f64>() - 1.0).abs() < 1e-9,
            "chance probabilities must sum to one"
        );
        outcomes
            .iter()
            .map(|(next, prob)| prob * self.cfr(next, reach.deal(*prob)))
            .sum()
    }

    /// Regret update at a decision node.
    fn decide(&mut self, state: &G::State, player: Player, reach: Reach) -> f64 {
        let key = self.game.info_state(state);
        let legal = self.game.legal(state);
        let strategy = {
            let set = self.store.get_or_insert(&key, legal);
            set.accumulate_reach(reach.of(player));
            set.strategy()
        };

        let mut action_utils = [0.0; N];
        for (i, action) in self.game.actions().into_iter().enumerate() {
            if !legal[i] {
                continue;
            }
            let next = self.game.apply(state, action);
            action_utils[i] = -self.cfr(&next, reach.play(player, strategy[i]));
        }

        let util: f64 = action_utils
            .iter()
            .zip(strategy.iter())
            .map(|(u, p)| u * p)
            .sum();

        let mut regrets = [0.0; N];
        for i in 0..N {
            if legal[i] {
                regrets[i] = action_utils[i] - util;
            }
        }

        self.store
            .get_or_insert(&key, legal)
            .accumulate_regret(&regrets, reach.counterfactual(player));

        util
    }

    /// Running expected value `[player one, player two]`.
    ///
    /// The average of the root values of all completed iterations; zero
    /// before the first iteration.
    pub fn expected_value(&self) -> [f64; 2] {
        if self.iteration == 0 {
            return [0.0, 0.0];
        }
        let ev = self.value_sum / self.iteration as f64;
        [ev, -ev]
    }

    /// Average strategy of every information set, grouped by player.
    pub fn strategy_table(&self) -> Result<StrategyTable<G::InfoState, N>> {
        self.store.table(self.config.threshold)
    }

    /// Average strategy of a single information set.
    pub fn average_strategy(&self, key: &G::InfoState) -> Result<[f64; N]> {
        self.store.average_strategy(key, self.config.threshold)
    }

    /// Current-iteration strategy of a single information set.
    pub fn current_strategy(&self, key: &G::InfoState) -> Option<[f64; N]> {
        self.store.get(key).map(|set| set.strategy())
    }

    /// Get the current iteration count.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Get the number of information sets discovered.
    pub fn num_info_sets(&self) -> usize {
        self.store.len()
    }

    /// Get current statistics.
    pub fn stats(&self) -> &CFRStats {
        &self.stats
    }

    /// Get reference to the storage for analysis.
    pub fn store(&self) -> &InfoSetStore<G::InfoState, N> {
        &self.store
    }

    /// Get reference to the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &CFRConfig {
        &self.config
    }

    /// Reset the solver to initial state.
    pub fn reset(&mut self) {
        self.store.clear();
        self.iteration = 0;
        self.value_sum = 0.0;
        self.stats = CFRStats::new();
    }
}
