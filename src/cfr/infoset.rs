//! Per-information-set regret and strategy bookkeeping.

/// Average-strategy entries below this are treated as noise.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Accumulators for one information set.
///
/// Regrets and reach are gathered during a traversal; the strategy used by
/// the traversal only changes in [`InfoSet::advance_iteration`], which the
/// solver calls once per set after every completed iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSet<const N: usize> {
    legal: [bool; N],
    regret_sum: [f64; N],
    strategy_sum: [f64; N],
    strategy: [f64; N],
    reach_prob: f64,
    reach_prob_sum: f64,
}

impl<const N: usize> InfoSet<N> {
    /// Fresh set with a uniform strategy over the legal actions.
    pub fn new(legal: [bool; N]) -> Self {
        debug_assert!(legal.iter().any(|&l| l), "information set without legal actions");
        Self {
            legal,
            regret_sum: [0.0; N],
            strategy_sum: [0.0; N],
            strategy: uniform(&legal),
            reach_prob: 0.0,
            reach_prob_sum: 0.0,
        }
    }

    /// Strategy used during the current iteration.
    pub fn strategy(&self) -> [f64; N] {
        self.strategy
    }

    /// Legal-action mask fixed at creation.
    pub fn legal(&self) -> [bool; N] {
        self.legal
    }

    /// Cumulative counterfactual regret per action.
    pub fn regret_sum(&self) -> [f64; N] {
        self.regret_sum
    }

    /// Cumulative reach-weighted strategy per action.
    pub fn strategy_sum(&self) -> [f64; N] {
        self.strategy_sum
    }

    /// Reach accumulated over completed iterations.
    pub fn reach_prob_sum(&self) -> f64 {
        self.reach_prob_sum
    }

    /// Reach accumulated in the running iteration.
    pub fn reach_prob(&self) -> f64 {
        self.reach_prob
    }

    /// Regret matching on the accumulated regrets.
    ///
    /// Positive regrets are normalized; with no positive regret the result
    /// is uniform over the legal actions.
    pub fn current_strategy(&self) -> [f64; N] {
        let mut positive = [0.0; N];
        for i in 0..N {
            if self.legal[i] {
                positive[i] = self.regret_sum[i].max(0.0);
            }
        }
        let total: f64 = positive.iter().sum();
        if total > 0.0 {
            positive.map(|r| r / total)
        } else {
            uniform(&self.legal)
        }
    }

    /// Record one visit reached with the acting player's own probability `prob`.
    pub fn accumulate_reach(&mut self, prob: f64) {
        self.reach_prob += prob;
    }

    /// Add regrets weighted by the reach of everyone but the acting player.
    pub fn accumulate_regret(&mut self, regrets: &[f64; N], counterfactual_reach: f64) {
        for i in 0..N {
            if self.legal[i] {
                self.regret_sum[i] += counterfactual_reach * regrets[i];
            }
        }
    }

    /// Close the iteration: fold reach into the averages and re-match regrets.
    pub fn advance_iteration(&mut self) {
        for i in 0..N {
            self.strategy_sum[i] += self.reach_prob * self.strategy[i];
        }
        self.strategy = self.current_strategy();
        self.reach_prob_sum += self.reach_prob;
        self.reach_prob = 0.0;
    }

    /// Time-averaged strategy with entries below `threshold` dropped.
    ///
    /// Returns `None` if the set was never reached in a completed iteration.
    pub fn average_strategy(&self, threshold: f64) -> Option<[f64; N]> {
        if self.reach_prob_sum <= 0.0 {
            return None;
        }
        let average = self
            .strategy_sum
            .map(|s| s / self.reach_prob_sum)
            .map(|p| if p < threshold { 0.0 } else { p });
        let total: f64 = average.iter().sum();
        if total > 0.0 {
            Some(average.map(|p| p / total))
        } else {
            Some(uniform(&self.legal))
        }
    }
}

/// Uniform distribution over the legal entries of `legal`.
pub fn uniform<const N: usize>(legal: &[bool; N]) -> [f64; N] {
    let count = legal.iter().filter(|&&l| l).count();
    let mut strategy = [0.0; N];
    if count == 0 {
        return strategy;
    }
    for i in 0..N {
        if legal[i] {
            strategy[i] = 1.0 / count as f64;
        }
    }
    strategy
}
