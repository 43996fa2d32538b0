//! Storage for information sets and the exported strategy table.
//!
//! The store is owned by the solver for the whole run and handed to the
//! traversal by `&mut`, so no locking is involved.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cfr::game::{InfoState, Player};
use crate::cfr::infoset::InfoSet;
use crate::error::{Error, Result};

/// All information sets discovered so far, keyed by information state.
#[derive(Debug, Clone)]
pub struct InfoSetStore<K: InfoState, const N: usize> {
    sets: FxHashMap<K, InfoSet<N>>,
}

impl<K: InfoState, const N: usize> Default for InfoSetStore<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: InfoState, const N: usize> InfoSetStore<K, N> {
    /// Create new empty storage.
    pub fn new() -> Self {
        Self {
            sets: FxHashMap::default(),
        }
    }

    /// Create storage with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sets: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Look up a set, creating it with `legal` on first visit.
    pub fn get_or_insert(&mut self, key: &K, legal: [bool; N]) -> &mut InfoSet<N> {
        let set = self
            .sets
            .entry(key.clone())
            .or_insert_with(|| InfoSet::new(legal));
        debug_assert_eq!(set.legal(), legal, "legal actions changed for {}", key);
        set
    }

    /// Shared access to one set.
    pub fn get(&self, key: &K) -> Option<&InfoSet<N>> {
        self.sets.get(key)
    }

    /// Close the iteration on every set.
    pub fn advance_all(&mut self) {
        for set in self.sets.values_mut() {
            set.advance_iteration();
        }
    }

    /// Number of information sets stored.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate over all sets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &InfoSet<N>)> {
        self.sets.iter()
    }

    /// Average strategy of one set.
    pub fn average_strategy(&self, key: &K, threshold: f64) -> Result<[f64; N]> {
        self.sets
            .get(key)
            .and_then(|set| set.average_strategy(threshold))
            .ok_or_else(|| Error::Unreached { key: key.key() })
    }

    /// Export every average strategy, grouped by acting player.
    ///
    /// Fails on the first set that was created but never reached.
    pub fn table(&self, threshold: f64) -> Result<StrategyTable<K, N>> {
        let mut table = StrategyTable::default();
        for (key, set) in &self.sets {
            let strategy = set
                .average_strategy(threshold)
                .ok_or_else(|| Error::Unreached { key: key.key() })?;
            table.players[key.player().index()].insert(key.clone(), strategy);
        }
        Ok(table)
    }

    /// Remove every set.
    pub fn clear(&mut self) {
        self.sets.clear();
    }
}

/// The solver's output: one average strategy per information set.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTable<K: InfoState, const N: usize> {
    players: [BTreeMap<K, [f64; N]>; 2],
}

impl<K: InfoState, const N: usize> Default for StrategyTable<K, N> {
    fn default() -> Self {
        Self {
            players: [BTreeMap::new(), BTreeMap::new()],
        }
    }
}

impl<K: InfoState, const N: usize> StrategyTable<K, N> {
    /// Strategies of one player, ordered by key.
    pub fn player(&self, player: Player) -> &BTreeMap<K, [f64; N]> {
        &self.players[player.index()]
    }

    /// Strategy for a single information state.
    pub fn get(&self, key: &K) -> Option<&[f64; N]> {
        self.players[key.player().index()].get(key)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.players.iter().map(BTreeMap::len).sum()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializable form keyed by the string keys.
    pub fn export(&self) -> TableExport {
        let group = |map: &BTreeMap<K, [f64; N]>| {
            map.iter()
                .map(|(key, strategy)| (key.key(), strategy.to_vec()))
                .collect()
        };
        TableExport {
            player_one: group(&self.players[0]),
            player_two: group(&self.players[1]),
        }
    }
}

/// Serializable export format for a strategy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableExport {
    /// Average strategies of player one.
    pub player_one: BTreeMap<String, Vec<f64>>,
    /// Average strategies of player two.
    pub player_two: BTreeMap<String, Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct Key(&'static str);

    impl fmt::Display for Key {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl InfoState for Key {
        fn player(&self) -> Player {
            Player::from_parity(self.0.len())
        }
    }

    #[test]
    fn test_get_or_insert_is_lazy_and_stable() {
        let mut store: InfoSetStore<Key, 3> = InfoSetStore::new();
        assert!(store.is_empty());

        store.get_or_insert(&Key("c"), [true; 3]).accumulate_reach(1.0);
        store.get_or_insert(&Key("c"), [true; 3]).accumulate_reach(0.5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&Key("c")).unwrap().reach_prob(), 1.5);

        store
            .get_or_insert(&Key("c"), [true; 3])
            .accumulate_regret(&[1.0, 0.0, -1.0], 1.0);
        store.get_or_insert(&Key("r"), [true, false, true]);
        assert_eq!(store.len(), 2);
        let set = store.get(&Key("c")).unwrap();
        assert_eq!(set.regret_sum(), [1.0, 0.0, -1.0]);
        assert_eq!(set.reach_prob(), 1.5);
        assert_eq!(store.get(&Key("r")).unwrap().legal(), [true, false, true]);
    }

    #[test]
    fn test_table_groups_by_player() {
        let mut store: InfoSetStore<Key, 3> = InfoSetStore::new();
        for key in [Key(""), Key("c"), Key("cr")] {
            store.get_or_insert(&key, [true; 3]).accumulate_reach(1.0);
        }
        store.advance_all();

        let table = store.table(0.001).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.player(Player::One).len(), 2);
        assert_eq!(table.player(Player::Two).len(), 1);
        assert!(table.get(&Key("c")).is_some());

        let export = table.export();
        assert_eq!(export.player_one.keys().collect::<Vec<_>>(), vec!["", "cr"]);
    }

    #[test]
    fn test_unreached_set_is_reported() {
        let mut store: InfoSetStore<Key, 3> = InfoSetStore::new();
        store.get_or_insert(&Key("c"), [true; 3]).accumulate_reach(1.0);
        store.get_or_insert(&Key("rr"), [true; 3]);
        store.advance_all();

        match store.table(0.001) {
            Err(Error::Unreached { key }) => assert_eq!(key, "rr"),
            other => panic!("expected unreached error, got {:?}", other),
        }
        assert!(store.average_strategy(&Key("c"), 0.001).is_ok());
        assert!(matches!(
            store.average_strategy(&Key("missing"), 0.001),
            Err(Error::Unreached { .. })
        ));
    }
}
