//! Result report: text listing and JSON export.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cfr::config::CFRStats;
use crate::cfr::game::Action;
use crate::cfr::solver::CFRSolver;
use crate::cfr::storage::TableExport;
use crate::error::Result;
use crate::games::leduc::action::{LeducAction, NUM_ACTIONS};
use crate::games::leduc::config::GameConfig;
use crate::games::leduc::game::LeducPoker;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Game that was solved.
    pub game: GameConfig,
    /// Public card shared by every deal, when fixed.
    pub board: Option<String>,
    /// Expected value for player one and player two.
    pub expected_value: [f64; 2],
    /// Training statistics.
    pub stats: CFRStats,
    /// Average strategies keyed by information set.
    pub strategies: TableExport,
}

impl SolveReport {
    /// Collect the report from a trained solver.
    pub fn from_solver(solver: &CFRSolver<LeducPoker, NUM_ACTIONS>) -> Result<Self> {
        let game = solver.game();
        Ok(Self {
            game: game.config().clone(),
            board: game.fixed_board().map(|rank| rank.to_string()),
            expected_value: solver.expected_value(),
            stats: solver.stats().clone(),
            strategies: solver.strategy_table()?.export(),
        })
    }

    /// Human-readable listing: both expected values, then one line per
    /// information set with the probability of `c`, `r` and `f`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, ev) in self.expected_value.iter().enumerate() {
            let _ = writeln!(out, "player {} expected value: {}", i + 1, sig3(*ev));
        }
        if let Some(board) = &self.board {
            let _ = writeln!(out, "public card: {}", board);
        }

        let groups = [&self.strategies.player_one, &self.strategies.player_two];
        for (i, group) in groups.into_iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "player {} strategies:", i + 1);
            write_group(&mut out, group);
        }
        out
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON form to `path`.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_group(out: &mut String, group: &BTreeMap<String, Vec<f64>>) {
    let width = group.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, strategy) in group {
        let _ = write!(out, "{:<width$}", key, width = width);
        for (action, p) in LeducAction::ALL.iter().zip(strategy) {
            let _ = write!(out, "  {} {:<6}", action.symbol(), sig3(*p));
        }
        let _ = writeln!(out);
    }
}

/// Format a number to three significant digits.
pub fn sig3(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    // Exponent after rounding, so 0.9996 counts as 1.00.
    let scientific = format!("{:.2e}", value);
    let magnitude = scientific
        .split('e')
        .nth(1)
        .and_then(|exp| exp.parse::<i32>().ok())
        .unwrap_or_else(|| value.abs().log10().floor() as i32);
    let decimals = (2 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, value)
}
