//! Game implementations for the CFR solver.
//!
//! ## Available Games
//!
//! - [`leduc`]: configurable two-player limit poker, from Kuhn poker up to
//!   multi-round games with a public card

pub mod leduc;
