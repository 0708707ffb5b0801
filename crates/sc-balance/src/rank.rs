//! Symbol ranking — the ordering every other balancing pass is built on

use std::cmp::Ordering;

use sc_model::{Symbol, SymbolType};

/// A symbol paired with the payout ceiling used for ordering
#[derive(Debug, Clone)]
pub struct RankedSymbol {
    /// The underlying symbol
    pub symbol: Symbol,
    /// Highest value in the symbol's payout table, 0 when none is populated
    pub max_payout: u32,
}

/// Order a symbol set for balancing
///
/// Wild sorts first, then scatter, then regulars by payout descending.
/// Category only decides between symbols of *different* types where one is
/// special; symbols of the same type compare purely by payout. The sort is
/// stable, so payout ties keep first-occurrence order. The caller's set is
/// untouched; ranking never feeds back into display order.
pub fn rank(symbols: &[Symbol]) -> Vec<RankedSymbol> {
    let mut ranked: Vec<RankedSymbol> = symbols
        .iter()
        .map(|s| RankedSymbol {
            max_payout: s.max_payout(),
            symbol: s.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        compare(
            (a.symbol.symbol_type, a.max_payout),
            (b.symbol.symbol_type, b.max_payout),
        )
    });
    ranked
}

/// Normalized rank position `i / (n - 1)`, 0 for a singleton band
pub fn rank_fraction(index: usize, count: usize) -> f64 {
    index as f64 / count.saturating_sub(1).max(1) as f64
}

fn category_priority(symbol_type: SymbolType) -> u8 {
    match symbol_type {
        SymbolType::Wild => 0,
        SymbolType::Scatter => 1,
        SymbolType::Regular => 2,
    }
}

fn compare(a: (SymbolType, u32), b: (SymbolType, u32)) -> Ordering {
    let (a_type, a_pay) = a;
    let (b_type, b_pay) = b;
    if a_type != b_type && (a_type.is_special() || b_type.is_special()) {
        category_priority(a_type).cmp(&category_priority(b_type))
    } else {
        b_pay.cmp(&a_pay)
    }
}

/// Positions of the regular symbols, highest payout first (stable)
pub(crate) fn regular_positions_by_payout(symbols: &[Symbol]) -> Vec<usize> {
    let mut positions: Vec<usize> = symbols
        .iter()
        .enumerate()
        .filter(|(_, s)| s.symbol_type == SymbolType::Regular)
        .map(|(i, _)| i)
        .collect();
    positions.sort_by(|&a, &b| symbols[b].max_payout().cmp(&symbols[a].max_payout()));
    positions
}
