//! Weight normalization — global appearance shares summing to exactly 100

use log::debug;
use sc_model::{Symbol, SymbolType};

use crate::rank::{rank_fraction, regular_positions_by_payout};

/// Fixed share reserved for a wild symbol
pub const WILD_RESERVED_WEIGHT: u32 = 5;

/// Fixed share reserved for a scatter symbol
pub const SCATTER_RESERVED_WEIGHT: u32 = 3;

/// Derive global appearance weights for the whole set
///
/// Specials take fixed reserved shares; the remainder is spread across the
/// regular symbols with a power curve that gives low-paying symbols
/// proportionally more weight. For any set with at least one regular
/// symbol the returned weights sum to exactly 100, each at least 1.
///
/// A set with no regular symbols keeps the reserved shares as-is and may
/// sum below 100; the corrective pass is skipped so it cannot inflate a
/// special past its reserve.
pub fn normalize_weights(symbols: &[Symbol]) -> Vec<Symbol> {
    if symbols.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<u32> = symbols.iter().map(|s| s.weight).collect();

    // Reserved shares for specials
    let mut reserved: i64 = 0;
    for (pos, symbol) in symbols.iter().enumerate() {
        match symbol.symbol_type {
            SymbolType::Wild => {
                weights[pos] = WILD_RESERVED_WEIGHT;
                reserved += WILD_RESERVED_WEIGHT as i64;
            }
            SymbolType::Scatter => {
                weights[pos] = SCATTER_RESERVED_WEIGHT;
                reserved += SCATTER_RESERVED_WEIGHT as i64;
            }
            SymbolType::Regular => {}
        }
    }

    let regulars = regular_positions_by_payout(symbols);
    if !regulars.is_empty() {
        let remaining = 100 - reserved;
        let n = regulars.len();

        // Power curve over rank position: lower-paying symbols sit later in
        // rank order and collect a larger slice of the remainder
        let curve: Vec<f64> = (0..n)
            .map(|i| rank_fraction(i, n).powf(1.5) + 0.2)
            .collect();
        let curve_total: f64 = curve.iter().sum();

        for (i, &pos) in regulars.iter().enumerate() {
            let share = curve[i] / curve_total * remaining as f64;
            weights[pos] = share.round().max(1.0) as u32;
        }

        correct_total(&mut weights);
        debug!(
            "normalized {} symbols ({} regular), total weight {}",
            symbols.len(),
            n,
            weights.iter().sum::<u32>()
        );
    }

    symbols
        .iter()
        .zip(weights)
        .map(|(symbol, weight)| {
            let mut out = symbol.clone();
            out.weight = weight;
            out
        })
        .collect()
}

/// Force the grand total back to exactly 100
///
/// Rescale and re-round everything, then put whatever residual rounding
/// left over on the heaviest symbol (first occurrence on ties).
fn correct_total(weights: &mut [u32]) {
    let total: i64 = weights.iter().map(|&w| w as i64).sum();
    if total == 100 {
        return;
    }

    for weight in weights.iter_mut() {
        *weight = (*weight as f64 * 100.0 / total as f64).round().max(1.0) as u32;
    }

    let rescaled: i64 = weights.iter().map(|&w| w as i64).sum();
    let residual = 100 - rescaled;
    if residual != 0 {
        let mut heaviest = 0;
        for (pos, &weight) in weights.iter().enumerate() {
            if weight > weights[heaviest] {
                heaviest = pos;
            }
        }
        weights[heaviest] = (weights[heaviest] as i64 + residual).max(1) as u32;
    }
}
