//! Payout population — rank-scaled paytables for the whole set

use sc_model::{CLUSTER_TIERS, PayMechanism, PayoutTable, Symbol, SymbolType};

use crate::rank::{rank_fraction, regular_positions_by_payout};

/// Cluster baselines for the best-ranked regular symbol, per tier
const REGULAR_CLUSTER_BASES: [u32; 5] = [5, 20, 100, 250, 1000];

/// Per-tier floors a cluster pay never scales below
const REGULAR_CLUSTER_FLOORS: [u32; 5] = [1, 2, 5, 10, 25];

/// Rewrite every symbol's payout table from its rank
///
/// Wild and scatter always get their fixed baseline tables; regulars are
/// scaled down from the top baseline by `1 - rank * 0.8`, so the
/// best-ranked regular pays the full baseline and the worst pays 20% of
/// it (before flooring). Existing tables, manual edits included, are
/// overwritten. Insertion order is preserved.
pub fn populate_payouts(
    symbols: &[Symbol],
    mechanism: PayMechanism,
    reel_count: u8,
) -> Vec<Symbol> {
    let regulars = regular_positions_by_payout(symbols);
    let n = regulars.len();

    // rank fraction per original position; specials never read theirs
    let mut fractions: Vec<f64> = vec![0.0; symbols.len()];
    for (i, &pos) in regulars.iter().enumerate() {
        fractions[pos] = rank_fraction(i, n);
    }

    symbols
        .iter()
        .enumerate()
        .map(|(pos, symbol)| {
            let table = match symbol.symbol_type {
                SymbolType::Wild => wild_table(mechanism, reel_count),
                SymbolType::Scatter => scatter_table(mechanism, reel_count),
                SymbolType::Regular => regular_table(mechanism, reel_count, fractions[pos]),
            };
            let mut out = symbol.clone();
            out.payouts = Some(table);
            out
        })
        .collect()
}

fn wild_table(mechanism: PayMechanism, reel_count: u8) -> PayoutTable {
    match mechanism {
        PayMechanism::Cluster => PayoutTable::cluster_tiers([10, 25, 150, 500, 2000]),
        PayMechanism::Payline => {
            PayoutTable::Payline((2..=reel_count).map(wild_line_pay).collect())
        }
    }
}

fn scatter_table(mechanism: PayMechanism, reel_count: u8) -> PayoutTable {
    match mechanism {
        PayMechanism::Cluster => PayoutTable::cluster_tiers([5, 20, 100, 250, 1000]),
        PayMechanism::Payline => {
            PayoutTable::Payline((2..=reel_count).map(scatter_line_pay).collect())
        }
    }
}

fn regular_table(mechanism: PayMechanism, reel_count: u8, rank: f64) -> PayoutTable {
    let factor = 1.0 - rank * 0.8;
    match mechanism {
        PayMechanism::Cluster => PayoutTable::Cluster(
            CLUSTER_TIERS
                .iter()
                .copied()
                .zip(
                    REGULAR_CLUSTER_BASES
                        .iter()
                        .zip(REGULAR_CLUSTER_FLOORS)
                        .map(|(&base, floor)| scaled(base, factor).max(floor)),
                )
                .collect(),
        ),
        PayMechanism::Payline => PayoutTable::Payline(
            (2..=reel_count)
                .map(|m| scaled(regular_line_base(m), factor).max(1))
                .collect(),
        ),
    }
}

fn wild_line_pay(match_count: u8) -> u32 {
    match match_count {
        5 => 1000,
        4 => 200,
        3 => 50,
        2 => 10,
        _ => 5,
    }
}

fn scatter_line_pay(match_count: u8) -> u32 {
    match match_count {
        5 => 500,
        4 => 100,
        3 => 25,
        2 => 5,
        _ => 2,
    }
}

fn regular_line_base(match_count: u8) -> u32 {
    match match_count {
        2 => 5,
        3 => 25,
        4 => 100,
        5 => 500,
        _ => 0,
    }
}

fn scaled(base: u32, factor: f64) -> u32 {
    (base as f64 * factor).round() as u32
}
