//! Per-reel frequency distribution — position-dependent weight curves
//!
//! Each symbol category follows its own shape across the reels:
//! progressive for wilds (rare early, common late), a plateau for
//! scatters, a ramp for high-pay symbols, near-flat for low-pays.

use std::collections::BTreeMap;

use sc_model::{DEFAULT_REEL_WEIGHT, Symbol, SymbolType};

use crate::rank::{rank_fraction, regular_positions_by_payout};

/// Share of regular symbols treated as high-pay (rounded up, minimum 1)
const HIGH_PAY_SHARE: f64 = 0.4;

/// Frequency curve assigned to a symbol
#[derive(Debug, Clone, Copy)]
enum Curve {
    Wild,
    Scatter,
    HighPay(f64),
    LowPay(f64),
    Flat,
}

/// Rewrite every symbol's per-reel weights from its category curve
///
/// Weights land in 1..=10 for reels `1..=reel_count`. High- and low-pay
/// bands are cut from the payout-descending regular ranking: the top 40%
/// (rounded up, at least one) ramp up across the reels, the rest stay
/// near-flat. Anything that fits no category gets a flat 5. Insertion
/// order is preserved.
pub fn distribute_reel_weights(symbols: &[Symbol], reel_count: u8) -> Vec<Symbol> {
    let regulars = regular_positions_by_payout(symbols);
    let n = regulars.len();
    let high_count = if n == 0 {
        0
    } else {
        ((n as f64 * HIGH_PAY_SHARE).ceil() as usize).max(1).min(n)
    };

    let mut curves: Vec<Curve> = vec![Curve::Flat; symbols.len()];
    for (pos, symbol) in symbols.iter().enumerate() {
        match symbol.symbol_type {
            SymbolType::Wild => curves[pos] = Curve::Wild,
            SymbolType::Scatter => curves[pos] = Curve::Scatter,
            SymbolType::Regular => {}
        }
    }
    let (high, low) = regulars.split_at(high_count);
    for (i, &pos) in high.iter().enumerate() {
        curves[pos] = Curve::HighPay(rank_fraction(i, high.len()));
    }
    for (i, &pos) in low.iter().enumerate() {
        curves[pos] = Curve::LowPay(rank_fraction(i, low.len()));
    }

    symbols
        .iter()
        .enumerate()
        .map(|(pos, symbol)| {
            let mut out = symbol.clone();
            out.reel_weights = match curves[pos] {
                Curve::Wild => wild_curve(reel_count),
                Curve::Scatter => scatter_curve(reel_count),
                Curve::HighPay(rank) => high_pay_curve(reel_count, rank),
                Curve::LowPay(rank) => low_pay_curve(reel_count, rank),
                Curve::Flat => flat_curve(reel_count),
            };
            out
        })
        .collect()
}

/// Wilds climb steeply toward the last reel
fn wild_curve(reel_count: u8) -> BTreeMap<u8, u8> {
    if reel_count == 5 {
        return pairs(&[(1, 1), (2, 2), (3, 4), (4, 7), (5, 10)]);
    }
    (1..=reel_count)
        .map(|reel| {
            let weight = (reel as f64 / reel_count as f64 * 10.0).round() as i64;
            (reel, weight.max(1) as u8)
        })
        .collect()
}

/// Scatters plateau mid-board and taper at the edges
fn scatter_curve(reel_count: u8) -> BTreeMap<u8, u8> {
    if reel_count == 5 {
        return pairs(&[(1, 3), (2, 5), (3, 5), (4, 5), (5, 3)]);
    }
    let mid = (reel_count as f64 + 1.0) / 2.0;
    let max_distance = mid - 1.0;
    (1..=reel_count)
        .map(|reel| {
            let weight = if max_distance <= 0.0 {
                5
            } else {
                let distance = (reel as f64 - mid).abs();
                (5 - (2.0 * distance / max_distance).round() as i64).max(2)
            };
            (reel, weight as u8)
        })
        .collect()
}

/// High-pays ramp up, with the band's lower ranks lifted inside each reel's range
fn high_pay_curve(reel_count: u8, rank: f64) -> BTreeMap<u8, u8> {
    if reel_count == 5 {
        const BANDS: [(f64, f64); 5] = [(1.0, 2.0), (2.0, 3.0), (3.0, 3.0), (5.0, 3.0), (6.0, 4.0)];
        return (1u8..=5)
            .map(|reel| {
                let (base, spread) = BANDS[(reel - 1) as usize];
                (reel, (base + rank * spread).round().max(base) as u8)
            })
            .collect();
    }
    (1..=reel_count)
        .map(|reel| {
            let base = ((reel as f64 / reel_count as f64 * 9.0).round() as i64).max(1);
            let adjustment = (rank * (10 - base) as f64 * 0.5).round() as i64;
            (reel, (base + adjustment).min(10) as u8)
        })
        .collect()
}

/// Low-pays sit near-flat, the better half slightly thinned on early reels
fn low_pay_curve(reel_count: u8, rank: f64) -> BTreeMap<u8, u8> {
    let base = 7 + (rank * 3.0).round() as i64;
    (1..=reel_count)
        .map(|reel| {
            let mut weight = base;
            if reel < 3 && rank < 0.5 {
                weight -= 2;
            }
            (reel, weight.max(1) as u8)
        })
        .collect()
}

fn flat_curve(reel_count: u8) -> BTreeMap<u8, u8> {
    (1..=reel_count)
        .map(|reel| (reel, DEFAULT_REEL_WEIGHT))
        .collect()
}

fn pairs(entries: &[(u8, u8)]) -> BTreeMap<u8, u8> {
    entries.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_model::PayoutTable;

    fn regular(id: &str, top_pay: u32) -> Symbol {
        Symbol::regular(id)
            .with_id(id)
            .with_payouts(PayoutTable::payline([1, 2, 3, top_pay]))
    }

    fn weights_of(symbol: &Symbol, reel_count: u8) -> Vec<u8> {
        (1..=reel_count).map(|r| symbol.reel_weight(r)).collect()
    }

    #[test]
    fn test_wild_five_reel_baseline() {
        let symbols = vec![Symbol::wild("WILD").with_id("wild")];
        let out = distribute_reel_weights(&symbols, 5);
        assert_eq!(weights_of(&out[0], 5), vec![1, 2, 4, 7, 10]);
    }

    #[test]
    fn test_wild_generic_curve_is_monotonic() {
        let symbols = vec![Symbol::wild("WILD").with_id("wild")];
        let out = distribute_reel_weights(&symbols, 3);
        let weights = weights_of(&out[0], 3);
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*weights.first().unwrap(), 3);
        assert_eq!(*weights.last().unwrap(), 10);
    }

    #[test]
    fn test_scatter_five_reel_plateau() {
        let symbols = vec![Symbol::scatter("SCATTER").with_id("scatter")];
        let out = distribute_reel_weights(&symbols, 5);
        assert_eq!(weights_of(&out[0], 5), vec![3, 5, 5, 5, 3]);
    }

    #[test]
    fn test_scatter_generic_curve_is_symmetric() {
        let symbols = vec![Symbol::scatter("SCATTER").with_id("scatter")];
        let out = distribute_reel_weights(&symbols, 7);
        let weights = weights_of(&out[0], 7);
        let mut reversed = weights.clone();
        reversed.reverse();
        assert_eq!(weights, reversed);
        assert!(weights.iter().all(|&w| (2..=5).contains(&w)));
    }

    #[test]
    fn test_high_pay_band_is_top_40_percent() {
        // 5 regulars -> ceil(2.0) = 2 high-pays
        let symbols = vec![
            regular("a", 500),
            regular("b", 400),
            regular("c", 300),
            regular("d", 200),
            regular("e", 100),
        ];
        let out = distribute_reel_weights(&symbols, 5);
        // best high-pay (rank 0) starts the ramp at its bases
        assert_eq!(weights_of(&out[0], 5), vec![1, 2, 3, 5, 6]);
        // worst high-pay (rank 1) tops the per-reel ranges
        assert_eq!(weights_of(&out[1], 5), vec![3, 5, 6, 8, 10]);
        // low-pays are near-flat
        for symbol in &out[2..] {
            let weights = weights_of(symbol, 5);
            assert!(weights.iter().all(|&w| (1..=10).contains(&w)));
        }
    }

    #[test]
    fn test_low_pay_better_half_thinner_on_early_reels() {
        // 3 regulars -> 2 high, 1 low; the lone low-pay has rank 0
        let symbols = vec![regular("a", 500), regular("b", 400), regular("c", 100)];
        let out = distribute_reel_weights(&symbols, 5);
        let weights = weights_of(&out[2], 5);
        assert_eq!(weights, vec![5, 5, 7, 7, 7]);
    }

    #[test]
    fn test_all_weights_in_bounds() {
        let mut symbols = vec![
            Symbol::wild("WILD").with_id("wild"),
            Symbol::scatter("SCATTER").with_id("scatter"),
        ];
        for i in 0..12 {
            symbols.push(regular(&format!("r{i}"), 600 - i * 40));
        }
        for reel_count in [3u8, 4, 5, 6, 7, 10] {
            let out = distribute_reel_weights(&symbols, reel_count);
            for symbol in &out {
                for reel in 1..=reel_count {
                    let w = symbol.reel_weight(reel);
                    assert!((1..=10).contains(&w), "reel {reel} weight {w} out of bounds");
                }
            }
        }
    }

    #[test]
    fn test_symbols_without_payouts_do_not_panic() {
        let symbols = vec![
            Symbol::regular("bare1").with_id("bare1"),
            Symbol::regular("bare2").with_id("bare2"),
        ];
        let out = distribute_reel_weights(&symbols, 5);
        for symbol in &out {
            for reel in 1..=5 {
                assert!((1..=10).contains(&symbol.reel_weight(reel)));
            }
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let symbols = vec![
            regular("lp", 25),
            Symbol::scatter("SCATTER").with_id("scatter"),
            regular("hp", 500),
            Symbol::wild("WILD").with_id("wild"),
        ];
        let out = distribute_reel_weights(&symbols, 5);
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["lp", "scatter", "hp", "wild"]);
    }
}
