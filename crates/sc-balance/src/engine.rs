//! One-shot balancing — the "balance everything" pipeline

use log::info;
use sc_model::{GameConfig, Symbol};

use crate::payouts::populate_payouts;
use crate::reels::distribute_reel_weights;
use crate::weights::normalize_weights;

/// Run all three balancing passes over a config's symbol set
///
/// Payouts are populated first so the weight and reel passes rank against
/// the freshly derived tables rather than whatever the set carried before.
/// Returns the replacement symbol list; the caller assigns it back into
/// its config.
pub fn auto_balance(config: &GameConfig) -> Vec<Symbol> {
    info!(
        "auto-balancing {:?}: {} symbols, {:?}, {} reels",
        config.name,
        config.symbols.len(),
        config.pay_mechanism,
        config.reel_count
    );

    let symbols = populate_payouts(&config.symbols, config.pay_mechanism, config.reel_count);
    let symbols = normalize_weights(&symbols);
    distribute_reel_weights(&symbols, config.reel_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_balance_full_config() {
        let config = GameConfig::standard("Pipeline");
        let out = auto_balance(&config);

        assert_eq!(out.len(), config.symbols.len());
        assert_eq!(out.iter().map(|s| s.weight).sum::<u32>(), 100);
        for symbol in &out {
            assert!(symbol.payouts.is_some());
            for reel in 1..=config.reel_count {
                assert!((1..=10).contains(&symbol.reel_weight(reel)));
            }
        }
    }

    #[test]
    fn test_auto_balance_preserves_order() {
        let config = GameConfig::standard("Order");
        let out = auto_balance(&config);
        let ids: Vec<&str> = out.iter().map(|s| s.id.as_str()).collect();
        let expected: Vec<&str> = config.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_auto_balance_empty_config() {
        let config = GameConfig::new("Empty");
        assert!(auto_balance(&config).is_empty());
    }
}
