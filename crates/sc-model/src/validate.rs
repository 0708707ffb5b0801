//! Boundary validation for game configurations
//!
//! The balancing algorithms in `sc-balance` are total functions over
//! well-formed symbol sets; anything malformed is caught here before a
//! config ever reaches them. The UI layer calls [`validate`] after every
//! user edit and on every loaded file.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::{GameConfig, PayMechanism};
use crate::symbol::{CLUSTER_TIERS, PayoutTable, SymbolType};

/// Reel count bounds the wizard supports
pub const MIN_REELS: u8 = 3;
pub const MAX_REELS: u8 = 10;

/// A well-formedness violation in a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("reel count {0} outside {MIN_REELS}..={MAX_REELS}")]
    ReelCountOutOfRange(u8),

    #[error("{0} wild symbols configured, at most one is allowed")]
    TooManyWilds(usize),

    #[error("{0} scatter symbols configured, at most one is allowed")]
    TooManyScatters(usize),

    #[error("symbol {0:?} has an empty id")]
    EmptySymbolId(String),

    #[error("duplicate symbol id {0:?}")]
    DuplicateSymbolId(String),

    #[error("symbol {id:?}: weight {weight} outside 1..=100")]
    WeightOutOfRange { id: String, weight: u32 },

    #[error("symbol {id:?}: reel {reel} weight {weight} outside 1..=10")]
    ReelWeightOutOfRange { id: String, reel: u8, weight: u8 },

    #[error("symbol {id:?}: reel index {reel} outside 1..={reel_count}")]
    ReelIndexOutOfRange { id: String, reel: u8, reel_count: u8 },

    #[error("symbol {id:?}: payline table has {len} entries, {reel_count} reels allow at most {max}")]
    PaylineTableTooLong {
        id: String,
        len: usize,
        reel_count: u8,
        max: usize,
    },

    #[error("symbol {id:?}: {tier} is not a cluster tier")]
    UnknownClusterTier { id: String, tier: u8 },

    #[error("symbol {id:?}: payout table shape does not match the {mechanism:?} mechanism")]
    MechanismMismatch {
        id: String,
        mechanism: PayMechanism,
    },
}

/// Check a configuration for well-formedness
///
/// Returns the first violation found, scanning symbols in display order.
pub fn validate(config: &GameConfig) -> Result<(), ConfigError> {
    if !(MIN_REELS..=MAX_REELS).contains(&config.reel_count) {
        return Err(ConfigError::ReelCountOutOfRange(config.reel_count));
    }

    let wilds = count_type(config, SymbolType::Wild);
    if wilds > 1 {
        return Err(ConfigError::TooManyWilds(wilds));
    }
    let scatters = count_type(config, SymbolType::Scatter);
    if scatters > 1 {
        return Err(ConfigError::TooManyScatters(scatters));
    }

    let mut seen = HashSet::new();
    for symbol in &config.symbols {
        if symbol.id.is_empty() {
            return Err(ConfigError::EmptySymbolId(symbol.name.clone()));
        }
        if !seen.insert(symbol.id.as_str()) {
            return Err(ConfigError::DuplicateSymbolId(symbol.id.clone()));
        }

        if !(1..=100).contains(&symbol.weight) {
            return Err(ConfigError::WeightOutOfRange {
                id: symbol.id.clone(),
                weight: symbol.weight,
            });
        }

        for (&reel, &weight) in &symbol.reel_weights {
            if !(1..=config.reel_count).contains(&reel) {
                return Err(ConfigError::ReelIndexOutOfRange {
                    id: symbol.id.clone(),
                    reel,
                    reel_count: config.reel_count,
                });
            }
            if !(1..=10).contains(&weight) {
                return Err(ConfigError::ReelWeightOutOfRange {
                    id: symbol.id.clone(),
                    reel,
                    weight,
                });
            }
        }

        if let Some(table) = &symbol.payouts {
            validate_table(symbol.id.as_str(), table, config)?;
        }
    }

    Ok(())
}

fn count_type(config: &GameConfig, symbol_type: SymbolType) -> usize {
    config
        .symbols
        .iter()
        .filter(|s| s.symbol_type == symbol_type)
        .count()
}

fn validate_table(id: &str, table: &PayoutTable, config: &GameConfig) -> Result<(), ConfigError> {
    match (table, config.pay_mechanism) {
        (PayoutTable::Payline(pays), PayMechanism::Payline) => {
            let max = config.reel_count as usize - 1;
            if pays.len() > max {
                return Err(ConfigError::PaylineTableTooLong {
                    id: id.to_string(),
                    len: pays.len(),
                    reel_count: config.reel_count,
                    max,
                });
            }
            Ok(())
        }
        (PayoutTable::Cluster(pays), PayMechanism::Cluster) => {
            for &tier in pays.keys() {
                if !CLUSTER_TIERS.contains(&tier) {
                    return Err(ConfigError::UnknownClusterTier {
                        id: id.to_string(),
                        tier,
                    });
                }
            }
            Ok(())
        }
        (_, mechanism) => Err(ConfigError::MechanismMismatch {
            id: id.to_string(),
            mechanism,
        }),
    }
}
