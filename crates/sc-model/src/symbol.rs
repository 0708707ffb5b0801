//! Symbol definitions and payout tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cluster-size tiers every cluster-pays table is keyed by
pub const CLUSTER_TIERS: [u8; 5] = [5, 8, 12, 15, 20];

/// Per-reel frequency assumed when a symbol carries no override for a reel
pub const DEFAULT_REEL_WEIGHT: u8 = 5;

/// Symbol type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolType {
    /// Wild - substitutes for regular symbols
    Wild,
    /// Scatter - pays regardless of position
    Scatter,
    /// Regular paying symbol
    Regular,
}

impl SymbolType {
    /// Check if this is a special symbol (wild or scatter)
    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Regular)
    }
}

/// A symbol's payout table, resolved to the game's pay mechanism
///
/// The wizard stores exactly one shape per symbol; which one is legal is
/// decided by the game-level [`PayMechanism`](crate::PayMechanism) and
/// checked by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pays", rename_all = "snake_case")]
pub enum PayoutTable {
    /// Pays per match count: index 0 = 2-of-a-kind, up to the full-reel match
    Payline(Vec<u32>),
    /// Pays per cluster-size tier (keys drawn from [`CLUSTER_TIERS`])
    Cluster(BTreeMap<u8, u32>),
}

impl PayoutTable {
    /// Build a payline table from pays for 2-of-a-kind upward
    pub fn payline(pays: impl Into<Vec<u32>>) -> Self {
        Self::Payline(pays.into())
    }

    /// Build a cluster table by zipping values onto [`CLUSTER_TIERS`]
    pub fn cluster_tiers(values: [u32; 5]) -> Self {
        Self::Cluster(CLUSTER_TIERS.iter().copied().zip(values).collect())
    }

    /// Highest value anywhere in the table, 0 for an empty table
    pub fn max_value(&self) -> u32 {
        match self {
            Self::Payline(pays) => pays.iter().copied().max().unwrap_or(0),
            Self::Cluster(pays) => pays.values().copied().max().unwrap_or(0),
        }
    }

    /// Pay for a given match count (payline tables only)
    pub fn payline_pay(&self, match_count: u8) -> u32 {
        match self {
            Self::Payline(pays) if match_count >= 2 => {
                pays.get((match_count - 2) as usize).copied().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Pay for a given cluster size tier (cluster tables only)
    pub fn cluster_pay(&self, tier: u8) -> u32 {
        match self {
            Self::Cluster(pays) => pays.get(&tier).copied().unwrap_or(0),
            _ => 0,
        }
    }
}

/// A symbol definition
///
/// Symbols are plain values: the balancing operations never mutate one in
/// place, they return a rewritten copy of the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique opaque ID, stable for the session, never reused
    pub id: String,
    /// Display label
    pub name: String,
    /// Symbol type
    pub symbol_type: SymbolType,
    /// Global appearance share in 1..=100; the set sums to 100 after
    /// weight normalization but may drift during manual edits
    #[serde(default = "default_weight")]
    pub weight: u32,
    /// Per-reel frequency override: 1-based reel index -> weight in 1..=10.
    /// Reels without an entry fall back to [`DEFAULT_REEL_WEIGHT`].
    #[serde(default)]
    pub reel_weights: BTreeMap<u8, u8>,
    /// Payout table, absent until populated by hand or by the balancer
    #[serde(default)]
    pub payouts: Option<PayoutTable>,
}

fn default_weight() -> u32 {
    10
}

impl Symbol {
    /// Create a symbol with a freshly generated ID
    pub fn new(name: impl Into<String>, symbol_type: SymbolType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            symbol_type,
            weight: default_weight(),
            reel_weights: BTreeMap::new(),
            payouts: None,
        }
    }

    /// Create a regular symbol
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, SymbolType::Regular)
    }

    /// Create a wild symbol
    pub fn wild(name: impl Into<String>) -> Self {
        Self::new(name, SymbolType::Wild)
    }

    /// Create a scatter symbol
    pub fn scatter(name: impl Into<String>) -> Self {
        Self::new(name, SymbolType::Scatter)
    }

    /// Builder: replace the generated ID (hand-written configs use readable ids)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set the global weight
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: set the payout table
    pub fn with_payouts(mut self, payouts: PayoutTable) -> Self {
        self.payouts = Some(payouts);
        self
    }

    /// Builder: set one per-reel weight
    pub fn with_reel_weight(mut self, reel: u8, weight: u8) -> Self {
        self.reel_weights.insert(reel, weight);
        self
    }

    /// Highest value across the payout table; 0 when no table is populated
    pub fn max_payout(&self) -> u32 {
        self.payouts.as_ref().map(PayoutTable::max_value).unwrap_or(0)
    }

    /// Effective frequency weight on a reel (1-based), defaulting when unset
    pub fn reel_weight(&self, reel: u8) -> u8 {
        self.reel_weights
            .get(&reel)
            .copied()
            .unwrap_or(DEFAULT_REEL_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payline_pay_lookup() {
        let table = PayoutTable::payline([5, 25, 100, 500]);
        assert_eq!(table.payline_pay(2), 5);
        assert_eq!(table.payline_pay(5), 500);
        assert_eq!(table.payline_pay(6), 0);
        assert_eq!(table.payline_pay(1), 0);
    }

    #[test]
    fn test_cluster_table_from_tiers() {
        let table = PayoutTable::cluster_tiers([5, 20, 100, 250, 1000]);
        assert_eq!(table.cluster_pay(5), 5);
        assert_eq!(table.cluster_pay(20), 1000);
        assert_eq!(table.cluster_pay(7), 0);
        assert_eq!(table.max_value(), 1000);
    }

    #[test]
    fn test_max_payout_defaults_to_zero() {
        let bare = Symbol::regular("LP1");
        assert_eq!(bare.max_payout(), 0);

        let empty = Symbol::regular("LP2").with_payouts(PayoutTable::Payline(Vec::new()));
        assert_eq!(empty.max_payout(), 0);
    }

    #[test]
    fn test_reel_weight_default() {
        let symbol = Symbol::wild("WILD").with_reel_weight(5, 10);
        assert_eq!(symbol.reel_weight(5), 10);
        assert_eq!(symbol.reel_weight(1), DEFAULT_REEL_WEIGHT);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Symbol::regular("HP1");
        let b = Symbol::regular("HP1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_payout_table_serde_shape() {
        let table = PayoutTable::payline([10, 50, 200, 1000]);
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("payline"));

        let parsed: PayoutTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
