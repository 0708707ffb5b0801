//! Game configuration — the object the wizard edits

use serde::{Deserialize, Serialize};

use crate::symbol::{PayoutTable, Symbol, SymbolType};

/// Win evaluation mechanism the paytable is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayMechanism {
    /// Traditional left-to-right line pays
    Payline,
    /// Cluster pays (matching adjacent symbols)
    Cluster,
}

impl Default for PayMechanism {
    fn default() -> Self {
        Self::Payline
    }
}

/// Complete symbol-economy configuration for one game
///
/// `symbols` insertion order is the canonical reel/paytable display order;
/// every balancing operation preserves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game name
    pub name: String,
    /// Win mechanism
    #[serde(default)]
    pub pay_mechanism: PayMechanism,
    /// Number of reels
    #[serde(default = "default_reel_count")]
    pub reel_count: u8,
    /// Symbol set in display order
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

fn default_reel_count() -> u8 {
    5
}

impl GameConfig {
    /// Create an empty config with defaults (payline, 5 reels)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pay_mechanism: PayMechanism::default(),
            reel_count: default_reel_count(),
            symbols: Vec::new(),
        }
    }

    /// Standard 5-reel payline game with a typical symbol spread
    ///
    /// Industry-standard naming: HP = high paying, LP = low paying.
    pub fn standard(name: impl Into<String>) -> Self {
        let symbols = vec![
            Symbol::wild("WILD").with_id("wild"),
            Symbol::scatter("SCATTER").with_id("scatter"),
            Symbol::regular("HP1")
                .with_id("hp1")
                .with_payouts(PayoutTable::payline([5, 25, 100, 500])),
            Symbol::regular("HP2")
                .with_id("hp2")
                .with_payouts(PayoutTable::payline([4, 20, 75, 300])),
            Symbol::regular("LP1")
                .with_id("lp1")
                .with_payouts(PayoutTable::payline([2, 10, 40, 150])),
            Symbol::regular("LP2")
                .with_id("lp2")
                .with_payouts(PayoutTable::payline([1, 5, 20, 80])),
            Symbol::regular("LP3")
                .with_id("lp3")
                .with_payouts(PayoutTable::payline([1, 4, 15, 60])),
        ];

        Self {
            name: name.into(),
            pay_mechanism: PayMechanism::Payline,
            reel_count: 5,
            symbols,
        }
    }

    /// Builder: set the pay mechanism
    pub fn with_mechanism(mut self, mechanism: PayMechanism) -> Self {
        self.pay_mechanism = mechanism;
        self
    }

    /// Builder: set the reel count
    pub fn with_reel_count(mut self, reel_count: u8) -> Self {
        self.reel_count = reel_count;
        self
    }

    /// Builder: append a symbol
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Builder: replace the whole symbol set
    pub fn with_symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Look up a symbol by ID
    pub fn symbol(&self, id: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// The wild symbol, if configured
    pub fn wild(&self) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|s| s.symbol_type == SymbolType::Wild)
    }

    /// The scatter symbol, if configured
    pub fn scatter(&self) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|s| s.symbol_type == SymbolType::Scatter)
    }

    /// All regular symbols in display order
    pub fn regulars(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols
            .iter()
            .filter(|s| s.symbol_type == SymbolType::Regular)
    }

    /// Sum of global weights across the set
    pub fn total_weight(&self) -> u32 {
        self.symbols.iter().map(|s| s.weight).sum()
    }
}
