/// The coin table: head probabilities fixed at construction, never mutated.
use crate::constants::STANDARD_COIN_PROBABILITIES;
use crate::error::{Result, SimulationError};
use crate::types::Coin;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoinModel {
    coins: Vec<Coin>,
}

impl CoinModel {
    /// Build a model from head probabilities, one coin per entry.
    ///
    /// Every probability must lie strictly inside (0, 1).
    pub fn new(probabilities: &[f64]) -> Result<Self> {
        if probabilities.is_empty() {
            return Err(SimulationError::invalid(
                "coin_probabilities",
                "at least one coin is required",
            ));
        }

        let mut coins = Vec::with_capacity(probabilities.len());
        for (index, &p) in probabilities.iter().enumerate() {
            // Written so that NaN fails too.
            if !(p > 0.0 && p < 1.0) {
                return Err(SimulationError::invalid(
                    "coin_probabilities",
                    format!("coin {} has head probability {}, expected a value in (0, 1)", index, p),
                ));
            }
            coins.push(Coin { index, head_probability: p });
        }

        Ok(CoinModel { coins })
    }

    /// The five-coin table A..E.
    pub fn standard() -> Self {
        let coins = STANDARD_COIN_PROBABILITIES
            .iter()
            .enumerate()
            .map(|(index, &head_probability)| Coin { index, head_probability })
            .collect();
        CoinModel { coins }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn head_probability(&self, index: usize) -> f64 {
        self.coins[index].head_probability
    }

    /// The coin with the highest true head probability (earliest on ties).
    /// For reporting only.
    pub fn best_coin(&self) -> Coin {
        let mut best = self.coins[0];
        for coin in &self.coins[1..] {
            if coin.head_probability > best.head_probability {
                best = *coin;
            }
        }
        best
    }
}

impl Default for CoinModel {
    fn default() -> Self {
        CoinModel::standard()
    }
}
