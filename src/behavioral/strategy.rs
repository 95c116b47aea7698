use crate::core::errors::{PizzeriaError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Maps a base price to the price a customer pays
pub trait PricingStrategy {
    fn calculate_price(&self, base_price: f64) -> f64;

    /// Short human-readable name, e.g. "seasonal discount"
    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl PricingStrategy for NoDiscount {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price
    }

    fn label(&self) -> &'static str {
        "no discount"
    }
}

/// 10% off
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalDiscount;

impl PricingStrategy for SeasonalDiscount {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * 0.9
    }

    fn label(&self) -> &'static str {
        "seasonal discount"
    }
}

/// 20% off
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberDiscount;

impl PricingStrategy for MemberDiscount {
    fn calculate_price(&self, base_price: f64) -> f64 {
        base_price * 0.8
    }

    fn label(&self) -> &'static str {
        "member discount"
    }
}

/// Configurable name for one of the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    None,
    Seasonal,
    Member,
}

impl DiscountKind {
    pub fn strategy(self) -> Box<dyn PricingStrategy> {
        match self {
            DiscountKind::None => Box::new(NoDiscount),
            DiscountKind::Seasonal => Box::new(SeasonalDiscount),
            DiscountKind::Member => Box::new(MemberDiscount),
        }
    }
}

/// A priced pizza whose pricing strategy can be swapped at any time
pub struct Pizza {
    base_price: f64,
    pricing_strategy: Option<Box<dyn PricingStrategy>>,
}

impl Pizza {
    /// Create a pizza with no strategy chosen yet
    pub fn new(base_price: f64) -> Self {
        Self {
            base_price,
            pricing_strategy: None,
        }
    }

    /// Make `strategy` the active one, replacing any previous choice
    pub fn set_pricing_strategy(&mut self, strategy: Box<dyn PricingStrategy>) {
        debug!("Pricing strategy set to {}", strategy.label());
        self.pricing_strategy = Some(strategy);
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Label of the active strategy, if any
    pub fn strategy_label(&self) -> Option<&'static str> {
        self.pricing_strategy.as_ref().map(|s| s.label())
    }

    /// Final price under the active strategy
    pub fn price(&self) -> Result<f64> {
        let strategy = self
            .pricing_strategy
            .as_ref()
            .ok_or(PizzeriaError::PricingStrategyNotSet)?;
        Ok(strategy.calculate_price(self.base_price))
    }
}

impl std::fmt::Debug for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pizza")
            .field("base_price", &self.base_price)
            .field("pricing_strategy", &self.strategy_label())
            .finish()
    }
}
