//! Trader record helpers.

use db_core::{Insurance, LoyaltyLevel, QuestAssort};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ApiError, Result, SpaceApi};

impl SpaceApi<'_> {
    /// Creates trader `new_id` as a copy of the configured reference trader.
    ///
    /// The copy keeps the reference's assortment but starts without quest
    /// unlocks. `working`, `avatar` and `currency` override the copied base
    /// when given.
    pub fn create_new_trader(
        &mut self,
        new_id: &str,
        working: Option<bool>,
        avatar: Option<&str>,
        currency: Option<&str>,
    ) -> Result<()> {
        let reference = self.config.reference_trader.as_str();
        let mut trader = self.db.trader(reference)?.clone();

        trader.base.id = new_id.to_string();
        if let Some(working) = working {
            trader.base.working = working;
        }
        if let Some(avatar) = avatar {
            trader.base.avatar = avatar.to_string();
        }
        if let Some(currency) = currency {
            trader.base.currency = currency.to_string();
        }
        trader.questassort = QuestAssort::default();

        debug!(trader = new_id, reference, "created trader");
        self.db.traders.insert(new_id.to_string(), trader);
        Ok(())
    }

    /// Overwrites one `base` entry of a trader.
    pub fn edit_trader_params(&mut self, id: &str, property: &str, value: Value) -> Result<()> {
        self.db.trader_mut(id)?.base.set_property(property, value)?;
        debug!(trader = id, property, "edited trader base");
        Ok(())
    }

    /// Sets the requirements of loyalty level `level` (0-based).
    ///
    /// An existing level keeps its other fields; `level == len` appends a new
    /// one.
    pub fn edit_trader_loyalty_level(
        &mut self,
        id: &str,
        level: usize,
        min_level: u32,
        min_sales_sum: u64,
        min_standing: f64,
    ) -> Result<()> {
        let levels = &mut self.db.trader_mut(id)?.base.loyalty_levels;
        let len = levels.len();

        if level < len {
            let entry = &mut levels[level];
            entry.min_level = min_level;
            entry.min_sales_sum = min_sales_sum;
            entry.min_standing = min_standing;
        } else if level == len {
            levels.push(LoyaltyLevel {
                min_level,
                min_sales_sum,
                min_standing,
                extra: Map::new(),
            });
        } else {
            return Err(ApiError::LoyaltyLevelOutOfRange {
                trader: id.to_string(),
                level,
                len,
            });
        }

        debug!(trader = id, level, min_level, min_sales_sum, min_standing, "edited loyalty level");
        Ok(())
    }

    pub fn edit_trader_insurance(&mut self, id: &str, insurance: Insurance) -> Result<()> {
        self.db.trader_mut(id)?.base.insurance = insurance;
        debug!(trader = id, "replaced trader insurance");
        Ok(())
    }
}
