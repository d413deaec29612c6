//! Trader assortment helpers.

use std::collections::HashSet;

use db_core::{AssortItem, AssortUpd, BarterCondition, Currency, UnlockType};
use serde::Deserialize;
use serde_json::Map;
use tracing::debug;

use crate::{ApiError, Result, SpaceApi};

/// Payment options of one assort entry.
pub type BarterScheme = Vec<Vec<BarterCondition>>;

/// Stock of an assort entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Stock {
    pub unlimited: bool,
    pub count: u32,
}

impl Stock {
    pub const fn unlimited(count: u32) -> Self {
        Self {
            unlimited: true,
            count,
        }
    }

    pub const fn limited(count: u32) -> Self {
        Self {
            unlimited: false,
            count,
        }
    }
}

/// A top-level item offered by a trader.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AssortLine {
    /// Assort id, unique within the trader.
    pub id: String,
    /// Item template sold.
    pub tpl: String,
    /// Loyalty level required to buy.
    pub loyalty: u32,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub stock: Option<Stock>,
}

impl AssortLine {
    pub fn new(id: impl Into<String>, tpl: impl Into<String>, loyalty: u32) -> Self {
        Self {
            id: id.into(),
            tpl: tpl.into(),
            loyalty,
            stock: None,
        }
    }

    #[must_use]
    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// Change applied to a quest-assort unlock entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssortUnlockEdit {
    /// Gate the assort behind this quest.
    Set(String),
    /// Drop the gate.
    Remove,
}

/// Parses a host currency code (`"RUB"`, `"USD"`, `"EUR"`).
pub fn parse_currency(code: &str) -> Result<Currency> {
    code.parse()
        .map_err(|_| ApiError::UnknownCurrency(code.to_string()))
}

impl SpaceApi<'_> {
    /// Offers `line` for `price` units of `currency`.
    ///
    /// Writes the assort item, a single-condition barter scheme and the
    /// loyalty requirement.
    pub fn create_trader_assort(
        &mut self,
        trader_id: &str,
        line: AssortLine,
        price: f64,
        currency: Currency,
    ) -> Result<()> {
        let tpl = self.config.currency_template(currency).to_string();
        let scheme = vec![vec![BarterCondition::new(price, tpl)]];
        self.push_assort(trader_id, line, scheme)
    }

    /// Offers `line` in exchange for a caller-built barter scheme.
    pub fn create_trader_barter(
        &mut self,
        trader_id: &str,
        line: AssortLine,
        barter: BarterScheme,
    ) -> Result<()> {
        self.push_assort(trader_id, line, barter)
    }

    fn push_assort(&mut self, trader_id: &str, line: AssortLine, scheme: BarterScheme) -> Result<()> {
        let defaults = &self.config.assort;
        let stock = line.stock.unwrap_or(Stock {
            unlimited: defaults.unlimited_by_default,
            count: defaults.default_stock,
        });
        let root = defaults.root_parent.clone();

        let assort = &mut self.db.trader_mut(trader_id)?.assort;
        assort.items.push(AssortItem {
            id: line.id.clone(),
            tpl: line.tpl,
            parent_id: root.clone(),
            slot_id: root,
            upd: Some(AssortUpd::new(stock.unlimited, stock.count)),
            extra: Map::new(),
        });
        assort.barter_scheme.insert(line.id.clone(), scheme);
        assort.loyal_level_items.insert(line.id.clone(), line.loyalty);

        debug!(trader = trader_id, assort = %line.id, loyalty = line.loyalty, "added trader assort");
        Ok(())
    }

    /// Attaches part `tpl` to the existing assort item `parent` in `slot_id`.
    pub fn add_trader_assort_part(
        &mut self,
        trader_id: &str,
        id: &str,
        tpl: &str,
        parent: &str,
        slot_id: &str,
    ) -> Result<()> {
        let assort = &mut self.db.trader_mut(trader_id)?.assort;
        if !assort.contains(parent) {
            return Err(ApiError::UnknownAssort {
                trader: trader_id.to_string(),
                assort: parent.to_string(),
            });
        }

        assort.items.push(AssortItem {
            id: id.to_string(),
            tpl: tpl.to_string(),
            parent_id: parent.to_string(),
            slot_id: slot_id.to_string(),
            upd: Some(AssortUpd::new(false, 1)),
            extra: Map::new(),
        });
        debug!(trader = trader_id, part = id, parent, slot = slot_id, "attached assort part");
        Ok(())
    }

    /// Removes an assort entry: its item and attached parts, its barter
    /// scheme and its loyalty requirement.
    ///
    /// Returns `false` when the trader had none of them.
    pub fn remove_trader_assort(&mut self, trader_id: &str, assort_id: &str) -> Result<bool> {
        let assort = &mut self.db.trader_mut(trader_id)?.assort;

        let mut doomed = HashSet::from([assort_id.to_string()]);
        loop {
            let before = doomed.len();
            for item in &assort.items {
                if doomed.contains(&item.parent_id) {
                    doomed.insert(item.id.clone());
                }
            }
            if doomed.len() == before {
                break;
            }
        }

        let items_before = assort.items.len();
        assort.items.retain(|item| !doomed.contains(&item.id));
        let removed_items = items_before - assort.items.len();
        let removed_scheme = assort.barter_scheme.remove(assort_id).is_some();
        let removed_loyalty = assort.loyal_level_items.remove(assort_id).is_some();

        debug!(
            trader = trader_id,
            assort = assort_id,
            removed_items,
            "removed trader assort"
        );
        Ok(removed_items > 0 || removed_scheme || removed_loyalty)
    }

    /// Whether any of the assort's three records is present.
    pub fn has_trader_assort(&self, trader_id: &str, assort_id: &str) -> Result<bool> {
        let assort = &self.db.trader(trader_id)?.assort;
        Ok(assort.contains(assort_id)
            || assort.barter_scheme.contains_key(assort_id)
            || assort.loyal_level_items.contains_key(assort_id))
    }

    /// Gates `assort_id` behind `quest_id` for the given unlock type.
    pub fn create_trader_assort_unlock(
        &mut self,
        trader_id: &str,
        kind: UnlockType,
        assort_id: &str,
        quest_id: &str,
    ) -> Result<()> {
        self.edit_trader_assort_unlock(
            trader_id,
            kind,
            AssortUnlockEdit::Set(quest_id.to_string()),
            assort_id,
        )
    }

    pub fn edit_trader_assort_unlock(
        &mut self,
        trader_id: &str,
        kind: UnlockType,
        edit: AssortUnlockEdit,
        assort_id: &str,
    ) -> Result<()> {
        let bucket = self
            .db
            .trader_mut(trader_id)?
            .questassort
            .bucket_mut(kind);
        match edit {
            AssortUnlockEdit::Set(quest_id) => {
                debug!(trader = trader_id, %kind, assort = assort_id, quest = %quest_id, "set assort unlock");
                bucket.insert(assort_id.to_string(), quest_id);
            }
            AssortUnlockEdit::Remove => {
                debug!(trader = trader_id, %kind, assort = assort_id, "removed assort unlock");
                bucket.remove(assort_id);
            }
        }
        Ok(())
    }
}
