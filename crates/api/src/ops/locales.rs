//! Locale helpers.
//!
//! Every helper overwrites one leaf of an existing language bundle. Missing
//! languages are reported, never created.

use std::collections::HashMap;

use db_core::{ItemLocale, LocationLocale, QuestLocale, TraderLocale};
use serde::Deserialize;
use tracing::debug;

use crate::{ApiError, Result, SpaceApi};

/// Texts of a quest locale. Condition texts are added separately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct QuestText {
    pub name: String,
    pub description: String,
    pub note: String,
    pub fail_message: String,
    pub started_message: String,
    pub success_message: String,
    pub location: String,
}

impl From<QuestText> for QuestLocale {
    fn from(text: QuestText) -> Self {
        QuestLocale {
            name: text.name,
            description: text.description,
            note: text.note,
            fail_message_text: text.fail_message,
            started_message_text: text.started_message,
            success_message_text: text.success_message,
            conditions: HashMap::new(),
            location: text.location,
            ..QuestLocale::default()
        }
    }
}

fn item_locale(name: &str, short_name: &str, description: &str) -> ItemLocale {
    ItemLocale {
        name: name.to_string(),
        short_name: short_name.to_string(),
        description: description.to_string(),
        ..ItemLocale::default()
    }
}

impl SpaceApi<'_> {
    pub fn create_mail_locale(&mut self, lang: &str, id: &str, text: &str) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .mail
            .insert(id.to_string(), text.to_string());
        debug!(lang, id, "set mail locale");
        Ok(())
    }

    /// Replaces the quest locale of `id`, clearing its condition texts.
    pub fn create_quest_locale(&mut self, lang: &str, id: &str, text: QuestText) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .quest
            .insert(id.to_string(), text.into());
        debug!(lang, quest = id, "set quest locale");
        Ok(())
    }

    /// Sets the text of one quest condition. The quest locale must exist.
    pub fn create_quest_condition_locale(
        &mut self,
        lang: &str,
        quest_id: &str,
        condition_id: &str,
        text: &str,
    ) -> Result<()> {
        let quest = self
            .db
            .locale_mut(lang)?
            .quest
            .get_mut(quest_id)
            .ok_or_else(|| ApiError::QuestLocaleMissing {
                lang: lang.to_string(),
                quest: quest_id.to_string(),
            })?;
        quest
            .conditions
            .insert(condition_id.to_string(), text.to_string());
        debug!(lang, quest = quest_id, condition = condition_id, "set quest condition locale");
        Ok(())
    }

    pub fn create_item_locale(
        &mut self,
        lang: &str,
        id: &str,
        name: &str,
        short_name: &str,
        description: &str,
    ) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .templates
            .insert(id.to_string(), item_locale(name, short_name, description));
        debug!(lang, item = id, "set item locale");
        Ok(())
    }

    /// Sets the display name of a handbook category.
    pub fn create_handbook_locale(&mut self, lang: &str, id: &str, text: &str) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .handbook
            .insert(id.to_string(), text.to_string());
        debug!(lang, category = id, "set handbook locale");
        Ok(())
    }

    pub fn create_customization_locale(
        &mut self,
        lang: &str,
        id: &str,
        name: &str,
        short_name: &str,
        description: &str,
    ) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .customization
            .insert(id.to_string(), item_locale(name, short_name, description));
        debug!(lang, customization = id, "set customization locale");
        Ok(())
    }

    pub fn create_location_locale(
        &mut self,
        lang: &str,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<()> {
        self.db.locale_mut(lang)?.locations.insert(
            id.to_string(),
            LocationLocale {
                name: name.to_string(),
                description: description.to_string(),
                ..LocationLocale::default()
            },
        );
        debug!(lang, location = id, "set location locale");
        Ok(())
    }

    pub fn create_trader_locale(&mut self, lang: &str, id: &str, locale: TraderLocale) -> Result<()> {
        self.db
            .locale_mut(lang)?
            .trading
            .insert(id.to_string(), locale);
        debug!(lang, trader = id, "set trader locale");
        Ok(())
    }
}
