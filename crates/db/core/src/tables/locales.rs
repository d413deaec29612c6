//! Locale bundles, keyed by language and then by category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Locales {
    /// Language code (`"en"`, `"ru"`, ...) to its bundle.
    #[serde(default)]
    pub global: HashMap<String, LocaleBundle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// All localized strings of one language.
///
/// Entries are overwritten wholesale; nothing is merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleBundle {
    #[serde(default)]
    pub mail: HashMap<String, String>,
    #[serde(default)]
    pub quest: HashMap<String, QuestLocale>,
    #[serde(default)]
    pub templates: HashMap<String, ItemLocale>,
    #[serde(default)]
    pub handbook: HashMap<String, String>,
    #[serde(default)]
    pub customization: HashMap<String, ItemLocale>,
    #[serde(default)]
    pub trading: HashMap<String, TraderLocale>,
    #[serde(default)]
    pub locations: HashMap<String, LocationLocale>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestLocale {
    pub name: String,
    pub description: String,
    pub note: String,
    #[serde(rename = "failMessageText")]
    pub fail_message_text: String,
    #[serde(rename = "startedMessageText")]
    pub started_message_text: String,
    #[serde(rename = "successMessageText")]
    pub success_message_text: String,
    /// Condition id to its text.
    pub conditions: HashMap<String, String>,
    pub location: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Name triple shared by item templates and customizations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemLocale {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ShortName")]
    pub short_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraderLocale {
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "Nickname")]
    pub nickname: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationLocale {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundle_keeps_unmodelled_entry_keys() {
        let raw = json!({
            "quest": {
                "q1": { "name": "Delivery", "conditions": { "c1": "Hand over" }, "acceptPlayerMessage": "Ok" }
            },
            "templates": {
                "rifle": { "Name": "Rifle", "ShortName": "R", "Description": "", "Icon": "rifle.png" }
            },
            "locations": { "bigmap": { "Name": "Customs", "Description": "", "Note": "day" } }
        });

        let bundle: LocaleBundle = serde_json::from_value(raw).unwrap();
        let quest = &bundle.quest["q1"];
        assert_eq!(quest.conditions["c1"], "Hand over");
        assert!(quest.note.is_empty());
        assert_eq!(quest.extra["acceptPlayerMessage"], "Ok");

        let encoded = serde_json::to_value(&bundle).unwrap();
        assert_eq!(encoded["templates"]["rifle"]["Icon"], "rifle.png");
        assert_eq!(encoded["locations"]["bigmap"]["Note"], "day");
        assert_eq!(serde_json::from_value::<LocaleBundle>(encoded).unwrap(), bundle);
    }
}
