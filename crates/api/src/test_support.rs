//! Shared database fixture for unit tests.

use db_core::Database;
use serde_json::json;

pub(crate) const WEAPON_PARENT: &str = "5447b5f14bdc2d61278b4567";
pub(crate) const MAGAZINE_PARENT: &str = "5448bc234bdc2d3c308b4569";

/// Small database with one rifle tree, a backpack, two traders, a bot role,
/// an English locale and one map.
///
/// The rifle's stock chain is five items deep:
/// `rifle -> stock -> pad -> screw -> nano -> pico`.
pub(crate) fn fixture() -> Database {
    serde_json::from_value(json!({
        "templates": {
            "items": {
                "rifle": {
                    "_id": "rifle",
                    "_name": "weapon_rifle",
                    "_parent": WEAPON_PARENT,
                    "_type": "Item",
                    "_props": {
                        "Weight": 3.2,
                        "Prefab": { "path": "rifle.bundle", "rcid": "" },
                        "Slots": [
                            slot("mod_magazine", &["mag_30"]),
                            slot("mod_stock", &["stock"])
                        ],
                        "Chambers": [slot("patron_in_weapon", &["ammo_556"])]
                    }
                },
                "mag_30": {
                    "_id": "mag_30",
                    "_parent": MAGAZINE_PARENT,
                    "_props": { "Cartridges": [slot("cartridges", &["ammo_556"])] }
                },
                "stock": { "_id": "stock", "_props": { "Slots": [slot("mod_stock_pad", &["pad"])] } },
                "pad": { "_id": "pad", "_props": { "Slots": [slot("mod_screw", &["screw"])] } },
                "screw": { "_id": "screw", "_props": { "Slots": [slot("mod_nano", &["nano"])] } },
                "nano": { "_id": "nano", "_props": { "Slots": [slot("mod_pico", &["pico"])] } },
                "pico": { "_id": "pico", "_props": {} },
                "ammo_556": { "_id": "ammo_556", "_parent": "5485a8684bdc2da71d8b4567", "_props": {} },
                "backpack": {
                    "_id": "backpack",
                    "_props": {
                        "Grids": [{
                            "_name": "main",
                            "_props": {
                                "filters": [{ "Filter": ["54009119af1c881c07000029"], "ExcludedFilter": [] }],
                                "cellsH": 5,
                                "cellsV": 6
                            }
                        }],
                        "Slots": [{ "_name": "mod_empty", "_props": { "filters": [] } }]
                    }
                }
            },
            "handbook": { "Categories": [], "Items": [] }
        },
        "locales": {
            "global": {
                "en": {
                    "mail": {},
                    "quest": {
                        "quest_1": {
                            "name": "Delivery",
                            "description": "",
                            "note": "",
                            "failMessageText": "",
                            "startedMessageText": "",
                            "successMessageText": "",
                            "conditions": {},
                            "location": "any"
                        }
                    },
                    "templates": {},
                    "handbook": {},
                    "customization": {},
                    "trading": {}
                }
            }
        },
        "traders": {
            "ragfair": {
                "base": {
                    "_id": "ragfair",
                    "working": false,
                    "avatar": "/files/trader/avatar/ragfair.jpg",
                    "currency": "RUB",
                    "nickname": "Flea Market",
                    "loyaltyLevels": [
                        { "minLevel": 1, "minSalesSum": 0, "minStanding": 0.0 }
                    ],
                    "insurance": {
                        "availability": false,
                        "min_payment": 0,
                        "min_return_hour": 0,
                        "max_return_hour": 0,
                        "max_storage_time": 0,
                        "excluded_category": []
                    }
                },
                "assort": { "items": [], "barter_scheme": {}, "loyal_level_items": {} },
                "questassort": {
                    "started": {},
                    "success": { "ragfair_assort": "quest_1" },
                    "fail": {}
                }
            },
            "prapor": {
                "base": {
                    "_id": "prapor",
                    "working": true,
                    "currency": "RUB",
                    "loyaltyLevels": [
                        { "minLevel": 1, "minSalesSum": 0, "minStanding": 0.0 },
                        { "minLevel": 15, "minSalesSum": 750000, "minStanding": 0.2, "exchange_price_coef": 1 }
                    ]
                },
                "assort": {
                    "items": [
                        {
                            "_id": "assort_1",
                            "_tpl": "rifle",
                            "parentId": "hideout",
                            "slotId": "hideout",
                            "upd": { "UnlimitedCount": true, "StackObjectsCount": 999999 }
                        },
                        {
                            "_id": "assort_1_mag",
                            "_tpl": "mag_30",
                            "parentId": "assort_1",
                            "slotId": "mod_magazine"
                        },
                        {
                            "_id": "assort_2",
                            "_tpl": "ammo_556",
                            "parentId": "hideout",
                            "slotId": "hideout"
                        }
                    ],
                    "barter_scheme": {
                        "assort_1": [[{ "count": 35000.0, "_tpl": "5449016a4bdc2d6f028b456f" }]],
                        "assort_2": [[{ "count": 150.0, "_tpl": "5449016a4bdc2d6f028b456f" }]]
                    },
                    "loyal_level_items": { "assort_1": 2, "assort_2": 1 }
                },
                "questassort": { "started": {}, "success": {}, "fail": {} }
            }
        },
        "bots": {
            "types": {
                "pmcbot": {
                    "inventory": {
                        "equipment": { "FirstPrimaryWeapon": [] },
                        "mods": {}
                    },
                    "difficulty": {}
                }
            }
        },
        "locations": {
            "factory4_day": { "base": { "SpawnPointParams": [], "Name": "Factory" } }
        }
    }))
    .expect("fixture should decode")
}

fn slot(name: &str, allowed: &[&str]) -> serde_json::Value {
    json!({
        "_name": name,
        "_id": format!("{name}_id"),
        "_props": { "filters": [{ "Shift": 0, "Filter": allowed }] },
        "_required": false
    })
}
