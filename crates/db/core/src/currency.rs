use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Currencies a trader can price an assort in.
///
/// Parsing accepts the three-letter codes used by the host (`"RUB"`,
/// `"USD"`, `"EUR"`); anything else fails instead of producing an empty price.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const RUB_TPL: &'static str = "5449016a4bdc2d6f028b456f";
    pub const USD_TPL: &'static str = "5696686a4bdc2da3298b456a";
    pub const EUR_TPL: &'static str = "569668774bdc2da2298b4568";

    /// Item template id of the currency's stackable money item.
    pub const fn template_id(self) -> &'static str {
        match self {
            Currency::Rub => Self::RUB_TPL,
            Currency::Usd => Self::USD_TPL,
            Currency::Eur => Self::EUR_TPL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_host_codes() {
        assert_eq!(Currency::from_str("RUB").unwrap(), Currency::Rub);
        assert_eq!(Currency::from_str("EUR").unwrap().template_id(), Currency::EUR_TPL);
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert!(Currency::from_str("GBP").is_err());
    }
}
