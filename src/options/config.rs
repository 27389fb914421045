pub mod carousel;
pub mod item;

use serde::Deserialize;

pub(crate) use self::{carousel::CarouselConfig, item::ItemConfig};

/// The demo's config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    #[serde(default)]
    pub(crate) carousel: CarouselConfig,

    /// The items to show. `None` uses the built-in set, while an explicitly
    /// empty list gives an empty carousel.
    pub(crate) items: Option<Vec<ItemConfig>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(f64),
}

impl From<String> for StringOrNum {
    fn from(value: String) -> Self {
        StringOrNum::String(value)
    }
}

impl From<f64> for StringOrNum {
    fn from(value: f64) -> Self {
        StringOrNum::Num(value)
    }
}
