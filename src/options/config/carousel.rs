use serde::Deserialize;

use super::StringOrNum;

/// The `[carousel]` table. Anything left out falls back to the preset's
/// defaults, and any matching argument wins over what is set here.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq))]
pub(crate) struct CarouselConfig {
    pub(crate) spacing: Option<f32>,
    pub(crate) headspace: Option<f32>,
    pub(crate) sides_scaling: Option<f32>,
    pub(crate) wrap: Option<bool>,
    pub(crate) auto_scroll: Option<StringOrNum>,
    pub(crate) index: Option<usize>,
    pub(crate) can_move: Option<bool>,
    pub(crate) animated: Option<bool>,
    pub(crate) item_height: Option<u16>,
}
