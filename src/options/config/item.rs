use serde::Deserialize;

/// One entry of the `[[items]]` array.
#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq))]
pub(crate) struct ItemConfig {
    pub(crate) label: String,

    /// A colour name or hex value. Picked from the default palette if unset.
    #[serde(alias = "colour")]
    pub(crate) color: Option<String>,
}
