use std::borrow::Cow;

/// Something wrong with the demo's arguments or config file.
///
/// Messages are shown to the user as-is, so say what to fix. Offending
/// values go in _single quotes_ (e.g. `'bad'`).
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Config(Cow<'static, str>),
    Argument(Cow<'static, str>),
    Other(Cow<'static, str>),
}

/// Where an option came from, so errors can point at the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptionSource {
    Argument,
    Config,
}

impl OptionError {
    /// An option that could not be parsed, worded for wherever it came from.
    pub(crate) fn invalid_value(source: OptionSource, name: &str) -> Self {
        match source {
            OptionSource::Argument => OptionError::Argument(Cow::Owned(format!(
                "'--{}' was set with an invalid value, please update your arguments.",
                name.replace('_', "-")
            ))),
            OptionSource::Config => OptionError::Config(Cow::Owned(format!(
                "'{name}' was set with an invalid value, please update it in your config file."
            ))),
        }
    }

    /// A numeric option below its minimum.
    pub(crate) fn below_minimum(source: OptionSource, name: &str, minimum: f32) -> Self {
        match source {
            OptionSource::Argument => OptionError::Argument(Cow::Owned(format!(
                "'--{}' must be at least {minimum}.",
                name.replace('_', "-")
            ))),
            OptionSource::Config => OptionError::Config(Cow::Owned(format!(
                "'{name}' must be at least {minimum}."
            ))),
        }
    }

    /// An item whose colour isn't one we know how to draw.
    pub(crate) fn invalid_colour(label: &str, colour: &str) -> Self {
        OptionError::Config(Cow::Owned(format!(
            "'{colour}' is an invalid colour for item '{label}'; use a colour name (e.g. 'red') or a hex value (e.g. '#ff0000')."
        )))
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl std::fmt::Display for OptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionError::Config(reason) => write!(f, "Configuration file error: {reason}"),
            OptionError::Argument(reason) => write!(f, "Argument error: {reason}"),
            OptionError::Other(reason) => {
                write!(f, "Error with the config file or the arguments: {reason}")
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Other(err.to_string().into())
    }
}
