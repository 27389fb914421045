//! How the demos are configured. Arguments win over the config file, which
//! wins over the defaults of whichever demo is running.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

pub use args::{get_args, Args};
pub use config::Config;
pub use error::{OptionError, OptionResult};
pub(crate) use error::OptionSource;
use tui::style::Color;

use self::config::{ItemConfig, StringOrNum};
use crate::{app::DemoItem, carousel::AutoScroll, constants::*};

/// Which demo is being configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Everything is adjustable, with a control panel.
    Playground,
    /// A wrapping, auto-scrolling strip that can only be watched.
    Gallery,
}

impl Preset {
    pub fn bin_name(self) -> &'static str {
        match self {
            Preset::Playground => "carousel-demo",
            Preset::Gallery => "carousel-gallery",
        }
    }

    fn wrap(self) -> bool {
        matches!(self, Preset::Gallery)
    }

    fn auto_scroll(self) -> AutoScroll {
        match self {
            Preset::Playground => AutoScroll::Inactive,
            Preset::Gallery => {
                AutoScroll::Active(Duration::from_secs(GALLERY_AUTO_SCROLL_SECONDS))
            }
        }
    }

    fn can_move(self) -> bool {
        matches!(self, Preset::Playground)
    }
}

/// The settings a demo starts with, after merging every source.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSettings {
    pub(crate) items: Vec<DemoItem>,
    pub(crate) spacing: f32,
    pub(crate) headspace: f32,
    pub(crate) sides_scaling: f32,
    pub(crate) wrap: bool,
    pub(crate) auto_scroll: AutoScroll,
    pub(crate) index: usize,
    pub(crate) can_move: bool,
    pub(crate) animated: bool,
    pub(crate) item_height: u16,
    pub(crate) show_panel: bool,
}

/// Returns the path of the config file to use: the one passed in if there
/// is one, or the default location otherwise. `None` if there's no config
/// directory on this system.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_config_path {
        return Some(path.to_path_buf());
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_FILE_LOCATION);
        path
    })
}

/// Reads the config file at `config_path`. If there's nothing there yet, a
/// default one is written and the defaults are returned.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };

    if path.exists() {
        let config_string = fs::read_to_string(path)?;
        Ok(toml_edit::de::from_str(&config_string)?)
    } else {
        if let Some(parent_path) = path.parent() {
            fs::create_dir_all(parent_path)?;
        }

        fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
        Ok(Config::default())
    }
}

/// Merges the arguments, the config file and the preset into the settings
/// a demo starts with.
pub fn init_settings(args: &Args, config: &Config, preset: Preset) -> OptionResult<DemoSettings> {
    let carousel_args = &args.carousel_args;
    let carousel_config = &config.carousel;

    let spacing = get_non_negative(
        "spacing",
        pick(carousel_args.spacing, carousel_config.spacing),
        DEFAULT_SPACING,
    )?;
    let headspace = get_non_negative(
        "headspace",
        pick(carousel_args.headspace, carousel_config.headspace),
        DEFAULT_HEADSPACE,
    )?;
    let sides_scaling = carousel_args
        .sides_scaling
        .or(carousel_config.sides_scaling)
        .unwrap_or(DEFAULT_SIDES_SCALING);

    let auto_scroll = get_auto_scroll(
        carousel_args.auto_scroll.as_deref(),
        carousel_config.auto_scroll.as_ref(),
        preset,
    )?;

    let item_height = match pick(carousel_args.item_height, carousel_config.item_height) {
        Some((height, source)) if height < MIN_ITEM_HEIGHT => {
            return Err(OptionError::below_minimum(
                source,
                "item_height",
                f32::from(MIN_ITEM_HEIGHT),
            ));
        }
        Some((height, _)) => height,
        None => DEFAULT_ITEM_HEIGHT,
    };

    Ok(DemoSettings {
        items: get_items(config.items.as_deref())?,
        spacing,
        headspace,
        sides_scaling,
        wrap: flag_pair(carousel_args.wrap, carousel_args.no_wrap)
            .or(carousel_config.wrap)
            .unwrap_or(preset.wrap()),
        auto_scroll,
        index: carousel_args.index.or(carousel_config.index).unwrap_or(0),
        can_move: flag_pair(carousel_args.can_move, carousel_args.view_only)
            .or(carousel_config.can_move)
            .unwrap_or(preset.can_move()),
        animated: !carousel_args.no_animation && carousel_config.animated.unwrap_or(true),
        item_height,
        show_panel: preset == Preset::Playground,
    })
}

/// Picks the argument over the config value, remembering where it came from.
fn pick<T>(arg: Option<T>, config: Option<T>) -> Option<(T, OptionSource)> {
    arg.map(|value| (value, OptionSource::Argument))
        .or_else(|| config.map(|value| (value, OptionSource::Config)))
}

/// Turns an on/off pair of flags into a setting, if either was passed. clap
/// makes sure only the last one given is set.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

fn get_non_negative(
    name: &str, value: Option<(f32, OptionSource)>, default: f32,
) -> OptionResult<f32> {
    match value {
        Some((value, source)) if value.is_nan() => Err(OptionError::invalid_value(source, name)),
        Some((value, source)) if value < 0.0 => Err(OptionError::below_minimum(source, name, 0.0)),
        Some((value, _)) => Ok(value),
        None => Ok(default),
    }
}

fn get_auto_scroll(
    arg: Option<&str>, config: Option<&StringOrNum>, preset: Preset,
) -> OptionResult<AutoScroll> {
    if let Some(value) = arg {
        parse_auto_scroll(value)
            .ok_or_else(|| OptionError::invalid_value(OptionSource::Argument, "auto_scroll"))
    } else if let Some(value) = config {
        let parsed = match value {
            StringOrNum::String(value) => parse_auto_scroll(value),
            StringOrNum::Num(secs) => Some(AutoScroll::from_secs_f64(*secs)),
        };

        parsed.ok_or_else(|| OptionError::invalid_value(OptionSource::Config, "auto_scroll"))
    } else {
        Ok(preset.auto_scroll())
    }
}

/// Parses bare seconds (`"2.5"`), a human-readable duration (`"1m 30s"`), or
/// `"off"`.
fn parse_auto_scroll(value: &str) -> Option<AutoScroll> {
    let value = value.trim();

    if value.eq_ignore_ascii_case("off") {
        Some(AutoScroll::Inactive)
    } else if let Ok(secs) = value.parse::<f64>() {
        Some(AutoScroll::from_secs_f64(secs))
    } else {
        humantime::parse_duration(value).ok().map(AutoScroll::Active)
    }
}

fn get_items(items: Option<&[ItemConfig]>) -> OptionResult<Vec<DemoItem>> {
    let Some(items) = items else {
        return DEFAULT_ITEMS
            .iter()
            .enumerate()
            .map(|(id, (label, colour))| new_item(id, label, colour))
            .collect();
    };

    items
        .iter()
        .enumerate()
        .map(|(id, item)| {
            let colour = item
                .color
                .as_deref()
                .unwrap_or(ITEM_PALETTE[id % ITEM_PALETTE.len()]);

            new_item(id, &item.label, colour)
        })
        .collect()
}

fn new_item(id: usize, label: &str, colour: &str) -> OptionResult<DemoItem> {
    let parsed =
        Color::from_str(colour.trim()).map_err(|_| OptionError::invalid_colour(label, colour))?;

    Ok(DemoItem::new(id, label, parsed))
}
