//! Argument parsing via clap.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

/// The arguments shared by both demos.
#[derive(Parser, Debug, Default)]
#[command(
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
)]
pub struct Args {
    #[command(flatten)]
    pub(crate) carousel_args: CarouselArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Carousel Options")]
pub(crate) struct CarouselArgs {
    #[arg(
        short = 'a',
        long,
        value_name = "TIME",
        help = "Automatically advances to the next item.",
        long_help = "Automatically advances to the next item after the given time. Takes a number in \
                    seconds or a human-readable duration (e.g. 3s, 1500ms). A value of 0 uses the \
                    default of 5 seconds, and 'off' turns it off. Has no effect with fewer than \
                    two items."
    )]
    pub(crate) auto_scroll: Option<String>,

    #[arg(
        long,
        value_name = "COLUMNS",
        help = "How far the neighbouring items peek in.",
        long_help = "How many columns of the neighbouring items are visible on either side of the \
                    active item. Must be at least 0."
    )]
    pub(crate) headspace: Option<f32>,

    #[arg(
        short = 'i',
        long,
        value_name = "N",
        help = "The item shown first, counting from 0.",
        long_help = "The item shown first, counting from 0. Must point at one of the items."
    )]
    pub(crate) index: Option<usize>,

    #[arg(
        long,
        value_name = "ROWS",
        help = "The height of the active item.",
        long_help = "The height of the active item in rows. Side items are scaled down from this. \
                    Must be at least 3."
    )]
    pub(crate) item_height: Option<u16>,

    #[arg(
        long,
        help = "Jumps between items instead of sliding.",
        long_help = "Disables animations; the strip jumps straight to each new offset."
    )]
    pub(crate) no_animation: bool,

    #[arg(
        long,
        value_name = "SCALE",
        help = "The scale of the items on either side.",
        long_help = "The vertical scale of the items that are not active, between 0 and 1. Values \
                    outside that range are clamped."
    )]
    pub(crate) sides_scaling: Option<f32>,

    #[arg(
        long,
        value_name = "COLUMNS",
        help = "The gap between two items.",
        long_help = "The gap between two items, in columns. Must be at least 0."
    )]
    pub(crate) spacing: Option<f32>,

    #[arg(
        long,
        overrides_with = "view_only",
        help = "Allows dragging, even if the config or demo turns it off.",
        long_help = "Allows dragging with the mouse or arrow keys, even if the config file or the \
                    demo being run (e.g. the gallery) is view-only by default."
    )]
    pub(crate) can_move: bool,

    #[arg(
        long,
        overrides_with = "wrap",
        help = "Stops at either end, even if the config or demo wraps.",
        long_help = "Stops at either end instead of looping around, even if the config file or the \
                    demo being run (e.g. the gallery) wraps by default."
    )]
    pub(crate) no_wrap: bool,

    #[arg(
        long,
        overrides_with = "can_move",
        help = "Ignores dragging; the carousel can only be watched.",
        long_help = "Ignores dragging with the mouse or arrow keys. Pushing an index with the number \
                    keys and auto-scrolling still work."
    )]
    pub(crate) view_only: bool,

    #[arg(
        short = 'w',
        long,
        overrides_with = "no_wrap",
        help = "Loops around at either end.",
        long_help = "Loops around at either end; moving past the last item shows the first. Has no \
                    effect with fewer than two items."
    )]
    pub(crate) wrap: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub(crate) config_location: Option<String>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to a file.",
        long_help = "Writes debug logs to the given file. Only available in builds with the \
                    'logging' feature."
    )]
    pub(crate) log_file: Option<String>,

    #[arg(
        short = 'h',
        long,
        action = ArgAction::Help,
        help = "Prints help info (for more details use `--help`.)"
    )]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Parses the arguments for the binary named `bin_name`, exiting on failure.
pub fn get_args(bin_name: &'static str) -> Args {
    let matches = Args::command().name(bin_name).get_matches();

    Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

impl Args {
    /// The config file location passed on the command line, if any.
    pub fn config_location(&self) -> Option<&str> {
        self.other_args.config_location.as_deref()
    }

    /// The debug log file passed on the command line, if any.
    pub fn log_file(&self) -> Option<&str> {
        self.other_args.log_file.as_deref()
    }
}
