use indoc::indoc;

/// How often the screen is redrawn and deferred carousel work is run.
pub const FRAME_RATE_IN_MILLISECONDS: u64 = 16;

/// How often the auto-scroll timer ticks.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 1000;

/// Input events closer together than this are dropped.
pub const INPUT_DEBOUNCE_IN_MILLISECONDS: u128 = 10;

// Demo defaults. These are in terminal cells rather than points, so they're
// much smaller than the library's own defaults.
pub const DEFAULT_SPACING: f32 = 2.0;
pub const DEFAULT_HEADSPACE: f32 = 4.0;
pub const DEFAULT_SIDES_SCALING: f32 = 0.8;
pub const DEFAULT_ITEM_HEIGHT: u16 = 12;
pub const MIN_ITEM_HEIGHT: u16 = 3;
pub const GALLERY_AUTO_SCROLL_SECONDS: u64 = 2;

/// The items shown when the config file doesn't list any.
pub const DEFAULT_ITEMS: [(&str, &str); 5] = [
    ("Aurora", "red"),
    ("Basalt", "blue"),
    ("Cedar", "green"),
    ("Dune", "#d7875f"),
    ("Ember", "magenta"),
];

/// Colours handed out to items without one, in order.
pub const ITEM_PALETTE: [&str; 6] = ["red", "blue", "green", "yellow", "magenta", "cyan"];

pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "carousel/carousel.toml";

// Help text
pub const HELP_TEXT: &str =
    "q quit | ←/→ drag | 1-9 jump | ↑/↓ select | +/- adjust | w wrap | a auto | f focus";
pub const GALLERY_HELP_TEXT: &str = "q quit | 1-9 jump | f focus";

/// Written out when the config file doesn't exist yet.
pub const CONFIG_TEXT: &str = indoc! {r##"
    # This is a default config file for the carousel demos. All of the settings
    # are commented out by default; uncomment one to change it. Arguments
    # passed on the command line win over anything set here.

    [carousel]
    # The gap between two items, in columns.
    #spacing = 2.0
    # How many columns of the neighbouring items peek in on either side.
    #headspace = 4.0
    # The vertical scale of the items that aren't active, between 0 and 1.
    #sides_scaling = 0.8
    # Whether to loop around at either end.
    #wrap = false
    # Advance on a timer. Takes seconds or a duration like "3s" or "1500ms".
    #auto_scroll = "5s"
    # The item shown first, counting from 0.
    #index = 0
    # Whether dragging moves the carousel.
    #can_move = true
    # Whether the strip slides between items or jumps.
    #animated = true
    # The height of the active item, in rows.
    #item_height = 12

    # The items to show. Leave these out to use the built-in set.
    #[[items]]
    #label = "Aurora"
    #color = "red"
    #
    #[[items]]
    #label = "Basalt"
    #color = "#5f87d7"
"##};
