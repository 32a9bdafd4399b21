//! Constant values used throughout tabelle.

use indoc::indoc;

/// How long to wait on the event channel before redrawing anyway.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 200;

/// Tables hide the gap row between the header and the data when the
/// drawn area gets shorter than this.
pub const TABLE_GAP_HEIGHT_LIMIT: u16 = 7;

/// The default config file location, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_PATH: &str = "tabelle/tabelle.toml";

/// The contents written out when no config file exists yet. Everything is
/// commented out so the defaults stay in effect until the user opts in.
pub const DEFAULT_CONFIG_CONTENT: &str = indoc! {r##"
    # This is a default config file for tabelle. All of the settings are
    # commented out by default; if you wish to change them, uncomment and
    # modify them as you see fit.

    # These are flag settings. Uncommenting any of them overrides the default.
    #[flags]
    # Hides the gap between the table header and the rows.
    #hide_table_gap = false
    # Shows the scroll position tracker in the table title.
    #show_table_scroll_position = false
    # Uses a more basic look without mouse support.
    #basic = false
    # Starts with the focused table expanded.
    #expanded = false
    # Disables mouse clicks.
    #disable_click = false
    # Disables sorting entirely.
    #plain = false

    # These are table settings.
    #[table]
    # The field delimiter to parse files with. Leave unset to sniff it
    # from the first line of each file instead.
    #delimiter = ";"
    # The column heading that is never sortable.
    #unsortable_label = "Aktionen"

    # These are all the options with regards to changing the style.
    #[styles]
    # Built-in themes. Valid values are "default", "default-light",
    # "gruvbox", "gruvbox-light", "nord", "nord-light".
    #theme = "default"

    # Custom widget styling, overriding the theme.
    #[styles.widgets]
    #border = "gray"
    #selected_border = "light blue"
    #widget_title = {color = "gray"}
    #text = "gray"
    #selected_text = {color = "black", bg_color = "light blue"}
    #widget_border_type = "default"

    # Custom table styling, overriding the theme.
    #[styles.tables]
    #headers = {color = "light blue", bold = true}
"##};
