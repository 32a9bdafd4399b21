//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "tbl [OPTIONS] <FILES>...";

/// The arguments for tabelle.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct TabelleArgs {
    #[arg(
        value_name = "FILES",
        required = true,
        help = "The delimited text files to display, one table per file."
    )]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub general: GeneralArgs,

    #[command(flatten)]
    pub table: TableArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub other: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'b',
        long,
        action = ArgAction::SetTrue,
        help = "Hides borders and uses a more basic look.",
        long_help = "Hides widget borders and uses a more basic look. Useful on small terminals."
    )]
    pub basic: bool,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<PathBuf>,

    #[arg(
        long = "disable_click",
        action = ArgAction::SetTrue,
        help = "Disables mouse clicks.",
        long_help = "Disables mouse clicks from interacting with tables."
    )]
    pub disable_click: bool,

    #[arg(
        short = 'e',
        long,
        action = ArgAction::SetTrue,
        help = "Expands the focused table on startup.",
        long_help = "Expands the focused table to fill the whole terminal on startup. \
                    Pressing 'e' or 'Esc' collapses it again."
    )]
    pub expanded: bool,

    #[arg(
        long = "hide_table_gap",
        action = ArgAction::SetTrue,
        help = "Hides the spacing between table headers and entries."
    )]
    pub hide_table_gap: bool,

    #[arg(
        long = "show_table_scroll_position",
        action = ArgAction::SetTrue,
        help = "Shows the scroll position tracker in table titles."
    )]
    pub show_table_scroll_position: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Table Options")]
pub struct TableArgs {
    #[arg(
        short = 'd',
        long,
        value_name = "DELIMITER",
        help = "Sets the field delimiter for all files.",
        long_help = "Sets the field delimiter used for every file. Accepts a single ASCII character \
                    or one of 'comma', 'semicolon', 'tab', 'pipe', or 'space'. If unset, the \
                    delimiter is sniffed per file, falling back to a semicolon."
    )]
    pub delimiter: Option<String>,

    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Disables sorting entirely.",
        long_help = "Renders every table without any sort handling; header clicks do nothing."
    )]
    pub plain: bool,

    #[arg(
        long = "unsortable_label",
        value_name = "LABEL",
        help = "Sets the header label whose column never sorts. Defaults to 'Aktionen'."
    )]
    pub unsortable_label: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Style Options")]
pub struct StyleArgs {
    #[arg(
        long,
        value_name = "SCHEME",
        value_parser = [
            "default",
            "default-light",
            "gruvbox",
            "gruvbox-light",
            "nord",
            "nord-light",
        ],
        hide_possible_values = true,
        help = "Use a color scheme, use --help for info on the colors. \
                [possible values: default, default-light, gruvbox, gruvbox-light, nord, nord-light]",
        long_help = indoc! {
            "Use a pre-defined color scheme. Currently supported values are:
            - default
            - default-light (default but adjusted for lighter backgrounds)
            - gruvbox       (a bright theme with 'retro groove' colors)
            - gruvbox-light (gruvbox but adjusted for lighter backgrounds)
            - nord          (an arctic, north-bluish color palette)
            - nord-light    (nord but adjusted for lighter backgrounds)"
        }
    )]
    pub theme: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use `--help`).")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        TabelleArgs::command().debug_assert();
    }

    #[test]
    fn files_are_required() {
        assert!(TabelleArgs::try_parse_from(["tbl"]).is_err());
        assert!(TabelleArgs::try_parse_from(["tbl", "a.csv"]).is_ok());
        assert!(TabelleArgs::try_parse_from(["tbl", "a.csv", "b.csv"]).is_ok());
    }

    #[test]
    fn theme_values_are_checked() {
        assert!(TabelleArgs::try_parse_from(["tbl", "--theme", "nord", "a.csv"]).is_ok());
        assert!(TabelleArgs::try_parse_from(["tbl", "--theme", "space gray", "a.csv"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let args = TabelleArgs::try_parse_from([
            "tbl",
            "-b",
            "--plain",
            "-d",
            ";",
            "--unsortable_label",
            "Notizen",
            "a.csv",
        ])
        .unwrap();

        assert!(args.general.basic);
        assert!(args.table.plain);
        assert_eq!(args.table.delimiter.as_deref(), Some(";"));
        assert_eq!(args.table.unsortable_label.as_deref(), Some("Notizen"));
        assert_eq!(args.files, [PathBuf::from("a.csv")]);
    }
}
