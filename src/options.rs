//! How tabelle turns arguments and the config file into its runtime options.

pub mod args;
pub mod config;
mod error;

pub use config::Config;
pub(crate) use error::{OptionError, OptionResult};

use crate::{app::AppConfigFields, data::Delimiter, options::args::TabelleArgs};

macro_rules! is_flag_enabled {
    ($flag_name:ident, $arg_group:expr, $config:expr) => {
        if $arg_group.$flag_name {
            true
        } else if let Some(flags) = &$config.flags {
            flags.$flag_name.unwrap_or(false)
        } else {
            false
        }
    };
}

/// Merge the command-line arguments and the config file into the fields the
/// app carries at runtime. Arguments always win over the config file.
pub fn build_app_config_fields(
    args: &TabelleArgs, config: &Config,
) -> OptionResult<AppConfigFields> {
    Ok(AppConfigFields {
        table_gap: u16::from(!is_flag_enabled!(hide_table_gap, args.general, config)),
        use_basic_mode: is_flag_enabled!(basic, args.general, config),
        show_table_scroll_position: is_flag_enabled!(
            show_table_scroll_position,
            args.general,
            config
        ),
        disable_click: is_flag_enabled!(disable_click, args.general, config),
        expanded_on_startup: is_flag_enabled!(expanded, args.general, config),
        plain: is_flag_enabled!(plain, args.table, config),
        delimiter: get_delimiter(args, config)?,
        unsortable_label: get_unsortable_label(args, config),
    })
}

fn get_delimiter(args: &TabelleArgs, config: &Config) -> OptionResult<Option<Delimiter>> {
    let from_args = args.table.delimiter.as_deref();
    let from_config = config
        .table
        .as_ref()
        .and_then(|table| table.delimiter.as_deref());

    match (from_args, from_config) {
        (Some(raw), _) => raw
            .parse::<Delimiter>()
            .map(Some)
            .map_err(OptionError::arg),
        (None, Some(raw)) => raw
            .parse::<Delimiter>()
            .map(Some)
            .map_err(OptionError::config),
        (None, None) => Ok(None),
    }
}

fn get_unsortable_label(args: &TabelleArgs, config: &Config) -> String {
    args.table
        .unsortable_label
        .clone()
        .or_else(|| {
            config
                .table
                .as_ref()
                .and_then(|table| table.unsortable_label.clone())
        })
        .unwrap_or_else(|| "Aktionen".to_owned())
}
