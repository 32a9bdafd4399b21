pub(crate) mod flags;
pub mod style;
pub(crate) mod table;

use flags::FlagConfig;
use serde::{Deserialize, Serialize};
use style::StyleConfig;
use table::TableConfig;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
    pub(crate) table: Option<TableConfig>,
    pub(crate) styles: Option<StyleConfig>,
}
