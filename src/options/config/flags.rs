use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    pub(crate) basic: Option<bool>,
    pub(crate) expanded: Option<bool>,
    pub(crate) hide_table_gap: Option<bool>,
    pub(crate) show_table_scroll_position: Option<bool>,
    pub(crate) disable_click: Option<bool>,
    pub(crate) plain: Option<bool>,
}
