use serde::{Deserialize, Serialize};

/// Options around how files are read and which columns may sort.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct TableConfig {
    /// The field delimiter to use for all files. Either a single ASCII
    /// character or one of a few well-known names ("comma", "semicolon",
    /// "tab", "pipe", "space").
    pub(crate) delimiter: Option<String>,

    /// The header label whose column never sorts.
    pub(crate) unsortable_label: Option<String>,
}
