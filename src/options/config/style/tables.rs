use serde::{Deserialize, Serialize};

use super::TextStyleConfig;

/// General styling for table widgets.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct TableStyle {
    pub(crate) headers: Option<TextStyleConfig>,
}
