use serde::{Deserialize, Serialize};

use super::{ColorStr, TextStyleConfig, borders::WidgetBorderType};

/// General styling for generic widgets.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct WidgetStyle {
    pub(crate) border: Option<ColorStr>,
    pub(crate) selected_border: Option<ColorStr>,
    pub(crate) widget_title: Option<TextStyleConfig>,

    pub(crate) text: Option<TextStyleConfig>,
    pub(crate) selected_text: Option<TextStyleConfig>,

    pub(crate) widget_border_type: Option<WidgetBorderType>,
}
