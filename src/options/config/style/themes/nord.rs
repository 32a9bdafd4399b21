use tui::{style::Modifier, widgets::BorderType};

use super::{hex, hex_colour};
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn nord_palette() -> Self {
        Self {
            border_style: hex!("#88c0d0"),
            highlighted_border_style: hex!("#5e81ac"),
            text_style: hex!("#e5e9f0"),
            selected_text_style: hex!("#2e3440").bg(hex_colour!("#88c0d0")),
            table_header_style: hex!("#81a1c1").add_modifier(Modifier::BOLD),
            widget_title_style: hex!("#e5e9f0"),
            border_type: BorderType::Plain,
        }
    }

    pub(crate) fn nord_light_palette() -> Self {
        Self {
            border_style: hex!("#2e3440"),
            highlighted_border_style: hex!("#5e81ac"),
            text_style: hex!("#2e3440"),
            selected_text_style: hex!("#f5f5f5").bg(hex_colour!("#5e81ac")),
            table_header_style: hex!("#5e81ac").add_modifier(Modifier::BOLD),
            widget_title_style: hex!("#2e3440"),
            border_type: BorderType::Plain,
        }
    }
}
