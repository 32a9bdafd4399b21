use tui::{style::Modifier, widgets::BorderType};

use super::{hex, hex_colour};
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn gruvbox_palette() -> Self {
        Self {
            border_style: hex!("#ebdbb2"),
            highlighted_border_style: hex!("#fe8019"),
            text_style: hex!("#ebdbb2"),
            selected_text_style: hex!("#1d2021").bg(hex_colour!("#ebdbb2")),
            table_header_style: hex!("#83a598").add_modifier(Modifier::BOLD),
            widget_title_style: hex!("#ebdbb2"),
            border_type: BorderType::Plain,
        }
    }

    pub(crate) fn gruvbox_light_palette() -> Self {
        Self {
            border_style: hex!("#3c3836"),
            highlighted_border_style: hex!("#af3a03"),
            text_style: hex!("#3c3836"),
            selected_text_style: hex!("#ebdbb2").bg(hex_colour!("#3c3836")),
            table_header_style: hex!("#076678").add_modifier(Modifier::BOLD),
            widget_title_style: hex!("#3c3836"),
            border_type: BorderType::Plain,
        }
    }
}
