use tui::{
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use super::color;
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn default_style() -> Self {
        const HIGHLIGHT_COLOUR: Color = Color::LightBlue;
        const DEFAULT_SELECTED_TEXT_STYLE: Style = color!(Color::Black).bg(HIGHLIGHT_COLOUR);
        const TEXT_COLOUR: Color = Color::Gray;

        Self {
            border_style: color!(TEXT_COLOUR),
            highlighted_border_style: color!(HIGHLIGHT_COLOUR),
            text_style: color!(TEXT_COLOUR),
            selected_text_style: DEFAULT_SELECTED_TEXT_STYLE,
            table_header_style: color!(HIGHLIGHT_COLOUR).add_modifier(Modifier::BOLD),
            widget_title_style: color!(TEXT_COLOUR),
            border_type: BorderType::Plain,
        }
    }

    pub(crate) fn default_light_mode() -> Self {
        Self {
            border_style: color!(Color::Black),
            highlighted_border_style: color!(Color::LightBlue),
            text_style: color!(Color::Black),
            selected_text_style: color!(Color::White).bg(Color::LightBlue),
            table_header_style: color!(Color::Black).add_modifier(Modifier::BOLD),
            widget_title_style: color!(Color::Black),
            border_type: BorderType::Plain,
        }
    }
}
