pub mod components;
pub mod drawing_utils;

use tui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::App,
    canvas::components::data_table::{DataTableStyling, DrawInfo, SelectionState},
    options::config::style::Styles,
};

pub struct Painter {
    pub styles: Styles,
}

impl Painter {
    pub fn new(styles: Styles) -> Self {
        Self { styles }
    }

    /// The styling handed to each table widget.
    pub fn table_styling(&self) -> DataTableStyling {
        DataTableStyling::from_palette(&self.styles)
    }

    /// Draws every table, stacked vertically, or just the focused one if the
    /// app is expanded.
    pub fn draw_data<B: Backend>(
        &self, terminal: &mut Terminal<B>, app: &mut App,
    ) -> Result<(), std::io::Error> {
        terminal.draw(|f| {
            let draw_area = f.area();
            let force_redraw = app.is_force_redraw;
            let focused = app.focused;

            if app.is_expanded {
                if let Some(widget) = app.widgets.get_mut(focused) {
                    let draw_info = DrawInfo {
                        loc: draw_area,
                        force_redraw,
                        recalculate_column_widths: force_redraw,
                        selection_state: SelectionState::Expanded,
                    };
                    widget.draw(f, &draw_info);
                }
            } else if !app.widgets.is_empty() {
                let num_widgets = app.widgets.len() as u32;
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(vec![Constraint::Ratio(1, num_widgets); app.widgets.len()])
                    .split(draw_area);

                for (index, (widget, loc)) in
                    app.widgets.iter_mut().zip(chunks.iter()).enumerate()
                {
                    let draw_info = DrawInfo {
                        loc: *loc,
                        force_redraw,
                        recalculate_column_widths: force_redraw,
                        selection_state: SelectionState::new(false, index == focused),
                    };
                    widget.draw(f, &draw_info);
                }
            }

            app.is_force_redraw = false;
        })?;

        Ok(())
    }
}
