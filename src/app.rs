use std::path::PathBuf;

use crate::{
    c_error,
    canvas::components::data_table::DataTableStyling,
    data::{Delimiter, Document, load_documents},
    widgets::FileTableWidget,
};

/// The resolved set of options the app carries around at runtime, after
/// arguments and the config file have been merged.
#[derive(Clone, Debug)]
pub struct AppConfigFields {
    pub table_gap: u16,
    pub use_basic_mode: bool,
    pub show_table_scroll_position: bool,
    pub disable_click: bool,
    pub expanded_on_startup: bool,
    pub plain: bool,
    pub delimiter: Option<Delimiter>,
    pub unsortable_label: String,
}

impl Default for AppConfigFields {
    fn default() -> Self {
        Self {
            table_gap: 1,
            use_basic_mode: false,
            show_table_scroll_position: false,
            disable_click: false,
            expanded_on_startup: false,
            plain: false,
            delimiter: None,
            unsortable_label: "Aktionen".to_owned(),
        }
    }
}

pub struct App {
    /// One table widget per loaded file, in argument order.
    pub widgets: Vec<FileTableWidget>,

    /// Index of the focused widget.
    pub focused: usize,

    pub is_expanded: bool,
    pub is_force_redraw: bool,
    pub app_config_fields: AppConfigFields,

    paths: Vec<PathBuf>,
    table_styling: DataTableStyling,
}

impl App {
    pub fn new(
        app_config_fields: AppConfigFields, paths: Vec<PathBuf>, documents: &[Document],
        table_styling: DataTableStyling,
    ) -> Self {
        let is_expanded = app_config_fields.expanded_on_startup;
        let mut app = Self {
            widgets: vec![],
            focused: 0,
            is_expanded,
            is_force_redraw: true,
            app_config_fields,
            paths,
            table_styling,
        };
        app.rebuild_widgets(documents);

        app
    }

    /// Builds one table widget per document and gives each its horizontal
    /// pan container.
    fn rebuild_widgets(&mut self, documents: &[Document]) {
        self.widgets = documents
            .iter()
            .map(|document| {
                let mut widget = FileTableWidget::new(
                    document,
                    &self.app_config_fields,
                    self.table_styling.clone(),
                );
                widget.ensure_column_scroll();
                widget
            })
            .collect();
        self.focused = self.focused.min(self.widgets.len().saturating_sub(1));
        self.is_force_redraw = true;
    }

    /// Re-reads every file from disk. On failure the current tables are left
    /// untouched.
    pub fn reload(&mut self) {
        match load_documents(&self.paths, self.app_config_fields.delimiter) {
            Ok(documents) => {
                self.rebuild_widgets(&documents);
            }
            Err(err) => {
                c_error!("reload failed: {err:?}");
                let _ = err;
            }
        }
    }

    fn focused_widget(&mut self) -> Option<&mut FileTableWidget> {
        self.widgets.get_mut(self.focused)
    }

    pub fn on_tab(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + 1) % self.widgets.len();
        }
    }

    pub fn on_back_tab(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.widgets.len() - 1);
        }
    }

    pub fn on_up_key(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.increment_position(-1);
        }
    }

    pub fn on_down_key(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.increment_position(1);
        }
    }

    pub fn on_left_key(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.pan_left();
            // Column widths are sized for the visible slice, so a pan has to
            // trigger a recalculation.
            self.is_force_redraw = true;
        }
    }

    pub fn on_right_key(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.pan_right();
            self.is_force_redraw = true;
        }
    }

    pub fn on_page_up(&mut self) {
        if let Some(widget) = self.focused_widget() {
            let page = i64::from(widget.page_height());
            widget.increment_position(-page);
        }
    }

    pub fn on_page_down(&mut self) {
        if let Some(widget) = self.focused_widget() {
            let page = i64::from(widget.page_height());
            widget.increment_position(page);
        }
    }

    pub fn skip_to_first(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.scroll_to_first();
        }
    }

    pub fn skip_to_last(&mut self) {
        if let Some(widget) = self.focused_widget() {
            widget.scroll_to_last();
        }
    }

    pub fn on_esc(&mut self) {
        if self.is_expanded {
            self.is_expanded = false;
            self.is_force_redraw = true;
        }
    }

    pub fn on_char_key(&mut self, caught_char: char) {
        if caught_char == 'e' {
            self.is_expanded = !self.is_expanded;
            self.is_force_redraw = true;
        }
    }

    pub fn handle_scroll_up(&mut self) {
        self.on_up_key();
    }

    pub fn handle_scroll_down(&mut self) {
        self.on_down_key();
    }

    /// Routes a left click to the widget under the cursor, focusing it.
    pub fn on_left_mouse_up(&mut self, x: u16, y: u16) {
        if let Some(index) = self
            .widgets
            .iter()
            .position(|widget| widget.contains(x, y))
        {
            self.focused = index;
            self.widgets[index].on_left_click(x, y);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::DataCell;

    fn make_app(num_documents: usize) -> App {
        let documents: Vec<Document> = (0..num_documents)
            .map(|i| Document {
                title: format!("datei{i}"),
                headers: vec!["Name".to_owned()],
                rows: vec![vec![DataCell::new("Meier")]],
            })
            .collect();

        App::new(
            AppConfigFields::default(),
            vec![],
            &documents,
            DataTableStyling::default(),
        )
    }

    #[test]
    fn tab_cycles_through_widgets() {
        let mut app = make_app(3);
        assert_eq!(app.focused, 0);

        app.on_tab();
        app.on_tab();
        assert_eq!(app.focused, 2);
        app.on_tab();
        assert_eq!(app.focused, 0);

        app.on_back_tab();
        assert_eq!(app.focused, 2);
    }

    #[test]
    fn every_widget_gets_a_pan_container() {
        let mut app = make_app(2);
        for widget in &mut app.widgets {
            // Already ensured at build time, so this has to be a no-op.
            widget.ensure_column_scroll();
        }
    }

    #[test]
    fn esc_collapses_expansion() {
        let mut app = make_app(1);
        app.is_force_redraw = false;

        app.on_char_key('e');
        assert!(app.is_expanded);
        assert!(app.is_force_redraw);

        app.is_force_redraw = false;
        app.on_esc();
        assert!(!app.is_expanded);
        assert!(app.is_force_redraw);

        // Esc with nothing expanded changes nothing.
        app.is_force_redraw = false;
        app.on_esc();
        assert!(!app.is_force_redraw);
    }
}
