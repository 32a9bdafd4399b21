use std::{borrow::Cow, cmp::max, num::NonZeroU16};

use concat_string::concat_string;
use tui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::{
    app::AppConfigFields,
    canvas::components::data_table::{
        Column, ColumnHeader, DataTable, DataTableColumn, DataTableProps, DataTableStyling,
        DataToCell, DrawInfo, SortColumn, SortDataTable, SortDataTableProps, SortState, SortsRow,
    },
    data::{DataCell, Document},
};

/// A column of a loaded file, identified by its position in the header row.
#[derive(Clone, Debug)]
pub struct FileColumn {
    pub label: String,
    pub index: usize,
}

impl ColumnHeader for FileColumn {
    fn text(&self) -> Cow<'static, str> {
        self.label.clone().into()
    }
}

impl SortsRow for FileColumn {
    type DataType = DataRow;

    fn sort_data(&self, data: &mut [DataRow], descending: bool) {
        let index = self.index;

        // Stable, so ties keep whatever order previous sorts left them in.
        data.sort_by(|a, b| {
            let ordering = a.cell(index).compare(b.cell(index));
            if descending { ordering.reverse() } else { ordering }
        });
    }
}

/// One body row of a loaded file.
#[derive(Clone, Debug)]
pub struct DataRow {
    cells: Vec<DataCell>,
}

impl DataRow {
    pub fn new(cells: Vec<DataCell>) -> Self {
        Self { cells }
    }

    fn cell(&self, index: usize) -> &DataCell {
        // Loading pads every row to the header width, so indexing is safe
        // for any in-range column.
        &self.cells[index]
    }
}

impl DataToCell<FileColumn> for DataRow {
    fn to_cell_text(
        &self, column: &FileColumn, _calculated_width: NonZeroU16,
    ) -> Option<Cow<'static, str>> {
        self.cells
            .get(column.index)
            .map(|cell| cell.text().to_owned().into())
    }

    fn column_widths<C: DataTableColumn<FileColumn>>(data: &[Self], columns: &[C]) -> Vec<u16>
    where
        Self: Sized,
    {
        let mut widths = vec![0; columns.len()];

        data.iter().for_each(|row| {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = max(*width, cell.text().width() as u16);
            }
        });

        widths
    }
}

/// The table itself; plain tables have no sort machinery at all, so a click
/// on their header cannot do anything by construction.
pub enum FileTable {
    Sortable(SortDataTable<DataRow, FileColumn>),
    Plain(DataTable<DataRow, FileColumn>),
}

impl FileTable {
    fn set_data(&mut self, data: Vec<DataRow>) {
        match self {
            FileTable::Sortable(table) => table.set_data(data),
            FileTable::Plain(table) => table.set_data(data),
        }
    }
}

pub struct FileTableWidget {
    pub table: FileTable,

    /// Rows in their current display order. Sorts reorder this in place, so
    /// each sort works on the result of the previous one rather than the
    /// original file order.
    rows: Vec<DataRow>,
}

impl FileTableWidget {
    pub fn new(document: &Document, config: &AppConfigFields, styling: DataTableStyling) -> Self {
        let props = DataTableProps {
            title: Some(concat_string!(" ", document.title, " ").into()),
            table_gap: config.table_gap,
            left_to_right: true,
            is_basic: config.use_basic_mode,
            show_table_scroll_position: config.show_table_scroll_position,
            show_current_entry_when_unfocused: false,
        };

        let rows: Vec<DataRow> = document
            .rows
            .iter()
            .map(|cells| DataRow::new(cells.clone()))
            .collect();

        let columns = document.headers.iter().enumerate().map(|(index, label)| {
            FileColumn {
                label: label.clone(),
                index,
            }
        });

        let mut table = if config.plain {
            FileTable::Plain(DataTable::new(
                columns.map(|c| Column::soft(c, None)).collect::<Vec<_>>(),
                props,
                styling,
            ))
        } else {
            let columns = columns
                .map(|c| {
                    let sortable = c.label != config.unsortable_label;
                    let column = SortColumn::soft(c, None);
                    if sortable { column } else { column.unsortable() }
                })
                .collect::<Vec<_>>();

            FileTable::Sortable(SortDataTable::new_sortable(
                columns,
                SortDataTableProps {
                    inner: props,
                    state: SortState::Unsorted,
                },
                styling,
            ))
        };

        table.set_data(rows.clone());

        Self { table, rows }
    }

    /// Handles a left click at `(x, y)`. Header clicks on sortable tables
    /// re-sort; anything landing on a body row selects it.
    pub fn on_left_click(&mut self, x: u16, y: u16) {
        match &mut self.table {
            FileTable::Sortable(table) => {
                if let Some((index, order)) = table.try_select_location(x, y) {
                    table.columns[index].sort_by(&mut self.rows, order);
                    table.set_data(self.rows.clone());
                } else {
                    table.try_select_row(x, y);
                }
            }
            FileTable::Plain(table) => {
                table.try_select_row(x, y);
            }
        }
    }

    /// Applies a sort as if the given column's header had been clicked.
    pub fn sort_by_column(&mut self, index: usize) {
        if let FileTable::Sortable(table) = &mut self.table {
            if let Some(order) = table.set_sort_index(index) {
                table.columns[index].sort_by(&mut self.rows, order);
                table.set_data(self.rows.clone());
            }
        }
    }

    /// The rows in their current display order.
    pub fn current_rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn current_row_texts(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| cell.text()).collect())
            .collect()
    }

    pub fn num_columns(&self) -> usize {
        match &self.table {
            FileTable::Sortable(table) => table.columns.len(),
            FileTable::Plain(table) => table.columns.len(),
        }
    }

    /// Gives this table a horizontal pan container if it does not already
    /// have one; the current offset is left untouched.
    pub fn ensure_column_scroll(&mut self) {
        self.state_mut().ensure_column_scroll();
    }

    pub fn pan_left(&mut self) {
        if let Some(scroll) = &mut self.state_mut().column_scroll {
            scroll.first_column = scroll.first_column.saturating_sub(1);
        }
    }

    pub fn pan_right(&mut self) {
        let last_column = self.num_columns().saturating_sub(1);
        if let Some(scroll) = &mut self.state_mut().column_scroll {
            if scroll.first_column < last_column {
                scroll.first_column += 1;
            }
        }
    }

    pub fn scroll_to_first(&mut self) {
        match &mut self.table {
            FileTable::Sortable(table) => table.scroll_to_first(),
            FileTable::Plain(table) => table.scroll_to_first(),
        }
    }

    pub fn scroll_to_last(&mut self) {
        match &mut self.table {
            FileTable::Sortable(table) => table.scroll_to_last(),
            FileTable::Plain(table) => table.scroll_to_last(),
        }
    }

    pub fn increment_position(&mut self, change: i64) {
        match &mut self.table {
            FileTable::Sortable(table) => {
                table.increment_position(change);
            }
            FileTable::Plain(table) => {
                table.increment_position(change);
            }
        }
    }

    /// The number of body rows that fit in the drawn area as of the last
    /// draw. Used as the page size for page up/down.
    pub fn page_height(&self) -> u16 {
        self.state().inner_rect.height.saturating_sub(1)
    }

    /// Whether `(x, y)` lies within this widget's drawn area.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let rect = self.state().inner_rect;
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, draw_info: &DrawInfo) {
        match &mut self.table {
            FileTable::Sortable(table) => table.draw(f, draw_info),
            FileTable::Plain(table) => table.draw(f, draw_info),
        }
    }

    fn state(&self) -> &crate::canvas::components::data_table::DataTableState {
        match &self.table {
            FileTable::Sortable(table) => &table.state,
            FileTable::Plain(table) => &table.state,
        }
    }

    fn state_mut(&mut self) -> &mut crate::canvas::components::data_table::DataTableState {
        match &mut self.table {
            FileTable::Sortable(table) => &mut table.state,
            FileTable::Plain(table) => &mut table.state,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::components::data_table::{SortOrder, SortState};

    fn make_document(headers: &[&str], rows: &[&[&str]]) -> Document {
        Document {
            title: "klassenliste".to_owned(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|text| DataCell::new(text)).collect())
                .collect(),
        }
    }

    fn make_widget(document: &Document, plain: bool) -> FileTableWidget {
        let config = AppConfigFields {
            plain,
            ..AppConfigFields::default()
        };
        FileTableWidget::new(document, &config, DataTableStyling::default())
    }

    fn column_texts(widget: &FileTableWidget, index: usize) -> Vec<String> {
        widget
            .current_rows()
            .iter()
            .map(|row| row.cell(index).text().to_owned())
            .collect()
    }

    #[test]
    fn numeric_strings_sort_numerically() {
        let document = make_document(
            &["Name", "Punkte"],
            &[&["a", "10"], &["b", "2"], &["c", "33"]],
        );
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(1);
        assert_eq!(column_texts(&widget, 1), ["2", "10", "33"]);

        widget.sort_by_column(1);
        assert_eq!(column_texts(&widget, 1), ["33", "10", "2"]);
    }

    #[test]
    fn three_clicks_cycle_the_order() {
        let document = make_document(&["Name"], &[&["Meier"], &["Arnold"], &["Schulz"]]);
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["Arnold", "Meier", "Schulz"]);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["Schulz", "Meier", "Arnold"]);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["Arnold", "Meier", "Schulz"]);
    }

    #[test]
    fn sorting_a_new_column_starts_ascending() {
        let document = make_document(
            &["Name", "Jahrgang"],
            &[&["Meier", "2024"], &["Arnold", "2022"], &["Schulz", "2023"]],
        );
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(0);
        widget.sort_by_column(0);
        widget.sort_by_column(1);

        assert_eq!(column_texts(&widget, 1), ["2022", "2023", "2024"]);
        if let FileTable::Sortable(table) = &widget.table {
            assert_eq!(
                table.sort_state(),
                SortState::Sorted {
                    index: 1,
                    order: SortOrder::Ascending
                }
            );
        } else {
            panic!("expected a sortable table");
        }
    }

    #[test]
    fn sorts_are_cumulative_across_columns() {
        // Rows tied on the second sort key keep the order the first sort
        // left them in.
        let document = make_document(
            &["Name", "Klasse"],
            &[&["Zimmer", "7a"], &["Arnold", "7b"], &["Meier", "7a"]],
        );
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["Arnold", "Meier", "Zimmer"]);

        // Arnold sorted first by name but is in 7b, so the stable sort on
        // the class column moves the 7a rows above it in name order.
        widget.sort_by_column(1);
        assert_eq!(column_texts(&widget, 0), ["Meier", "Zimmer", "Arnold"]);
        assert_eq!(column_texts(&widget, 1), ["7a", "7a", "7b"]);
    }

    #[test]
    fn german_names_collate_with_umlauts() {
        let document = make_document(
            &["Nachname"],
            &[&["Banane"], &["Äpfel"], &["Apfel"]],
        );
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["Apfel", "Äpfel", "Banane"]);
    }

    #[test]
    fn excluded_column_is_inert() {
        let document = make_document(
            &["Name", "Aktionen"],
            &[&["Meier", "bearbeiten"], &["Arnold", "löschen"]],
        );
        let mut widget = make_widget(&document, false);

        widget.sort_by_column(1);
        assert_eq!(column_texts(&widget, 0), ["Meier", "Arnold"]);

        if let FileTable::Sortable(table) = &widget.table {
            assert_eq!(table.sort_state(), SortState::Unsorted);
        } else {
            panic!("expected a sortable table");
        }
    }

    #[test]
    fn custom_excluded_label_is_honoured() {
        let document = make_document(&["Name", "Notizen"], &[&["b", "2"], &["a", "1"]]);
        let config = AppConfigFields {
            unsortable_label: "Notizen".to_owned(),
            ..AppConfigFields::default()
        };
        let mut widget = FileTableWidget::new(&document, &config, DataTableStyling::default());

        widget.sort_by_column(1);
        assert_eq!(column_texts(&widget, 0), ["b", "a"]);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["a", "b"]);
    }

    #[test]
    fn plain_tables_never_sort() {
        let document = make_document(&["Name"], &[&["b"], &["a"]]);
        let mut widget = make_widget(&document, true);

        widget.sort_by_column(0);
        assert_eq!(column_texts(&widget, 0), ["b", "a"]);
        assert!(matches!(widget.table, FileTable::Plain(_)));
    }

    #[test]
    fn panning_is_clamped_to_the_column_range() {
        let document = make_document(&["A", "B", "C"], &[&["1", "2", "3"]]);
        let mut widget = make_widget(&document, false);

        // Without a pan container, panning is a no-op.
        widget.pan_right();
        assert_eq!(widget.state().first_column(), 0);

        widget.ensure_column_scroll();
        widget.pan_right();
        widget.pan_right();
        widget.pan_right();
        widget.pan_right();
        assert_eq!(widget.state().first_column(), 2);

        // Re-ensuring must not reset the offset.
        widget.ensure_column_scroll();
        assert_eq!(widget.state().first_column(), 2);

        widget.pan_left();
        widget.pan_left();
        widget.pan_left();
        assert_eq!(widget.state().first_column(), 0);
    }

    #[test]
    fn header_clicks_resolve_through_the_pan_offset() {
        use std::num::NonZeroU16;

        use tui::layout::Rect;

        let document = make_document(
            &["Name", "Jahrgang", "Aktionen"],
            &[
                &["Meier", "2024", "löschen"],
                &["Arnold", "2022", "löschen"],
            ],
        );
        let mut widget = make_widget(&document, false);
        widget.ensure_column_scroll();
        widget.pan_right();

        // Mimic a draw: two visible columns of width 4, starting at the
        // panned-to column.
        {
            let state = widget.state_mut();
            state.inner_rect = Rect::new(0, 0, 20, 5);
            state.calculated_widths = vec![
                NonZeroU16::new(4).unwrap(),
                NonZeroU16::new(4).unwrap(),
            ];
        }

        // x = 3 lands in the first rendered column, which is the absolute
        // second one after the pan.
        widget.on_left_click(3, 0);
        assert_eq!(column_texts(&widget, 1), ["2022", "2024"]);
        if let FileTable::Sortable(table) = &widget.table {
            assert_eq!(
                table.sort_state(),
                SortState::Sorted {
                    index: 1,
                    order: SortOrder::Ascending
                }
            );
        } else {
            panic!("expected a sortable table");
        }

        // x = 6 lands on the panned-in excluded column; nothing changes.
        widget.on_left_click(6, 0);
        assert_eq!(column_texts(&widget, 1), ["2022", "2024"]);
        if let FileTable::Sortable(table) = &widget.table {
            assert_eq!(
                table.sort_state(),
                SortState::Sorted {
                    index: 1,
                    order: SortOrder::Ascending
                }
            );
        }
    }
}
