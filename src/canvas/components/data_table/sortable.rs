use std::{borrow::Cow, marker::PhantomData, num::NonZeroU16};

use concat_string::concat_string;
use itertools::Itertools;
use tui::widgets::Row;

use super::{
    ColumnHeader, ColumnWidthBounds, DataTable, DataTableColumn, DataTableProps, DataTableState,
    DataTableStyling, DataToCell,
};
use crate::utils::strings::truncate_to_text;

/// Denotes the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the reverse [`SortOrder`].
    pub fn rev(&self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

/// The sort state of a whole table. At most one column is ever active, so
/// applying a new sort inherently clears every other column's marker.
///
/// [`SortState::Unsorted`] is only seen between load and the first header
/// click; no click path re-enters it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted { index: usize, order: SortOrder },
}

/// Denotes the [`DataTable`] is unsorted.
pub struct Unsortable;

/// Denotes the [`DataTable`] is sorted.
pub struct Sortable {
    /// The table-wide sort state.
    pub state: SortState,
}

/// The [`SortType`] trait is meant to be used in the typing of a [`DataTable`]
/// to denote whether the table is meant to display/store sorted or unsorted
/// data.
///
/// Note that the trait is [sealed](https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed),
/// and therefore only [`Unsortable`] and [`Sortable`] can implement it.
pub trait SortType: private::Sealed {
    /// Constructs the table header. `first_column` is the absolute index of
    /// the leftmost rendered column, for tables panned to the right.
    fn build_header<H, C>(
        &self, columns: &[C], widths: &[NonZeroU16], first_column: usize,
    ) -> Row<'_>
    where
        H: ColumnHeader,
        C: DataTableColumn<H>,
    {
        let _ = first_column;
        Row::new(
            columns
                .iter()
                .zip(widths)
                .map(|(c, &width)| truncate_to_text(&c.header(), width.get())),
        )
    }
}

mod private {
    use super::{Sortable, Unsortable};

    pub trait Sealed {}

    impl Sealed for Unsortable {}
    impl Sealed for Sortable {}
}

impl SortType for Unsortable {}

impl SortType for Sortable {
    fn build_header<H, C>(
        &self, columns: &[C], widths: &[NonZeroU16], first_column: usize,
    ) -> Row<'_>
    where
        H: ColumnHeader,
        C: DataTableColumn<H>,
    {
        const NEUTRAL: &str = "↕";
        const UP_ARROW: &str = "▲";
        const DOWN_ARROW: &str = "▼";

        Row::new(
            columns
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(offset, (c, &width))| {
                    if !c.is_sortable() {
                        return truncate_to_text(&c.header(), width.get());
                    }

                    let indicator = match self.state {
                        SortState::Sorted { index, order } if index == first_column + offset => {
                            match order {
                                SortOrder::Ascending => UP_ARROW,
                                SortOrder::Descending => DOWN_ARROW,
                            }
                        }
                        _ => NEUTRAL,
                    };

                    truncate_to_text(&concat_string!(c.header(), indicator), width.get())
                }),
        )
    }
}

/// Something that can reorder a slice of rows for a given sort order.
pub trait SortsRow {
    type DataType;

    /// Sorts data. The sort must be stable so rows with equal keys keep
    /// their relative order.
    fn sort_data(&self, data: &mut [Self::DataType], descending: bool);
}

#[derive(Debug, Clone)]
pub struct SortColumn<T> {
    /// The inner column header.
    inner: T,

    /// A restriction on this column's width.
    pub bounds: ColumnWidthBounds,

    /// Marks that this column is currently "hidden", and should *always* be
    /// skipped.
    pub is_hidden: bool,

    /// Whether this column reacts to sort clicks. Ineligible columns render
    /// their bare label and ignore selection.
    pub is_sortable: bool,
}

impl<D, T> DataTableColumn<T> for SortColumn<T>
where
    T: ColumnHeader + SortsRow<DataType = D>,
{
    #[inline]
    fn inner(&self) -> &T {
        &self.inner
    }

    #[inline]
    fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    #[inline]
    fn bounds(&self) -> ColumnWidthBounds {
        self.bounds
    }

    #[inline]
    fn bounds_mut(&mut self) -> &mut ColumnWidthBounds {
        &mut self.bounds
    }

    #[inline]
    fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    #[inline]
    fn is_sortable(&self) -> bool {
        self.is_sortable
    }

    fn header(&self) -> Cow<'static, str> {
        self.inner.header()
    }

    fn header_len(&self) -> usize {
        // Room for the indicator glyph on eligible columns.
        self.header().len() + usize::from(self.is_sortable)
    }
}

impl<D, T> SortColumn<T>
where
    T: ColumnHeader + SortsRow<DataType = D>,
{
    /// Creates a new [`SortColumn`] with a width that follows the header
    /// width.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            bounds: ColumnWidthBounds::FollowHeader,
            is_hidden: false,
            is_sortable: true,
        }
    }

    /// Creates a new [`SortColumn`] with a hard width.
    pub const fn hard(inner: T, width: u16) -> Self {
        Self {
            inner,
            bounds: ColumnWidthBounds::Hard(width),
            is_hidden: false,
            is_sortable: true,
        }
    }

    /// Creates a new [`SortColumn`] with a soft width.
    pub const fn soft(inner: T, max_percentage: Option<f32>) -> Self {
        Self {
            inner,
            bounds: ColumnWidthBounds::Soft {
                desired: 0,
                max_percentage,
            },
            is_hidden: false,
            is_sortable: true,
        }
    }

    /// Marks this column as not reacting to sort selection.
    pub const fn unsortable(mut self) -> Self {
        self.is_sortable = false;
        self
    }

    /// Given a [`SortColumn`] and the sort order, sort a mutable slice of
    /// associated data.
    pub fn sort_by(&self, data: &mut [D], order: SortOrder) {
        let descending = matches!(order, SortOrder::Descending);
        self.inner.sort_data(data, descending);
    }
}

pub struct SortDataTableProps {
    pub inner: DataTableProps,
    pub state: SortState,
}

/// A type alias for a sortable [`DataTable`].
pub type SortDataTable<DataType, H> = DataTable<DataType, H, Sortable, SortColumn<H>>;

impl<D, H> SortDataTable<D, H>
where
    D: DataToCell<H>,
    H: ColumnHeader + SortsRow<DataType = D>,
{
    pub fn new_sortable<C: Into<Vec<SortColumn<H>>>>(
        columns: C, props: SortDataTableProps, styling: DataTableStyling,
    ) -> Self {
        Self {
            columns: columns.into(),
            state: DataTableState::default(),
            props: props.inner,
            styling,
            sort_type: Sortable { state: props.state },
            first_draw: true,
            data: vec![],
            _pd: PhantomData,
        }
    }

    /// Returns the current table-wide sort state.
    pub fn sort_state(&self) -> SortState {
        self.sort_type.state
    }

    /// Applies a click on the given column and returns the resulting order,
    /// or [`None`] if the column does not exist or is not eligible.
    ///
    /// A click on the active column toggles its order; a click anywhere else
    /// (including the very first click) starts ascending.
    pub fn set_sort_index(&mut self, index: usize) -> Option<SortOrder> {
        if !self
            .columns
            .get(index)
            .is_some_and(|column| column.is_sortable)
        {
            return None;
        }

        let order = match self.sort_type.state {
            SortState::Sorted {
                index: active,
                order,
            } if active == index => order.rev(),
            _ => SortOrder::Ascending,
        };

        self.sort_type.state = SortState::Sorted { index, order };
        Some(order)
    }

    /// Given some `x` and `y`, if the coordinate lands on the header row,
    /// resolve it to a column (honouring the horizontal pan offset) and apply
    /// the click. Returns the column index and new order on success.
    pub fn try_select_location(&mut self, x: u16, y: u16) -> Option<(usize, SortOrder)> {
        if self.state.inner_rect.height > 1 && self.state.inner_rect.y == y {
            let index = self.state.first_column() + self.get_range(x)?;
            let order = self.set_sort_index(index)?;
            Some((index, order))
        } else {
            None
        }
    }

    /// Given a `needle` coordinate, select the corresponding rendered column.
    fn get_range(&self, needle: u16) -> Option<usize> {
        let mut start = self.state.inner_rect.x;
        let range = self
            .state
            .calculated_widths
            .iter()
            .map(|width| {
                let entry_start = start;
                start += width.get() + 1; // +1 for the gap b/w cols.

                entry_start
            })
            .collect_vec();

        match range.binary_search(&needle) {
            Ok(index) => Some(index),
            Err(index) => index.checked_sub(1),
        }
    }
}
