use tui::widgets::{Block, BorderType, Borders};

pub const SIDE_BORDERS: Borders = Borders::LEFT.union(Borders::RIGHT);

/// Return a widget block.
pub fn widget_block(is_basic: bool, is_selected: bool, border_type: BorderType) -> Block<'static> {
    let mut block = Block::default().border_type(border_type);

    if is_basic {
        if is_selected {
            block = block.borders(SIDE_BORDERS);
        } else {
            block = block.borders(Borders::empty());
        }
    } else {
        block = block.borders(Borders::all());
    }

    block
}
