use super::item::LineItem;

/// A 1-based row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub number: usize,
    pub item: LineItem,
}

/// Read-only snapshot of an order, rows numbered from 1 in insertion order.
///
/// The table owns copies of the items, so it stays valid after the order it
/// was taken from changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub const COLUMNS: [&'static str; 4] = ["name", "quantity", "unit_price", "line_total"];

    pub fn from_items(items: &[LineItem]) -> Self {
        let rows = items
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, item)| Row {
                number: idx + 1,
                item,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Row> {
        number.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }
}
