use super::Page;

/// Search box above the admin result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub value: String,
}

/// One body row of the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Rendered text of each cell. The first cell holds the row checkbox.
    pub cells: Vec<String>,
    pub visible: bool,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            visible: true,
        }
    }
}

/// Body of the admin result table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn visible_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.visible)
    }
}

/// Shows only the rows with a cell (past the checkbox column) containing the
/// search text, ignoring case.
///
/// Returns the number of visible rows, or `None` when the page lacks the
/// search input or the table. A row without cells past the first never
/// matches, not even an empty search.
pub fn filter_table(page: &mut Page) -> Option<usize> {
    let filter = page.search_input.as_ref()?.value.to_lowercase();
    let table = page.result_table.as_mut()?;

    let mut visible = 0;
    for row in &mut table.rows {
        row.visible = row
            .cells
            .iter()
            .skip(1)
            .any(|cell| cell.to_lowercase().contains(&filter));
        if row.visible {
            visible += 1;
        }
    }
    Some(visible)
}

/// Updates the search input text and refilters the table.
pub fn search(page: &mut Page, text: &str) -> Option<usize> {
    page.search_input.as_mut()?.value = text.to_owned();
    filter_table(page)
}
