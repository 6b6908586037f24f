//! Client-side filtering of HTML table rows by a search term.

#[cfg(test)]
#[path = "table_filter_test.rs"]
mod table_filter_test;

/// Whether a row with `cells` stays visible for `term`.
///
/// Matching is a case-insensitive substring test against every cell, or
/// only against `column` when given. A row without that column is hidden.
pub fn row_matches<S: AsRef<str>>(cells: &[S], term: &str, column: Option<usize>) -> bool {
    let needle = term.to_lowercase();
    let contains = |cell: &S| cell.as_ref().to_lowercase().contains(&needle);
    match column {
        None => cells.iter().any(contains),
        Some(index) => cells.get(index).is_some_and(contains),
    }
}

/// Map a page-script column index to a column filter.
///
/// Page scripts pass `-1` (or any negative index) for "all columns".
pub fn column_from_index(index: Option<i32>) -> Option<usize> {
    index.and_then(|i| usize::try_from(i).ok())
}

/// Hide the `<tbody>` rows of `table_id` that do not match `term`.
pub fn filter_table(table_id: &str, term: &str, column: Option<usize>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(table) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(table_id))
        else {
            return;
        };
        let Ok(Some(tbody)) = table.query_selector("tbody") else {
            return;
        };
        let Ok(rows) = tbody.query_selector_all("tr") else {
            return;
        };
        for i in 0..rows.length() {
            let Some(row) = rows.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
                continue;
            };
            let cells: Vec<String> = match row.query_selector_all("td") {
                Ok(list) => (0..list.length())
                    .filter_map(|j| list.get(j))
                    .map(|cell| cell.text_content().unwrap_or_default())
                    .collect(),
                Err(_) => Vec::new(),
            };
            let display = if row_matches(&cells, term, column) { "" } else { "none" };
            let _ = row.style().set_property("display", display);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table_id, term, column);
    }
}
