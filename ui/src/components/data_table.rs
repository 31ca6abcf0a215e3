//! A searchable, sortable, paginated table over pre-rendered string cells.
//!
//! The three features are independent. Searching hides rows but does not
//! re-paginate; page bounds are always computed over the full row set.

use std::cmp::Ordering;

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct DataTableOptions {
    pub sortable: bool,
    pub searchable: bool,
    pub pagination: bool,
    pub page_size: usize,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            searchable: true,
            pagination: true,
            page_size: 10,
        }
    }
}

/// Numeric-aware natural ordering: digit runs compare as numbers, everything
/// else compares case-insensitively. `"10"` sorts after `"2"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();
    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) if ac.is_ascii_digit() && bc.is_ascii_digit() => {
                let an = take_digits(&mut ai);
                let bn = take_digits(&mut bi);
                match cmp_digit_runs(&an, &bn) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            (Some(ac), Some(bc)) => {
                let al = ac.to_lowercase().next().unwrap_or(ac);
                let bl = bc.to_lowercase().next().unwrap_or(bc);
                match al.cmp(&bl) {
                    Ordering::Equal => {
                        ai.next();
                        bi.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut out = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        it.next();
    }
    out
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Direction for a header click: ascending unless the previous click was
/// ascending. The direction is tracked per table, not per column.
pub fn next_sort(prev: Option<(usize, bool)>, column: usize) -> (usize, bool) {
    let ascending = match prev {
        None => true,
        Some((_, prev_ascending)) => !prev_ascending,
    };
    (column, ascending)
}

/// Stable order of row indices under the current sort.
pub fn sorted_order(rows: &[Vec<String>], sort: Option<(usize, bool)>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some((column, ascending)) = sort {
        order.sort_by(|&x, &y| {
            let a = rows[x].get(column).map(String::as_str).unwrap_or("");
            let b = rows[y].get(column).map(String::as_str).unwrap_or("");
            let ord = natural_cmp(a.trim(), b.trim());
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
    order
}

/// Case-insensitive substring match over the row's full text.
pub fn row_matches(row: &[String], query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty() || row.join(" ").to_lowercase().contains(&query)
}

pub fn total_pages(rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    rows.div_ceil(page_size).max(1)
}

/// Half-open index range of a 1-based page.
pub fn page_bounds(page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1) * page_size;
    (start, start + page_size)
}

#[derive(Props, PartialEq, Clone)]
pub struct DataTableProps {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[props(default)]
    pub options: DataTableOptions,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut query = use_signal(String::new);
    let mut sort = use_signal(|| None::<(usize, bool)>);
    let mut page = use_signal(|| 1usize);

    let options = props.options.clone();
    let sortable = options.sortable;
    let order = sorted_order(&props.rows, sort());

    let pages = if options.pagination {
        total_pages(props.rows.len(), options.page_size)
    } else {
        1
    };
    let paginated = options.pagination && pages > 1;
    let current = page().clamp(1, pages);
    let (start, end) = page_bounds(current, options.page_size);

    rsx! {
        div {
            class: "data-table",
            if options.searchable {
                input {
                    r#type: "search",
                    class: "table-search",
                    placeholder: "Search...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            table {
                thead {
                    tr {
                        for (index, header) in props.headers.iter().cloned().enumerate() {
                            th {
                                style: if sortable { "cursor: pointer; white-space: nowrap;" } else { "" },
                                onclick: move |_| {
                                    if sortable {
                                        let current = *sort.peek();
                                        sort.set(Some(next_sort(current, index)));
                                    }
                                },
                                "{header}"
                                span {
                                    style: "display: inline-block; width: 1.2em; text-align: right;",
                                    {
                                        match sort() {
                                            Some((col, true)) if col == index => "\u{25B2}",
                                            Some((col, false)) if col == index => "\u{25BC}",
                                            _ => "\u{00A0}",
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (position, row_index) in order.iter().copied().enumerate() {
                        {
                            let row = props.rows[row_index].clone();
                            let matches = !options.searchable || row_matches(&row, &query.read());
                            let on_page = !paginated || (position >= start && position < end);
                            rsx! {
                                tr {
                                    key: "{row_index}",
                                    style: if matches && on_page { "" } else { "display: none;" },
                                    for cell in row {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if paginated {
                div {
                    class: "table-pagination",
                    button {
                        disabled: current == 1,
                        onclick: move |_| {
                            let prev = (*page.peek()).saturating_sub(1).max(1);
                            page.set(prev);
                        },
                        "Previous"
                    }
                    for number in 1..=pages {
                        button {
                            class: if number == current { "active" } else { "" },
                            onclick: move |_| page.set(number),
                            "{number}"
                        }
                    }
                    button {
                        disabled: current == pages,
                        onclick: move |_| {
                            let next = (*page.peek() + 1).min(pages);
                            page.set(next);
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_column(values: &[&str]) -> Vec<Vec<String>> {
        values.iter().map(|v| vec![v.to_string()]).collect()
    }

    #[test]
    fn first_click_sorts_numerically_ascending() {
        let rows = single_column(&["10", "2", "1"]);
        let sort = next_sort(None, 0);
        assert_eq!(sort, (0, true));

        let order = sorted_order(&rows, Some(sort));
        let values: Vec<&str> = order.iter().map(|&i| rows[i][0].as_str()).collect();
        assert_eq!(values, ["1", "2", "10"]);
    }

    #[test]
    fn second_click_reverses() {
        let rows = single_column(&["10", "2", "1"]);
        let first = next_sort(None, 0);
        let second = next_sort(Some(first), 0);
        assert_eq!(second, (0, false));

        let order = sorted_order(&rows, Some(second));
        let values: Vec<&str> = order.iter().map(|&i| rows[i][0].as_str()).collect();
        assert_eq!(values, ["10", "2", "1"]);
    }

    #[test]
    fn direction_is_tracked_per_table_not_per_column() {
        // ascending on column 0, then the first click on column 1 descends
        let after_col0 = next_sort(None, 0);
        assert_eq!(next_sort(Some(after_col0), 1), (1, false));
    }

    #[test]
    fn natural_cmp_is_not_lexicographic() {
        assert_eq!(natural_cmp("10", "2"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let row = vec!["Roll-up Banner".to_string(), "Alex Graphics".to_string()];
        assert!(row_matches(&row, "banner"));
        assert!(row_matches(&row, "ALEX"));
        assert!(row_matches(&row, ""));
        assert!(!row_matches(&row, "flyer"));
    }

    #[test]
    fn paging_math() {
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(page_bounds(1, 10), (0, 10));
        assert_eq!(page_bounds(2, 10), (10, 20));
    }
}
