//! Searchable, keyboard-navigable list state shared by sidebar pickers.

/// Shared state for a filtered list with a highlighted row.
pub struct ListState<T: Clone> {
    /// All items in the list.
    pub items: Vec<T>,
    /// Indices into `items` that match the current query, in original order.
    pub filtered: Vec<usize>,
    /// Highlighted index (into `filtered`).
    pub selected_index: usize,
    pub search_query: String,
}

impl<T: Clone> ListState<T> {
    pub fn new(items: Vec<T>) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filtered,
            selected_index: 0,
            search_query: String::new(),
        }
    }

    /// Get the currently selected item, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.filtered.get(self.selected_index).map(|&i| &self.items[i])
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &T> {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    /// Move selection up. Stops at the first row.
    pub fn select_prev(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    /// Move selection down. Stops at the last row.
    pub fn select_next(&mut self) -> bool {
        if self.selected_index < self.filtered.len().saturating_sub(1) {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
    }

    pub fn pop_search_char(&mut self) -> bool {
        self.search_query.pop().is_some()
    }

    /// Update the filtered list and reset selection to first item.
    pub fn set_filtered(&mut self, filtered: Vec<usize>) {
        self.filtered = filtered;
        self.selected_index = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Actions that can result from key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Close,
    SelectPrev,
    SelectNext,
    Confirm,
    /// Search query changed (character added or removed).
    QueryChanged,
    None,
}

/// Map a key name (`"up"`, `"enter"`, `"a"`, ...) to a list action, updating `state`.
pub fn handle_list_key<T: Clone>(state: &mut ListState<T>, key: &str) -> ListAction {
    match key {
        "escape" => ListAction::Close,
        "up" => {
            if state.select_prev() {
                ListAction::SelectPrev
            } else {
                ListAction::None
            }
        }
        "down" => {
            if state.select_next() {
                ListAction::SelectNext
            } else {
                ListAction::None
            }
        }
        "enter" => ListAction::Confirm,
        "backspace" => {
            if state.pop_search_char() {
                ListAction::QueryChanged
            } else {
                ListAction::None
            }
        }
        "space" => {
            state.push_search_char(' ');
            ListAction::QueryChanged
        }
        key => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if !ch.is_control() => {
                    state.push_search_char(ch);
                    ListAction::QueryChanged
                }
                _ => ListAction::None,
            }
        }
    }
}

/// Case-insensitive substring filter. Returns matching indices in original order.
pub fn substring_filter<T, F>(items: &[T], query: &str, get_field: F) -> Vec<usize>
where
    F: Fn(&T) -> &str,
{
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| get_field(item).to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}
