use contracts::domain::a001_gas_meter_reading::query::{
    total_pages, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD,
};
use contracts::domain::a001_gas_meter_reading::{GasMeterReading, ListQuery, SortOrder};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ReadingListState {
    pub items: Vec<GasMeterReading>,
    pub sort_field: String,
    pub sort_order: SortOrder,
    pub is_loaded: bool,
    // Pagination fields
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ReadingListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Asc,
            is_loaded: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl ReadingListState {
    pub fn query(&self) -> ListQuery {
        ListQuery::page(&self.sort_field, self.sort_order, self.page, self.page_size)
    }

    /// Клик по заголовку: то же поле меняет направление, новое поле сортируется по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_order = SortOrder::Asc;
        }
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn apply_page(&mut self, items: Vec<GasMeterReading>, total: usize) {
        self.items = items;
        self.total_count = total;
        self.total_pages = total_pages(total, self.page_size);
        self.is_loaded = true;
    }

    /// Учитывает удалённую запись; опустевшая последняя страница сменяется предыдущей
    pub fn remove_one(&mut self) {
        self.total_count = self.total_count.saturating_sub(1);
        self.total_pages = total_pages(self.total_count, self.page_size);
        if self.total_pages > 0 && self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<ReadingListState> {
    RwSignal::new(ReadingListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let state = ReadingListState::default();
        assert_eq!(
            state.query().to_query_string(),
            "_sort=id&_order=ASC&_start=0&_end=10"
        );
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ReadingListState {
            page: 3,
            ..Default::default()
        };
        state.toggle_sort("id");
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert_eq!(state.page, 0);

        state.toggle_sort("date");
        assert_eq!(state.sort_field, "date");
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_remove_last_row_on_page() {
        let mut state = ReadingListState::default();
        state.page = 1;
        state.apply_page(Vec::new(), 11);
        assert_eq!(state.total_pages, 2);

        state.remove_one();
        assert_eq!(state.total_count, 10);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);

        state.remove_one();
        assert_eq!(state.page, 0);
    }
}
