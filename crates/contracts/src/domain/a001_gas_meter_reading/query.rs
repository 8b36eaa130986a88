//! Параметры запроса списка в стиле json-server: `_sort`, `_order`,
//! `_start`, `_end`

use super::chart::CHART_FETCH_LIMIT;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SORT_FIELD: &str = "id";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

/// Срез коллекции: сортировка и полуинтервал `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: String,
    pub order: SortOrder,
    /// `None`: параметр `_start` не передаётся (сервер берёт 0)
    pub start: Option<usize>,
    pub end: usize,
}

impl ListQuery {
    /// Страница грида (`page` с нуля)
    pub fn page(sort: &str, order: SortOrder, page: usize, page_size: usize) -> Self {
        let start = page * page_size;
        Self {
            sort: sort.to_string(),
            order,
            start: Some(start),
            end: start + page_size,
        }
    }

    /// Последние показания для графика, новые первыми
    pub fn chart() -> Self {
        Self {
            sort: "date".to_string(),
            order: SortOrder::Desc,
            start: None,
            end: CHART_FETCH_LIMIT,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut qs = format!("_sort={}&_order={}", self.sort, self.order.as_str());
        if let Some(start) = self.start {
            qs.push_str(&format!("&_start={}", start));
        }
        qs.push_str(&format!("&_end={}", self.end));
        qs
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(DEFAULT_SORT_FIELD, SortOrder::Asc, 0, DEFAULT_PAGE_SIZE)
    }
}

/// Количество страниц; для пустого списка ноль страниц
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_query() {
        assert_eq!(
            ListQuery::chart().to_query_string(),
            "_sort=date&_order=DESC&_end=800"
        );
    }

    #[test]
    fn test_page_query() {
        assert_eq!(
            ListQuery::page("measurement", SortOrder::Desc, 2, 25).to_query_string(),
            "_sort=measurement&_order=DESC&_start=50&_end=75"
        );
        assert_eq!(
            ListQuery::default().to_query_string(),
            "_sort=id&_order=ASC&_start=0&_end=10"
        );
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert!(!SortOrder::Desc.is_ascending());
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"DESC\"");
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
