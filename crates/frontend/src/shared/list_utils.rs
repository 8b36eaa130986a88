/// Утилиты заголовков списков: индикатор и CSS-класс серверной сортировки

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("date", "date", true), " ▲");
        assert_eq!(get_sort_indicator("date", "date", false), " ▼");
        assert_eq!(get_sort_indicator("id", "date", false), " ⇅");
        assert_eq!(get_sort_class("id", "date"), "table__sort-indicator");
    }
}
