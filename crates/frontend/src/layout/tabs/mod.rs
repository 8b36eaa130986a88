//! Tab management module
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View (единственный источник правды)
//! - `tab_labels` - заголовки табов и построение ключей
//! - `tab_bar` - полоса открытых табов над контентом

pub mod page;
pub mod registry;
pub mod tab_bar;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_bar::TabBar;
pub use tab_labels::{
    detail_tab_key, detail_tab_label, reading_id_from_key, tab_label_for_key, HOME_TAB_KEY,
};
