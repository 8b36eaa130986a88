pub mod api_utils;
pub mod chart_js;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod local_storage;
pub mod page_frame;
pub mod page_standard;
