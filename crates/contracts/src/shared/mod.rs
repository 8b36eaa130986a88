pub mod date_format;
pub mod lenient;
pub mod number_format;
