pub mod catalog_handler;

pub use catalog_handler::{beach_form_options, list_characteristics, list_cities, list_countries};
