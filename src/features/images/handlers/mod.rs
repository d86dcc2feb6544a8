pub mod image_handler;

pub use image_handler::list_images;
