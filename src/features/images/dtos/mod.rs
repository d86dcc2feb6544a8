mod image_dto;

pub use image_dto::ImageDto;
