mod catalog_dto;

pub use catalog_dto::{
    BeachDepthDto, BeachFormOptionsDto, BeachTextureDto, BeachTypeDto, CharacteristicDto, CityDto,
    CityQuery, CountryDto,
};
