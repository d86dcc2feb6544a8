mod beach_dto;

pub use beach_dto::{
    BeachDetailDto, BeachDto, BeachFieldsDto, BeachForm, BeachSearchQuery, FilteredBeachDto,
    FilteredBeachesResponse, LinkedCharacteristicDto, PendingBeachDto,
};
