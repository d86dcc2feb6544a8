mod beach;

pub(crate) use beach::BEACH_DISPLAY_SELECT;
pub use beach::{Beach, BeachDisplayRow, FilteredBeachRow, LinkedCharacteristicRow};
