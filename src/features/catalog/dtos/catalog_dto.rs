use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::catalog::models::{
    BeachDepth, BeachTexture, BeachType, Characteristic, City, Country,
};

/// Query parameters for listing cities
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CityQuery {
    /// Country to list cities for
    pub country_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: i64,
    pub name: String,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_id: city.country_id,
            latitude: city.latitude.and_then(|d| d.to_f64()),
            longitude: city.longitude.and_then(|d| d.to_f64()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicDto {
    pub id: i64,
    pub name: String,
    pub icon_url: Option<String>,
}

impl From<Characteristic> for CharacteristicDto {
    fn from(c: Characteristic) -> Self {
        Self {
            id: c.id,
            name: c.name,
            icon_url: c.icon_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachTypeDto {
    pub id: i64,
    pub name: String,
}

impl From<BeachType> for BeachTypeDto {
    fn from(t: BeachType) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachDepthDto {
    pub id: i64,
    pub description: String,
}

impl From<BeachDepth> for BeachDepthDto {
    fn from(d: BeachDepth) -> Self {
        Self {
            id: d.id,
            description: d.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachTextureDto {
    pub id: i64,
    pub name: String,
    pub img_url: Option<String>,
}

impl From<BeachTexture> for BeachTextureDto {
    fn from(t: BeachTexture) -> Self {
        Self {
            id: t.id,
            name: t.name,
            img_url: t.img_url,
        }
    }
}

/// Everything the add-beach form needs in one response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachFormOptionsDto {
    pub beach_types: Vec<BeachTypeDto>,
    pub beach_depths: Vec<BeachDepthDto>,
    pub beach_textures: Vec<BeachTextureDto>,
    pub characteristics: Vec<CharacteristicDto>,
}
