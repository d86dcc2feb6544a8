mod reference;

pub use reference::{BeachDepth, BeachTexture, BeachType, Characteristic, City, Country};
