mod city;
mod measure;

pub use city::{find_city, City, CITIES};
pub use measure::{score_column, AccessMeasure, TravelMode};
