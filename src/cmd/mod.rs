pub mod params;
pub mod score;
