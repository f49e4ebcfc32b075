pub mod params;
pub mod traits;
