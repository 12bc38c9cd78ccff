pub mod layout;
pub mod legend;
pub mod params;
pub mod plot;
