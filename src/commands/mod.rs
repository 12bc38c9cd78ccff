pub mod oneline;
pub mod plot;
