pub mod cli;
pub mod commands;
pub mod mmviz;
pub mod motifs;
pub mod reads;
pub mod utils;
