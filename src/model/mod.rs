pub mod analysis;
pub mod diagram;
pub mod graph;
pub mod kind;
