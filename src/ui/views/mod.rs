pub mod audit;
pub mod explain;
