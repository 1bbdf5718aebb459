pub mod cli;
pub mod di;
