pub mod args;
pub mod batch;
pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod model;
pub mod parse;
pub mod report;
pub mod table;
