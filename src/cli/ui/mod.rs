pub mod charts;
pub mod output;

pub use output::Output;
