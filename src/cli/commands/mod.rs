pub mod config;
pub mod csv;
pub mod health;
pub mod results;
pub mod text;
pub mod view;

pub use results::ResultsOptions;
