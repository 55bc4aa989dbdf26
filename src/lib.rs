pub mod args;
pub mod model;
pub mod season_file;
pub mod utils;
