pub mod config;
pub mod logging;

pub mod assets;
pub mod fetch;
pub mod mirror;
pub mod storage;
pub mod url_map;
