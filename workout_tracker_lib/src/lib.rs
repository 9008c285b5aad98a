pub mod config;
pub mod coords;
pub mod form_state;
pub mod id;
pub mod render;
pub mod storage;
pub mod store;
pub mod validation;
pub mod workout;
