pub mod app;
pub mod checklist;
pub mod config;
pub mod storage;
pub mod ui;
pub mod utils;
