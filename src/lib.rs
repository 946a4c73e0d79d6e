pub mod browser;
pub mod config;
pub mod output;
pub mod property;
pub mod scoring;
pub mod storage;
