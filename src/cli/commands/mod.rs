pub mod clock;
pub mod config;
pub mod csv;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod memo;
pub mod show;
