pub mod add;
pub mod cats;
pub mod chart;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod insight;
pub mod list;
pub mod rm;
pub mod root;
pub mod stats;
