pub mod init;
pub mod quote;
pub mod root;
pub mod settings;
