mod command_result;
pub mod generate;
pub mod helper;
pub mod init;
pub mod sync;

pub use command_result::*;
