pub mod check;
pub mod command_result;
pub mod helper;

pub use command_result::{CommandResult, CommandSummary, InitSummary};
