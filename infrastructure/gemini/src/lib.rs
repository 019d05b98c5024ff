pub mod client;
pub mod code_reviewer;
