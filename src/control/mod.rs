pub mod command;
pub mod parameters;
pub mod session;
