//! Domain entity definitions.

mod command;
mod command_group;
mod example;

pub use command::Command;
pub use command_group::CommandGroup;
pub use example::Example;
