mod command_group_view;
mod command_view;
mod example_view;

pub use command_group_view::{
    CommandGroupState, CommandGroupStyle, CommandGroupView, ToggleAction, ToggleState,
};
pub use command_view::{CommandView, CommandViewStyle};
pub use example_view::{ExampleView, ExampleViewStyle};
