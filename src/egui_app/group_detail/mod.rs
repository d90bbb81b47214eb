//! Group detail page: state machine, controller and user-facing messages.

pub mod controller;
pub mod messages;
pub mod state;


pub use controller::{ControllerError, ControllerSettings, GroupDetailController};
pub use state::{CoordinatesState, GroupDetailState, GroupStatus, Phase, PostsState};
