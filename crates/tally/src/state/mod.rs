mod app_state;
mod modal;
pub mod modal_action;
mod tabs;

pub use app_state::*;
pub use modal::*;
pub use modal_action::ModalAction;
pub use tabs::*;
