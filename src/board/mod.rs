//! Drag-reassignment and date-navigation engine.
//!
//! Nothing in here depends on a GUI toolkit; `ui_egui` feeds it input and
//! renders what it exposes.

pub mod clock;
pub mod controller;
pub mod drag;
pub mod drop_target;
pub mod gesture;
pub mod view_window;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use controller::{BoardController, Phase};
pub use drag::{DragPayload, DragPoint, DragSource, InputCapabilities};
pub use drop_target::{DropOutcome, DropTarget};
pub use gesture::NavSignal;
pub use view_window::{Density, ViewWindow};
