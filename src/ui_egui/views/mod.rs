pub mod board_view;
pub mod event_rendering;
