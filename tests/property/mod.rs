mod event_store_properties;
mod view_window_properties;
