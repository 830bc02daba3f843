pub mod entry;
pub mod event_loop;
pub mod state;
