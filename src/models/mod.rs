pub mod candidate;
pub mod view_state;
