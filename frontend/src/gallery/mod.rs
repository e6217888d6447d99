pub mod api;
pub mod category;
pub mod components;
pub mod state;
