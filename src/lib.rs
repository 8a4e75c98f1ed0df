pub mod agents;
pub mod api;
pub mod components;
pub mod objects;
pub mod pages;
pub mod utils;
pub mod view_models;
