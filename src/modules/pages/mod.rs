pub mod controllers;
pub mod templates;

pub use controllers::configure;
