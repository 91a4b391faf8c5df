pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;
