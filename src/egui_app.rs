//! egui front end: form state, the controller driving it, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
