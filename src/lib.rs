pub mod core;
pub mod gemini;
pub mod gui;
pub mod persistence;
