pub mod cells;
pub mod explainer;
pub mod pico;
