pub mod observer;
pub mod state;
pub mod strategy;
