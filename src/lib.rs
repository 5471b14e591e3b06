pub mod calculator;
pub mod config;
pub mod frame;
pub mod input;
pub mod ui;

pub use calculator::{Calculator, Input, Operator};
pub use frame::Frame;
