pub mod ci;
pub mod context;
pub mod diff;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod views;
