pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod input;
pub mod model;
pub mod observable;
pub mod screen;
pub mod ticker;
pub mod ui;
pub mod ui_handlers;
