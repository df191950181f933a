pub mod controller;
pub mod event;
pub mod http;
pub mod model;
pub mod player;
pub mod render;
pub mod ui;
pub mod util;
