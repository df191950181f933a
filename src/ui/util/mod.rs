pub mod handler;

pub use handler::EventHandler;
