pub mod config;
pub mod controller;
pub mod deck;
pub mod entrance;
pub mod error;
pub mod events;
pub mod indicator;
pub mod input;
pub mod render;
pub mod transition;
pub mod tasks {
    pub mod autoplay;
    pub mod console;
    pub mod presenter;
}
