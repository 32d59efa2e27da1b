mod cards;
mod component;
mod menu;
mod modal;
mod render;
mod state;

pub use component::GraphEditor;
pub use state::GraphStore;
