mod component;
mod dot;
mod render;
mod state;
mod types;

pub use component::PetriNetView;
pub use types::PetriNet;
