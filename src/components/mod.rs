pub mod petri_net;
pub mod upload;
