pub mod client;
pub mod normalize;
pub mod webhook;
