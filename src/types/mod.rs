mod config;
mod facelets;
mod moves;

pub use config::Config;
pub use facelets::{FaceletString, InvalidFormat};
pub use moves::{AnnotatedMove, Move, Solution};
