pub mod mr231_3;
pub mod validate;

pub use mr231_3::Mr2313Converter;
pub use validate::{format_real, DISTANCE_SCALES};
