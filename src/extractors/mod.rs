mod json;

pub use json::Json;
