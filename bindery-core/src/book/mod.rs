pub mod emit;
pub mod model;
pub mod plan;
pub mod text;
