pub mod intent;
pub mod patterns;

pub use intent::*;
pub use patterns::*;
