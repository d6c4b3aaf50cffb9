pub mod value;
pub mod merge;
pub mod compare;

pub use value::{Map, Value};
pub use merge::{merge, merged};
pub use compare::deep_equal;
