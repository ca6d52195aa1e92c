//! Input and output specifications for the selection engine.

mod spec;

pub use spec::{InputSpec, OutputSpec};
