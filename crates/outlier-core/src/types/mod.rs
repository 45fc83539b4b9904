//! Plain enums shared by config, the detector, and the front end.

pub mod method_kind;
pub mod policy;

pub use method_kind::MethodKind;
pub use policy::{MadScale, MissingPolicy, OutputFormat};
