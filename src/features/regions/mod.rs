mod registry;

pub use registry::{resolve_district, DISTRICTS};
