pub use crate::app::App;
pub use cfgstore_types::prelude::*;

// vim: ts=4
