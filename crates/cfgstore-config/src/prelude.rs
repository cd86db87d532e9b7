pub use cfgstore_core::prelude::*;

// vim: ts=4
