pub use crate::error::{CsResult, Error};
pub use crate::types::{Attributes, ConfigDef, ConfigId, Override, OverrideKey, ResolvedValue};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
