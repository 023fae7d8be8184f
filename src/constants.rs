use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Resume uploads are rejected above this size before any storage call.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
