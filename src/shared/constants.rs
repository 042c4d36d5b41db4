/// Storage key holding the serialized report collection snapshot
pub const REPORTS_STORAGE_KEY: &str = "reports";

/// Storage key holding the serialized citizen profile
pub const PROFILE_STORAGE_KEY: &str = "profile";

/// Number of trailing id characters shown to citizens as the short report id
pub const SHORT_ID_LEN: usize = 6;
