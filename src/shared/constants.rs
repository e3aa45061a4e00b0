/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum accepted size of an embedded photo payload, in bytes (decoded)
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;
