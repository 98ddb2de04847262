/// Longest accepted word, in bytes.
pub const MAX_WORD_LEN: usize = 128;

/// Bucket count of a freshly created table.
pub const INITIAL_TABLE_LEN: usize = 16;

/// Load factor beyond which the table doubles.
pub const MAX_LOAD_FACTOR: f32 = 0.75;
