use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-unique counter value for generating distinct test data.
///
/// Each call returns a monotonically increasing value, letting factories produce
/// unique key tokens and names without coordination between tests.
///
/// # Returns
/// - `u64` - The next unique counter value
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
