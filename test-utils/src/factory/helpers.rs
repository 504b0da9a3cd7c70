//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique plate in the `AAA-9999` format from a counter value.
///
/// The letter prefix rolls through `AAA..ZZZ` every 10 000 values so plates stay
/// unique for the first 175 760 000 ids.
///
/// # Arguments
/// - `id` - Counter value from `next_id()`
///
/// # Returns
/// - `String` - Plate such as `AAB-0042`
pub fn plate_for(id: u64) -> String {
    let prefix = id / 10_000;
    let letter = |n: u64| char::from(b'A' + (n % 26) as u8);

    format!(
        "{}{}{}-{:04}",
        letter(prefix / 676),
        letter(prefix / 26),
        letter(prefix),
        id % 10_000
    )
}
