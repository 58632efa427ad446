/// Takes two `i64`s and returns their sum as an `i64`.
pub fn plus(a: i64, b: i64) -> i64 {
    a + b
}

/// Takes three `i64`s and returns their sum as an `i64`.
///
/// Consecutive parameters each carry their own type in Rust,
/// even when they all share it.
pub fn plus_plus(a: i64, b: i64, c: i64) -> i64 {
    a + b + c
}
