/// Source of uniform random numbers shared by every handler
pub trait RandomSource: Send + Sync {
    /// Uniform draw from `[low, high]`. Callers guarantee `low <= high`.
    fn range_inclusive(&self, low: u64, high: u64) -> u64;
}

/// Uniform pick from a fixed pool. `None` only for an empty pool.
pub fn choose<'a, T>(rng: &dyn RandomSource, pool: &'a [T]) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    let i = rng.range_inclusive(0, pool.len() as u64 - 1) as usize;
    pool.get(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Last;

    impl RandomSource for Last {
        fn range_inclusive(&self, _low: u64, high: u64) -> u64 {
            high
        }
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(&Last, &["a", "b", "c"]), Some(&"c"));
        assert_eq!(choose::<&str>(&Last, &[]), None);
    }
}
