//! Dining table pool
//!
//! Tables are numbered `1..=count` and carry no further metadata; a table
//! is "taken" for a given seating time exactly when a committed reservation
//! at that time already holds its number.

/// 默认餐桌数量 / Default number of tables in the dining room
pub const DEFAULT_TABLE_COUNT: u32 = 30;

/// Fixed pool of numbered dining tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePool {
    count: u32,
}

impl TablePool {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Number of tables in the pool
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Pick a random table not present in `taken`
    ///
    /// Returns `None` when every table number is taken, which callers
    /// surface as a fully booked seating time.
    pub fn assign(&self, taken: &[u32]) -> Option<u32> {
        use rand::Rng;

        let free: Vec<u32> = (1..=self.count)
            .filter(|table| !taken.contains(table))
            .collect();

        if free.is_empty() {
            return None;
        }

        let index = rand::thread_rng().gen_range(0..free.len());
        Some(free[index])
    }
}

impl Default for TablePool {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_size() {
        assert_eq!(TablePool::default().count(), 30);
    }

    #[test]
    fn test_assign_stays_in_range() {
        let pool = TablePool::default();
        for _ in 0..100 {
            let table = pool.assign(&[]).unwrap();
            assert!((1..=30).contains(&table));
        }
    }

    #[test]
    fn test_assign_skips_taken_tables() {
        let pool = TablePool::new(5);
        for _ in 0..50 {
            assert_eq!(pool.assign(&[1, 2, 4, 5]), Some(3));
        }
    }

    #[test]
    fn test_assign_exhausted_pool() {
        let pool = TablePool::new(3);
        assert_eq!(pool.assign(&[1, 2, 3]), None);
    }

    #[test]
    fn test_assign_empty_pool() {
        let pool = TablePool::new(0);
        assert_eq!(pool.assign(&[]), None);
    }

    #[test]
    fn test_assign_spreads_across_free_tables() {
        let pool = TablePool::default();
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(pool.assign(&[]).unwrap());
        }
        // 200 draws from 30 tables will land on more than one table
        assert!(seen.len() > 1);
    }
}
