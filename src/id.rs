/// Monotonic sim id source. Players, units and kill events all draw from the
/// same sequence, so an id in the audit trail names exactly one thing.
///
/// Ids start at 1; 0 is reserved for "no id" in bookkeeping paths.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_issues_the_reserved_zero() {
        let mut id_gen = IdGenerator::default();
        let ids: Vec<u64> = (0..3).map(|_| id_gen.next_id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
