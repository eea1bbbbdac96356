use rand::Rng;
use std::collections::HashSet;

/// Issues booking references: a fixed prefix and six digits.
#[derive(Debug, Clone)]
pub struct ReferenceGenerator {
    prefix: String,
    max_attempts: u32,
}

impl ReferenceGenerator {
    pub fn new(prefix: impl Into<String>, max_attempts: u32) -> Self {
        Self { prefix: prefix.into(), max_attempts: max_attempts.max(1) }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn format(&self, number: u32) -> String {
        format!("{}{}", self.prefix, number)
    }

    /// A reference not present in `existing`, drawing random numbers in
    /// 100000..=999999.
    pub fn unique(&self, existing: &HashSet<&str>) -> Option<String> {
        let mut rng = rand::thread_rng();
        self.unique_with(existing, || rng.gen_range(100_000..=999_999))
    }

    /// Same as [`unique`](Self::unique) with the number source supplied.
    pub fn unique_with(
        &self,
        existing: &HashSet<&str>,
        mut draw: impl FnMut() -> u32,
    ) -> Option<String> {
        (0..self.max_attempts)
            .map(|_| self.format(draw()))
            .find(|candidate| !existing.contains(candidate.as_str()))
    }
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new("KLN", 10)
    }
}
