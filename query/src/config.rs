use crate::error::QueryError;
use crate::error::Result;

/// Tuning knobs for the query resolver.
#[derive(Clone, Debug)]
pub struct QueryConfig {
    /// Page size used for references when the caller does not ask for one.
    pub default_page_size: i32,
    /// Upper bound on a caller-requested page size.
    pub max_page_size: i32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 100,
            max_page_size: 1000,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size < 1 {
            return Err(QueryError::InvalidConfig(format!(
                "default_page_size must be positive, got {}",
                self.default_page_size
            )));
        }
        if self.max_page_size < self.default_page_size {
            return Err(QueryError::InvalidConfig(format!(
                "max_page_size {} is below default_page_size {}",
                self.max_page_size, self.default_page_size
            )));
        }
        Ok(())
    }

    /// Clamps a requested page size into `1..=max_page_size`, falling back
    /// to the default when the caller did not specify one.
    pub fn page_size(&self, requested: Option<i32>) -> i32 {
        match requested {
            Some(first) => first.clamp(1, self.max_page_size),
            None => self.default_page_size,
        }
    }
}
