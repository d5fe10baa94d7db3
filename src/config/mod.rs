//! Run configuration shared by the clustering commands

use crate::error::{Error, Result};

pub const DEFAULT_HASH_LOAD: f64 = 0.5;
pub const DEFAULT_MAX_TABLE_SIZE: usize = 1000;

/// How a genome's gene links become graph edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// A significant link `i -> genome[i]` joins both sequences.
    #[default]
    Undirected,
    /// Links are followed only from `i` to `genome[i]`.
    Forward,
}

impl std::str::FromStr for EdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undirected" | "both" => Ok(EdgePolicy::Undirected),
            "forward" | "directed" => Ok(EdgePolicy::Forward),
            _ => Err(format!(
                "Unknown edge policy: {}. Use 'undirected' or 'forward'",
                s
            )),
        }
    }
}

/// Sizing of the similarity cache rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheConfig {
    /// Target fill ratio of each row map.
    pub load: f64,
    /// Upper bound on the pre-allocated entries per row.
    pub max_table_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            load: DEFAULT_HASH_LOAD,
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.load > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "hash load must be positive, got {}",
                self.load
            )));
        }
        Ok(())
    }
}
