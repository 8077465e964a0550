// src/config.rs
//! Session parameters parsed from the protocol header line.

use crate::error::{GraphRankError, Result};

/// Fixed parameters for one scoring session.
///
/// Supplied once at startup as a `"<vertices> <capacity>"` line; every graph
/// in the stream shares the same dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Vertices per graph (`d`). Vertex 0 is the scoring source.
    pub vertices: usize,
    /// Ranking capacity (`k`). Zero means every offer is rejected.
    pub capacity: usize,
}

impl RunConfig {
    /// Parses the header line.
    ///
    /// # Errors
    ///
    /// Returns `GraphRankError::Header` when the line is not two integers
    /// separated by whitespace, and `GraphRankError::EmptyGraph` when the
    /// vertex count is zero.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let vertices = next_field(&mut fields, line)?;
        let capacity = next_field(&mut fields, line)?;
        if fields.next().is_some() {
            return Err(GraphRankError::Header(line.to_string()));
        }

        let config = Self { vertices, capacity };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.vertices == 0 {
            return Err(GraphRankError::EmptyGraph);
        }
        Ok(())
    }
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>, line: &str) -> Result<usize> {
    fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| GraphRankError::Header(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let config = RunConfig::parse("3 2").unwrap();
        assert_eq!(config.vertices, 3);
        assert_eq!(config.capacity, 2);
    }

    #[test]
    fn test_zero_capacity_is_valid() {
        let config = RunConfig::parse("4 0").unwrap();
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(RunConfig::parse("").is_err());
        assert!(RunConfig::parse("3").is_err());
        assert!(RunConfig::parse("3 x").is_err());
        assert!(RunConfig::parse("3 2 1").is_err());
    }

    #[test]
    fn test_rejects_zero_vertices() {
        assert!(RunConfig::parse("0 5").is_err());
    }
}
