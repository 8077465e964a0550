// src/engine/command.rs
//! Textual command recognition.

/// One command line from the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `AggiungiGrafo`: a `d x d` adjacency matrix follows, one row per line.
    AddGraph,
    /// `TopK`: render the current ranking.
    TopK,
    /// Anything else. Reported and skipped; the core is never invoked.
    Invalid,
}

impl Command {
    /// Recognizes a trimmed command line. Matching is exact; the protocol
    /// is case-sensitive.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line {
            "AggiungiGrafo" => Self::AddGraph,
            "TopK" => Self::TopK,
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_protocol_commands() {
        assert_eq!(Command::parse("AggiungiGrafo"), Command::AddGraph);
        assert_eq!(Command::parse("TopK"), Command::TopK);
    }

    #[test]
    fn test_everything_else_is_invalid() {
        assert_eq!(Command::parse("topk"), Command::Invalid);
        assert_eq!(Command::parse("AggiungiGrafo "), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
    }
}
