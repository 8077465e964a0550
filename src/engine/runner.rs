// src/engine/runner.rs
//! Drives a full scoring session: header, then commands until end of input.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::config::RunConfig;
use crate::engine::command::Command;
use crate::error::{GraphRankError, Result};
use crate::graph::{AdjacencyBuffer, ShortestPathScorer};
use crate::rank::{Admission, GraphIndex, RankedTopK};

/// Counters accumulated over one session, for the verbose summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Graphs submitted and scored.
    pub scored: u64,
    /// Offers admitted into the ranking (with or without eviction).
    pub admitted: u64,
    /// Offers that could not improve the ranking.
    pub rejected: u64,
    /// Admissions that displaced a previous worst entry.
    pub evicted: u64,
}

/// The ingestion loop. Owns every piece of mutable session state: the
/// reusable adjacency buffer, the scorer's scratch arrays, the ranking,
/// and the monotone graph index counter.
///
/// Strictly single-threaded; one command is fully processed before the
/// next line is read.
#[derive(Debug)]
pub struct Engine {
    config: RunConfig,
    matrix: AdjacencyBuffer,
    scorer: ShortestPathScorer,
    ranking: RankedTopK,
    next_index: GraphIndex,
    stats: SessionStats,
    line: String,
    row: Vec<u32>,
}

impl Engine {
    /// Builds an engine for a validated configuration. All per-graph
    /// buffers are allocated here, once.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            matrix: AdjacencyBuffer::new(config.vertices),
            scorer: ShortestPathScorer::new(config.vertices),
            ranking: RankedTopK::new(config.capacity),
            next_index: 0,
            stats: SessionStats::default(),
            line: String::new(),
            row: Vec::with_capacity(config.vertices),
        }
    }

    /// Reads and parses the `"<vertices> <capacity>"` header line, then
    /// builds the engine.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or a malformed header; nothing can proceed
    /// without one.
    pub fn from_reader(input: &mut impl BufRead) -> Result<Self> {
        let mut header = String::new();
        input.read_line(&mut header)?;
        let config = RunConfig::parse(header.trim_end())?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> RunConfig {
        self.config
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Processes command lines until end of input.
    ///
    /// Ranking allocation failures are reported to stderr and the session
    /// continues; by contract they abandon a single admission, nothing
    /// more.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and on matrix rows the parser cannot read
    /// (malformed submissions are outside the protocol contract, but the
    /// plumbing surfaces them as errors rather than guessing).
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        loop {
            self.line.clear();
            if input.read_line(&mut self.line)? == 0 {
                return Ok(());
            }
            match Command::parse(self.line.trim_end_matches(&['\r', '\n'][..])) {
                Command::AddGraph => self.add_graph(input)?,
                Command::TopK => self.ranking.render(output)?,
                Command::Invalid => writeln!(output, "Comando non valido")?,
            }
        }
    }

    /// Reads one adjacency matrix, scores it, and offers the result to the
    /// ranking. The graph index advances whether or not the offer is
    /// admitted, and even if the admission is abandoned.
    fn add_graph(&mut self, input: &mut impl BufRead) -> Result<()> {
        let dim = self.config.vertices;
        for row in 0..dim {
            self.line.clear();
            if input.read_line(&mut self.line)? == 0 {
                return Err(GraphRankError::TruncatedMatrix(dim));
            }
            parse_row(&self.line, &mut self.row, dim, row)?;
            self.matrix.fill_row(row, &self.row);
        }

        let index = self.next_index;
        self.next_index += 1;

        let score = self.scorer.score(&self.matrix);
        self.stats.scored += 1;

        match self.ranking.offer(index, score) {
            Ok(Admission::Admitted) => self.stats.admitted += 1,
            Ok(Admission::AdmittedWithEviction) => {
                self.stats.admitted += 1;
                self.stats.evicted += 1;
            }
            Ok(Admission::Rejected) => self.stats.rejected += 1,
            Err(e) => {
                eprintln!("{} graph {index} not ranked: {e}", "warning:".yellow().bold());
            }
        }
        Ok(())
    }
}

/// Parses one comma-separated matrix row into the reused row buffer.
fn parse_row(line: &str, out: &mut Vec<u32>, expected: usize, row: usize) -> Result<()> {
    out.clear();
    for field in line.trim_end().split(',') {
        let weight = field
            .parse()
            .map_err(|e| GraphRankError::Malformed {
                row,
                detail: format!("{field:?}: {e}"),
            })?;
        out.push(weight);
    }
    if out.len() != expected {
        return Err(GraphRankError::Malformed {
            row,
            detail: format!("expected {expected} weights, got {}", out.len()),
        });
    }
    Ok(())
}

/// Runs a complete session from any buffered reader to any writer.
///
/// # Errors
///
/// Propagates header, I/O, and row-parse failures from the engine.
pub fn run_session(input: &mut impl BufRead, output: &mut impl Write) -> Result<SessionStats> {
    let mut engine = Engine::from_reader(input)?;
    engine.run(input, output)?;
    Ok(engine.stats())
}
