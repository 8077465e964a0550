// src/rank.rs
//! Bounded ranking of the lowest-scoring graphs seen so far.
//!
//! An ordered list of `(graph index, score)` pairs, strictly descending by
//! score from head to tail: the head is the worst admitted score, the tail
//! the best. Capacity is fixed at construction; admitting a candidate while
//! full evicts the head.

use std::io::{self, Write};

use crate::error::Result;
use crate::graph::score::Score;

/// Monotonically increasing graph counter assigned by the ingestion loop.
pub type GraphIndex = u32;

/// Outcome of offering a candidate to the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The candidate could not improve the ranking; nothing changed.
    Rejected,
    /// The candidate was inserted; the list grew by one.
    Admitted,
    /// The candidate was inserted and the previous worst entry was dropped.
    AdmittedWithEviction,
}

/// One arena slot. Links are slot indices into the arena rather than raw
/// pointers, so splicing can never dangle.
#[derive(Debug, Clone, Copy)]
struct Node {
    index: GraphIndex,
    score: Score,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Bounded descending-by-score list backed by a slot arena.
///
/// The arena holds at most `capacity + 1` slots: an admission at capacity
/// inserts first and evicts the head afterwards, and the evicted slot is
/// recycled for the next insertion. Once warm, offers never allocate.
#[derive(Debug)]
pub struct RankedTopK {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
    capacity: usize,
}

impl RankedTopK {
    /// Creates an empty ranking with fixed capacity `k`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offers a candidate to the ranking.
    ///
    /// Rejection is a regular outcome, not an error. The list is left
    /// untouched on rejection, so re-offering a losing score is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `GraphRankError::Alloc` if growing the arena fails; the
    /// admission is abandoned and the ranking is unchanged.
    pub fn offer(&mut self, index: GraphIndex, score: Score) -> Result<Admission> {
        if self.capacity == 0 {
            return Ok(Admission::Rejected);
        }

        if self.len == 0 {
            let slot = self.alloc(index, score)?;
            self.head = Some(slot);
            self.tail = Some(slot);
            self.len = 1;
            return Ok(Admission::Admitted);
        }

        let was_full = self.len == self.capacity;
        if was_full && score >= self.worst_score() {
            return Ok(Admission::Rejected);
        }

        let slot = self.alloc(index, score)?;
        let (prev, succ) = self.find_boundary(score);
        self.link(slot, prev, succ);

        if was_full {
            self.evict_head();
            Ok(Admission::AdmittedWithEviction)
        } else {
            self.len += 1;
            Ok(Admission::Admitted)
        }
    }

    /// Writes the stored graph indices head-to-tail (worst score first),
    /// space-separated, with one trailing newline. An empty ranking renders
    /// as an empty line.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let mut slot = self.head;
        let mut first = true;
        while let Some(i) = slot {
            if first {
                write!(out, "{}", self.nodes[i].index)?;
                first = false;
            } else {
                write!(out, " {}", self.nodes[i].index)?;
            }
            slot = self.nodes[i].next;
        }
        writeln!(out)
    }

    /// Iterates `(index, score)` pairs head-to-tail.
    pub fn iter(&self) -> impl Iterator<Item = (GraphIndex, Score)> + '_ {
        let mut slot = self.head;
        std::iter::from_fn(move || {
            let i = slot?;
            let node = self.nodes[i];
            slot = node.next;
            Some((node.index, node.score))
        })
    }

    fn worst_score(&self) -> Score {
        self.head.map_or(0, |h| self.nodes[h].score)
    }

    /// Takes the recycled slot if one exists, otherwise grows the arena by
    /// one node. Growth is bounded: eviction always hands a slot back, so
    /// the arena never exceeds `capacity + 1` slots.
    fn alloc(&mut self, index: GraphIndex, score: Score) -> Result<usize> {
        let node = Node {
            index,
            score,
            prev: None,
            next: None,
        };
        if let Some(slot) = self.free.take() {
            self.nodes[slot] = node;
            return Ok(slot);
        }
        self.nodes.try_reserve(1)?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    /// Locates the unique insertion point keeping the list descending, by
    /// walking from the head forward and from the tail backward, one step
    /// each in alternation. Forward stops at the first node whose score is
    /// `<=` the candidate; backward stops at the first node (from the tail)
    /// whose score is strictly greater. Both converge on the same boundary,
    /// so whichever side resolves first wins. Inputs sorted either way make
    /// most insertions O(1) from one end.
    ///
    /// Returns `(prev, succ)`: the candidate goes between them. Requires a
    /// non-empty list.
    fn find_boundary(&self, score: Score) -> (Option<usize>, Option<usize>) {
        let mut p = self.head;
        let mut q = self.tail;
        let mut forward = true;
        loop {
            if forward {
                match p {
                    Some(i) if self.nodes[i].score <= score => {
                        return (self.nodes[i].prev, Some(i));
                    }
                    Some(i) => {
                        p = self.nodes[i].next;
                        forward = false;
                    }
                    // Walked past the tail: everything scores higher.
                    None => return (self.tail, None),
                }
            } else {
                match q {
                    Some(i) if self.nodes[i].score > score => {
                        return (Some(i), self.nodes[i].next);
                    }
                    Some(i) => {
                        q = self.nodes[i].prev;
                        forward = true;
                    }
                    // Walked past the head: everything scores `<=`.
                    None => return (None, self.head),
                }
            }
        }
    }

    fn link(&mut self, slot: usize, prev: Option<usize>, succ: Option<usize>) {
        self.nodes[slot].prev = prev;
        self.nodes[slot].next = succ;
        match (prev, succ) {
            (Some(p), Some(s)) => {
                self.nodes[p].next = Some(slot);
                self.nodes[s].prev = Some(slot);
            }
            (None, Some(s)) => {
                self.nodes[s].prev = Some(slot);
                self.head = Some(slot);
            }
            // New tail. `prev` is always present here given a non-empty
            // list; the empty case is handled before the boundary search.
            (prev, None) => {
                if let Some(p) = prev {
                    self.nodes[p].next = Some(slot);
                }
                self.tail = Some(slot);
            }
        }
    }

    /// Drops the current head (the worst entry) and recycles its slot.
    fn evict_head(&mut self) {
        let Some(h) = self.head else {
            return;
        };
        let next = self.nodes[h].next;
        self.head = next;
        match next {
            Some(n) => self.nodes[n].prev = None,
            None => self.tail = None,
        }
        self.free = Some(h);
    }
}
