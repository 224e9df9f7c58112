//! Horizontal spans and the span stack
//!
//! A [`Span`] is a run of pixels on one row that the fill has just marked.
//! Spans wait on a [`SpanWorklist`] until the rows above and below them
//! have been examined.

/// Inclusive run `start_x..=end_x` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First column of the run
    pub start_x: u32,
    /// Last column of the run (inclusive)
    pub end_x: u32,
    /// Row of the run
    pub y: u32,
}

impl Span {
    /// Create a span. `start_x` must not exceed `end_x`.
    #[inline]
    pub fn new(start_x: u32, end_x: u32, y: u32) -> Self {
        debug_assert!(start_x <= end_x);
        Self { start_x, end_x, y }
    }

    /// Number of pixels in the span.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end_x - self.start_x + 1
    }

    /// Spans are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// LIFO stack of pending spans.
///
/// The backing vector keeps its capacity across [`clear`](Self::clear), so
/// one worklist can serve every fill of a session without reallocating.
#[derive(Debug, Clone, Default)]
pub struct SpanWorklist {
    spans: Vec<Span>,
    peak: usize,
}

impl SpanWorklist {
    /// Create an empty worklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a span.
    #[inline]
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
        self.peak = self.peak.max(self.spans.len());
    }

    /// Pop the most recently pushed span.
    #[inline]
    pub fn pop(&mut self) -> Option<Span> {
        self.spans.pop()
    }

    /// Check whether any spans are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Number of pending spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Drop all pending spans, keeping the allocation.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Largest number of spans held at once since the last
    /// [`take_peak`](Self::take_peak).
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Return the peak depth and restart tracking it.
    pub fn take_peak(&mut self) -> usize {
        std::mem::replace(&mut self.peak, self.spans.len())
    }
}
