//! Latest-value fan-in over a fixed, ordered set of fallible streams.
//!
//! ```text
//!   source 0 ──a0────────a1──────────────▶
//!   source 1 ──────b0─────────────b1─────▶
//!   combined ──────[a0,b0]─[a1,b0]─[a1,b1]▶
//! ```
//!
//! Nothing is produced until every source has emitted once. After that, each
//! value from any source yields one combined value carrying the latest value
//! of every source, positionally aligned to the input order. The first error
//! from any source is yielded once and ends the combined stream; sources are
//! dropped at that point. The combined stream ends when every source has
//! ended.

use futures::stream::{BoxStream, FusedStream, Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream returned by [`combine_latest`].
pub struct CombineLatest<T, E> {
    /// `None` once a source has ended
    sources: Vec<Option<BoxStream<'static, Result<T, E>>>>,
    latest: Vec<Option<T>>,
    /// Source polled first on the next call, rotated for fairness
    next_start: usize,
    terminated: bool,
}

/// Combine `sources` by latest value. See the module docs for semantics.
pub fn combine_latest<T, E>(sources: Vec<BoxStream<'static, Result<T, E>>>) -> CombineLatest<T, E> {
    let latest = sources.iter().map(|_| None).collect();
    CombineLatest {
        sources: sources.into_iter().map(Some).collect(),
        latest,
        next_start: 0,
        terminated: false,
    }
}

impl<T, E> CombineLatest<T, E> {
    /// Number of sources that have not ended yet.
    pub fn active_sources(&self) -> usize {
        self.sources.iter().filter(|source| source.is_some()).count()
    }

    fn terminate(&mut self) {
        self.terminated = true;
        self.sources.clear();
    }
}

// No field is structurally pinned; sources are boxed.
impl<T, E> Unpin for CombineLatest<T, E> {}

impl<T: Clone, E> Stream for CombineLatest<T, E> {
    type Item = Result<Vec<T>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.terminated {
            return Poll::Ready(None);
        }

        let count = this.sources.len();
        let mut progressed = false;
        for step in 0..count {
            let index = (this.next_start + step) % count;
            let Some(source) = this.sources[index].as_mut() else {
                continue;
            };

            // At most one item per source and call, so an always-ready source
            // cannot starve the others or the caller.
            match source.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(value))) => {
                    this.latest[index] = Some(value);
                    progressed = true;
                    if let Some(combined) = this.latest.iter().cloned().collect() {
                        this.next_start = (index + 1) % count;
                        return Poll::Ready(Some(Ok(combined)));
                    }
                }
                Poll::Ready(Some(Err(err))) => {
                    this.terminate();
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(None) => {
                    this.sources[index] = None;
                }
                Poll::Pending => {}
            }
        }

        if this.active_sources() == 0 {
            this.terminate();
            return Poll::Ready(None);
        }
        if progressed {
            // A source that yielded has not registered our waker.
            cx.waker().wake_by_ref();
        }
        Poll::Pending
    }
}

impl<T: Clone, E> FusedStream for CombineLatest<T, E> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
