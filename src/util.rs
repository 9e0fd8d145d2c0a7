//! Bounded concurrency for bulk file operations.

use std::future::Future;

use futures::stream::{self, StreamExt};

use crate::error::Result;

/// Maximum in-flight I/O requests during a bulk fan-out. Keeps file
/// descriptor usage predictable on very large trees.
pub(crate) const MAX_IN_FLIGHT: usize = 16;

/// Drive every future to completion with at most [`MAX_IN_FLIGHT`] in
/// flight, stopping at the first failure.
///
/// Completion order is unconstrained. When a failure surfaces, futures
/// not yet started are dropped unstarted and in-flight ones are
/// cancelled; work that already completed stays completed.
pub(crate) async fn try_join_bounded<F>(futures: Vec<F>) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let mut inflight = stream::iter(futures).buffer_unordered(MAX_IN_FLIGHT);
    while let Some(result) = inflight.next().await {
        result?;
    }
    Ok(())
}
