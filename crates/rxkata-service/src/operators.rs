//! Stream operators that `futures::StreamExt` does not provide.

use async_stream::stream;
use futures::stream::Stream;

/// Pass every item through; if the source ends without yielding, yield `fallback` once.
pub fn default_if_empty<S>(source: S, fallback: S::Item) -> impl Stream<Item = S::Item>
where
    S: Stream,
{
    stream! {
        let mut emitted = false;
        for await item in source {
            emitted = true;
            yield item;
        }
        if !emitted {
            yield fallback;
        }
    }
}

/// Pairwise reduction without a seed.
///
/// Yields a single accumulated item, or nothing at all when the source is empty.
pub fn reduce<S, F>(source: S, mut f: F) -> impl Stream<Item = S::Item>
where
    S: Stream,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    stream! {
        let mut acc = None;
        for await item in source {
            acc = Some(match acc.take() {
                Some(prev) => f(prev, item),
                None => item,
            });
        }
        if let Some(total) = acc {
            yield total;
        }
    }
}
