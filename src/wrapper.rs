use crate::error::Full;
use crate::ring::RingBuffer;
use futures_sink::Sink;
use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

impl<T, const S: usize> RingBuffer<T, S> {
    /// Consumes unread elements oldest first. Usable as an `Iterator` or a
    /// `Stream` that never waits: it ends as soon as the buffer is empty.
    pub fn drain(&mut self) -> Drain<'_, T, S> {
        Drain { inner: self }
    }

    /// A `Sink` that writes into this buffer and reports `Full` instead of
    /// waiting for room.
    pub fn sink(&mut self) -> RingSink<'_, T, S> {
        RingSink { inner: Some(self) }
    }
}

pub struct Drain<'a, T, const S: usize> {
    inner: &'a mut RingBuffer<T, S>,
}

impl<T, const S: usize> Iterator for Drain<'_, T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.read()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.inner.count();
        (count, Some(count))
    }
}

impl<T, const S: usize> ExactSizeIterator for Drain<'_, T, S> {}

impl<T, const S: usize> Stream for Drain<'_, T, S> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.inner.read())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(self)
    }
}

pub struct RingSink<'a, T, const S: usize> {
    inner: Option<&'a mut RingBuffer<T, S>>,
}

impl<T, const S: usize> Sink<T> for RingSink<'_, T, S> {
    type Error = Full;

    fn poll_ready(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let ready = self
            .inner
            .as_ref()
            .map(|inner| !inner.is_full())
            .unwrap_or(false);

        if ready {
            Poll::Ready(Ok(()))
        } else {
            Poll::Ready(Err(Full))
        }
    }

    fn start_send(mut self: Pin<&mut Self>, item: T) -> Result<(), Self::Error> {
        self.inner
            .as_mut()
            .map(|inner| inner.try_write(item).map_err(|err| err.into_full()))
            .unwrap_or(Err(Full))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner = None;
        Poll::Ready(Ok(()))
    }
}
