//! Async stream utilities for demo run events.
//!
//! Running demos through the [`runner`](crate::runner) produces an ordered
//! stream of [`DemoEvent`]s: one `Started`, a `Line` per transcript line,
//! then `Completed` or `Failed`, per demo.

use std::pin::Pin;

use futures_core::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// An event observed while running demonstrations.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    /// A demo began executing.
    Started {
        /// Name of the demo.
        demo: String,
    },
    /// One line of demo output.
    Line {
        /// Name of the demo that produced the line.
        demo: String,
        /// The output line, verbatim.
        text: String,
    },
    /// A demo finished successfully.
    Completed {
        /// Name of the demo.
        demo: String,
    },
    /// A demo failed; the run may continue or stop depending on configuration.
    Failed {
        /// Name of the demo.
        demo: String,
        /// Rendered error message.
        message: String,
    },
}

/// Type alias for a boxed async stream of events.
pub type EventStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// The stream type produced by a showcase run.
pub type DemoEventStream = EventStream<DemoEvent>;

/// A sender for events in an async stream.
///
/// Wraps a tokio mpsc sender with convenience methods.
#[derive(Debug)]
pub struct EventSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> EventSender<T> {
    /// Create a new event sender from an mpsc sender.
    pub fn new(tx: mpsc::Sender<T>) -> Self {
        Self { tx }
    }

    /// Send an event.
    ///
    /// Returns `Ok(())` if the event was sent, or `Err(event)` if the
    /// receiver was dropped.
    pub async fn send(&self, event: T) -> Result<(), T> {
        self.tx.send(event).await.map_err(|e| e.0)
    }

    /// Try to send an event without waiting.
    ///
    /// Returns `Ok(())` if the event was sent, or `Err(event)` if the
    /// channel is full or closed.
    pub fn try_send(&self, event: T) -> Result<(), T> {
        self.tx.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(v) => v,
            mpsc::error::TrySendError::Closed(v) => v,
        })
    }

    /// Check if the receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T> Clone for EventSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Builder for creating event streams.
///
/// # Example
///
/// ```rust
/// use patternkit::stream::{DemoEvent, StreamBuilder};
///
/// # async fn example() {
/// let (sender, stream) = StreamBuilder::<DemoEvent>::new()
///     .buffer_size(32)
///     .build();
///
/// sender
///     .send(DemoEvent::Started { demo: "observer".to_string() })
///     .await
///     .unwrap();
/// # }
/// ```
pub struct StreamBuilder<T> {
    buffer_size: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Send + 'static> StreamBuilder<T> {
    /// Create a new stream builder with default settings.
    pub fn new() -> Self {
        Self {
            buffer_size: 100,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the buffer size for the underlying channel.
    ///
    /// Default is 100.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Build the stream and sender.
    pub fn build(self) -> (EventSender<T>, EventStream<T>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let sender = EventSender::new(tx);
        let stream: EventStream<T> = Box::pin(ReceiverStream::new(rx));
        (sender, stream)
    }
}

impl<T: Send + 'static> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an event stream with the default buffer size.
pub fn create_stream<T: Send + 'static>() -> (EventSender<T>, EventStream<T>) {
    StreamBuilder::<T>::new().build()
}
