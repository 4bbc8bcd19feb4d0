//! Status events emitted as the pipeline advances.
//!
//! Each analysis run pushes one [`StatusEvent`] per stage boundary, in
//! pipeline order, through a [`StatusSink`]. The sink is fire-and-forget: a
//! caller that stopped listening (dropped receiver) never blocks or fails the
//! run. The `Display` impl renders each event as the human-readable milestone
//! string a shell or UI would show verbatim.
//!
//! # Example
//!
//! ```rust
//! use chatstats::status::{StatusEvent, StatusSink};
//!
//! let (sink, events) = StatusSink::channel();
//! sink.emit(StatusEvent::Parsed { conversations: 3 });
//!
//! let event = events.recv().unwrap();
//! assert_eq!(event.to_string(), "File loaded and JSON parsed successfully");
//! ```

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// One pipeline milestone.
///
/// Variants carry the stage's headline numbers for programmatic consumers;
/// the `Display` strings stay stable for shells that just print them.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusEvent {
    /// The run started.
    Started {
        /// Wall-clock start time.
        at: DateTime<Utc>,
    },
    /// Input decoded and shape-validated.
    Parsed {
        /// Number of conversations in the archive.
        conversations: usize,
    },
    /// Message texts flattened out of the conversation trees.
    Extracted {
        /// Number of message parts collected.
        messages: usize,
    },
    /// Concatenated text segmented into tokens.
    Tokenized {
        /// Total token count.
        tokens: usize,
    },
    /// Raw frequency table built.
    Counted {
        /// Number of distinct tokens.
        distinct: usize,
    },
    /// Sentiment computed over the full text.
    Scored {
        /// Overall sentiment in [-1.0, 1.0].
        sentiment: f64,
    },
    /// Stop words removed and the filtered table built.
    Filtered {
        /// Tokens remaining after stop-word removal.
        remaining: usize,
    },
    /// Both reports written; the run is done.
    Completed {
        /// Wall-clock completion time.
        at: DateTime<Utc>,
        /// Total run duration.
        elapsed: Duration,
    },
    /// The run aborted; no further events follow.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::Started { at } => write!(f, "Starting analysis at: {at}"),
            StatusEvent::Parsed { .. } => {
                write!(f, "File loaded and JSON parsed successfully")
            }
            StatusEvent::Extracted { messages } => {
                write!(f, "Messages extracted successfully ({messages} parts)")
            }
            StatusEvent::Tokenized { tokens } => {
                write!(f, "Text tokenized successfully ({tokens} words)")
            }
            StatusEvent::Counted { .. } => write!(f, "Word frequencies counted"),
            StatusEvent::Scored { sentiment } => {
                write!(f, "Overall sentiment: {sentiment:.2}")
            }
            StatusEvent::Filtered { .. } => write!(f, "Stop words filtered out"),
            StatusEvent::Completed { at, elapsed } => write!(
                f,
                "Analysis completed at: {at} (total analysis time: {:.2}s)",
                elapsed.as_secs_f64()
            ),
            StatusEvent::Failed { message } => write!(f, "{message}"),
        }
    }
}

/// Fire-and-forget sender for status events.
///
/// Wraps an [`mpsc`] sender so pipeline code can emit unconditionally; when
/// nobody listens the events are dropped on the floor instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct StatusSink {
    tx: Option<Sender<StatusEvent>>,
}

impl StatusSink {
    /// Creates a connected sink plus the receiver to consume events from.
    pub fn channel() -> (Self, Receiver<StatusEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Creates a sink that discards every event.
    ///
    /// Useful when an API wants a sink but the caller doesn't care about
    /// progress.
    pub fn discard() -> Self {
        Self { tx: None }
    }

    /// Emits an event. Never blocks, never fails.
    pub fn emit(&self, event: StatusEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sink, events) = StatusSink::channel();
        sink.emit(StatusEvent::Parsed { conversations: 1 });
        sink.emit(StatusEvent::Extracted { messages: 2 });
        drop(sink);

        let received: Vec<StatusEvent> = events.iter().collect();
        assert_eq!(
            received,
            vec![
                StatusEvent::Parsed { conversations: 1 },
                StatusEvent::Extracted { messages: 2 },
            ]
        );
    }

    #[test]
    fn test_emit_after_receiver_dropped_is_silent() {
        let (sink, events) = StatusSink::channel();
        drop(events);
        sink.emit(StatusEvent::Counted { distinct: 10 }); // must not panic
    }

    #[test]
    fn test_discard_sink() {
        let sink = StatusSink::discard();
        sink.emit(StatusEvent::Filtered { remaining: 5 }); // must not panic
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(
            StatusEvent::Parsed { conversations: 7 }.to_string(),
            "File loaded and JSON parsed successfully"
        );
        assert_eq!(
            StatusEvent::Extracted { messages: 3 }.to_string(),
            "Messages extracted successfully (3 parts)"
        );
        assert_eq!(
            StatusEvent::Scored { sentiment: 0.5 }.to_string(),
            "Overall sentiment: 0.50"
        );
        assert_eq!(
            StatusEvent::Failed {
                message: "Invalid JSON format: nope".into()
            }
            .to_string(),
            "Invalid JSON format: nope"
        );
    }

    #[test]
    fn test_completed_display_includes_elapsed() {
        let event = StatusEvent::Completed {
            at: Utc::now(),
            elapsed: Duration::from_millis(1500),
        };
        assert!(event.to_string().contains("1.50s"));
    }
}
