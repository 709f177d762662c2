// ============================================================================
// Money Observer Interface
// Advisory tracing hook notified after every money operation
// ============================================================================

use crate::domain::Quote;
use crate::numeric::{MoneyResult, MoneyValue};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use smallvec::SmallVec;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identifier correlating an event with the call that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Value attached to a span tag
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Int(i64),
    UInt(u64),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Int(v) => write!(f, "{}", v),
            TagValue::UInt(v) => write!(f, "{}", v),
        }
    }
}

/// Informational key/value pair for a span
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTag {
    pub key: &'static str,
    pub value: TagValue,
}

impl SpanTag {
    fn text(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: TagValue::Text(value.into()),
        }
    }

    fn int(key: &'static str, value: i64) -> Self {
        Self {
            key,
            value: TagValue::Int(value),
        }
    }

    fn uint(key: &'static str, value: u64) -> Self {
        Self {
            key,
            value: TagValue::UInt(value),
        }
    }
}

/// Tags for one span; four fit inline, which covers every operation
pub type SpanTags = SmallVec<[SpanTag; 4]>;

// ============================================================================
// Events
// ============================================================================

/// The operation an event reports, with its inputs and outcome
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyOperation {
    Sum {
        left: MoneyValue,
        right: MoneyValue,
        outcome: MoneyResult<MoneyValue>,
    },

    Subtract {
        left: MoneyValue,
        right: MoneyValue,
        outcome: MoneyResult<MoneyValue>,
    },

    Negate {
        value: MoneyValue,
        result: MoneyValue,
    },

    /// Repeated addition
    MultiplySlow {
        value: MoneyValue,
        factor: u32,
        result: MoneyValue,
    },

    /// Exact multiplication
    Multiply {
        value: MoneyValue,
        factor: i64,
        outcome: MoneyResult<MoneyValue>,
    },

    /// Shipping quote built from a float price
    CreateQuote {
        price: f64,
        quote: Quote,
    },
}

impl MoneyOperation {
    /// Span name for this operation
    pub fn span_name(&self) -> &'static str {
        match self {
            MoneyOperation::Sum { .. } => "money.sum",
            MoneyOperation::Subtract { .. } => "money.subtract",
            MoneyOperation::Negate { .. } => "money.negate",
            MoneyOperation::MultiplySlow { .. } => "money.multiply_slow",
            MoneyOperation::Multiply { .. } => "money.multiply",
            MoneyOperation::CreateQuote { .. } => "quote.create",
        }
    }

    /// True when the operation returned an error
    pub fn is_failure(&self) -> bool {
        match self {
            MoneyOperation::Sum { outcome, .. }
            | MoneyOperation::Subtract { outcome, .. }
            | MoneyOperation::Multiply { outcome, .. } => outcome.is_err(),
            _ => false,
        }
    }

    /// Informational tags: the input's currency, units and nanos, plus the
    /// factor or quote fields where they apply
    pub fn tags(&self) -> SpanTags {
        let mut tags = SpanTags::new();
        match self {
            MoneyOperation::Sum { left, outcome, .. }
            | MoneyOperation::Subtract { left, outcome, .. } => {
                push_money_tags(&mut tags, left);
                if let Err(err) = outcome {
                    tags.push(SpanTag::text("error", err.to_string()));
                }
            },
            MoneyOperation::Negate { value, .. } => push_money_tags(&mut tags, value),
            MoneyOperation::MultiplySlow { value, factor, .. } => {
                push_money_tags(&mut tags, value);
                tags.push(SpanTag::uint("factor", u64::from(*factor)));
            },
            MoneyOperation::Multiply {
                value,
                factor,
                outcome,
            } => {
                push_money_tags(&mut tags, value);
                tags.push(SpanTag::int("factor", *factor));
                if let Err(err) = outcome {
                    tags.push(SpanTag::text("error", err.to_string()));
                }
            },
            MoneyOperation::CreateQuote { quote, .. } => {
                tags.push(SpanTag::uint("quote.dollars", u64::from(quote.dollars)));
                tags.push(SpanTag::uint("quote.cents", u64::from(quote.cents)));
                tags.push(SpanTag::text("quote.total", quote.to_string()));
            },
        }
        tags
    }
}

fn push_money_tags(tags: &mut SpanTags, value: &MoneyValue) {
    tags.push(SpanTag::text("currency", value.currency_code()));
    tags.push(SpanTag::int("units", value.units()));
    tags.push(SpanTag::int("nanos", i64::from(value.nanos())));
}

/// One observed call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyEvent {
    pub operation_id: OperationId,
    /// Service that ran the operation
    pub service: String,
    /// Per-service call counter, starting at 0
    pub sequence: u64,
    pub operation: MoneyOperation,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Observer Trait and Implementations
// ============================================================================

/// Observer notified after each money operation.
/// Implementations can handle tracing, metrics, auditing, etc.
///
/// Observers are advisory: they see inputs and outcomes but cannot change
/// what the operation returns.
pub trait MoneyObserver: Send + Sync {
    /// Handle a money event
    fn on_event(&self, event: MoneyEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<MoneyEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer, the default
pub struct NoOpObserver;

impl MoneyObserver for NoOpObserver {
    fn on_event(&self, _event: MoneyEvent) {}
}

/// Observer that opens a `tracing` span per operation
pub struct TracingObserver;

impl MoneyObserver for TracingObserver {
    fn on_event(&self, event: MoneyEvent) {
        let span = tracing::debug_span!(
            "money_operation",
            otel.name = event.operation.span_name(),
            service = %event.service,
            operation_id = %event.operation_id,
            sequence = event.sequence,
        );
        let _guard = span.enter();

        let tags = event.operation.tags();
        let rendered: SmallVec<[String; 4]> = tags
            .iter()
            .map(|tag| format!("{}={}", tag.key, tag.value))
            .collect();

        if event.operation.is_failure() {
            tracing::warn!(tags = ?rendered, "{} failed", event.operation.span_name());
        } else {
            tracing::debug!(tags = ?rendered, "{}", event.operation.span_name());
        }
    }
}

/// Observer that keeps every event in memory.
///
/// Useful in tests and for hosts that export events in batches.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<MoneyEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<MoneyEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn take(&self) -> Vec<MoneyEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl MoneyObserver for RecordingObserver {
    fn on_event(&self, event: MoneyEvent) {
        self.events.lock().push(event);
    }
}
