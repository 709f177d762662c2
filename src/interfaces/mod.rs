// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod observer;

pub use observer::{
    MoneyEvent, MoneyObserver, MoneyOperation, NoOpObserver, OperationId, RecordingObserver,
    SpanTag, SpanTags, TagValue, TracingObserver,
};
