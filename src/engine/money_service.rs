// ============================================================================
// Money Service
// Money operations wrapped with an injected observer
// ============================================================================

use crate::domain::{MoneyConfig, Quote};
use crate::interfaces::{MoneyEvent, MoneyObserver, MoneyOperation, OperationId};
use crate::numeric::{must, MoneyResult, MoneyValue};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Money operations for one service, reported to an observer.
///
/// Every method returns exactly what the matching [`MoneyValue`] operation
/// returns; the observer only sees a copy of the inputs and the outcome.
pub struct MoneyService {
    /// Service configuration
    config: MoneyConfig,

    /// Observer notified after each operation
    observer: Arc<dyn MoneyObserver>,

    /// Number of operations run so far
    sequence_counter: AtomicU64,
}

impl MoneyService {
    /// Create a new money service.
    ///
    /// The configuration is not validated here; use
    /// [`create_from_config`](crate::engine::create_from_config) for that.
    pub fn new(config: MoneyConfig, observer: Arc<dyn MoneyObserver>) -> Self {
        Self {
            config,
            observer,
            sequence_counter: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &MoneyConfig {
        &self.config
    }

    /// Number of operations run through this service
    pub fn operation_count(&self) -> u64 {
        self.sequence_counter.load(Ordering::Acquire)
    }

    /// Zero in the configured currency
    pub fn zero(&self) -> MoneyValue {
        MoneyValue::zero(self.config.currency_code.as_str())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// See [`MoneyValue::sum`]
    pub fn sum(&self, left: &MoneyValue, right: &MoneyValue) -> MoneyResult<MoneyValue> {
        let outcome = left.sum(right);
        self.emit(|| MoneyOperation::Sum {
            left: left.clone(),
            right: right.clone(),
            outcome: outcome.clone(),
        });
        outcome
    }

    /// See [`MoneyValue::must_sum`]. The failure is reported before panicking.
    #[track_caller]
    pub fn must_sum(&self, left: &MoneyValue, right: &MoneyValue) -> MoneyValue {
        must(self.sum(left, right))
    }

    /// See [`MoneyValue::checked_sub`]
    pub fn checked_sub(&self, left: &MoneyValue, right: &MoneyValue) -> MoneyResult<MoneyValue> {
        let outcome = left.checked_sub(right);
        self.emit(|| MoneyOperation::Subtract {
            left: left.clone(),
            right: right.clone(),
            outcome: outcome.clone(),
        });
        outcome
    }

    /// See [`MoneyValue::negate`]
    pub fn negate(&self, value: &MoneyValue) -> MoneyValue {
        let result = value.negate();
        self.emit(|| MoneyOperation::Negate {
            value: value.clone(),
            result: result.clone(),
        });
        result
    }

    /// See [`MoneyValue::multiply_slow`]
    #[track_caller]
    pub fn multiply_slow(&self, value: &MoneyValue, factor: u32) -> MoneyValue {
        let result = value.multiply_slow(factor);
        self.emit(|| MoneyOperation::MultiplySlow {
            value: value.clone(),
            factor,
            result: result.clone(),
        });
        result
    }

    /// See [`MoneyValue::checked_mul`]
    pub fn checked_mul(&self, value: &MoneyValue, factor: i64) -> MoneyResult<MoneyValue> {
        let outcome = value.checked_mul(factor);
        self.emit(|| MoneyOperation::Multiply {
            value: value.clone(),
            factor,
            outcome: outcome.clone(),
        });
        outcome
    }

    /// Sum a list of amounts, starting from zero in the configured currency.
    ///
    /// Stops at the first failing addition.
    pub fn total<'a, I>(&self, items: I) -> MoneyResult<MoneyValue>
    where
        I: IntoIterator<Item = &'a MoneyValue>,
    {
        items
            .into_iter()
            .try_fold(self.zero(), |acc, item| self.sum(&acc, item))
    }

    // ========================================================================
    // Quotes
    // ========================================================================

    /// See [`Quote::from_float`]
    pub fn quote_from_price(&self, price: f64) -> Quote {
        let quote = Quote::from_float(price);
        self.emit(|| MoneyOperation::CreateQuote { price, quote });
        quote
    }

    /// Flat-rate shipping quote for a number of items
    pub fn shipping_quote(&self, item_count: u32) -> Quote {
        let price = self.config.flat_shipping_rate;
        let quote = Quote::from_count(item_count, price);
        self.emit(|| MoneyOperation::CreateQuote { price, quote });
        quote
    }

    /// Shipping quote as a money value in the configured currency
    pub fn shipping_cost(&self, item_count: u32) -> MoneyValue {
        self.shipping_quote(item_count)
            .to_money(self.config.currency_code.as_str())
    }

    fn emit(&self, operation: impl FnOnce() -> MoneyOperation) {
        let sequence = self.sequence_counter.fetch_add(1, Ordering::AcqRel);
        if !self.config.instrumentation_enabled {
            return;
        }

        self.observer.on_event(MoneyEvent {
            operation_id: OperationId::new(),
            service: self.config.service_name.clone(),
            sequence,
            operation: operation(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NoOpObserver, RecordingObserver};
    use crate::numeric::MoneyError;

    fn recorded_service() -> (MoneyService, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::new());
        let service = MoneyService::new(
            MoneyConfig::usd("checkout".to_string()),
            observer.clone(),
        );
        (service, observer)
    }

    fn usd(units: i64, nanos: i32) -> MoneyValue {
        MoneyValue::new("USD", units, nanos)
    }

    #[test]
    fn test_sum_matches_core() {
        let (service, observer) = recorded_service();
        let l = usd(0, 900_000_000);
        let r = usd(0, 200_000_000);

        assert_eq!(service.sum(&l, &r), l.sum(&r));

        let events = observer.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service, "checkout");
        assert_eq!(events[0].sequence, 0);
        assert_eq!(events[0].operation.span_name(), "money.sum");
    }

    #[test]
    fn test_failures_are_reported_and_returned() {
        let (service, observer) = recorded_service();
        let outcome = service.sum(&usd(1, 0), &MoneyValue::new("EUR", 1, 0));

        assert_eq!(outcome, Err(MoneyError::MismatchingCurrency));
        assert!(observer.events()[0].operation.is_failure());
    }

    #[test]
    fn test_sequence_numbers() {
        let (service, observer) = recorded_service();
        let m = usd(1, 0);
        let _ = service.negate(&m);
        let _ = service.multiply_slow(&m, 3);
        let _ = service.checked_mul(&m, 3);

        let sequences: Vec<u64> = observer.events().iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
        assert_eq!(service.operation_count(), 3);
    }

    #[test]
    fn test_instrumentation_disabled() {
        let observer = Arc::new(RecordingObserver::new());
        let config = MoneyConfig::usd("checkout".to_string()).with_instrumentation(false);
        let service = MoneyService::new(config, observer.clone());

        assert_eq!(service.negate(&usd(1, 0)), usd(-1, 0));
        assert!(observer.is_empty());
        assert_eq!(service.operation_count(), 1);
    }

    #[test]
    fn test_total() {
        let (service, observer) = recorded_service();
        let cart = [usd(19, 990_000_000), usd(5, 10_000_000), usd(0, 500_000_000)];

        assert_eq!(service.total(&cart).unwrap(), usd(25, 500_000_000));
        assert_eq!(observer.len(), 3);

        let empty: [MoneyValue; 0] = [];
        assert_eq!(service.total(&empty).unwrap(), usd(0, 0));
    }

    #[test]
    fn test_total_stops_at_first_error() {
        let (service, observer) = recorded_service();
        let cart = [usd(1, 0), MoneyValue::new("EUR", 1, 0), usd(2, 0)];

        assert_eq!(service.total(&cart), Err(MoneyError::MismatchingCurrency));
        assert_eq!(observer.len(), 2);
    }

    #[test]
    fn test_shipping() {
        let (service, observer) = recorded_service();

        assert_eq!(service.shipping_quote(5), Quote::new(8, 99));
        assert_eq!(service.shipping_cost(2), usd(8, 990_000_000));
        assert_eq!(observer.len(), 2);
        assert_eq!(observer.events()[1].operation.span_name(), "quote.create");
    }

    #[test]
    fn test_quote_from_price() {
        let service = MoneyService::new(
            MoneyConfig::eur("checkout".to_string()),
            Arc::new(NoOpObserver),
        );
        assert_eq!(service.quote_from_price(12.345), Quote::new(12, 34));
        assert_eq!(service.zero(), MoneyValue::zero("EUR"));
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn test_must_sum_reports_then_panics() {
        let (service, _observer) = recorded_service();
        let _ = service.must_sum(&usd(1, -1), &usd(1, 0));
    }
}
