//! In-memory payment provider for tests and offline development.
//!
//! Implements the `PaymentProvider` port without network access: created
//! intents live in a map, confirmation flips them to succeeded. Error
//! injection lets callers exercise failure paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::ports::{PaymentError, PaymentIntent, PaymentIntentStatus, PaymentProvider};

/// Mock payment provider backed by an in-memory intent map.
#[derive(Debug, Default)]
pub struct MockPaymentProvider {
    intents: Mutex<HashMap<String, PaymentIntent>>,
    counter: AtomicU64,
    /// When set, every operation fails with this message.
    fail_with: Mutex<Option<String>>,
}

impl MockPaymentProvider {
    /// Creates an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces all operations to fail with the given cause message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.fail_with.lock().unwrap() = Some(message.into());
        self
    }

    /// Clears a forced failure.
    pub fn clear_failure(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    /// Returns the number of intents created so far.
    pub fn intent_count(&self) -> usize {
        self.intents.lock().unwrap().len()
    }

    fn forced_failure(&self) -> Option<String> {
        self.fail_with.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        if let Some(message) = self.forced_failure() {
            return Err(PaymentError::intent_creation(message));
        }

        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let id = format!("pi_mock_{}", seq);
        let intent = PaymentIntent {
            id: id.clone(),
            status: PaymentIntentStatus::RequiresConfirmation,
            amount,
            currency: currency.to_string(),
            client_secret: Some(format!("{}_secret", id)),
        };

        self.intents.lock().unwrap().insert(id, intent.clone());
        Ok(intent)
    }

    async fn confirm_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        if let Some(message) = self.forced_failure() {
            return Err(PaymentError::confirmation(message));
        }

        let mut intents = self.intents.lock().unwrap();
        let intent = intents.get_mut(intent_id).ok_or_else(|| {
            PaymentError::confirmation(format!("No such payment_intent: {}", intent_id))
        })?;

        intent.status = PaymentIntentStatus::Succeeded;
        Ok(intent.clone())
    }
}
