//! Narrow wire types for the Stripe payment intent API.
//!
//! Only the fields this application consumes are modeled; everything else
//! in Stripe's responses is ignored at deserialization. All untyped
//! boundary crossing with Stripe lives in this module.

use serde::Deserialize;

use crate::ports::{PaymentIntent, PaymentIntentStatus};

/// Subset of Stripe's payment intent object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}

impl StripePaymentIntent {
    /// Converts the wire object into the domain-facing intent.
    pub fn into_payment_intent(self) -> PaymentIntent {
        let status = parse_intent_status(&self.status);
        PaymentIntent {
            id: self.id,
            status,
            amount: self.amount,
            currency: self.currency,
            client_secret: self.client_secret,
        }
    }
}

/// Stripe error envelope: `{"error": {"message": ..., "type": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorEnvelope {
    pub error: StripeApiError,
}

/// Subset of Stripe's error object.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Extracts the human-readable message from a Stripe error body.
///
/// Falls back to the raw body when the envelope does not parse, so the
/// original cause text always survives into the wrapped error.
pub fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<StripeErrorEnvelope>(body) {
        Ok(envelope) => envelope
            .error
            .message
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

fn parse_intent_status(status: &str) -> PaymentIntentStatus {
    match status {
        "requires_payment_method" => PaymentIntentStatus::RequiresPaymentMethod,
        "requires_confirmation" => PaymentIntentStatus::RequiresConfirmation,
        "requires_action" => PaymentIntentStatus::RequiresAction,
        "processing" => PaymentIntentStatus::Processing,
        "succeeded" => PaymentIntentStatus::Succeeded,
        "canceled" => PaymentIntentStatus::Canceled,
        _ => PaymentIntentStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intent_and_maps_status() {
        let json = r#"{
            "id": "pi_3Abc",
            "object": "payment_intent",
            "status": "requires_payment_method",
            "amount": 2500,
            "currency": "eur",
            "client_secret": "pi_3Abc_secret_xyz"
        }"#;

        let wire: StripePaymentIntent = serde_json::from_str(json).unwrap();
        let intent = wire.into_payment_intent();

        assert_eq!(intent.id, "pi_3Abc");
        assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
        assert_eq!(intent.amount, 2500);
        assert_eq!(intent.currency, "eur");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_3Abc_secret_xyz"));
    }

    #[test]
    fn missing_client_secret_is_none() {
        let json = r#"{"id":"pi_1","status":"succeeded","amount":100,"currency":"usd"}"#;
        let wire: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert!(wire.client_secret.is_none());
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let json = r#"{"id":"pi_1","status":"some_new_state","amount":100,"currency":"usd"}"#;
        let wire: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(
            wire.into_payment_intent().status,
            PaymentIntentStatus::Unknown
        );
    }

    #[test]
    fn error_message_extracted_from_envelope() {
        let body = r#"{"error":{"message":"Your card was declined.","type":"card_error","code":"card_declined"}}"#;
        assert_eq!(error_message_from_body(body), "Your card was declined.");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message_from_body("gateway timeout"), "gateway timeout");

        let no_message = r#"{"error":{"type":"api_error"}}"#;
        assert_eq!(error_message_from_body(no_message), no_message);
    }
}
