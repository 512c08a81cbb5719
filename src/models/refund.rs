use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use super::payment_request::DEFAULT_CURRENCY;

#[derive(Debug, Clone, PartialEq)]
pub struct RefundParams {
    pub reference: String,
    pub original_payment_reference: String,
    pub payer_alias: String,
    pub amount: Decimal,
    pub callback_url: Option<String>,
    pub currency: String,
    pub message: String,
}

impl RefundParams {
    pub fn new(
        reference: impl Into<String>,
        original_payment_reference: impl Into<String>,
        payer_alias: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            reference: reference.into(),
            original_payment_reference: original_payment_reference.into(),
            payer_alias: payer_alias.into(),
            amount,
            callback_url: None,
            currency: DEFAULT_CURRENCY.to_string(),
            message: String::new(),
        }
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Wire body for `POST /refunds`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundBody<'a> {
    pub payer_payment_reference: &'a str,
    pub original_payment_reference: &'a str,
    pub callback_url: Option<&'a str>,
    pub payer_alias: &'a str,
    #[serde(serialize_with = "serialize_number")]
    pub amount: &'a Decimal,
    pub currency: &'a str,
    pub message: &'a str,
}

impl<'a> RefundBody<'a> {
    pub fn new(params: &'a RefundParams) -> Self {
        Self {
            payer_payment_reference: &params.reference,
            original_payment_reference: &params.original_payment_reference,
            callback_url: params.callback_url.as_deref(),
            payer_alias: &params.payer_alias,
            amount: &params.amount,
            currency: &params.currency,
            message: &params.message,
        }
    }
}

// Refund amounts go out as a plain JSON number, digits exactly as given.
fn serialize_number<S: Serializer>(amount: &&Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(amount.to_string()).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_is_a_verbatim_number() {
        let params = RefundParams::new("refund-1", "6D6CD7406ECE4542A80152D909EF9F6B", "1231181189", dec!(100.50));
        let json = serde_json::to_string(&RefundBody::new(&params)).unwrap();

        assert!(json.contains(r#""amount":100.50"#));
        assert!(!json.contains("100,50"));
    }

    #[test]
    fn test_body_fields_and_defaults() {
        let params = RefundParams::new("refund-1", "6D6CD7406ECE4542A80152D909EF9F6B", "1231181189", dec!(5));
        let json = serde_json::to_string(&RefundBody::new(&params)).unwrap();
        let body: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(body["payerPaymentReference"], "refund-1");
        assert_eq!(body["originalPaymentReference"], "6D6CD7406ECE4542A80152D909EF9F6B");
        assert_eq!(body["payerAlias"], "1231181189");
        assert_eq!(body["amount"], 5);
        assert_eq!(body["currency"], "SEK");
        assert_eq!(body["message"], "");
        assert!(body["callbackUrl"].is_null());
        assert!(body.get("payeeAlias").is_none());
    }
}
