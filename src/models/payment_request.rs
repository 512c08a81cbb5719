use rust_decimal::Decimal;
use serde::Serialize;

pub const DEFAULT_CURRENCY: &str = "SEK";

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequestParams {
    pub reference: String,
    pub payer_alias: String,
    pub amount: Decimal,
    pub callback_url: Option<String>,
    pub currency: String,
    pub message: String,
    /// Overrides the payee alias the client was built with.
    pub payee_alias: Option<String>,
}

impl PaymentRequestParams {
    pub fn new(reference: impl Into<String>, payer_alias: impl Into<String>, amount: Decimal) -> Self {
        Self {
            reference: reference.into(),
            payer_alias: payer_alias.into(),
            amount,
            callback_url: None,
            currency: DEFAULT_CURRENCY.to_string(),
            message: String::new(),
            payee_alias: None,
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

    pub fn payee_alias(mut self, alias: impl Into<String>) -> Self {
        self.payee_alias = Some(alias.into());
        self
    }
}

/// Wire body for `POST /paymentrequests`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestBody<'a> {
    pub payee_payment_reference: &'a str,
    pub callback_url: Option<&'a str>,
    pub payer_alias: &'a str,
    pub payee_alias: &'a str,
    pub amount: String,
    pub currency: &'a str,
    pub message: &'a str,
}

impl<'a> PaymentRequestBody<'a> {
    pub fn new(params: &'a PaymentRequestParams, default_payee_alias: &'a str) -> Self {
        Self {
            payee_payment_reference: &params.reference,
            callback_url: params.callback_url.as_deref(),
            payer_alias: &params.payer_alias,
            payee_alias: params.payee_alias.as_deref().unwrap_or(default_payee_alias),
            // The API expects a comma as decimal separator here
            amount: params.amount.to_string().replace('.', ","),
            currency: &params.currency,
            message: &params.message,
        }
    }
}
