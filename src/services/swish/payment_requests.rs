use super::SwishClient;
use crate::error::SwishResult;
use crate::models::{PaymentRequestBody, PaymentRequestParams, SwishResponse};

impl SwishClient {
    /// Asks the payer to approve a payment to the payee.
    ///
    /// Returns the location of the new payment request on 201. A 422 becomes
    /// [`SwishError::Validation`](crate::error::SwishError::Validation), anything
    /// else [`SwishError::Transport`](crate::error::SwishError::Transport).
    #[tracing::instrument(skip_all, fields(reference = %params.reference))]
    pub async fn create_payment_request(
        &self,
        params: &PaymentRequestParams,
    ) -> SwishResult<SwishResponse> {
        let body = PaymentRequestBody::new(params, self.payee_alias());
        self.post("paymentrequests", &body).await
    }
}
