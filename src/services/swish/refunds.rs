use super::SwishClient;
use crate::error::SwishResult;
use crate::models::{RefundBody, RefundParams, SwishResponse};

impl SwishClient {
    /// Refunds a completed payment identified by `original_payment_reference`.
    #[tracing::instrument(skip_all, fields(reference = %params.reference))]
    pub async fn create_refund(&self, params: &RefundParams) -> SwishResult<SwishResponse> {
        self.post("refunds", &RefundBody::new(params)).await
    }
}
