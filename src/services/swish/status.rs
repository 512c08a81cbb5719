use super::SwishClient;
use crate::error::SwishResult;
use crate::models::{PaymentStatus, SwishResponse};

impl SwishClient {
    /// Status document of a payment request or refund, as returned by the API.
    ///
    /// `location` is the absolute URL from a previous [`SwishResponse`].
    pub async fn get_status(&self, location: &str) -> SwishResult<serde_json::Value> {
        self.get(location).await
    }

    pub async fn get_status_of(
        &self,
        response: &SwishResponse,
    ) -> SwishResult<Option<serde_json::Value>> {
        match response.location.as_deref() {
            Some(location) => self.get_status(location).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the status document and reads its `status` field.
    pub async fn get_payment_status(&self, location: &str) -> SwishResult<Option<PaymentStatus>> {
        let document = self.get_status(location).await?;
        Ok(PaymentStatus::from_document(&document))
    }
}
