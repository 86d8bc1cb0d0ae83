//! Review submission.

use crate::api::MessageResponse;
use crate::{ApiClient, ApiError};
use shopfront_commerce::review::NewReview;

impl ApiClient {
    /// Submit a review for a purchased product.
    pub fn submit_review(&self, review: &NewReview) -> Result<MessageResponse, ApiError> {
        review.validate()?;
        let url = self.endpoints().reviews(self.locale());
        let response = self
            .send(self.post(url).json(review)?)?
            .error_for_status()?;
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{stub_client, StubTransport};
    use shopfront_commerce::ids::ProductId;

    #[test]
    fn test_submit_review() {
        let (client, transport, _session) = stub_client(StubTransport::reply(
            201,
            r#"{"message": "Review submitted."}"#,
        ));

        let review = NewReview::new(ProductId::new(7), 5, "Excellent shirt.");
        let ack = client.submit_review(&review).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Review submitted."));

        let sent = transport.request(0);
        assert!(sent.url.ends_with("/en/v1/reviews"));
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["rating"], 5);
        assert_eq!(body["product_id"], 7);
    }

    #[test]
    fn test_invalid_rating_rejected_locally() {
        let (client, transport, _session) = stub_client(StubTransport::new());
        let review = NewReview::new(ProductId::new(7), 0, "bad");
        assert!(matches!(
            client.submit_review(&review),
            Err(ApiError::Domain(_))
        ));
        assert_eq!(transport.request_count(), 0);
    }
}
