use fanpix_primitives::error::{ApiError, PixError};
use fanpix_primitives::models::enum_types::PixKeyType;
use fanpix_primitives::models::pix_dto::{
    PixTransferRequest, PixTransferResponse, PixTransferStatus,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

#[derive(Clone)]
pub struct PixClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
}

impl PixClient {
    pub fn new(http: Client, base_url: &str, api_key: SecretString) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid PIX gateway base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Submit a transfer to the creator's PIX key. Amounts arrive in minor
    /// units and go out as a decimal string, the gateway's wire format.
    pub async fn transfer(
        &self,
        net_amount: i64,
        pix_key: &str,
        pix_key_type: PixKeyType,
        external_reference: &str,
    ) -> Result<PixTransferResponse, PixError> {
        let url = self.endpoint("transfers");
        let amount = format!("{}.{:02}", net_amount / 100, net_amount % 100);

        let payload = PixTransferRequest {
            amount: &amount,
            pix_key,
            pix_key_type,
            description: "Creator payout",
            external_reference,
        };

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|_| PixError::RequestFailed)?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                response = %body_text.chars().take(200).collect::<String>(),
                "PIX transfer request failed"
            );
            return Err(PixError::Api(format!(
                "transfer rejected with status {}",
                status.as_u16()
            )));
        }

        let body: PixTransferResponse = serde_json::from_str(&body_text).map_err(|e| {
            warn!(
                error = %e,
                response = %body_text.chars().take(200).collect::<String>(),
                "Invalid JSON from PIX gateway"
            );
            PixError::RequestFailed
        })?;

        if body.status == PixTransferStatus::Failed {
            let message = body
                .message
                .unwrap_or_else(|| "transfer failed".to_string());
            warn!(gateway_message = %message, "PIX gateway rejected the transfer");
            return Err(PixError::Api(message));
        }

        Ok(body)
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}
