use eyre::eyre;
use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct PixInfo {
    pub pix_api_url: String,
    pub pix_api_key: SecretString,
}

impl PixInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            pix_api_url: env::var("PIX_API_URL")
                .unwrap_or_else(|_| "https://api.pixgateway.com.br".into()),

            pix_api_key: SecretString::new(
                env::var("PIX_API_KEY")
                    .map_err(|_| eyre!("PIX_API_KEY must be set"))?
                    .into(),
            ),
        })
    }
}
