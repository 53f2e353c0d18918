use crate::auth::create_l1_headers;
use crate::client::AuthTransport;
use crate::error::{Error, Result};
use crate::signing::OrderSigner;
use crate::types::ApiCreds;
use tracing::{info, warn};

/// Client for API-key management
///
/// Every request is authenticated with fresh L1 headers signed by the wallet
/// key. The credentials it returns are meant to be cached by the caller for
/// the rest of the session.
pub struct AuthenticatedClient {
    transport: Box<dyn AuthTransport>,
    signer: OrderSigner,
    chain_id: u64,
    api_creds: Option<ApiCreds>,
}

impl AuthenticatedClient {
    /// Create a new AuthenticatedClient
    ///
    /// # Arguments
    /// * `transport` - Sends the API-key requests
    /// * `signer` - The wallet key that owns the credentials
    /// * `chain_id` - The chain ID (137 for Polygon, 80002 for Amoy testnet)
    /// * `api_creds` - Credentials already known to the caller, if any
    pub fn new(
        transport: impl AuthTransport + 'static,
        signer: OrderSigner,
        chain_id: u64,
        api_creds: Option<ApiCreds>,
    ) -> Self {
        Self {
            transport: Box::new(transport),
            signer,
            chain_id,
            api_creds,
        }
    }

    pub fn api_creds(&self) -> Option<&ApiCreds> {
        self.api_creds.as_ref()
    }

    pub fn signer(&self) -> &OrderSigner {
        &self.signer
    }

    /// Create a new API key (L1 authentication required)
    pub async fn create_api_key(&self, nonce: Option<u64>) -> Result<ApiCreds> {
        let headers = create_l1_headers(&self.signer, self.chain_id, nonce.unwrap_or(0))?;
        let creds = self.transport.create_api_key(headers).await?;
        info!(address = %self.signer.checksum_address(), "created API key");
        Ok(creds)
    }

    /// Derive the existing API key for this wallet (L1 authentication required)
    pub async fn derive_api_key(&self, nonce: Option<u64>) -> Result<ApiCreds> {
        let headers = create_l1_headers(&self.signer, self.chain_id, nonce.unwrap_or(0))?;
        let creds = self.transport.derive_api_key(headers).await?;
        info!(address = %self.signer.checksum_address(), "derived API key");
        Ok(creds)
    }

    /// Derive the API key, creating one if none exists yet.
    pub async fn create_or_derive_api_key(&self) -> Result<ApiCreds> {
        let derive_err = match self.derive_api_key(None).await {
            Ok(creds) => return Ok(creds),
            Err(e) => e,
        };
        warn!(error = %derive_err, "API key derivation failed, creating a new key");

        self.create_api_key(None)
            .await
            .map_err(|create_err| Error::Authentication {
                message: format!(
                    "could not derive API key ({}) or create one ({})",
                    derive_err, create_err
                ),
            })
    }

    /// Bootstrap credentials and keep them on the client.
    pub async fn ensure_api_creds(&mut self) -> Result<&ApiCreds> {
        if self.api_creds.is_none() {
            self.api_creds = Some(self.create_or_derive_api_key().await?);
        }
        self.api_creds.as_ref().ok_or_else(|| Error::Authentication {
            message: "API credentials unavailable".to_string(),
        })
    }

    pub fn get_address(&self) -> &str {
        self.signer.checksum_address()
    }
}
