use anyhow::{Result, bail};
use std::env;

/// Credentials and mode for the Alipay trade gateway. The private/public key
/// material is handed to the gateway client as-is; this layer never parses it.
#[derive(Debug, Clone)]
pub struct AlipayConfig {
    pub app_id: String,
    pub private_key: String,
    pub public_key: String,
    pub sandbox_mode: bool,
}

impl AlipayConfig {
    pub fn init() -> Result<Self> {
        let app_id = env::var("ALIPAY_APP_ID").unwrap_or_default();
        let private_key = env::var("ALIPAY_PRIVATE_KEY").unwrap_or_default();
        let public_key = env::var("ALIPAY_PUBLIC_KEY").unwrap_or_default();
        let sandbox_mode = env::var("ALIPAY_SANDBOX_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        if app_id.is_empty() || private_key.is_empty() || public_key.is_empty() {
            bail!("Missing required Alipay configuration");
        }

        Ok(Self {
            app_id,
            private_key,
            public_key,
            sandbox_mode,
        })
    }
}
