use std::env;

const DEFAULT_CHAIN_ID: u64 = 31337;

/// Connection and deployment details for a local test node.
#[derive(Clone)]
pub struct HarnessConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    pub private_key: String,

    // Deployed collaborator addresses
    pub factory_address: String,
    pub liquidity_provider_address: String,
    pub token0_address: String,
    pub token1_address: String,
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Deployment output first, then any local overrides
        dotenv::from_filename("harness.env").ok();
        dotenv::dotenv().ok();

        Ok(HarnessConfig {
            rpc_url: env::var("RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8545".to_string()),
            chain_id: parse_chain_id(env::var("CHAIN_ID").ok())?,
            private_key: env::var("PRIVATE_KEY").map_err(|_| "PRIVATE_KEY must be set")?,

            factory_address: env::var("UNISWAP_V3_FACTORY")
                .map_err(|_| "UNISWAP_V3_FACTORY must be set")?,
            liquidity_provider_address: env::var("LIQUIDITY_PROVIDER")
                .map_err(|_| "LIQUIDITY_PROVIDER must be set")?,
            token0_address: env::var("TOKEN0").map_err(|_| "TOKEN0 must be set")?,
            token1_address: env::var("TOKEN1").map_err(|_| "TOKEN1 must be set")?,
        })
    }
}

// Signatures commit to the chain id: unset means the local default, malformed is an error
fn parse_chain_id(raw: Option<String>) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    match raw {
        Some(value) => Ok(value.trim().parse::<u64>().map_err(|_| "CHAIN_ID must be an integer")?),
        None => Ok(DEFAULT_CHAIN_ID),
    }
}

impl std::fmt::Debug for HarnessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessConfig")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("private_key", &"<redacted>")
            .field("factory_address", &self.factory_address)
            .field("liquidity_provider_address", &self.liquidity_provider_address)
            .field("token0_address", &self.token0_address)
            .field("token1_address", &self.token1_address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_hides_private_key() {
        let config = HarnessConfig {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            chain_id: 31337,
            private_key: "deadbeef".to_string(),
            factory_address: "0x1F98431c8aD98523631AE4a59f267346ea31F984".to_string(),
            liquidity_provider_address: "0x0000000000000000000000000000000000000001".to_string(),
            token0_address: "0x0000000000000000000000000000000000000002".to_string(),
            token1_address: "0x0000000000000000000000000000000000000003".to_string(),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("deadbeef"));
        assert!(printed.contains("31337"));
    }

    #[test]
    fn test_chain_id_defaults_and_rejects_garbage() {
        assert_eq!(parse_chain_id(None).unwrap(), 31337);
        assert_eq!(parse_chain_id(Some("8453".to_string())).unwrap(), 8453);
        assert_eq!(parse_chain_id(Some(" 1 ".to_string())).unwrap(), 1);

        let err = parse_chain_id(Some("anvil".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "CHAIN_ID must be an integer");
        assert!(parse_chain_id(Some(String::new())).is_err());
    }
}
