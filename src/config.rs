//! Exchange deployment configuration.

use crate::error::{Error, Result};
use alloy_primitives::{address, Address};
use std::env;

pub const POLYGON_CHAIN_ID: u64 = 137;
pub const AMOY_CHAIN_ID: u64 = 80002;

const POLYGON_EXCHANGE: Address = address!("4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E");
const POLYGON_NEG_RISK_EXCHANGE: Address = address!("C5d563A36AE78145C45a50134d48A1215220f80a");
const AMOY_EXCHANGE: Address = address!("dFE02Eb6733538f8Ea35D585af8DE5958AD99E40");
const AMOY_NEG_RISK_EXCHANGE: Address = address!("d91E80cF2E7be2e162c6513ceD06f1dD0dA35296");

/// Chain and exchange contracts orders are signed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    pub chain_id: u64,
    /// CTF Exchange, verifying contract for standard markets
    pub exchange_address: Address,
    /// Neg Risk CTF Exchange, verifying contract for negative-risk markets
    pub neg_risk_exchange_address: Address,
}

impl ExchangeConfig {
    /// Polygon mainnet
    pub fn polygon() -> Self {
        Self {
            chain_id: POLYGON_CHAIN_ID,
            exchange_address: POLYGON_EXCHANGE,
            neg_risk_exchange_address: POLYGON_NEG_RISK_EXCHANGE,
        }
    }

    /// Polygon Amoy testnet
    pub fn amoy() -> Self {
        Self {
            chain_id: AMOY_CHAIN_ID,
            exchange_address: AMOY_EXCHANGE,
            neg_risk_exchange_address: AMOY_NEG_RISK_EXCHANGE,
        }
    }

    /// Verifying contract for a market with the given neg-risk flag
    pub fn exchange_address(&self, neg_risk: bool) -> Address {
        if neg_risk {
            self.neg_risk_exchange_address
        } else {
            self.exchange_address
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `POLYMARKET_CHAIN_ID` selects the preset (137 or 80002, default 137);
    /// `POLYMARKET_EXCHANGE_ADDRESS` and `POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS`
    /// override its contracts. Any other chain id needs both addresses set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let exchange = lookup("POLYMARKET_EXCHANGE_ADDRESS")
            .map(|raw| parse_address("POLYMARKET_EXCHANGE_ADDRESS", &raw))
            .transpose()?;
        let neg_risk_exchange = lookup("POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS")
            .map(|raw| parse_address("POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS", &raw))
            .transpose()?;

        let chain_id = match lookup("POLYMARKET_CHAIN_ID") {
            None => POLYGON_CHAIN_ID,
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("POLYMARKET_CHAIN_ID is not an integer: {}", raw))
            })?,
        };

        let preset = match chain_id {
            POLYGON_CHAIN_ID => Self::polygon(),
            AMOY_CHAIN_ID => Self::amoy(),
            // no known contracts for other chains
            other => {
                return match (exchange, neg_risk_exchange) {
                    (Some(exchange_address), Some(neg_risk_exchange_address)) => Ok(Self {
                        chain_id: other,
                        exchange_address,
                        neg_risk_exchange_address,
                    }),
                    _ => Err(Error::Config(format!(
                        "chain {} requires POLYMARKET_EXCHANGE_ADDRESS and \
                         POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS",
                        other
                    ))),
                };
            }
        };

        Ok(Self {
            exchange_address: exchange.unwrap_or(preset.exchange_address),
            neg_risk_exchange_address: neg_risk_exchange
                .unwrap_or(preset.neg_risk_exchange_address),
            ..preset
        })
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::polygon()
    }
}

fn parse_address(name: &str, raw: &str) -> Result<Address> {
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} is not a valid address ({}): {}", name, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_is_polygon() {
        let config = ExchangeConfig::default();
        assert_eq!(config.chain_id, 137);
        assert_eq!(
            config.exchange_address(false),
            "0x4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E".parse::<Address>().unwrap()
        );
        assert_eq!(
            config.exchange_address(true),
            "0xC5d563A36AE78145C45a50134d48A1215220f80a".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(
            ExchangeConfig::from_lookup(lookup(&[])).unwrap(),
            ExchangeConfig::polygon()
        );
    }

    #[test]
    fn test_chain_id_selects_preset() {
        let config =
            ExchangeConfig::from_lookup(lookup(&[("POLYMARKET_CHAIN_ID", "80002")])).unwrap();
        assert_eq!(config, ExchangeConfig::amoy());
    }

    #[test]
    fn test_address_overrides() {
        let config = ExchangeConfig::from_lookup(lookup(&[(
            "POLYMARKET_EXCHANGE_ADDRESS",
            "0x0000000000000000000000000000000000000001",
        )]))
        .unwrap();
        assert_eq!(config.chain_id, 137);
        assert_eq!(
            config.exchange_address,
            "0x0000000000000000000000000000000000000001".parse::<Address>().unwrap()
        );
        assert_eq!(
            config.neg_risk_exchange_address,
            ExchangeConfig::polygon().neg_risk_exchange_address
        );
    }

    #[test]
    fn test_unknown_chain_needs_both_contracts() {
        for vars in [
            vec![("POLYMARKET_CHAIN_ID", "31337")],
            vec![
                ("POLYMARKET_CHAIN_ID", "31337"),
                (
                    "POLYMARKET_EXCHANGE_ADDRESS",
                    "0x0000000000000000000000000000000000000001",
                ),
            ],
        ] {
            assert!(matches!(
                ExchangeConfig::from_lookup(lookup(&vars)),
                Err(Error::Config(_))
            ));
        }

        let config = ExchangeConfig::from_lookup(lookup(&[
            ("POLYMARKET_CHAIN_ID", "31337"),
            (
                "POLYMARKET_EXCHANGE_ADDRESS",
                "0x0000000000000000000000000000000000000001",
            ),
            (
                "POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS",
                "0x0000000000000000000000000000000000000002",
            ),
        ]))
        .unwrap();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(
            config.neg_risk_exchange_address,
            "0x0000000000000000000000000000000000000002".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            ExchangeConfig::from_lookup(lookup(&[("POLYMARKET_CHAIN_ID", "polygon")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ExchangeConfig::from_lookup(lookup(&[(
                "POLYMARKET_NEG_RISK_EXCHANGE_ADDRESS",
                "0x1234"
            )])),
            Err(Error::Config(_))
        ));
    }
}
