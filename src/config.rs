//! Runtime configuration read from the environment (and `.env`, if present).

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_SEED_DATA: &str = "SEED_DATA";
const ENV_DELIVERY_FEE: &str = "DELIVERY_FEE";
const ENV_PLATFORM_FEE: &str = "PLATFORM_FEE";
const ENV_BULK_DISCOUNT_RATE: &str = "BULK_DISCOUNT_RATE";
const ENV_BULK_DELIVERY_FEE: &str = "BULK_DELIVERY_FEE";
const ENV_DELIVERY_ETA_MINUTES: &str = "DELIVERY_ETA_MINUTES";
const ENV_ALLOW_RETAILER_RESUBMISSION: &str = "ALLOW_RETAILER_RESUBMISSION";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DELIVERY_ETA_MINUTES: i64 = 15;

/// Pricing applied to orders that do not carry their own fees.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub delivery_fee: Decimal,
    pub platform_fee: Decimal,
    /// Fraction of the subtotal, e.g. 0.05 for 5%
    pub bulk_discount_rate: Decimal,
    pub bulk_delivery_fee: Decimal,
    pub delivery_eta_minutes: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: dec!(30),
            platform_fee: dec!(5),
            bulk_discount_rate: dec!(0.05),
            bulk_delivery_fee: dec!(100),
            delivery_eta_minutes: DEFAULT_DELIVERY_ETA_MINUTES,
        }
    }
}

/// Which retailer verification moves beyond the base table are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// A rejected retailer may be put back to pending for another review
    pub allow_resubmission: bool,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            allow_resubmission: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_data: bool,
    pub pricing: PricingConfig,
    pub verification: VerificationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_data: true,
            pricing: PricingConfig::default(),
            verification: VerificationPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` / `PORT` - listen address (default: 0.0.0.0:5000)
    /// * `SEED_DATA` - load the demo catalog (default: true)
    /// * `DELIVERY_FEE` / `PLATFORM_FEE` - consumer order fees (default: 30 / 5)
    /// * `BULK_DISCOUNT_RATE` - retailer discount fraction (default: 0.05)
    /// * `BULK_DELIVERY_FEE` - retailer delivery fee (default: 100)
    /// * `DELIVERY_ETA_MINUTES` - consumer delivery estimate (default: 15)
    /// * `ALLOW_RETAILER_RESUBMISSION` - rejected -> pending allowed (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var(ENV_HOST).unwrap_or(defaults.host),
            port: parse_var(ENV_PORT).unwrap_or(defaults.port),
            seed_data: bool_var(ENV_SEED_DATA).unwrap_or(defaults.seed_data),
            pricing: PricingConfig {
                delivery_fee: parse_var(ENV_DELIVERY_FEE)
                    .unwrap_or(defaults.pricing.delivery_fee),
                platform_fee: parse_var(ENV_PLATFORM_FEE)
                    .unwrap_or(defaults.pricing.platform_fee),
                bulk_discount_rate: parse_var(ENV_BULK_DISCOUNT_RATE)
                    .unwrap_or(defaults.pricing.bulk_discount_rate),
                bulk_delivery_fee: parse_var(ENV_BULK_DELIVERY_FEE)
                    .unwrap_or(defaults.pricing.bulk_delivery_fee),
                delivery_eta_minutes: parse_var(ENV_DELIVERY_ETA_MINUTES)
                    .unwrap_or(defaults.pricing.delivery_eta_minutes),
            },
            verification: VerificationPolicy {
                allow_resubmission: bool_var(ENV_ALLOW_RETAILER_RESUBMISSION)
                    .unwrap_or(defaults.verification.allow_resubmission),
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

fn bool_var(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
}
