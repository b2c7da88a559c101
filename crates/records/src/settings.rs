//! Application settings: a single process-wide document.
//!
//! Settings are an explicit configuration value handed to whatever needs
//! currency or name formatting, owned at the composition root. They are
//! tenant-global (one document for the whole deployment, not per owner) and
//! updated in place through `SettingsForm`.

use serde::{Deserialize, Serialize};

use vettrack_core::{DomainResult, FieldErrors, Money};

/// Optional payment gateway details shown on printed invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentGatewaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easypaisa_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_iban: Option<String>,
}

/// The `settings/app` singleton document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub app_name: String,
    /// Currency symbol prefixed to formatted amounts.
    pub currency: String,
    #[serde(default)]
    pub payment_gateway: PaymentGatewaySettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "VetTrack".to_string(),
            currency: "$".to_string(),
            payment_gateway: PaymentGatewaySettings::default(),
        }
    }
}

impl AppSettings {
    /// Format an amount with the configured currency symbol ("$36.98").
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{}{}", self.currency, amount)
    }
}

/// Raw settings form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub app_name: String,
    pub currency: String,
    pub payment_gateway: PaymentGatewaySettings,
}

impl SettingsForm {
    /// Validate and build the settings document to store.
    pub fn into_settings(self) -> DomainResult<AppSettings> {
        let mut errors = FieldErrors::new();
        errors.require("appName", &self.app_name);
        errors.require("currency", &self.currency);
        errors.into_result()?;

        Ok(AppSettings {
            app_name: self.app_name.trim().to_string(),
            currency: self.currency.trim().to_string(),
            payment_gateway: self.payment_gateway,
        })
    }
}
