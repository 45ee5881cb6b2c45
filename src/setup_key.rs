//! Setup key creation
//!
//! Turns the values typed into the "create setup key" form into the request
//! body for `POST /setup-keys`, and models the key the API returns. The
//! HTTP call itself goes through the `SetupKeyApi` trait so callers bring
//! their own client.
//!
//! Form fields are kept as the raw strings the operator typed; they are only
//! parsed when the request is built.

use crate::traits::SetupKeyApi;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Collection endpoint for setup keys
pub const SETUP_KEYS_PATH: &str = "/setup-keys";
/// Collection endpoint for groups
pub const GROUPS_PATH: &str = "/groups";
/// Collections whose cached listings are stale after a key is created
///
/// Creating a key can also create the groups it auto-assigns.
pub const INVALIDATED_COLLECTIONS: [&str; 2] = [SETUP_KEYS_PATH, GROUPS_PATH];

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Whether a key enrolls one peer or many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupKeyType {
    #[serde(rename = "reusable")]
    Reusable,
    #[serde(rename = "one-off")]
    OneOff,
}

/// Values of the "create setup key" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupKeyForm {
    /// Display name, required
    pub name: String,
    /// Allow more than one peer to enroll with the key
    pub reusable: bool,
    /// Maximum enrollments for reusable keys; empty means unlimited
    pub usage_limit: String,
    /// Days until the key expires; empty means it never expires
    pub expires_in_days: String,
    /// Peers enrolled with the key are removed after going offline
    pub ephemeral: bool,
    /// Peers may register with multi-label DNS names
    pub allow_extra_dns_labels: bool,
    /// IDs of groups assigned to every peer enrolled with the key
    pub auto_groups: Vec<String>,
}

impl Default for SetupKeyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            reusable: false,
            usage_limit: String::new(),
            expires_in_days: "7".to_string(),
            ephemeral: false,
            allow_extra_dns_labels: false,
            auto_groups: Vec::new(),
        }
    }
}

impl SetupKeyForm {
    /// Creates a form with a predefined name and default values
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The form can be submitted once the name is not blank
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn key_type(&self) -> SetupKeyType {
        if self.reusable {
            SetupKeyType::Reusable
        } else {
            SetupKeyType::OneOff
        }
    }

    /// Hint shown in an empty usage limit field
    pub fn usage_limit_placeholder(&self) -> &'static str {
        if self.reusable {
            "Unlimited"
        } else {
            "1"
        }
    }

    /// Builds the request body for `POST /setup-keys`
    ///
    /// One-off keys always get a usage limit of 1. Reusable keys use the
    /// entered limit, with an empty field sent as 0 (unlimited). The expiry
    /// is converted from days to seconds; an empty field is sent as 0 (never).
    ///
    /// # Errors
    /// Returns an error if the name is blank or a numeric field does not
    /// hold a whole number.
    pub fn to_request(&self) -> Result<CreateSetupKeyRequest> {
        if !self.is_submittable() {
            bail!("Setup key name cannot be empty");
        }

        let days = parse_count("Expires in", &self.expires_in_days)?.unwrap_or(0);
        let expires_in = days
            .checked_mul(SECONDS_PER_DAY)
            .with_context(|| format!("Expiry of {} days is out of range", days))?;

        let usage_limit = if self.reusable {
            parse_count("Usage limit", &self.usage_limit)?.unwrap_or(0)
        } else {
            1
        };

        Ok(CreateSetupKeyRequest {
            name: self.name.clone(),
            key_type: self.key_type(),
            expires_in,
            revoked: false,
            auto_groups: self.auto_groups.clone(),
            usage_limit,
            ephemeral: self.ephemeral,
            allow_extra_dns_labels: self.allow_extra_dns_labels,
        })
    }
}

fn parse_count(field: &str, value: &str) -> Result<Option<u64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(Some)
        .with_context(|| format!("{} must be a whole number, got '{}'", field, value))
}

/// Request body for `POST /setup-keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSetupKeyRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    /// Seconds until expiry, 0 for never
    pub expires_in: u64,
    pub revoked: bool,
    pub auto_groups: Vec<String>,
    /// 0 for unlimited
    pub usage_limit: u64,
    pub ephemeral: bool,
    pub allow_extra_dns_labels: bool,
}

/// A setup key as returned by the management API
///
/// `key` holds the secret only in the response to a create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupKey {
    pub id: String,
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub used_times: u64,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub auto_groups: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage_limit: u64,
    #[serde(default)]
    pub ephemeral: bool,
    #[serde(default)]
    pub allow_extra_dns_labels: bool,
}

/// Validates the form and creates the key through `api`
///
/// On success the caller should refresh `INVALIDATED_COLLECTIONS`.
///
/// # Errors
/// Returns an error if the form is invalid (the API is not called) or the
/// API call fails.
pub async fn create_setup_key(api: &impl SetupKeyApi, form: &SetupKeyForm) -> Result<SetupKey> {
    let request = form.to_request()?;
    debug!(name = %request.name, key_type = ?request.key_type, "creating setup key");

    let key = api
        .create_setup_key(&request)
        .await
        .with_context(|| format!("Failed to create setup key '{}'", request.name))?;

    info!(id = %key.id, name = %key.name, "setup key created");
    Ok(key)
}
