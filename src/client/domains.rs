//! Domain lifecycle operations: registration, renewal, transfer, details.

use serde_json::{Map, json};

use crate::error::{ApiError, Result};
use crate::parse;
use crate::types::{
    ContactSet, DomainList, DomainListQuery, DomainRecord, RegistrationOptions, Renewal,
};
use crate::utils::value::{coerce_sequence, u32_value};

use super::DomainApiClient;
use super::requests::key_value_attributes;

/// Privacy changes need a reason on file; this is the one used when the
/// caller gives none.
const DEFAULT_PRIVACY_REASON: &str = "Owner request";

impl DomainApiClient {
    /// Register a domain with full contact information.
    ///
    /// `options` controls delegation and lock flags;
    /// [`RegistrationOptions::default()`] mirrors the registrar's own
    /// defaults (parked nameservers, transfer lock on, privacy off).
    pub async fn register_with_contact_info(
        &self,
        domain_name: &str,
        period: u32,
        contacts: &ContactSet,
        options: &RegistrationOptions,
    ) -> Result<DomainRecord> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("Period".to_string(), json!(period));
        fields.insert("NameServerList".to_string(), json!(options.name_servers));
        fields.insert("LockStatus".to_string(), json!(options.epp_lock));
        fields.insert(
            "PrivacyProtectionStatus".to_string(),
            json!(options.privacy_lock),
        );
        fields.extend(parse::contact_set_request(contacts));
        if !options.additional_attributes.is_empty() {
            fields.insert(
                "AdditionalAttributes".to_string(),
                key_value_attributes(
                    options
                        .additional_attributes
                        .iter()
                        .map(|(k, v)| (k.as_str(), v.as_str())),
                ),
            );
        }

        let payload = self
            .call("RegisterWithContactInfo", self.request_with(fields))
            .await?;
        expect_domain_info(&payload, "RegisterWithContactInfo")
    }

    /// Renew a domain for the given period (years).
    pub async fn renew(&self, domain_name: &str, period: u32) -> Result<Renewal> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("Period".to_string(), json!(period));

        let payload = self.call("Renew", self.request_with(fields)).await?;
        match crate::utils::value::text(payload.get("ExpirationDate")) {
            date if date.is_empty() => Err(ApiError::MissingData {
                operation: "Renew".to_string(),
            }),
            expiration_date => Ok(Renewal { expiration_date }),
        }
    }

    /// Start an incoming transfer with the domain's EPP auth code.
    pub async fn transfer(
        &self,
        domain_name: &str,
        auth_code: &str,
        period: u32,
    ) -> Result<DomainRecord> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("AuthCode".to_string(), json!(auth_code));
        // The transfer period travels as an additional attribute, not a
        // top-level request field.
        fields.insert(
            "AdditionalAttributes".to_string(),
            key_value_attributes([("TRANSFERPERIOD", period.to_string().as_str())]),
        );

        let payload = self.call("Transfer", self.request_with(fields)).await?;
        expect_domain_info(&payload, "Transfer")
    }

    /// Stop a pending incoming transfer.
    pub async fn cancel_transfer(&self, domain_name: &str) -> Result<()> {
        self.call("CancelTransfer", self.domain_request(domain_name))
            .await?;
        Ok(())
    }

    /// Approve a pending outgoing transfer.
    pub async fn approve_transfer(&self, domain_name: &str) -> Result<()> {
        self.call("ApproveTransfer", self.domain_request(domain_name))
            .await?;
        Ok(())
    }

    /// Reject a pending outgoing transfer.
    pub async fn reject_transfer(&self, domain_name: &str) -> Result<()> {
        self.call("RejectTransfer", self.domain_request(domain_name))
            .await?;
        Ok(())
    }

    /// Refresh the domain's data from the registry and return the result.
    pub async fn sync_from_registry(&self, domain_name: &str) -> Result<DomainRecord> {
        let payload = self
            .call("SyncFromRegistry", self.domain_request(domain_name))
            .await?;
        expect_domain_info(&payload, "SyncFromRegistry")
    }

    /// Fetch the full details of one domain.
    pub async fn get_details(&self, domain_name: &str) -> Result<DomainRecord> {
        let payload = self
            .call("GetDetails", self.domain_request(domain_name))
            .await?;
        expect_domain_info(&payload, "GetDetails")
    }

    /// List the domains on the account.
    pub async fn get_list(&self, query: &DomainListQuery) -> Result<DomainList> {
        let mut fields = Map::new();
        if let Some(page) = query.page_number {
            fields.insert("PageNumber".to_string(), json!(page));
        }
        if let Some(size) = query.page_size {
            fields.insert("PageSize".to_string(), json!(size));
        }
        for (key, value) in &query.extra {
            fields.insert(key.clone(), value.clone());
        }

        let payload = self.call("GetList", self.request_with(fields)).await?;

        let domains = coerce_sequence(
            payload
                .get("DomainInfoList")
                .and_then(|l| l.get("DomainInfo")),
        )
        .iter()
        .map(parse::domain_record)
        .collect();

        Ok(DomainList {
            domains,
            total_count: u32_value(payload.get("TotalCount")),
        })
    }

    /// Enable or disable WHOIS privacy protection.
    ///
    /// A blank or absent `reason` falls back to `"Owner request"`.
    pub async fn modify_privacy_protection_status(
        &self,
        domain_name: &str,
        status: bool,
        reason: Option<&str>,
    ) -> Result<()> {
        let reason = match reason {
            Some(r) if !r.trim().is_empty() => r,
            _ => DEFAULT_PRIVACY_REASON,
        };

        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("ProtectPrivacy".to_string(), json!(status));
        fields.insert("Reason".to_string(), json!(reason));

        self.call("ModifyPrivacyProtectionStatus", self.request_with(fields))
            .await?;
        Ok(())
    }
}

/// Success payloads for domain mutations carry the refreshed `DomainInfo`;
/// a success without one counts as no data.
fn expect_domain_info(payload: &serde_json::Value, operation: &str) -> Result<DomainRecord> {
    payload
        .get("DomainInfo")
        .filter(|info| info.is_object())
        .map(parse::domain_record)
        .ok_or_else(|| ApiError::MissingData {
            operation: operation.to_string(),
        })
}
