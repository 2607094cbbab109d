//! Contact operations for the four required roles.

use serde_json::Map;
use serde_json::json;

use crate::error::{ApiError, Result};
use crate::parse;
use crate::types::ContactSet;

use super::DomainApiClient;

impl DomainApiClient {
    /// Fetch all four contacts of a domain.
    ///
    /// The service returns the roles as four separate structures; a success
    /// payload missing any role counts as no data.
    pub async fn get_contacts(&self, domain_name: &str) -> Result<ContactSet> {
        let payload = self
            .call("GetContacts", self.domain_request(domain_name))
            .await?;

        let role = |key: &str| payload.get(key).filter(|v| v.is_object());

        match (
            role("AdministrativeContact"),
            role("BillingContact"),
            role("TechnicalContact"),
            role("RegistrantContact"),
        ) {
            (Some(administrative), Some(billing), Some(technical), Some(registrant)) => {
                Ok(ContactSet {
                    administrative: parse::contact_record(administrative),
                    billing: parse::contact_record(billing),
                    technical: parse::contact_record(technical),
                    registrant: parse::contact_record(registrant),
                })
            }
            _ => Err(ApiError::MissingData {
                operation: "GetContacts".to_string(),
            }),
        }
    }

    /// Replace all four contacts of a domain.
    pub async fn save_contacts(&self, domain_name: &str, contacts: &ContactSet) -> Result<()> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.extend(parse::contact_set_request(contacts));

        self.call("SaveContacts", self.request_with(fields)).await?;
        Ok(())
    }
}
