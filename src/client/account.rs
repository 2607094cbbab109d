//! Account-level operations: balance, availability, TLD catalog, reseller.

use serde_json::{Map, json};

use crate::error::{ApiError, Result};
use crate::parse;
use crate::types::{AvailabilityRecord, BalanceRecord, ResellerRecord, TldRecord};

use super::DomainApiClient;
use super::requests::string_list;

/// Internal currency ID the service expects: 1 = Turkish lira, 2 = US dollar.
/// Unrecognized tokens fall back to USD.
fn currency_unit(token: &str) -> u32 {
    match token.trim().to_uppercase().as_str() {
        "TRY" | "TL" | "1" => 1,
        _ => 2,
    }
}

impl DomainApiClient {
    /// Fetch the account balance for the given currency token
    /// (`"USD"`, `"TRY"`/`"TL"`; `None` means USD).
    pub async fn get_current_balance(&self, currency: Option<&str>) -> Result<BalanceRecord> {
        let currency_id = currency.map_or(2, currency_unit);

        let mut fields = Map::new();
        fields.insert("CurrencyId".to_string(), json!(currency_id));

        let payload = self
            .call("GetCurrentBalance", self.request_with(fields))
            .await?;
        Ok(parse::balance_record(&payload))
    }

    /// Check availability of every SLD/TLD combination.
    ///
    /// `period` defaults to 1 year and `command` to `"create"`; pricing in
    /// the result rows is quoted for that command.
    pub async fn check_availability(
        &self,
        domains: &[String],
        extensions: &[String],
        period: Option<u32>,
        command: Option<&str>,
    ) -> Result<Vec<AvailabilityRecord>> {
        let mut fields = Map::new();
        fields.insert("DomainNameList".to_string(), string_list(domains));
        fields.insert("TldList".to_string(), string_list(extensions));
        fields.insert("Period".to_string(), json!(period.unwrap_or(1)));
        // The request field is misspelled in the service contract.
        fields.insert("Commad".to_string(), json!(command.unwrap_or("create")));

        let payload = self
            .call("CheckAvailability", self.request_with(fields))
            .await?;

        if payload.get("DomainAvailabilityInfoList").is_none() {
            return Err(ApiError::MissingData {
                operation: "CheckAvailability".to_string(),
            });
        }
        Ok(parse::availability_records(&payload))
    }

    /// Fetch the TLD catalog with pricing, `count` entries per page
    /// (default 20).
    pub async fn get_tld_list(&self, count: Option<u32>) -> Result<Vec<TldRecord>> {
        let mut fields = Map::new();
        fields.insert("IncludePriceDefinitions".to_string(), json!(1));
        fields.insert("PageSize".to_string(), json!(count.unwrap_or(20)));

        let payload = self.call("GetTldList", self.request_with(fields)).await?;

        if payload.get("TldInfoList").is_none() {
            return Err(ApiError::MissingData {
                operation: "GetTldList".to_string(),
            });
        }
        Ok(parse::tld_records(&payload))
    }

    /// Fetch the reseller account details with balances resolved.
    pub async fn get_reseller_details(&self) -> Result<ResellerRecord> {
        let mut fields = Map::new();
        fields.insert("CurrencyId".to_string(), json!(2));

        let payload = self
            .call("GetResellerDetails", self.request_with(fields))
            .await?;

        payload
            .get("ResellerInfo")
            .filter(|info| info.is_object())
            .map(parse::reseller_record)
            .ok_or_else(|| ApiError::MissingData {
                operation: "GetResellerDetails".to_string(),
            })
    }
}
