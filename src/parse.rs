//! Raw response payloads → canonical records.
//!
//! All functions here are pure and total: missing fields become empty
//! strings/collections, repeated substructures are normalized through
//! [`coerce_sequence`](crate::utils::value::coerce_sequence) whether the
//! SOAP stack delivered them as sequences or collapsed them to a single
//! value.

use serde_json::{Map, Value, json};

use crate::types::{
    AvailabilityRecord, BalanceRecord, ChildNameServerRecord, ContactAddress, ContactIds,
    ContactRecord, DomainDates, DomainRecord, PhoneNumber, ResellerRecord, TldRecord,
};
use crate::utils::value::{
    attribute_map, bool_value, coerce_sequence, f64_value, flag_token, string_sequence, text,
    u32_value,
};

// ============ Domain ============

/// Flatten a raw `DomainInfo` structure.
pub(crate) fn domain_record(raw: &Value) -> DomainRecord {
    DomainRecord {
        id: text(raw.get("Id")),
        status: text(raw.get("Status")),
        domain_name: text(raw.get("DomainName")),
        auth_code: text(raw.get("Auth")),
        lock_status: flag_token(raw.get("LockStatus")),
        privacy_protection_status: flag_token(raw.get("PrivacyProtectionStatus")),
        is_child_name_server: flag_token(raw.get("IsChildNameServer")),
        contacts: ContactIds {
            administrative: text(raw.get("AdministrativeContactId")),
            billing: text(raw.get("BillingContactId")),
            technical: text(raw.get("TechnicalContactId")),
            registrant: text(raw.get("RegistrantContactId")),
        },
        dates: DomainDates {
            start: text(raw.get("StartDate")),
            expiration: text(raw.get("ExpirationDate")),
            remaining_days: text(raw.get("RemainingDay")),
        },
        name_servers: string_sequence(raw.get("NameServerList")),
        additional: attribute_map(raw.get("AdditionalAttributes")),
        child_name_servers: coerce_sequence(raw.get("ChildNameServerInfo"))
            .iter()
            .map(child_name_server)
            .collect(),
    }
}

fn child_name_server(raw: &Value) -> ChildNameServerRecord {
    ChildNameServerRecord {
        ns: text(raw.get("ChildNameServer")),
        ip_addresses: string_sequence(raw.get("IpAddress")),
    }
}

// ============ Contact ============

/// Flatten a raw `ContactInfo` structure.
pub(crate) fn contact_record(raw: &Value) -> ContactRecord {
    ContactRecord {
        id: text(raw.get("Id")),
        status: text(raw.get("Status")),
        address: ContactAddress {
            line1: text(raw.get("AddressLine1")),
            line2: text(raw.get("AddressLine2")),
            line3: text(raw.get("AddressLine3")),
            state: text(raw.get("State")),
            city: text(raw.get("City")),
            country: text(raw.get("Country")),
            zip_code: text(raw.get("ZipCode")),
        },
        phone: PhoneNumber {
            number: text(raw.get("Phone")),
            country_code: text(raw.get("PhoneCountryCode")),
        },
        fax: PhoneNumber {
            number: text(raw.get("Fax")),
            country_code: text(raw.get("FaxCountryCode")),
        },
        auth_code: text(raw.get("Auth")),
        first_name: text(raw.get("FirstName")),
        last_name: text(raw.get("LastName")),
        company: text(raw.get("Company")),
        email: text(raw.get("EMail")),
        contact_type: text(raw.get("Type")),
    }
}

/// Inverse of [`contact_record`]: the flat request shape the service expects
/// for `SaveContacts`/`RegisterWithContactInfo`.
pub(crate) fn contact_request(contact: &ContactRecord) -> Value {
    json!({
        "FirstName": contact.first_name,
        "LastName": contact.last_name,
        "Company": contact.company,
        "EMail": contact.email,
        "Type": contact.contact_type,
        "AddressLine1": contact.address.line1,
        "AddressLine2": contact.address.line2,
        "AddressLine3": contact.address.line3,
        "State": contact.address.state,
        "City": contact.address.city,
        "Country": contact.address.country,
        "ZipCode": contact.address.zip_code,
        "Phone": contact.phone.number,
        "PhoneCountryCode": contact.phone.country_code,
        "Fax": contact.fax.number,
        "FaxCountryCode": contact.fax.country_code,
    })
}

// ============ Availability ============

/// Rows from a `DomainAvailabilityInfoList`, whether the service delivered a
/// sequence or a single collapsed record.
pub(crate) fn availability_records(payload: &Value) -> Vec<AvailabilityRecord> {
    let list = payload
        .get("DomainAvailabilityInfoList")
        .and_then(|l| l.get("DomainAvailabilityInfo"));

    coerce_sequence(list)
        .iter()
        .map(|raw| AvailabilityRecord {
            tld: text(raw.get("Tld")),
            domain_name: text(raw.get("DomainName")),
            status: text(raw.get("Status")),
            command: text(raw.get("Command")),
            period: u32_value(raw.get("Period")),
            is_fee: bool_value(raw.get("IsFee")),
            price: f64_value(raw.get("Price")),
            currency: text(raw.get("Currency")),
            reason: text(raw.get("Reason")),
        })
        .collect()
}

// ============ TLD pricing ============

/// Rows from a `TldInfoList`, each with its pricing matrix.
///
/// Price rows of the same trade type merge into one period→price table;
/// the currency-name map is keyed by the same lowercased trade type.
pub(crate) fn tld_records(payload: &Value) -> Vec<TldRecord> {
    let list = payload.get("TldInfoList").and_then(|l| l.get("TldInfo"));

    coerce_sequence(list).iter().map(tld_record).collect()
}

fn tld_record(raw: &Value) -> TldRecord {
    let mut record = TldRecord {
        id: text(raw.get("Id")),
        tld: text(raw.get("Name")),
        status: text(raw.get("Status")),
        min_chars: u32_value(raw.get("MinCharacterCount")),
        max_chars: u32_value(raw.get("MaxCharacterCount")),
        min_period: u32_value(raw.get("MinRegistrationPeriod")),
        max_period: u32_value(raw.get("MaxRegistrationPeriod")),
        ..TldRecord::default()
    };

    let prices = raw
        .get("PriceInfoList")
        .and_then(|l| l.get("TldPriceInfo"));
    for price in coerce_sequence(prices) {
        let trade_type = text(price.get("TradeType")).to_lowercase();
        if trade_type.is_empty() {
            continue;
        }
        record
            .pricing
            .entry(trade_type.clone())
            .or_default()
            .insert(u32_value(price.get("Period")), f64_value(price.get("Price")));
        record
            .currencies
            .insert(trade_type, text(price.get("CurrencyName")));
    }

    record
}

// ============ Account ============

/// Balance entry from a raw `BalanceInfo` structure.
pub(crate) fn balance_record(raw: &Value) -> BalanceRecord {
    BalanceRecord {
        balance: f64_value(raw.get("Balance")),
        currency: text(raw.get("CurrencyName")),
        symbol: text(raw.get("CurrencySymbol")),
    }
}

/// Reseller details with the active balance resolved.
///
/// The active entry is the one whose currency name matches the account's
/// configured currency code; when nothing matches, the first entry wins.
pub(crate) fn reseller_record(raw: &Value) -> ResellerRecord {
    let configured_code = raw
        .get("CurrencyInfo")
        .map(|c| text(c.get("Code")))
        .unwrap_or_default();

    let balances: Vec<BalanceRecord> = coerce_sequence(
        raw.get("BalanceInfoList")
            .and_then(|l| l.get("BalanceInfo")),
    )
    .iter()
    .map(balance_record)
    .collect();

    let active = balances
        .iter()
        .find(|b| b.currency == configured_code)
        .or_else(|| balances.first())
        .cloned()
        .unwrap_or_else(|| BalanceRecord {
            balance: 0.0,
            currency: String::new(),
            symbol: String::new(),
        });

    ResellerRecord {
        id: text(raw.get("Id")),
        name: text(raw.get("Name")),
        active: text(raw.get("Status")) == "Active",
        balance: active.balance,
        currency: active.currency,
        symbol: active.symbol,
        balances,
    }
}

/// Build the raw request object for a contact set, keyed per role.
pub(crate) fn contact_set_request(contacts: &crate::types::ContactSet) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "AdministrativeContact".to_string(),
        contact_request(&contacts.administrative),
    );
    map.insert(
        "BillingContact".to_string(),
        contact_request(&contacts.billing),
    );
    map.insert(
        "TechnicalContact".to_string(),
        contact_request(&contacts.technical),
    );
    map.insert(
        "RegistrantContact".to_string(),
        contact_request(&contacts.registrant),
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_domain() -> Value {
        json!({
            "Id": 1001,
            "Status": "Active",
            "DomainName": "example.com",
            "Auth": "epp-key",
            "LockStatus": true,
            "PrivacyProtectionStatus": false,
            "AdministrativeContactId": 11,
            "BillingContactId": 12,
            "TechnicalContactId": 13,
            "RegistrantContactId": 14,
            "StartDate": "2023-06-01T00:00:00",
            "ExpirationDate": "2025-06-01T00:00:00",
            "RemainingDay": 120,
            "NameServerList": ["ns1.example.com", "ns2.example.com"],
            "AdditionalAttributes": {
                "KeyValueOfstringstring": [{"Key": "IDNLANG", "Value": "tr"}]
            },
            "ChildNameServerInfo": [
                {"ChildNameServer": "ns1.example.com", "IpAddress": {"string": ["192.0.2.1", "192.0.2.2"]}}
            ]
        })
    }

    #[test]
    fn domain_record_flattens_fields() {
        let record = domain_record(&raw_domain());
        assert_eq!(record.id, "1001");
        assert_eq!(record.domain_name, "example.com");
        assert_eq!(record.auth_code, "epp-key");
        assert_eq!(record.contacts.administrative, "11");
        assert_eq!(record.contacts.registrant, "14");
        assert_eq!(record.dates.expiration, "2025-06-01T00:00:00");
        assert_eq!(record.dates.remaining_days, "120");
        assert_eq!(
            record.name_servers,
            vec!["ns1.example.com", "ns2.example.com"]
        );
        assert_eq!(record.additional.get("IDNLANG").map(String::as_str), Some("tr"));
    }

    #[test]
    fn domain_record_flag_tokens() {
        let record = domain_record(&raw_domain());
        assert_eq!(record.lock_status, "true");
        assert_eq!(record.privacy_protection_status, "false");
        // IsChildNameServer absent: empty token, never "false"
        assert_eq!(record.is_child_name_server, "");
    }

    #[test]
    fn domain_record_bare_nameserver_string() {
        let raw = json!({"Id": 1, "NameServerList": "ns1.example.com"});
        let record = domain_record(&raw);
        assert_eq!(record.name_servers, vec!["ns1.example.com"]);
    }

    #[test]
    fn domain_record_missing_fields_are_empty() {
        let record = domain_record(&json!({}));
        assert_eq!(record.id, "");
        assert_eq!(record.lock_status, "");
        assert!(record.name_servers.is_empty());
        assert!(record.additional.is_empty());
        assert!(record.child_name_servers.is_empty());
    }

    #[test]
    fn child_name_servers_collapsed_single() {
        let raw = json!({
            "ChildNameServerInfo": {
                "ChildNameServer": "ns1.example.com",
                "IpAddress": {"string": "192.0.2.1"}
            }
        });
        let record = domain_record(&raw);
        assert_eq!(record.child_name_servers.len(), 1);
        assert_eq!(record.child_name_servers[0].ns, "ns1.example.com");
        assert_eq!(record.child_name_servers[0].ip_addresses, vec!["192.0.2.1"]);
    }

    #[test]
    fn contact_record_flattens_nested_shape() {
        let raw = json!({
            "Id": 55,
            "Status": "OK",
            "AddressLine1": "123 Main St",
            "City": "Istanbul",
            "Country": "TR",
            "ZipCode": "34000",
            "Phone": "5554445452",
            "PhoneCountryCode": "90",
            "FirstName": "John",
            "LastName": "Doe",
            "Company": "MyCompany Ltd.",
            "EMail": "admin@example.com",
            "Type": "Contact"
        });
        let contact = contact_record(&raw);
        assert_eq!(contact.id, "55");
        assert_eq!(contact.address.line1, "123 Main St");
        assert_eq!(contact.address.line2, "");
        assert_eq!(contact.phone.number, "5554445452");
        assert_eq!(contact.phone.country_code, "90");
        assert_eq!(contact.email, "admin@example.com");
    }

    #[test]
    fn contact_round_trip_through_request_shape() {
        let raw = json!({
            "FirstName": "Jane",
            "LastName": "Smith",
            "EMail": "jane@example.com",
            "AddressLine1": "456 Market St",
            "City": "Ankara",
            "Country": "TR",
            "ZipCode": "06000",
            "Phone": "5554445452",
            "PhoneCountryCode": "90",
            "Type": "Contact"
        });
        let request = contact_request(&contact_record(&raw));
        assert_eq!(request.get("FirstName"), Some(&json!("Jane")));
        assert_eq!(request.get("EMail"), Some(&json!("jane@example.com")));
        assert_eq!(request.get("City"), Some(&json!("Ankara")));
    }

    #[test]
    fn availability_single_match_wrapped() {
        let payload = json!({
            "DomainAvailabilityInfoList": {
                "DomainAvailabilityInfo": {
                    "Tld": "com",
                    "DomainName": "example",
                    "Status": "available",
                    "Command": "create",
                    "Period": 1,
                    "IsFee": false,
                    "Price": 9.99,
                    "Currency": "USD",
                    "Reason": ""
                }
            }
        });
        let rows = availability_records(&payload);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tld, "com");
        assert_eq!(rows[0].domain_name, "example");
        assert_eq!(rows[0].period, 1);
        assert!(!rows[0].is_fee);
        assert_eq!(rows[0].price, 9.99);
    }

    #[test]
    fn availability_multiple_matches() {
        let payload = json!({
            "DomainAvailabilityInfoList": {
                "DomainAvailabilityInfo": [
                    {"Tld": "com", "DomainName": "example", "Status": "notavailable"},
                    {"Tld": "net", "DomainName": "example", "Status": "available"}
                ]
            }
        });
        let rows = availability_records(&payload);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].tld, "net");
    }

    #[test]
    fn tld_pricing_matrix_merges_periods() {
        let payload = json!({
            "TldInfoList": {
                "TldInfo": {
                    "Id": 3,
                    "Name": "com",
                    "Status": "Active",
                    "MinCharacterCount": 3,
                    "MaxCharacterCount": 63,
                    "MinRegistrationPeriod": 1,
                    "MaxRegistrationPeriod": 10,
                    "PriceInfoList": {
                        "TldPriceInfo": [
                            {"TradeType": "Registration", "Period": 1, "Price": 9.99, "CurrencyName": "USD"},
                            {"TradeType": "Registration", "Period": 2, "Price": 19.50, "CurrencyName": "USD"},
                            {"TradeType": "Renew", "Period": 1, "Price": 11.99, "CurrencyName": "USD"}
                        ]
                    }
                }
            }
        });
        let tlds = tld_records(&payload);
        assert_eq!(tlds.len(), 1);
        let tld = &tlds[0];
        assert_eq!(tld.tld, "com");
        assert_eq!(tld.min_chars, 3);

        let registration = tld.pricing.get("registration");
        assert!(registration.is_some(), "expected Some(..), got {registration:?}");
        let Some(registration) = registration else {
            return;
        };
        assert_eq!(registration.get(&1), Some(&9.99));
        assert_eq!(registration.get(&2), Some(&19.50));
        assert_eq!(
            tld.pricing.get("renew").and_then(|p| p.get(&1)),
            Some(&11.99)
        );
        assert_eq!(
            tld.currencies.get("registration").map(String::as_str),
            Some("USD")
        );
    }

    fn raw_reseller(configured: &str) -> Value {
        json!({
            "Id": 7,
            "Name": "Acme Domains",
            "Status": "Active",
            "CurrencyInfo": {"Code": configured},
            "BalanceInfoList": {
                "BalanceInfo": [
                    {"Balance": 50.0, "CurrencyName": "TL", "CurrencySymbol": "₺"},
                    {"Balance": 120.5, "CurrencyName": "USD", "CurrencySymbol": "$"}
                ]
            }
        })
    }

    #[test]
    fn reseller_active_balance_matches_configured_currency() {
        let record = reseller_record(&raw_reseller("USD"));
        assert_eq!(record.id, "7");
        assert!(record.active);
        assert_eq!(record.balance, 120.5);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.symbol, "$");
        assert_eq!(record.balances.len(), 2);
    }

    #[test]
    fn reseller_active_balance_falls_back_to_first() {
        let record = reseller_record(&raw_reseller("EUR"));
        assert_eq!(record.balance, 50.0);
        assert_eq!(record.currency, "TL");
    }

    #[test]
    fn reseller_single_balance_collapsed() {
        let raw = json!({
            "Id": 7,
            "Name": "Acme Domains",
            "Status": "Suspended",
            "CurrencyInfo": {"Code": "USD"},
            "BalanceInfoList": {
                "BalanceInfo": {"Balance": 10.0, "CurrencyName": "USD", "CurrencySymbol": "$"}
            }
        });
        let record = reseller_record(&raw);
        assert!(!record.active);
        assert_eq!(record.balances.len(), 1);
        assert_eq!(record.balance, 10.0);
    }
}
