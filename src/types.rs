use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::utils::datetime::parse_registrar_date;

// ============ Client Configuration ============

/// Reseller account used on the registrar's API endpoint.
const DEMO_USERNAME: &str = "ownername";
const DEMO_PASSWORD: &str = "ownerpass";

/// Credentials and mode for a [`DomainApiClient`](crate::DomainApiClient).
///
/// The username/password pair is sent inside every request body (the service
/// authenticates per call, there is no session). With `test_mode` enabled the
/// client substitutes the registrar's published demo reseller credentials so
/// calls land on the sandbox account instead of the live one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarConfig {
    /// Reseller account name.
    pub username: String,
    /// Reseller account password.
    pub password: String,
    /// Use the registrar's demo reseller account instead of the credentials
    /// above.
    #[serde(default)]
    pub test_mode: bool,
}

impl RegistrarConfig {
    /// Create a production-mode configuration.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            test_mode: false,
        }
    }

    /// Effective username sent on the wire.
    #[must_use]
    pub fn effective_username(&self) -> &str {
        if self.test_mode {
            DEMO_USERNAME
        } else {
            &self.username
        }
    }

    /// Effective password sent on the wire.
    #[must_use]
    pub fn effective_password(&self) -> &str {
        if self.test_mode {
            DEMO_PASSWORD
        } else {
            &self.password
        }
    }
}

// ============ Domain Types ============

/// Contact IDs attached to a domain, one per required role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactIds {
    /// Administrative contact ID.
    pub administrative: String,
    /// Billing contact ID.
    pub billing: String,
    /// Technical contact ID.
    pub technical: String,
    /// Registrant contact ID.
    pub registrant: String,
}

/// Registration/expiration dates of a domain.
///
/// The raw strings are kept exactly as the registry reports them (empty when
/// absent); the typed accessors parse on demand and return `None` for absent
/// or unrecognized values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDates {
    /// Registration date as reported by the registry.
    pub start: String,
    /// Expiration date as reported by the registry.
    pub expiration: String,
    /// Days remaining until expiration, as reported by the registry.
    pub remaining_days: String,
}

impl DomainDates {
    /// Registration date parsed to UTC, if present and well-formed.
    #[must_use]
    pub fn start_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        parse_registrar_date(&self.start)
    }

    /// Expiration date parsed to UTC, if present and well-formed.
    #[must_use]
    pub fn expiration_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        parse_registrar_date(&self.expiration)
    }
}

/// A child (glue) nameserver hosted under the domain itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildNameServerRecord {
    /// Nameserver host name (e.g. `"ns1.example.com"`).
    pub ns: String,
    /// Glue IP addresses registered for the nameserver.
    pub ip_addresses: Vec<String>,
}

/// Flattened view of a domain as held at the registrar.
///
/// The three status flags are string tokens rather than booleans: `"true"` or
/// `"false"` when the registry reported an actual boolean, and `""` when the
/// field was absent. Absence is meaningful and must not collapse to `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Registrar-side domain ID.
    pub id: String,
    /// Domain status (e.g. `"Active"`).
    pub status: String,
    /// Fully qualified domain name.
    pub domain_name: String,
    /// EPP auth code (transfer key), when disclosed.
    pub auth_code: String,
    /// Registrar lock flag token.
    pub lock_status: String,
    /// WHOIS privacy protection flag token.
    pub privacy_protection_status: String,
    /// Whether the domain hosts child nameservers, as a flag token.
    pub is_child_name_server: String,
    /// Contact IDs per role.
    pub contacts: ContactIds,
    /// Registration/expiration dates.
    pub dates: DomainDates,
    /// Delegated nameservers, in registry order.
    pub name_servers: Vec<String>,
    /// TLD-specific additional attributes.
    pub additional: HashMap<String, String>,
    /// Child nameservers with their glue records.
    pub child_name_servers: Vec<ChildNameServerRecord>,
}

/// Result of a domain list query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainList {
    /// Domains in the current page.
    pub domains: Vec<DomainRecord>,
    /// Total number of domains on the account.
    pub total_count: u32,
}

/// Paging/filter parameters for [`get_list`](crate::DomainApiClient::get_list).
///
/// `extra` is merged verbatim into the request for the query fields the
/// service accepts beyond paging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainListQuery {
    /// Page number (1-indexed), service default when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Page size, service default when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Additional raw query fields passed through to the service.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Result of a renewal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Renewal {
    /// New expiration date as reported by the registry.
    pub expiration_date: String,
}

// ============ Contact Types ============

/// Postal address of a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddress {
    /// First address line.
    pub line1: String,
    /// Second address line.
    pub line2: String,
    /// Third address line.
    pub line3: String,
    /// State or province.
    pub state: String,
    /// City.
    pub city: String,
    /// ISO country code (e.g. `"TR"`).
    pub country: String,
    /// Postal code.
    pub zip_code: String,
}

/// Phone or fax number with its country calling code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Subscriber number.
    pub number: String,
    /// Country calling code (e.g. `"90"`).
    pub country_code: String,
}

/// Flattened view of a registrant/admin/billing/technical contact.
///
/// Used both as the parsed output of contact queries and as the input shape
/// for [`save_contacts`](crate::DomainApiClient::save_contacts) and
/// [`register_with_contact_info`](crate::DomainApiClient::register_with_contact_info)
/// (the registrar ignores `id`/`status`/`auth_code` on input).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Registrar-side contact ID.
    pub id: String,
    /// Contact status.
    pub status: String,
    /// Postal address.
    pub address: ContactAddress,
    /// Phone number.
    pub phone: PhoneNumber,
    /// Fax number.
    pub fax: PhoneNumber,
    /// Contact auth code, when disclosed.
    pub auth_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Company or organization name.
    pub company: String,
    /// E-mail address.
    pub email: String,
    /// Contact type token (e.g. `"Contact"`).
    pub contact_type: String,
}

/// The four contact roles every domain must carry.
///
/// Modeled as one field per role so a missing role is unrepresentable when
/// saving or registering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSet {
    /// Administrative contact.
    pub administrative: ContactRecord,
    /// Billing contact.
    pub billing: ContactRecord,
    /// Technical contact.
    pub technical: ContactRecord,
    /// Registrant contact.
    pub registrant: ContactRecord,
}

impl ContactSet {
    /// Use the same contact for all four roles.
    #[must_use]
    pub fn uniform(contact: ContactRecord) -> Self {
        Self {
            administrative: contact.clone(),
            billing: contact.clone(),
            technical: contact.clone(),
            registrant: contact,
        }
    }
}

// ============ Registration Options ============

/// Nameservers the registrar parks fresh registrations on when the caller
/// does not delegate elsewhere.
pub const DEFAULT_NAME_SERVERS: [&str; 2] = ["dns.domainnameapi.com", "web.domainnameapi.com"];

/// Optional knobs for
/// [`register_with_contact_info`](crate::DomainApiClient::register_with_contact_info).
///
/// The defaults mirror the registrar's own: parked nameservers, transfer lock
/// on, privacy protection off, no additional attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOptions {
    /// Nameservers to delegate the new domain to.
    pub name_servers: Vec<String>,
    /// Apply the EPP transfer lock after registration.
    pub epp_lock: bool,
    /// Enable WHOIS privacy protection after registration.
    pub privacy_lock: bool,
    /// TLD-specific additional attributes, sent only when non-empty.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_attributes: HashMap<String, String>,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            name_servers: DEFAULT_NAME_SERVERS.iter().map(ToString::to_string).collect(),
            epp_lock: true,
            privacy_lock: false,
            additional_attributes: HashMap::new(),
        }
    }
}

// ============ Availability Types ============

/// Availability verdict for one domain/TLD combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    /// TLD the verdict applies to.
    pub tld: String,
    /// Second-level domain name that was checked.
    pub domain_name: String,
    /// Availability status token (e.g. `"available"`).
    pub status: String,
    /// Command the pricing applies to (`"create"`, `"transfer"`, ...).
    pub command: String,
    /// Registration period in years the price was quoted for.
    pub period: u32,
    /// Whether the name carries premium (non-standard) pricing.
    pub is_fee: bool,
    /// Quoted price, `0.0` when not quoted.
    pub price: f64,
    /// Currency of the quoted price.
    pub currency: String,
    /// Reason accompanying the status, when given.
    pub reason: String,
}

// ============ TLD / Pricing Types ============

/// A TLD offered by the registrar, with its pricing matrix.
///
/// `pricing` maps the lowercased trade type (`"registration"`, `"renew"`,
/// `"transfer"`, ...) to a period→price table; `currencies` carries the
/// currency name per trade type in parallel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TldRecord {
    /// Registrar-side TLD ID.
    pub id: String,
    /// The extension itself, without a leading dot.
    pub tld: String,
    /// TLD status token.
    pub status: String,
    /// Minimum label length accepted by the registry.
    pub min_chars: u32,
    /// Maximum label length accepted by the registry.
    pub max_chars: u32,
    /// Minimum registration period in years.
    pub min_period: u32,
    /// Maximum registration period in years.
    pub max_period: u32,
    /// Trade type → registration period → price.
    pub pricing: HashMap<String, BTreeMap<u32, f64>>,
    /// Trade type → currency name.
    pub currencies: HashMap<String, String>,
}

// ============ Account Types ============

/// A single balance entry on the reseller account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    /// Balance amount.
    pub balance: f64,
    /// Currency name (e.g. `"USD"`).
    pub currency: String,
    /// Currency symbol (e.g. `"$"`).
    pub symbol: String,
}

/// Reseller account details with the active balance resolved.
///
/// `balance`/`currency`/`symbol` reflect the balance entry whose currency
/// matches the account's configured currency (falling back to the first
/// entry); `balances` lists every entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResellerRecord {
    /// Reseller account ID.
    pub id: String,
    /// Reseller account name.
    pub name: String,
    /// Whether the account status is `Active`.
    pub active: bool,
    /// Active balance amount.
    pub balance: f64,
    /// Active balance currency name.
    pub currency: String,
    /// Active balance currency symbol.
    pub symbol: String,
    /// All balance entries on the account.
    pub balances: Vec<BalanceRecord>,
}
