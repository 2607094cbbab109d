//! # domainnameapi-client
//!
//! An async client for the [DomainNameAPI](https://www.domainnameapi.com/)
//! domain registrar service, wrapping its SOAP API behind a typed,
//! `Result`-returning interface.
//!
//! The service speaks a loosely-shaped SOAP dialect: repeated elements
//! collapse to scalars when singular, payloads hide behind
//! `<Operation>Result` wrappers at varying depth, booleans arrive
//! stringified, and success/failure envelopes differ per operation. This
//! crate normalizes all of that into flat records and one error taxonomy so
//! callers never touch the wire shape.
//!
//! ## Supported operations
//!
//! | Area | Operations |
//! |------|------------|
//! | Domains | register, renew, details, list, sync from registry, privacy protection |
//! | Transfers | start, cancel, approve, reject |
//! | Contacts | get, save (all four roles) |
//! | Child nameservers | add, modify, delete |
//! | Account | availability check, TLD pricing catalog, balance, reseller details |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domainnameapi_client::{DomainApiClient, DomainListQuery, RegistrarConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DomainApiClient::new(RegistrarConfig::new("reseller", "password"));
//!
//!     // Check availability for a couple of TLDs
//!     let verdicts = client
//!         .check_availability(&["example".into()], &["com".into(), "net".into()], None, None)
//!         .await?;
//!     for verdict in &verdicts {
//!         println!("{}.{}: {}", verdict.domain_name, verdict.tld, verdict.status);
//!     }
//!
//!     // List domains on the account
//!     let list = client.get_list(&DomainListQuery::default()).await?;
//!     println!("{} domains total", list.total_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Registering a domain
//!
//! ```rust,no_run
//! # use domainnameapi_client::*;
//! # async fn example(client: DomainApiClient, contacts: ContactSet) -> Result<()> {
//! let domain = client
//!     .register_with_contact_info(
//!         "example.com",
//!         1,
//!         &contacts,
//!         &RegistrationOptions::default(),
//!     )
//!     .await?;
//! println!("registered, expires {}", domain.dates.expiration);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ApiError>`](ApiError). The variants
//! map onto the four diagnostic levels the protocol distinguishes — see
//! [`ApiError::level()`] and [`FailureLevel`]. Business failures
//! (`OperationResult != "SUCCESS"`) surface as [`ApiError::Operation`];
//! transport and decode failures are caught and mapped, never panicked on.
//! Nothing is retried internally; retry policy belongs to the caller.
//!
//! ## Testing
//!
//! The transport seam is the [`SoapTransport`] trait; tests inject an
//! in-memory mock via [`DomainApiClient::with_transport`] instead of
//! touching the network.

mod client;
mod error;
mod parse;
mod soap;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, FailureLevel, Result};

// Re-export the client and the transport seam
pub use client::DomainApiClient;
pub use soap::HttpSoapTransport;
pub use traits::SoapTransport;

// Re-export types
pub use types::{
    AvailabilityRecord, BalanceRecord, ChildNameServerRecord, ContactAddress, ContactIds,
    ContactRecord, ContactSet, DEFAULT_NAME_SERVERS, DomainDates, DomainList, DomainListQuery,
    DomainRecord, PhoneNumber, RegistrarConfig, RegistrationOptions, Renewal, ResellerRecord,
    TldRecord,
};

// Re-export utils module
pub use utils::datetime;
