//! Child (glue) nameserver operations.

use serde_json::{Map, json};

use crate::error::Result;
use crate::types::ChildNameServerRecord;

use super::DomainApiClient;

impl DomainApiClient {
    /// Create a child nameserver under the domain with one glue IP.
    ///
    /// The service acknowledges without echoing the record, so the returned
    /// record restates what was registered.
    pub async fn add_child_name_server(
        &self,
        domain_name: &str,
        name_server: &str,
        ip_address: &str,
    ) -> Result<ChildNameServerRecord> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("ChildNameServer".to_string(), json!(name_server));
        fields.insert("IpAddressList".to_string(), json!([ip_address]));

        self.call("AddChildNameServer", self.request_with(fields))
            .await?;

        Ok(ChildNameServerRecord {
            ns: name_server.to_string(),
            ip_addresses: vec![ip_address.to_string()],
        })
    }

    /// Delete a child nameserver from the domain.
    pub async fn delete_child_name_server(
        &self,
        domain_name: &str,
        name_server: &str,
    ) -> Result<()> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("ChildNameServer".to_string(), json!(name_server));

        self.call("DeleteChildNameServer", self.request_with(fields))
            .await?;
        Ok(())
    }

    /// Replace the glue IP of a child nameserver.
    pub async fn modify_child_name_server(
        &self,
        domain_name: &str,
        name_server: &str,
        ip_address: &str,
    ) -> Result<ChildNameServerRecord> {
        let mut fields = Map::new();
        fields.insert("DomainName".to_string(), json!(domain_name));
        fields.insert("ChildNameServer".to_string(), json!(name_server));
        fields.insert("IpAddressList".to_string(), json!([ip_address]));

        self.call("ModifyChildNameServer", self.request_with(fields))
            .await?;

        Ok(ChildNameServerRecord {
            ns: name_server.to_string(),
            ip_addresses: vec![ip_address.to_string()],
        })
    }
}
