use std::fmt;

use paperdesk_store::Fields;
use serde::{Deserialize, Serialize};

/// A subscriber of one or more publications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,

    /// Postal address, single line.
    pub address: String,

    /// Phone number, formatted `(123) 456-7890` by the admin forms.
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub status: CustomerStatus,
}

/// Account status. A payload value, not a record lifecycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial customer update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<CustomerStatus>,
}

impl Fields for Customer {
    type Patch = CustomerPatch;
    const ENTITY: &'static str = "customer";

    fn merge(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
