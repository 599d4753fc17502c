use std::fmt;

use paperdesk_store::Fields;
use serde::{Deserialize, Serialize};

/// A catalog title customers subscribe to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub name: String,

    /// Price per issue, in dollars.
    pub price: f64,

    #[serde(rename = "type")]
    pub kind: PublicationType,

    pub frequency: Frequency,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    #[default]
    Newspaper,
    Magazine,
    Journal,
}

impl PublicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationType::Newspaper => "newspaper",
            PublicationType::Magazine => "magazine",
            PublicationType::Journal => "journal",
        }
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue frequency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial publication update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicationPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<PublicationType>,
    pub frequency: Option<Frequency>,
}

impl Fields for Publication {
    type Patch = PublicationPatch;
    const ENTITY: &'static str = "publication";

    fn merge(&mut self, patch: PublicationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
    }
}
