use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a quick-add field value is sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
}

/// One input of the quick-add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Text }
    }

    const fn numeric(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Numeric }
    }
}

/// A backend record type, addressed as `/api/{collection}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[default]
    Trust,
    Beneficiary,
    Trustee,
    Asset,
    Ngo,
    Donation,
}

const TRUST_FIELDS: &[FieldSpec] = &[FieldSpec::text("name"), FieldSpec::text("purpose")];
const BENEFICIARY_FIELDS: &[FieldSpec] = &[FieldSpec::text("full_name"), FieldSpec::text("email")];
const TRUSTEE_FIELDS: &[FieldSpec] = &[FieldSpec::text("full_name"), FieldSpec::text("role")];
const ASSET_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("category"),
    FieldSpec::numeric("value"),
];
const NGO_FIELDS: &[FieldSpec] = &[FieldSpec::text("name"), FieldSpec::text("email")];
const DONATION_FIELDS: &[FieldSpec] = &[FieldSpec::text("ngo_name"), FieldSpec::numeric("amount")];

impl Collection {
    /// Every collection, in the order the quick-add selector lists them.
    pub const ALL: [Collection; 6] = [
        Collection::Trust,
        Collection::Beneficiary,
        Collection::Trustee,
        Collection::Asset,
        Collection::Ngo,
        Collection::Donation,
    ];

    /// Collections that get a list view on the dashboard.
    pub const LISTED: [Collection; 4] = [
        Collection::Trust,
        Collection::Beneficiary,
        Collection::Asset,
        Collection::Ngo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Trust => "trust",
            Collection::Beneficiary => "beneficiary",
            Collection::Trustee => "trustee",
            Collection::Asset => "asset",
            Collection::Ngo => "ngo",
            Collection::Donation => "donation",
        }
    }

    /// Singular label used in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Trust => "Trust",
            Collection::Beneficiary => "Beneficiary",
            Collection::Trustee => "Trustee",
            Collection::Asset => "Asset",
            Collection::Ngo => "NGO",
            Collection::Donation => "Donation",
        }
    }

    /// Plural heading used above a list view.
    pub fn list_title(&self) -> &'static str {
        match self {
            Collection::Trust => "Trusts",
            Collection::Beneficiary => "Beneficiaries",
            Collection::Trustee => "Trustees",
            Collection::Asset => "Assets",
            Collection::Ngo => "NGOs",
            Collection::Donation => "Donations",
        }
    }

    /// The fields the quick-add form shows and sends for this collection.
    pub fn quick_add_fields(&self) -> &'static [FieldSpec] {
        match self {
            Collection::Trust => TRUST_FIELDS,
            Collection::Beneficiary => BENEFICIARY_FIELDS,
            Collection::Trustee => TRUSTEE_FIELDS,
            Collection::Asset => ASSET_FIELDS,
            Collection::Ngo => NGO_FIELDS,
            Collection::Donation => DONATION_FIELDS,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}
