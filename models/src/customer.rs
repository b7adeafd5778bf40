//! Customer, address, co-applicant, and KYC document DTOs.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use serde::{Deserialize, Serialize};

use crate::case::GeoPoint;

/// A borrower with full contact details and addresses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier (backend-assigned string).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Primary contact number.
    pub phone: String,
    /// Email, if on file.
    pub email: Option<String>,
    /// PAN (income-tax ID), if on file.
    pub pan: Option<String>,
    /// All addresses on file.
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// One postal address on a customer's file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// What the address is used as.
    pub kind: AddressKind,
    /// Street line 1.
    pub line1: String,
    /// Street line 2, if any.
    pub line2: Option<String>,
    /// City or town.
    pub city: String,
    /// State.
    pub state: String,
    /// 6-digit postal code.
    pub pincode: String,
    /// Geocoded coordinates, if captured.
    pub geo: Option<GeoPoint>,
}

/// Usage classification of an address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    #[default]
    Residence,
    Office,
    Permanent,
}

impl AddressKind {
    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Residence => "Residence",
            Self::Office => "Office",
            Self::Permanent => "Permanent",
        }
    }

    /// All kinds offered in the add-address form, in display order.
    pub const ALL: [Self; 3] = [Self::Residence, Self::Office, Self::Permanent];
}

/// A secondary party linked to a loan file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Associate {
    /// Full name.
    pub name: String,
    /// Relationship to the loan.
    pub role: AssociateRole,
    /// Contact number.
    pub phone: String,
    /// Free-text relation note (e.g. "brother", "employer"), if any.
    pub relation: Option<String>,
}

/// How an associate is linked to the loan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociateRole {
    #[default]
    CoApplicant,
    Guarantor,
    Reference,
}

impl AssociateRole {
    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CoApplicant => "Co-applicant",
            Self::Guarantor => "Guarantor",
            Self::Reference => "Reference",
        }
    }

    /// All roles offered in the associates form, in display order.
    pub const ALL: [Self; 3] = [Self::CoApplicant, Self::Guarantor, Self::Reference];
}

/// An uploaded KYC document as the backend lists it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KycDocument {
    /// Document identifier (backend-assigned string).
    pub id: String,
    /// Document category.
    pub kind: DocumentKind,
    /// Original upload file name.
    pub file_name: String,
    /// ISO 8601 timestamp of the upload.
    pub uploaded_at: String,
}

/// KYC document category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    #[default]
    Pan,
    Aadhaar,
    Photo,
    AddressProof,
    BankStatement,
}

impl DocumentKind {
    /// Wire string for this kind, used in upload form fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Aadhaar => "aadhaar",
            Self::Photo => "photo",
            Self::AddressProof => "address_proof",
            Self::BankStatement => "bank_statement",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pan => "PAN Card",
            Self::Aadhaar => "Aadhaar",
            Self::Photo => "Photograph",
            Self::AddressProof => "Address Proof",
            Self::BankStatement => "Bank Statement",
        }
    }

    /// All kinds offered in the upload form, in display order.
    pub const ALL: [Self; 5] = [
        Self::Pan,
        Self::Aadhaar,
        Self::Photo,
        Self::AddressProof,
        Self::BankStatement,
    ];
}

impl std::str::FromStr for DocumentKind {
    type Err = crate::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pan" => Ok(Self::Pan),
            "aadhaar" => Ok(Self::Aadhaar),
            "photo" => Ok(Self::Photo),
            "address_proof" => Ok(Self::AddressProof),
            "bank_statement" => Ok(Self::BankStatement),
            _ => Err(crate::UnknownVariant {
                kind: "document kind",
                value: s.to_owned(),
            }),
        }
    }
}
