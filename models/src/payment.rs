//! Payment history DTOs.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// A collection payment recorded against a case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier (backend-assigned string).
    pub id: String,
    /// Case this payment was recorded against.
    pub case_id: String,
    /// Amount received.
    pub amount: f64,
    /// Instrument used.
    pub mode: PaymentMode,
    /// Instrument reference (UTR, cheque number), if any.
    pub reference_number: Option<String>,
    /// Receipt number issued to the borrower, if any.
    pub receipt_number: Option<String>,
    /// ISO 8601 timestamp of the payment.
    pub paid_at: String,
    /// Officer who received the payment.
    pub received_by: String,
    /// Settlement status.
    pub status: PaymentStatus,
}

/// Payment instrument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    #[default]
    Cash,
    Upi,
    Cheque,
    BankTransfer,
}

impl PaymentMode {
    /// Wire string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Upi => "upi",
            Self::Cheque => "cheque",
            Self::BankTransfer => "bank_transfer",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Upi => "UPI",
            Self::Cheque => "Cheque",
            Self::BankTransfer => "Bank Transfer",
        }
    }

    /// All modes offered in the record-payment form, in display order.
    pub const ALL: [Self; 4] = [Self::Cash, Self::Upi, Self::Cheque, Self::BankTransfer];
}

impl std::str::FromStr for PaymentMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "upi" => Ok(Self::Upi),
            "cheque" => Ok(Self::Cheque),
            "bank_transfer" => Ok(Self::BankTransfer),
            _ => Err(UnknownVariant {
                kind: "payment mode",
                value: s.to_owned(),
            }),
        }
    }
}

/// Settlement status of a recorded payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Recorded but not yet cleared (cheque in clearing, UPI pending).
    #[default]
    Pending,
    /// Funds confirmed.
    Confirmed,
    /// Instrument bounced; dues reinstated.
    Bounced,
}

impl PaymentStatus {
    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Bounced => "Bounced",
        }
    }
}
