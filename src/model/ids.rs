//! Unique identifiers for profile entities
//!
//! Each entity type has its own id type to provide type safety and prevent
//! mixing up different kinds of identifiers. Unlike a purely in-memory
//! simulation, profile entities (accounts, cash flows, debts, life events,
//! tax options) are authored and edited by a surrounding UI across sessions,
//! so ids are caller-supplied strings rather than engine-assigned integers.

use serde::{Deserialize, Serialize};

/// Unique identifier for an account (liquid or fixed asset) within a profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Unique identifier for a cash flow within a profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CashFlowId(pub String);

/// Unique identifier for a debt within a profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebtId(pub String);

/// Unique identifier for a life event within a profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

/// Unique identifier for a tax option within a jurisdiction file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxOptionId(pub String);

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}

impl From<&str> for CashFlowId {
    fn from(s: &str) -> Self {
        CashFlowId(s.to_string())
    }
}

impl From<&str> for DebtId {
    fn from(s: &str) -> Self {
        DebtId(s.to_string())
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

impl From<&str> for TaxOptionId {
    fn from(s: &str) -> Self {
        TaxOptionId(s.to_string())
    }
}
