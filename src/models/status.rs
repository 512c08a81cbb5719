use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Paid,
    Declined,
    Error,
    Cancelled,
    /// Refund only: money has left the merchant account.
    Debited,
}

impl PaymentStatus {
    /// Reads the `status` field of a document returned by a status lookup.
    pub fn from_document(document: &serde_json::Value) -> Option<Self> {
        document
            .get("status")
            .and_then(|s| s.as_str())
            .and_then(|s| s.parse().ok())
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, PaymentStatus::Created | PaymentStatus::Debited)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Created => write!(f, "CREATED"),
            PaymentStatus::Paid => write!(f, "PAID"),
            PaymentStatus::Declined => write!(f, "DECLINED"),
            PaymentStatus::Error => write!(f, "ERROR"),
            PaymentStatus::Cancelled => write!(f, "CANCELLED"),
            PaymentStatus::Debited => write!(f, "DEBITED"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CREATED" => Ok(PaymentStatus::Created),
            "PAID" => Ok(PaymentStatus::Paid),
            "DECLINED" => Ok(PaymentStatus::Declined),
            "ERROR" => Ok(PaymentStatus::Error),
            "CANCELLED" => Ok(PaymentStatus::Cancelled),
            "DEBITED" => Ok(PaymentStatus::Debited),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_document() {
        assert_eq!(
            PaymentStatus::from_document(&json!({"status": "PAID"})),
            Some(PaymentStatus::Paid)
        );
        assert_eq!(
            PaymentStatus::from_document(&json!({"status": "DEBITED", "amount": 100})),
            Some(PaymentStatus::Debited)
        );
        assert_eq!(PaymentStatus::from_document(&json!({"status": "FROZEN"})), None);
        assert_eq!(PaymentStatus::from_document(&json!({})), None);
    }

    #[test]
    fn test_final_states() {
        assert!(!PaymentStatus::Created.is_final());
        assert!(PaymentStatus::Paid.is_final());
        assert!(PaymentStatus::Declined.is_final());
    }
}
