//! Status and role enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Product approval status.
///
/// New listings start as `Pending`. An admin moves them to `Approved` or
/// `Rejected`; there is no transition out of either terminal state except a
/// full edit on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ProductStatus {
    /// Status badge label shown in the products table.
    #[must_use]
    pub const fn label_ar(self) -> &'static str {
        match self {
            Self::Pending => "في الانتظار",
            Self::Approved => "معتمد",
            Self::Rejected => "مرفوض",
        }
    }

    /// CSS class suffix for the badge (`status-<value>`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the approve/reject actions apply.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Marketplace user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Role badge label shown in the users table.
    #[must_use]
    pub const fn label_ar(self) -> &'static str {
        match self {
            Self::User => "مستخدم",
            Self::Admin => "مدير",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: ProductStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, ProductStatus::Approved);
        assert_eq!(
            serde_json::to_string(&ProductStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProductStatus::Approved.label_ar(), "معتمد");
        assert_eq!(ProductStatus::Pending.label_ar(), "في الانتظار");
        assert_eq!(ProductStatus::Rejected.label_ar(), "مرفوض");
        assert!(ProductStatus::Pending.is_pending());
        assert!(!ProductStatus::Approved.is_pending());
    }

    #[test]
    fn test_role_roundtrip_through_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::User.to_string(), "user");
        assert!("root".parse::<UserRole>().is_err());
    }
}
