//! Record model shared by the desired and actual sides of a zone.
//!
//! A [`Record`] is built either from a row template (desired side) or from
//! provider data (actual side). Only the actual side carries a [`RecordId`].

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Provider-assigned identifier of a live record. Never compared during diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The record types dozone manages.
///
/// Variant order is the listing precedence: the derived `Ord` sorts NS before
/// MX before TXT before CNAME before AAAA before A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    Ns,
    Mx,
    Txt,
    Cname,
    Aaaa,
    A,
}

impl RecordType {
    /// All managed types in precedence order.
    pub const ALL: [RecordType; 6] = [
        RecordType::Ns,
        RecordType::Mx,
        RecordType::Txt,
        RecordType::Cname,
        RecordType::Aaaa,
        RecordType::A,
    ];

    /// Position in the fixed precedence list (NS = 0 … A = 5).
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Ns => "NS",
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Cname => "CNAME",
            RecordType::Aaaa => "AAAA",
            RecordType::A => "A",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so callers can align the type column with `{:>5}`.
        f.pad(self.as_str())
    }
}

/// Returned when a string is not one of the managed record types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRecordType(pub String);

impl fmt::Display for UnknownRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown record type '{}'; expected: NS, MX, TXT, CNAME, AAAA, A",
            self.0
        )
    }
}

impl std::error::Error for UnknownRecordType {}

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    /// Case-sensitive: the provider only speaks upper-case type names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRecordType(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One DNS record.
///
/// `priority` is `Some` exactly when `record_type` is [`RecordType::Mx`]; the
/// template parser and the provider client both uphold this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub domain_name: String,
    pub record_type: RecordType,
    pub name: String,
    pub data: String,
    pub priority: Option<u16>,
    pub id: Option<RecordId>,
}

impl Record {
    /// A record with no priority and no provider id.
    pub fn new(
        domain_name: impl Into<String>,
        record_type: RecordType,
        name: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            record_type,
            name: name.into(),
            data: data.into(),
            priority: None,
            id: None,
        }
    }

    /// An MX record with its preference value.
    pub fn mx(
        domain_name: impl Into<String>,
        name: impl Into<String>,
        data: impl Into<String>,
        priority: u16,
    ) -> Self {
        Self {
            priority: Some(priority),
            ..Self::new(domain_name, RecordType::Mx, name, data)
        }
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Canonical listing key: `(type rank, name, priority, data)`.
    pub fn sort_key(&self) -> (usize, &str, Option<u16>, &str) {
        (self.record_type.rank(), &self.name, self.priority, &self.data)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.priority {
            Some(p) => write!(f, "{} {} {} {}", self.record_type, self.name, self.data, p),
            None => write!(f, "{} {} {}", self.record_type, self.name, self.data),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_order_follows_precedence() {
        let mut types = vec![
            RecordType::A,
            RecordType::Cname,
            RecordType::Ns,
            RecordType::Aaaa,
            RecordType::Txt,
            RecordType::Mx,
        ];
        types.sort();
        assert_eq!(types, RecordType::ALL.to_vec());
        assert_eq!(RecordType::Ns.rank(), 0);
        assert_eq!(RecordType::A.rank(), 5);
    }

    #[test]
    fn record_type_parse_is_case_sensitive() {
        assert_eq!("CNAME".parse::<RecordType>(), Ok(RecordType::Cname));
        assert!("cname".parse::<RecordType>().is_err());
        assert!("SOA".parse::<RecordType>().is_err());
    }

    #[test]
    fn record_type_display_honours_width() {
        assert_eq!(format!("{:>5}", RecordType::A), "    A");
        assert_eq!(format!("{:>5}", RecordType::Cname), "CNAME");
    }

    #[test]
    fn mx_constructor_sets_priority() {
        let r = Record::mx("example.com", "@", "mail.example.com.", 10);
        assert_eq!(r.record_type, RecordType::Mx);
        assert_eq!(r.priority, Some(10));
        assert!(r.id.is_none());
    }

    #[test]
    fn sort_key_orders_by_type_then_name() {
        let a = Record::new("example.com", RecordType::A, "@", "1.2.3.4");
        let mx = Record::mx("example.com", "@", "mail.example.com", 10);
        let www = Record::new("example.com", RecordType::A, "www", "1.2.3.4");
        assert!(mx.sort_key() < a.sort_key());
        assert!(a.sort_key() < www.sort_key());
    }

    #[test]
    fn sort_key_ranks_infrastructure_before_content() {
        let ns = Record::new("example.com", RecordType::Ns, "zzz", "ns1.example.com.");
        let aaaa = Record::new("example.com", RecordType::Aaaa, "@", "2001:db8::1");
        let a = Record::new("example.com", RecordType::A, "@", "1.2.3.4");
        assert_eq!(ns.sort_key().0, 0);
        assert!(ns.sort_key() < aaaa.sort_key());
        assert!(aaaa.sort_key() < a.sort_key());
    }

    #[test]
    fn record_display() {
        let r = Record::mx("example.com", "@", "mail.example.com", 10);
        assert_eq!(r.to_string(), "MX @ mail.example.com 10");
        let r = Record::new("example.com", RecordType::Txt, "@", "v=spf1 -all");
        assert_eq!(r.to_string(), "TXT @ v=spf1 -all");
    }
}
