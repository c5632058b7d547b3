//! Contact records as handed over by the CRM record source

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, orderable contact identifier.
///
/// CRMs hand ids out either as JSON strings or as integers; both are
/// accepted and stored as text so ordering stays consistent across sources.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawContactId", into = "String")]
pub struct ContactId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContactId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawContactId> for ContactId {
    fn from(raw: RawContactId) -> Self {
        match raw {
            RawContactId::Text(s) => ContactId(s),
            RawContactId::Signed(n) => ContactId(n.to_string()),
            RawContactId::Unsigned(n) => ContactId(n.to_string()),
        }
    }
}

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        ContactId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        ContactId(s.to_string())
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        ContactId(s)
    }
}

impl From<u64> for ContactId {
    fn from(n: u64) -> Self {
        ContactId(n.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single CRM contact. Every field other than `id` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl Contact {
    /// Create a contact with only an id
    pub fn new(id: impl Into<ContactId>) -> Self {
        Self {
            id: id.into(),
            email: None,
            firstname: None,
            lastname: None,
            phone: None,
            company: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// "First Last" with absent parts dropped and outer whitespace trimmed
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or(""),
            self.lastname.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Display-safe projection used in duplicate reports
    pub fn summary(&self) -> ContactSummary {
        ContactSummary {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.display_name(),
            phone: self.phone.clone(),
            company: self.company.clone(),
        }
    }
}

/// Redacted view of a contact carried by a duplicate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
    pub id: ContactId,
    pub email: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string_or_integer() {
        let from_text: ContactId = serde_json::from_str("\"1201\"").unwrap();
        let from_int: ContactId = serde_json::from_str("1201").unwrap();
        assert_eq!(from_text, from_int);
        assert_eq!(serde_json::to_string(&from_int).unwrap(), "\"1201\"");
    }

    #[test]
    fn test_id_beyond_i64_range() {
        let id: ContactId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");

        let negative: ContactId = serde_json::from_str("-5").unwrap();
        assert_eq!(negative.as_str(), "-5");
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let contact: Contact = serde_json::from_str(r#"{"id": 7, "email": null}"#).unwrap();
        assert_eq!(contact, Contact::new("7"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Contact::new("1").with_name("Jane", "Doe").display_name(), "Jane Doe");
        assert_eq!(Contact::new("1").display_name(), "");

        let mut first_only = Contact::new("1");
        first_only.firstname = Some("Jane".to_string());
        assert_eq!(first_only.display_name(), "Jane");
    }

    #[test]
    fn test_summary() {
        let contact = Contact::new("42")
            .with_email("jane@acme.com")
            .with_name("Jane", "Doe")
            .with_phone("555-123-4567")
            .with_company("Acme Inc");

        let summary = contact.summary();
        assert_eq!(summary.id.as_str(), "42");
        assert_eq!(summary.name, "Jane Doe");
        assert_eq!(summary.email.as_deref(), Some("jane@acme.com"));
        assert_eq!(summary.company.as_deref(), Some("Acme Inc"));
    }
}
