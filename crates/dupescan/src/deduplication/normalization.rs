//! Field normalization for contact comparison

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::contact::Contact;

/// Comparison view of a contact, built once per record per detection run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedFields {
    pub email: String,
    pub phone: String,
    pub name: String,
    pub company: String,
}

impl NormalizedFields {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            email: normalize_email(contact.email.as_deref()),
            phone: normalize_phone(contact.phone.as_deref()),
            name: full_name(contact.firstname.as_deref(), contact.lastname.as_deref()),
            company: normalize_name(contact.company.as_deref().unwrap_or("")),
        }
    }
}

/// Lower-case and trim an email; absent becomes empty
pub fn normalize_email(email: Option<&str>) -> String {
    email.map(|e| e.trim().to_lowercase()).unwrap_or_default()
}

/// Keep only the digits of a phone number; absent becomes empty
///
/// Country codes are not canonicalized: "+1 555 123 4567" and
/// "555 123 4567" stay different.
pub fn normalize_phone(phone: Option<&str>) -> String {
    phone
        .map(|p| p.chars().filter(|c| c.is_ascii_digit()).collect())
        .unwrap_or_default()
}

/// Normalize a person or company name for comparison
///
/// - Removes diacritics, keeping letters of every script
/// - Removes punctuation
/// - Converts to lowercase
/// - Collapses whitespace and trims
pub fn normalize_name(name: &str) -> String {
    let stripped: String = name
        // Unicode normalize (NFKD to separate combining characters)
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    collapse_whitespace(&stripped.to_lowercase())
        .trim()
        .to_string()
}

/// Join first and last name with a single space, then normalize
pub fn full_name(firstname: Option<&str>, lastname: Option<&str>) -> String {
    normalize_name(&format!(
        "{} {}",
        firstname.unwrap_or(""),
        lastname.unwrap_or("")
    ))
}

/// Collapse runs of whitespace into a single space
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(Some("  JANE@Acme.COM ")), "jane@acme.com");
        assert_eq!(normalize_email(Some("")), "");
        assert_eq!(normalize_email(None), "");
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(Some("(555) 123-4567")), "5551234567");
        assert_eq!(normalize_phone(Some("+1 555.123.4567")), "15551234567");
        assert_eq!(normalize_phone(Some("ext")), "");
        assert_eq!(normalize_phone(None), "");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("ACME INC."), "acme inc");
        assert_eq!(normalize_name("  O'Brien,   Sean  "), "obrien sean");
        assert_eq!(normalize_name("Smith & Sons\tLtd"), "smith sons ltd");
        assert_eq!(normalize_name("..."), "");
    }

    #[test]
    fn test_normalize_name_with_diacritics() {
        assert_eq!(normalize_name("José Müller"), "jose muller");
        assert_eq!(normalize_name("Zoë"), "zoe");
    }

    #[test]
    fn test_normalize_name_keeps_non_latin_letters() {
        assert_eq!(normalize_name("Иван Петров"), "иван петров");
        assert_eq!(normalize_name("王 小明"), "王 小明");
        assert_eq!(normalize_name("Ёлка, ООО"), "елка ооо");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name(Some("Jane"), Some("Doe")), "jane doe");
        assert_eq!(full_name(Some("Jane"), None), "jane");
        assert_eq!(full_name(None, Some("Doe")), "doe");
        assert_eq!(full_name(None, None), "");
    }

    #[test]
    fn test_from_contact() {
        let contact = Contact::new("1")
            .with_email("Jane@Acme.com")
            .with_name("Jane", "Doe")
            .with_phone("555-123-4567")
            .with_company("Acme, Inc.");

        let fields = NormalizedFields::from_contact(&contact);
        assert_eq!(fields.email, "jane@acme.com");
        assert_eq!(fields.phone, "5551234567");
        assert_eq!(fields.name, "jane doe");
        assert_eq!(fields.company, "acme inc");
    }

    #[test]
    fn test_from_empty_contact() {
        assert_eq!(
            NormalizedFields::from_contact(&Contact::new("1")),
            NormalizedFields::default()
        );
    }
}
