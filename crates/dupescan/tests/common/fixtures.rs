//! Test fixture loading utilities

use std::path::PathBuf;

use dupescan::Contact;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load and parse a contacts fixture
#[allow(dead_code)]
pub fn load_contacts_fixture(name: &str) -> Vec<Contact> {
    dupescan::load_contacts(fixture_path(&format!("contacts/{}", name)))
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", name, e))
}

/// A contact with every field set
#[allow(dead_code)]
pub fn full_contact(id: &str, email: &str, first: &str, last: &str, phone: &str, company: &str) -> Contact {
    Contact::new(id)
        .with_email(email)
        .with_name(first, last)
        .with_phone(phone)
        .with_company(company)
}
