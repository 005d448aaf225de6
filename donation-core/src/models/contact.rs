use serde::{Deserialize, Serialize};

/// Country preselected on a new form.
pub const DEFAULT_COUNTRY: &str = "Australia";

/// Donor identity fields collected by the personal details section.
///
/// Format checks (email shape, postcode shape) belong to the presentation
/// layer; the core only requires the fields to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub postcode: String,
    pub country: String,
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            postcode: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl PersonalDetails {
    /// Names of the required fields that are blank after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("postcode", &self.postcode),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Opt-ins carried through to submission unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationPreferences {
    pub subscribe_to_updates: bool,
    pub subscribe_to_newsletter: bool,
    pub connect_to_community: bool,
    /// Code from the referral catalog, if the donor picked one.
    pub referral_source: Option<String>,
}

impl Default for CommunicationPreferences {
    fn default() -> Self {
        Self {
            subscribe_to_updates: true,
            subscribe_to_newsletter: false,
            connect_to_community: false,
            referral_source: None,
        }
    }
}
