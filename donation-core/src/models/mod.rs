mod charity;
mod choices;
mod contact;
mod form_state;
mod referral;

pub use charity::{CatalogError, Charity, CharityCatalog, CharityCategory, CharityGroup};
pub use choices::{AllocationType, DonationFrequency, PaymentMethod, TipType};
pub use contact::{CommunicationPreferences, DEFAULT_COUNTRY, PersonalDetails};
pub use form_state::{FormError, FormState};
pub use referral::{ReferralCatalog, ReferralSource};
