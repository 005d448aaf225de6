use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationFrequency {
    #[default]
    OneTime,
    Monthly,
}

impl DonationFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "one-time" => Some(Self::OneTime),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Selects which amount model is authoritative for the donation base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationType {
    /// A single lump sum split by the organisation.
    #[default]
    Default,
    /// A donor-directed amount per charity.
    Specific,
}

impl AllocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Specific => "specific",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "specific" => Some(Self::Specific),
            _ => None,
        }
    }
}

/// How `tip_size` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipType {
    /// `tip_size` is a percent of the donation base.
    #[default]
    Percentage,
    /// `tip_size` is a fixed dollar amount.
    Dollar,
}

impl TipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Dollar => "dollar",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "percentage" => Some(Self::Percentage),
            "dollar" => Some(Self::Dollar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::BankTransfer => "bank-transfer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credit-card" => Some(Self::CreditCard),
            "bank-transfer" => Some(Self::BankTransfer),
            _ => None,
        }
    }

    /// Long display name used by the payment method selector.
    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_round_trip_through_parse() {
        for f in [DonationFrequency::OneTime, DonationFrequency::Monthly] {
            assert_eq!(DonationFrequency::parse(f.as_str()), Some(f));
        }
        for a in [AllocationType::Default, AllocationType::Specific] {
            assert_eq!(AllocationType::parse(a.as_str()), Some(a));
        }
        for t in [TipType::Percentage, TipType::Dollar] {
            assert_eq!(TipType::parse(t.as_str()), Some(t));
        }
        for p in [PaymentMethod::CreditCard, PaymentMethod::BankTransfer] {
            assert_eq!(PaymentMethod::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(DonationFrequency::parse("weekly"), None);
        assert_eq!(AllocationType::parse("Specific"), None);
        assert_eq!(TipType::parse(""), None);
        assert_eq!(PaymentMethod::parse("paypal"), None);
    }

    #[test]
    fn defaults_match_a_fresh_form() {
        assert_eq!(DonationFrequency::default(), DonationFrequency::OneTime);
        assert_eq!(AllocationType::default(), AllocationType::Default);
        assert_eq!(TipType::default(), TipType::Percentage);
        assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
    }
}
