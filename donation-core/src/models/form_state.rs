//! The canonical donation form record.
//!
//! A [`FormState`] lives for one form session. It is mutated field by field
//! through the setters below, each of which re-runs the tip resolver when it
//! touches a tip input, so the derived tip is never stale.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::{
    AllocationType, CharityCatalog, CommunicationPreferences, DonationFrequency, PaymentMethod,
    PersonalDetails, TipType,
};
use crate::calculations::common::clamp_amount;
use crate::calculations::{AllocationAggregator, TipResolver};

/// Tip percentage preselected on a new form.
pub const DEFAULT_TIP_PERCENTAGE: Decimal = Decimal::TEN;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The allocation key set is fixed by the catalog the form was built with.
    #[error("charity '{0}' is not in the catalog")]
    UnknownCharity(String),
}

/// Serialize-only. Built through [`FormState::new`] and the setters, so a
/// stored tip can never disagree with its inputs.
///
/// ```compile_fail
/// fn readable<T: serde::de::DeserializeOwned>() {}
/// readable::<donation_core::FormState>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    donation_frequency: DonationFrequency,
    allocation_type: AllocationType,
    basic_donation_amount: Decimal,
    specific_allocations: BTreeMap<String, Decimal>,
    tip_type: TipType,
    tip_size: Decimal,
    tip_dollar_amount: Decimal,
    personal_details: PersonalDetails,
    communications: CommunicationPreferences,
    payment_method: PaymentMethod,
}

impl FormState {
    /// Creates a form with the session defaults: one-time, default
    /// allocation, $0, 10% tip, credit card, updates opt-in, and a zero
    /// allocation for every charity in `catalog`.
    pub fn new(catalog: &CharityCatalog) -> Self {
        let specific_allocations = catalog
            .slugs()
            .map(|slug| (slug.to_string(), Decimal::ZERO))
            .collect();

        let mut state = Self {
            donation_frequency: DonationFrequency::default(),
            allocation_type: AllocationType::default(),
            basic_donation_amount: Decimal::ZERO,
            specific_allocations,
            tip_type: TipType::Percentage,
            tip_size: DEFAULT_TIP_PERCENTAGE,
            tip_dollar_amount: Decimal::ZERO,
            personal_details: PersonalDetails::default(),
            communications: CommunicationPreferences::default(),
            payment_method: PaymentMethod::default(),
        };
        state.refresh_tip();
        state
    }

    // --- accessors ---

    pub fn donation_frequency(&self) -> DonationFrequency {
        self.donation_frequency
    }

    pub fn allocation_type(&self) -> AllocationType {
        self.allocation_type
    }

    pub fn basic_donation_amount(&self) -> Decimal {
        self.basic_donation_amount
    }

    pub fn specific_allocations(&self) -> &BTreeMap<String, Decimal> {
        &self.specific_allocations
    }

    pub fn charity_allocation(
        &self,
        slug_id: &str,
    ) -> Option<Decimal> {
        self.specific_allocations.get(slug_id).copied()
    }

    pub fn tip_type(&self) -> TipType {
        self.tip_type
    }

    pub fn tip_size(&self) -> Decimal {
        self.tip_size
    }

    /// The derived tip. Always consistent with the tip inputs.
    pub fn tip_dollar_amount(&self) -> Decimal {
        self.tip_dollar_amount
    }

    pub fn personal_details(&self) -> &PersonalDetails {
        &self.personal_details
    }

    pub fn communications(&self) -> &CommunicationPreferences {
        &self.communications
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Sum of the per-charity allocations, regardless of allocation mode.
    pub fn specific_allocations_total(&self) -> Decimal {
        AllocationAggregator::total(self.specific_allocations.values())
    }

    /// Pre-tip amount under the active allocation mode.
    pub fn donation_base(&self) -> Decimal {
        TipResolver::donation_base(self)
    }

    /// Donation base plus tip.
    pub fn total(&self) -> Decimal {
        self.donation_base() + self.tip_dollar_amount
    }

    // --- mutators ---

    pub fn set_donation_frequency(
        &mut self,
        frequency: DonationFrequency,
    ) {
        self.donation_frequency = frequency;
    }

    /// Switches the live amount model. The inactive model keeps its values.
    pub fn set_allocation_type(
        &mut self,
        allocation_type: AllocationType,
    ) {
        self.allocation_type = allocation_type;
        self.refresh_tip();
    }

    /// Sets the lump-sum amount, clamped into `0..=MAXIMUM_AMOUNT`.
    pub fn set_basic_donation_amount(
        &mut self,
        amount: Decimal,
    ) {
        self.basic_donation_amount = clamp_amount(amount);
        self.refresh_tip();
    }

    /// Sets one charity's share, clamped into `0..=MAXIMUM_AMOUNT`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownCharity`] if `slug_id` was not in the
    /// catalog the form was created with.
    pub fn set_charity_allocation(
        &mut self,
        slug_id: &str,
        amount: Decimal,
    ) -> Result<(), FormError> {
        let slot = self
            .specific_allocations
            .get_mut(slug_id)
            .ok_or_else(|| FormError::UnknownCharity(slug_id.to_string()))?;
        *slot = clamp_amount(amount);
        self.refresh_tip();
        Ok(())
    }

    /// Sets the tip selection. Size and type change together, as they do
    /// in the tip selector. The size is clamped into `0..=MAXIMUM_AMOUNT`.
    pub fn set_tip(
        &mut self,
        tip_size: Decimal,
        tip_type: TipType,
    ) {
        self.tip_size = clamp_amount(tip_size);
        self.tip_type = tip_type;
        self.refresh_tip();
    }

    pub fn set_payment_method(
        &mut self,
        payment_method: PaymentMethod,
    ) {
        self.payment_method = payment_method;
    }

    pub fn personal_details_mut(&mut self) -> &mut PersonalDetails {
        &mut self.personal_details
    }

    pub fn communications_mut(&mut self) -> &mut CommunicationPreferences {
        &mut self.communications
    }

    /// Re-runs the tip resolver and stores the result.
    ///
    /// Returns `true` only if the stored tip changed; an unchanged value is
    /// not written.
    pub fn refresh_tip(&mut self) -> bool {
        let tip = TipResolver::resolve(self);
        if tip == self.tip_dollar_amount {
            return false;
        }
        debug!(
            previous = %self.tip_dollar_amount,
            current = %tip,
            tip_type = self.tip_type.as_str(),
            "tip recomputed"
        );
        self.tip_dollar_amount = tip;
        true
    }
}
