//! Tip ("support our work") calculation.
//!
//! The tip is layered on top of the donation base and is derived from the
//! donor's tip selection:
//!
//! | Tip type     | Tip amount                       |
//! |--------------|----------------------------------|
//! | `percentage` | donation base × (tip size / 100) |
//! | `dollar`     | tip size                         |
//!
//! The donation base is the sum of the per-charity allocations in specific
//! mode, or the lump sum in default mode.

use rust_decimal::Decimal;

use crate::calculations::AllocationAggregator;
use crate::models::{AllocationType, FormState, TipType};

/// Derives the tip from its five inputs. Stateless and side-effect free.
pub struct TipResolver;

impl TipResolver {
    /// Pre-tip amount under the form's active allocation mode.
    pub fn donation_base(state: &FormState) -> Decimal {
        match state.allocation_type() {
            AllocationType::Specific => {
                AllocationAggregator::total(state.specific_allocations().values())
            }
            AllocationType::Default => state.basic_donation_amount(),
        }
    }

    /// Tip for a given base and selection.
    pub fn tip_amount(
        donation_base: Decimal,
        tip_type: TipType,
        tip_size: Decimal,
    ) -> Decimal {
        match tip_type {
            TipType::Percentage => donation_base * (tip_size / Decimal::ONE_HUNDRED),
            TipType::Dollar => tip_size,
        }
    }

    /// Tip the form should currently carry.
    pub fn resolve(state: &FormState) -> Decimal {
        Self::tip_amount(
            Self::donation_base(state),
            state.tip_type(),
            state.tip_size(),
        )
    }
}
