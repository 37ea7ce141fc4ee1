//! Card identity assignment.
//!
//! Every requested copy becomes a `CardInstance` carrying its asset's
//! packed slot. Output order is request order, then copy order within a
//! request, so identical inputs always give identical composite IDs.

use crate::cards::{CardInstance, CardRequest};
use crate::core::{DeckError, Result};
use crate::packing::PackingPlan;

/// Expand requests into card instances using a packing plan.
///
/// Fails with `UnresolvedAsset` if a request with a non-zero count names
/// an asset the plan did not pack.
pub fn assign_identities(requests: &[CardRequest], plan: &PackingPlan) -> Result<Vec<CardInstance>> {
    let total: usize = requests.iter().map(|r| r.count as usize).sum();
    let mut cards = Vec::with_capacity(total);

    for request in requests {
        if request.count == 0 {
            continue;
        }
        let slot = plan
            .slot_of(&request.asset_id)
            .ok_or_else(|| DeckError::UnresolvedAsset {
                asset_id: request.asset_id.clone(),
                position: request.position,
            })?;

        for _ in 0..request.count {
            cards.push(CardInstance::new(
                cards.len(),
                request.asset_id.clone(),
                slot,
                plan.capacity(),
                request.position,
            ));
        }
    }

    Ok(cards)
}
