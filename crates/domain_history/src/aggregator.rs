//! History aggregation

use domain_claims::Claim;
use domain_policy::InsurancePolicy;

use crate::item::{HistoryEventKind, HistoryItem};

/// Builds the chronological history of one car
///
/// Every policy yields a start and an end event, every claim one event.
/// Events are ordered by date; events on the same date keep the order they
/// were generated in (policies before claims, each in input order), so
/// callers should pass records in insertion order.
pub fn build_history(policies: &[InsurancePolicy], claims: &[Claim]) -> Vec<HistoryItem> {
    let mut items = Vec::with_capacity(policies.len() * 2 + claims.len());

    for policy in policies {
        items.push(HistoryItem {
            date: policy.start_date,
            event_type: HistoryEventKind::PolicyStart,
            description: format!(
                "Provider: {}, Valid until: {}",
                policy.provider,
                policy.end_date.format("%Y-%m-%d")
            ),
        });
        items.push(HistoryItem {
            date: policy.end_date,
            event_type: HistoryEventKind::PolicyEnd,
            description: format!("Provider: {}", policy.provider),
        });
    }

    for claim in claims {
        items.push(HistoryItem {
            date: claim.claim_date,
            event_type: HistoryEventKind::Claim,
            description: format!("Description: {}, Amount: {}", claim.description, claim.amount),
        });
    }

    // sort_by_key is stable
    items.sort_by_key(|item| item.date);
    items
}
