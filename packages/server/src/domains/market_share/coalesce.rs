use crate::common::utils::round2;
use crate::common::Roster;

use super::models::DistItem;

/// Totals within this distance of 100 are left alone before rescaling.
const TOTAL_TOLERANCE: f64 = 1e-4;

/// Fold raw share mentions into the roster's buckets and rescale so the
/// values sum to exactly 100.
///
/// Unresolved names land in the catch-all; repeated names add. Coalescing
/// an already-coalesced distribution returns it unchanged.
pub fn coalesce_distribution(items: &[DistItem], roster: &Roster) -> Vec<DistItem> {
    let mut buckets: Vec<DistItem> = roster
        .companies()
        .iter()
        .map(|name| DistItem::new(*name, 0.0))
        .collect();

    for item in items {
        let slot = roster
            .bucket(&item.name)
            .and_then(|name| roster.position(name));
        if let Some(index) = slot {
            buckets[index].value += item.value.max(0.0);
        }
    }

    let total: f64 = buckets.iter().map(|b| b.value).sum();
    if (total - 100.0).abs() > TOTAL_TOLERANCE {
        if let Some(index) = roster.catch_all().and_then(|name| roster.position(name)) {
            let gap = round2(100.0 - total);
            buckets[index].value = round2(buckets[index].value + gap);
        }
    }

    for bucket in &mut buckets {
        bucket.value = round2(bucket.value);
    }

    renormalize_to_100(buckets, roster)
}

/// Proportionally rescale to a total of 100 (2 decimals), assigning the
/// rounding residue to the roster's drift bucket. A zero total is returned
/// unchanged.
pub fn renormalize_to_100(mut buckets: Vec<DistItem>, roster: &Roster) -> Vec<DistItem> {
    let sum: f64 = buckets.iter().map(|b| b.value).sum();
    if sum <= 0.0 {
        return buckets;
    }

    let factor = 100.0 / sum;
    for bucket in &mut buckets {
        bucket.value = round2(bucket.value * factor);
    }

    let scaled: f64 = buckets.iter().map(|b| b.value).sum();
    let drift = 100.0 - scaled;

    let drift_index = roster
        .drift_bucket()
        .and_then(|name| buckets.iter().position(|b| b.name == name))
        .or_else(|| buckets.len().checked_sub(1));
    let Some(mut index) = drift_index else {
        return buckets;
    };

    // Keep every bucket non-negative.
    if buckets[index].value + drift < 0.0 {
        index = largest_index(&buckets);
    }
    buckets[index].value = round2(buckets[index].value + drift);

    buckets
}

fn largest_index(buckets: &[DistItem]) -> usize {
    buckets
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
        .map(|(index, _)| index)
        .unwrap_or(0)
}
