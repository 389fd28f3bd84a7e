use crate::{
    foundation::error::{QuestError, QuestResult},
    foundation::math::non_negative,
};

/// Pace used when the configuration does not set one: the last member starts
/// just before one full duration has elapsed.
pub const DEFAULT_PACE: f64 = 1.0;

/// Pace of the densest wave preset: the last member starts
/// `2.5 * duration / total * (total - 1)` ms in.
pub const DENSE_PACE: f64 = 2.5;

/// Start offset (ms) of participant `index` in a party of `party_total`.
///
/// `duration * pace / party_total * index`, so offsets grow linearly with the
/// index and the spread scales with `pace`.
pub fn stagger_delay(
    index: usize,
    party_total: usize,
    duration: f64,
    pace: f64,
) -> QuestResult<f64> {
    if party_total == 0 {
        return Err(QuestError::EmptyParty);
    }
    if index >= party_total {
        return Err(QuestError::validation(format!(
            "participant index {index} out of range for party of {party_total}"
        )));
    }
    let duration = non_negative("duration", duration).map_err(QuestError::validation)?;
    let pace = non_negative("pace", pace).map_err(QuestError::validation)?;
    Ok((duration * pace) / party_total as f64 * index as f64)
}

/// Offsets for every member of a party, in index order.
pub fn stagger_offsets(party_total: usize, duration: f64, pace: f64) -> QuestResult<Vec<f64>> {
    if party_total == 0 {
        return Err(QuestError::EmptyParty);
    }
    (0..party_total)
        .map(|i| stagger_delay(i, party_total, duration, pace))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/plan/stagger.rs"]
mod tests;
