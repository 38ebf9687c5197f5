//! Integration of new records into a key's existing timeline
//!
//! A key's batch is resolved against a snapshot of its stored records taken
//! once at the start of the batch. Records removed mid-batch stay visible
//! as dead slots, and records inserted mid-batch are not visible at all, so
//! a resolution never reacts to its own edits.

use chrono::NaiveDate;

use crate::core::interval::{day_after, day_before};
use crate::core::record::TemporalRecord;

/// One snapshotted existing record under reconciliation.
///
/// A slot removed by a containment match keeps its place in the list with
/// `live` unset; later records of the same batch still match against it,
/// and any edit made to it is dropped when the batch result is assembled.
#[derive(Debug)]
struct Slot {
    record: TemporalRecord,
    live: bool,
}

/// How one overlapping existing record yields to a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlapAction {
    /// The existing record lies entirely within the new record's span.
    Remove,
    /// The existing record starts earlier and keeps the days before the
    /// new record's start.
    TruncateEnd(NaiveDate),
    /// The existing record extends past the new record's bounded end and
    /// keeps the days after it.
    TruncateStart(NaiveDate),
}

/// Outcome of integrating a single new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Integration {
    /// An existing record with the same start absorbed the update in place.
    Updated,
    /// Overlapping records were resolved; the new record must be inserted.
    Resolved,
    /// Nothing matched; the new record stands alone.
    Unmatched,
}

/// Apply one key's batch of new records against that key's existing
/// records, returning the key's records after reconciliation, sorted by
/// start.
pub(super) fn reconcile(
    existing: Vec<TemporalRecord>,
    incoming: Vec<TemporalRecord>,
) -> Vec<TemporalRecord> {
    let mut slots: Vec<Slot> = existing
        .into_iter()
        .map(|record| Slot { record, live: true })
        .collect();
    let mut inserted = Vec::new();

    for record in incoming {
        match integrate(&record, &mut slots) {
            Integration::Updated => {}
            Integration::Resolved | Integration::Unmatched => inserted.push(record),
        }
    }

    let mut merged: Vec<TemporalRecord> = slots
        .into_iter()
        .filter(|slot| slot.live)
        .map(|slot| slot.record)
        .chain(inserted)
        .collect();
    merged.sort_by_key(|record| record.start);
    merged
}

/// Resolve one new record against the snapshot slots.
///
/// The first slot sharing the new record's start absorbs the new end and
/// value, provided the new end is open or unchanged. Otherwise every
/// overlapping slot is classified and adjusted, and the caller inserts the
/// new record. The new record itself is never modified.
fn integrate(new: &TemporalRecord, slots: &mut [Slot]) -> Integration {
    for slot in slots.iter_mut() {
        if slot.record.start == new.start && (new.end.is_none() || new.end == slot.record.end) {
            slot.record.end = new.end;
            slot.record.value = new.value;
            return Integration::Updated;
        }
    }

    let overlapping: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.record.overlaps(new))
        .map(|(idx, _)| idx)
        .collect();
    if overlapping.is_empty() {
        return Integration::Unmatched;
    }

    for idx in overlapping {
        let slot = &mut slots[idx];
        match classify(new, &slot.record) {
            OverlapAction::Remove => slot.live = false,
            OverlapAction::TruncateEnd(end) => slot.record.end = Some(end),
            OverlapAction::TruncateStart(start) => slot.record.start = start,
        }
    }
    Integration::Resolved
}

/// Decide how an overlapping existing record yields to the new one.
///
/// An existing record that both starts before and extends past a bounded
/// new record is truncated on the earlier side only; the days past the new
/// end are not split into a remainder record.
fn classify(new: &TemporalRecord, existing: &TemporalRecord) -> OverlapAction {
    let starts_earlier = existing.start < new.start;
    match (new.end, starts_earlier) {
        (None, false) => OverlapAction::Remove,
        (Some(new_end), false) if existing.end.is_some_and(|end| end <= new_end) => {
            OverlapAction::Remove
        }
        (_, true) => OverlapAction::TruncateEnd(day_before(new.start)),
        (Some(new_end), false) => OverlapAction::TruncateStart(day_after(new_end)),
    }
}
