//! Canonical linear ordering of all sets in a session.
//!
//! The order answers "what is the next incomplete set": single blocks
//! contribute their sets in array order, superset blocks interleave the
//! sets of their exercises round-robin (round 0 of A1, round 0 of A2,
//! round 1 of A1, ...). An exercise with fewer sets than its partner
//! contributes nothing once exhausted.

use crate::{Block, BlockKind, Set, SetRef};

#[must_use]
pub fn build_traversal_order(blocks: &[Block]) -> Vec<SetRef> {
    let mut order = Vec::new();
    for block in blocks {
        match block.kind {
            BlockKind::Single => {
                for exercise in &block.exercises {
                    for set in &exercise.sets {
                        order.push(SetRef::new(block.id, exercise.id, set.id));
                    }
                }
            }
            BlockKind::Superset { .. } => {
                let rounds = block
                    .exercises
                    .iter()
                    .map(|e| e.sets.len())
                    .max()
                    .unwrap_or(0);
                for round in 0..rounds {
                    for exercise in &block.exercises {
                        if let Some(set) = exercise.sets.get(round) {
                            order.push(SetRef::new(block.id, exercise.id, set.id));
                        }
                    }
                }
            }
        }
    }
    order
}

#[must_use]
pub fn find_first_set_ref(blocks: &[Block]) -> Option<SetRef> {
    build_traversal_order(blocks).into_iter().next()
}

#[must_use]
pub fn find_first_incomplete_set_ref(blocks: &[Block]) -> Option<SetRef> {
    build_traversal_order(blocks)
        .into_iter()
        .find(|set_ref| is_incomplete(blocks, set_ref))
}

/// Finds the next incomplete set strictly after `current` in traversal
/// order. Focus only ever moves forward during live logging: incomplete
/// sets before `current` are not revisited, and there is no wraparound.
/// If `current` is no longer part of the session (e.g. it was just
/// removed), the scan falls back to the first incomplete set overall.
#[must_use]
pub fn find_next_incomplete_set_ref(blocks: &[Block], current: &SetRef) -> Option<SetRef> {
    let order = build_traversal_order(blocks);
    let Some(position) = order.iter().position(|set_ref| set_ref == current) else {
        return find_first_incomplete_set_ref(blocks);
    };
    order[position + 1..]
        .iter()
        .find(|set_ref| is_incomplete(blocks, set_ref))
        .copied()
}

/// Id-based lookup into the block tree. `None` is a valid outcome, not
/// an error: the reference may be stale.
#[must_use]
pub fn resolve_set_ref<'a>(blocks: &'a [Block], set_ref: &SetRef) -> Option<&'a Set> {
    blocks
        .iter()
        .find(|b| b.id == set_ref.block_id)?
        .exercise(set_ref.exercise_id)?
        .set(set_ref.set_id)
}

fn is_incomplete(blocks: &[Block], set_ref: &SetRef) -> bool {
    resolve_set_ref(blocks, set_ref).is_some_and(|set| !set.completed)
}
