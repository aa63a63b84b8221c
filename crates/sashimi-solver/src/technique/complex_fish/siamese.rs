//! Siamese merging: fish sharing a digit and base houses but differing in
//! cover houses are reported as one result.

use std::collections::{HashMap, HashSet};

use log::debug;
use sashimi_core::{Digit, HouseSet};

use super::{ComplexFishStep, FishStep, SiameseFishStep};

/// Merges qualifying groups of `steps` into Siamese results.
///
/// Steps are grouped by digit and base houses. A group merges when it holds
/// at least two distinct cover sets and at least two distinct elimination
/// sets. The merged result takes the place of the group's first member;
/// the other members are dropped, and every other step is kept in order.
pub(crate) fn merge(steps: Vec<ComplexFishStep>) -> Vec<FishStep> {
    let mut groups: HashMap<(Digit, HouseSet), Vec<usize>> = HashMap::new();
    for (i, step) in steps.iter().enumerate() {
        groups
            .entry((step.digit(), step.base()))
            .or_default()
            .push(i);
    }

    let mut merged_group_of = vec![None; steps.len()];
    for members in groups.values() {
        let covers: HashSet<_> = members.iter().map(|&i| steps[i].cover()).collect();
        let eliminations: HashSet<_> = members.iter().map(|&i| steps[i].eliminations()).collect();
        if covers.len() < 2 || eliminations.len() < 2 {
            continue;
        }
        let leader = members[0];
        for &i in members {
            merged_group_of[i] = Some(leader);
        }
    }

    let mut pending: HashMap<usize, Vec<ComplexFishStep>> = HashMap::new();
    let mut order = Vec::with_capacity(steps.len());
    for (i, step) in steps.into_iter().enumerate() {
        match merged_group_of[i] {
            Some(leader) => {
                if leader == i {
                    order.push(Slot::Merged(leader));
                }
                pending.entry(leader).or_default().push(step);
            }
            None => order.push(Slot::Single(step)),
        }
    }

    order
        .into_iter()
        .filter_map(|slot| match slot {
            Slot::Single(step) => Some(FishStep::Complex(step)),
            Slot::Merged(leader) => pending.remove(&leader).map(|members| {
                let siamese = SiameseFishStep::new(members);
                debug!(
                    "siamese merge: digit {} with {} members",
                    siamese.digit(),
                    siamese.members().len()
                );
                FishStep::Siamese(siamese)
            }),
        })
        .collect()
}

enum Slot {
    Single(ComplexFishStep),
    Merged(usize),
}
