//! Room connectivity: a random spanning tree rooted at the entrance plus a few cycle edges.

use crate::seed::Mulberry32;

const CYCLE_EDGE_RATIO: f64 = 0.2;

/// Adjacency lists indexed by room id. Edges are undirected and never duplicated.
pub(super) fn build_room_graph(room_count: usize, rng: &mut Mulberry32) -> Vec<Vec<u32>> {
    let mut adjacency = vec![Vec::new(); room_count];

    for room in 1..room_count {
        let parent = rng.below(room);
        connect(&mut adjacency, parent, room);
    }

    let extra_edges = ((room_count as f64 * CYCLE_EDGE_RATIO) as usize).max(1);
    for _ in 0..extra_edges {
        let a = rng.below(room_count);
        let b = rng.below(room_count);
        if a != b && !adjacency[a].contains(&(b as u32)) {
            connect(&mut adjacency, a, b);
        }
    }

    adjacency
}

fn connect(adjacency: &mut [Vec<u32>], a: usize, b: usize) {
    adjacency[a].push(b as u32);
    adjacency[b].push(a as u32);
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use super::*;

    fn reachable_from_entrance(adjacency: &[Vec<u32>]) -> usize {
        let mut seen = BTreeSet::from([0_u32]);
        let mut open = VecDeque::from([0_u32]);
        while let Some(room) = open.pop_front() {
            for &next in &adjacency[room as usize] {
                if seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn every_room_is_reachable_from_the_entrance() {
        for seed in 0..100_u32 {
            for room_count in [5_usize, 12, 25, 40] {
                let adjacency = build_room_graph(room_count, &mut Mulberry32::new(seed));
                assert_eq!(reachable_from_entrance(&adjacency), room_count, "seed={seed}");
            }
        }
    }

    #[test]
    fn edges_are_symmetric_without_self_loops_or_duplicates() {
        let adjacency = build_room_graph(30, &mut Mulberry32::new(77));
        for (room, neighbors) in adjacency.iter().enumerate() {
            let unique: BTreeSet<_> = neighbors.iter().collect();
            assert_eq!(unique.len(), neighbors.len(), "duplicate edge at {room}");
            for &neighbor in neighbors {
                assert_ne!(neighbor as usize, room);
                assert!(adjacency[neighbor as usize].contains(&(room as u32)));
            }
        }
    }

    #[test]
    fn edge_count_is_tree_plus_at_most_the_cycle_budget() {
        let room_count = 20;
        let adjacency = build_room_graph(room_count, &mut Mulberry32::new(3));
        let edges = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
        assert!(edges >= room_count - 1);
        assert!(edges <= room_count - 1 + 4);
    }

    #[test]
    fn cycles_appear_across_seeds() {
        let with_cycles = (0..50_u32)
            .filter(|&seed| {
                let adjacency = build_room_graph(15, &mut Mulberry32::new(seed));
                adjacency.iter().map(Vec::len).sum::<usize>() / 2 > 14
            })
            .count();
        assert!(with_cycles > 0, "at least some graphs should carry a cycle edge");
    }
}
