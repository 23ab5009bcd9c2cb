//! Breadth-first routing over room connections.
//! This module exists so route queries read the generated graph without mutating it.
//! It does not own fog-of-war rules; see `visibility`.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use tracing::error;

use crate::dungeon::Dungeon;

/// Shortest room route including both endpoints, or `None` when either id is unknown.
pub fn get_shortest_path(dungeon: &Dungeon, from: u32, to: u32) -> Option<Vec<u32>> {
    dungeon.room(from)?;
    dungeon.room(to)?;
    if from == to {
        return Some(vec![from]);
    }

    let mut came_from = BTreeMap::new();
    let mut queue = VecDeque::from([from]);
    came_from.insert(from, from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return Some(walk_back(&came_from, from, to));
        }
        let Some(room) = dungeon.room(current) else {
            continue;
        };
        for &next in &room.connection_ids {
            if !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    error!(from, to, seed = %dungeon.seed, "no route between rooms of a connected dungeon");
    None
}

fn walk_back(came_from: &BTreeMap<u32, u32>, from: u32, to: u32) -> Vec<u32> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        match came_from.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

pub fn reachable_rooms(dungeon: &Dungeon, start: u32) -> BTreeSet<u32> {
    let mut visited = BTreeSet::new();
    if dungeon.room(start).is_none() {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(room) = dungeon.room(current) else {
            continue;
        };
        for &neighbor in &room.connection_ids {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}
