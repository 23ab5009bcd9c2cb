//! Fog-of-war over the room graph.
//! Secret rooms are never revealed by adjacency, only by being explored themselves.

use std::collections::BTreeSet;

use crate::dungeon::Dungeon;

pub fn reveal_map(dungeon: &Dungeon, explored_ids: &[u32]) -> BTreeSet<u32> {
    let mut visible = BTreeSet::new();
    for &id in explored_ids {
        let Some(room) = dungeon.room(id) else {
            continue;
        };
        visible.insert(id);
        for &neighbor in &room.connection_ids {
            if dungeon.room(neighbor).is_some_and(|next| !next.is_secret) {
                visible.insert(neighbor);
            }
        }
    }
    visible
}
