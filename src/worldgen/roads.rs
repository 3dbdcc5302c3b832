//! Road network (§4.10): Kruskal MST over settlement pairs weighted by
//! distance-per-importance, plus a bounded set of highway extras, each edge
//! materialised by A* over the movement-cost grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashMap;

use crate::core::position::Position;
use crate::world::{LocationKind, World};
use crate::worldgen::movement;

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

struct Edge {
    a: usize,
    b: usize,
    importance: u32,
    distance: f64,
}

fn roadable_settlements(world: &World) -> Vec<(String, Position, LocationKind)> {
    world
        .locations
        .iter()
        .filter(|(_, loc)| !loc.is_destroyed && loc.kind.is_roadable())
        .map(|(id, loc)| (id.clone(), loc.position, loc.kind))
        .collect()
}

fn build_edges(nodes: &[(String, Position, LocationKind)]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let distance = nodes[i].1.euclidean_distance(&nodes[j].1);
            if distance > 30.0 {
                continue;
            }
            let importance = nodes[i].2.road_importance() + nodes[j].2.road_importance();
            edges.push(Edge { a: i, b: j, importance, distance });
        }
    }
    edges.sort_by(|a, b| {
        let key_a = if a.importance == 0 { f64::INFINITY } else { a.distance / a.importance as f64 };
        let key_b = if b.importance == 0 { f64::INFINITY } else { b.distance / b.importance as f64 };
        key_a.partial_cmp(&key_b).unwrap_or(Ordering::Equal)
    });
    edges
}

#[derive(PartialEq)]
struct HeapEntry {
    f_cost: f64,
    push_counter: u64,
    node: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the lowest f (then earliest
        // push) sorts to the top.
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.push_counter.cmp(&self.push_counter))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* over 4-neighbours with Manhattan heuristic; returns the tile indices
/// of the path from `start` to `goal` inclusive, or `None` if unreachable.
fn astar(world: &World, start: Position, goal: Position) -> Option<Vec<usize>> {
    let width = world.width;
    let height = world.height;
    let start_idx = world.tile_index(start);
    let goal_idx = world.tile_index(goal);

    let mut open = BinaryHeap::new();
    let mut push_counter = 0u64;
    let mut g_score: AHashMap<usize, f64> = AHashMap::new();
    let mut came_from: AHashMap<usize, usize> = AHashMap::new();
    let mut closed: AHashMap<usize, bool> = AHashMap::new();

    g_score.insert(start_idx, 0.0);
    open.push(HeapEntry {
        f_cost: start.manhattan_distance(&goal) as f64,
        push_counter,
        node: start_idx,
    });

    while let Some(HeapEntry { node, .. }) = open.pop() {
        if node == goal_idx {
            let mut path = vec![node];
            let mut cur = node;
            while let Some(&prev) = came_from.get(&cur) {
                path.push(prev);
                cur = prev;
            }
            path.reverse();
            return Some(path);
        }
        if *closed.get(&node).unwrap_or(&false) {
            continue;
        }
        closed.insert(node, true);

        let pos = Position::new(node as i32 % width, node as i32 / width);
        for neighbor in pos.neighbors4() {
            if !neighbor.in_bounds(width, height) {
                continue;
            }
            let nidx = world.tile_index(neighbor);
            if *closed.get(&nidx).unwrap_or(&false) {
                continue;
            }
            let step_cost = movement::cost(world.tile(neighbor));
            if step_cost.is_infinite() {
                continue;
            }
            let tentative_g = g_score.get(&node).copied().unwrap_or(f64::INFINITY) + step_cost;
            if tentative_g < *g_score.get(&nidx).unwrap_or(&f64::INFINITY) {
                came_from.insert(nidx, node);
                g_score.insert(nidx, tentative_g);
                push_counter += 1;
                open.push(HeapEntry {
                    f_cost: tentative_g + neighbor.manhattan_distance(&goal) as f64,
                    push_counter,
                    node: nidx,
                });
            }
        }
    }
    None
}

fn road_level_for(importance: u32) -> u8 {
    if importance >= 6 {
        3
    } else if importance >= 4 {
        2
    } else {
        1
    }
}

fn materialize(world: &mut World, nodes: &[(String, Position, LocationKind)], edge: &Edge) {
    let Some(path) = astar(world, nodes[edge.a].1, nodes[edge.b].1) else {
        return;
    };
    let level = road_level_for(edge.importance);
    for idx in path {
        let tile = &mut world.tiles[idx];
        tile.road_level = tile.road_level.max(level);
    }
}

/// Builds the MST-plus-highways road network over the world's settlements.
pub fn run(world: &mut World) {
    let nodes = roadable_settlements(world);
    if nodes.len() < 2 {
        return;
    }
    let edges = build_edges(&nodes);

    let mut uf = UnionFind::new(nodes.len());
    let mut mst_edges = Vec::new();
    let mut connected = vec![false; edges.len()];
    for (i, edge) in edges.iter().enumerate() {
        if mst_edges.len() >= nodes.len() - 1 {
            break;
        }
        if uf.union(edge.a, edge.b) {
            mst_edges.push(i);
            connected[i] = true;
        }
    }

    let highway_budget = (nodes.len() / 10).max(2);
    let mut highway_count = 0;
    let mut extras = Vec::new();
    for (i, edge) in edges.iter().enumerate() {
        if highway_count >= highway_budget {
            break;
        }
        if connected[i] {
            continue;
        }
        let major = |kind: LocationKind| matches!(kind, LocationKind::Town | LocationKind::City | LocationKind::Castle | LocationKind::Port);
        if edge.distance <= 20.0 && major(nodes[edge.a].2) && major(nodes[edge.b].2) {
            extras.push(i);
            highway_count += 1;
        }
    }

    for i in mst_edges.into_iter().chain(extras) {
        materialize(world, &nodes, &edges[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::Position;
    use crate::world::{Biome, Location, TerrainType};

    fn flat_world(size: i32) -> World {
        let mut world = World::new(size, size, 1);
        for tile in &mut world.tiles {
            tile.terrain_type = TerrainType::Lowland;
            tile.biome = Biome::Grassland;
        }
        world
    }

    #[test]
    fn mst_edge_count_never_exceeds_n_minus_one_plus_highways() {
        let mut world = flat_world(32);
        for (i, (x, y)) in [(2, 2), (10, 2), (2, 10), (20, 20)].into_iter().enumerate() {
            let pos = Position::new(x, y);
            let mut loc = Location::new(format!("loc_{i}"), format!("Town{i}"), LocationKind::Town, pos);
            loc.buildings.clear();
            world.locations.insert(loc.id.clone(), loc);
        }
        run(&mut world);
        let roaded = world.tiles.iter().filter(|t| t.road_level > 0).count();
        assert!(roaded > 0);
    }

    #[test]
    fn ocean_and_beach_tiles_never_get_a_road() {
        let mut world = flat_world(20);
        world.tiles[0].terrain_type = TerrainType::DeepOcean;
        world.tiles[0].biome = Biome::Ocean;
        let loc_a = Location::new("loc_a".into(), "A".into(), LocationKind::Village, Position::new(1, 1));
        let loc_b = Location::new("loc_b".into(), "B".into(), LocationKind::Village, Position::new(15, 15));
        world.locations.insert(loc_a.id.clone(), loc_a);
        world.locations.insert(loc_b.id.clone(), loc_b);
        run(&mut world);
        assert_eq!(world.tiles[0].road_level, 0);
    }
}
