//! Multi-source BFS water-distance transform (§4.6, first half).

use std::collections::VecDeque;

use crate::core::config::GenerationConfig;
use crate::world::TerrainType;

/// Distance in tiles from the nearest water tile, via 4-neighbour BFS.
/// Water tiles themselves have distance 0.
pub fn build(config: &GenerationConfig, terrain: &[TerrainType]) -> Vec<i32> {
    let width = config.width as usize;
    let height = config.height as usize;
    let mut dist = vec![-1i32; width * height];
    let mut queue = VecDeque::new();

    for (idx, &t) in terrain.iter().enumerate() {
        if t.is_water() {
            dist[idx] = 0;
            queue.push_back(idx);
        }
    }

    while let Some(idx) = queue.pop_front() {
        let x = (idx % width) as i32;
        let y = (idx / width) as i32;
        let d = dist[idx];
        for (dx, dy) in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                continue;
            }
            let nidx = ny as usize * width + nx as usize;
            if dist[nidx] == -1 {
                dist[nidx] = d + 1;
                queue.push_back(nidx);
            }
        }
    }

    dist
}
