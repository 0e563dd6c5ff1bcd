use std::hint::black_box;
use std::time::Instant;

use hexworld_common::{AxialCoord, HexDirection};
use hexworld_kernel::WorldModel;

fn bench_initialize(grid_radius: i32, iterations: usize) {
    let start = Instant::now();
    let mut tiles = 0;
    for _ in 0..iterations {
        let mut world = WorldModel::new(black_box("bench-seed"));
        tiles = world.initialize(black_box(grid_radius)).len();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  initialize (r={grid_radius}, {tiles} tiles, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_walk(steps: usize, range: i32) {
    let mut world = WorldModel::new("bench-seed");
    world.initialize(5);

    let mut center = AxialCoord::ORIGIN;
    let mut created = 0;
    let start = Instant::now();
    for i in 0..steps {
        // Simulate an agent wandering outwards along a zig-zag.
        let direction = if i % 2 == 0 {
            HexDirection::Right
        } else {
            HexDirection::DownRight
        };
        center = center.neighbor(direction);
        created += black_box(world.expand(black_box(center), black_box(range))).len();
    }
    let elapsed = start.elapsed();
    let per_step = elapsed / steps as u32;
    println!(
        "  walk ({steps} steps, range={range}, {created} new tiles): {per_step:?}/step, total {elapsed:?}"
    );
}

fn bench_passability(grid_radius: i32, iterations: usize) {
    let mut world = WorldModel::new("bench-seed");
    world.initialize(grid_radius);
    let coords: Vec<AxialCoord> = world.tiles().keys().copied().collect();

    let start = Instant::now();
    let mut passable = 0;
    for _ in 0..iterations {
        passable = coords
            .iter()
            .filter(|c| world.is_passable(black_box(**c)))
            .count();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  passability ({} tiles, {passable} passable, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}",
        coords.len()
    );
}

fn main() {
    println!("=== World Generation Benchmarks ===\n");

    println!("Initialize:");
    bench_initialize(5, 1000);
    bench_initialize(20, 100);
    bench_initialize(50, 10);

    println!("\nIncremental expansion:");
    bench_walk(1_000, 2);
    bench_walk(1_000, 5);

    println!("\nPassability queries:");
    bench_passability(20, 1000);

    println!("\n=== Done ===");
}
