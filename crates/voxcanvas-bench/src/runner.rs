use std::time::Instant;

use voxcanvas_core::config::WorldConfig;
use voxcanvas_world::World;

use crate::scenes::{populate, SceneConfig};

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl TimingSeries {
    fn from_samples(mut samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty());
        samples.sort_by(|a, b| a.total_cmp(b));
        let pct = |p: f64| samples[((samples.len() - 1) as f64 * p) as usize];
        Self {
            mean_ms: samples.iter().sum::<f64>() / samples.len() as f64,
            median_ms: pct(0.5),
            p95_ms: pct(0.95),
            p99_ms: pct(0.99),
            min_ms: samples[0],
            max_ms: samples[samples.len() - 1],
        }
    }
}

/// The two workloads measured per scene: remeshing every chunk from
/// scratch, and draining an all-dirty world through budgeted ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    Full,
    Incremental,
}

impl Workload {
    pub fn label(self) -> &'static str {
        match self {
            Workload::Full => "full",
            Workload::Incremental => "incremental",
        }
    }
}

/// Result of one scene/workload pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub workload: Workload,
    pub filled_cells: u32,
    pub chunk_count: u32,
    pub iterations: u32,
    pub timings: TimingSeries,
}

/// Runs the CPU meshing and scheduling workloads.
pub struct BenchmarkRunner {
    cfg: WorldConfig,
    iterations: u32,
}

impl BenchmarkRunner {
    pub fn new(cfg: WorldConfig, iterations: u32) -> Self {
        assert!(iterations > 0);
        Self { cfg, iterations }
    }

    /// Time a full remesh of every chunk in the scene.
    pub fn run_full_remesh(&self, scene: &SceneConfig) -> BenchmarkResult {
        let mut world = World::empty(self.cfg);
        populate(&mut world, scene.pattern);

        let mut samples = Vec::with_capacity(self.iterations as usize);
        for _ in 0..self.iterations {
            let start = Instant::now();
            world.rebuild_all();
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        world.take_changed(); // not measured, just drained

        log::info!("scene '{}': full remesh done", scene.name);
        BenchmarkResult {
            scene_name: scene.name.to_string(),
            workload: Workload::Full,
            filled_cells: world.grid().filled_count() as u32,
            chunk_count: self.cfg.chunk_count() as u32,
            iterations: self.iterations,
            timings: TimingSeries::from_samples(samples),
        }
    }

    /// Time scheduler ticks while every chunk starts dirty: each sample is
    /// one budgeted incremental pass, the per-frame cost a client pays
    /// after a burst of edits.
    pub fn run_incremental(&self, scene: &SceneConfig) -> BenchmarkResult {
        let mut world = World::empty(self.cfg);
        populate(&mut world, scene.pattern);
        world.rebuild_all();

        let mut samples = Vec::with_capacity(self.iterations as usize);
        for i in 0..self.iterations {
            // Re-dirty the whole canvas by touching one cell per chunk.
            let n = self.cfg.chunks_per_axis();
            for cx in 0..n {
                for cy in 0..n {
                    for cz in 0..n {
                        let cell = glam::IVec3::new(cx, cy, cz) * self.cfg.chunk_size
                            + glam::IVec3::splat((i as i32) % self.cfg.chunk_size);
                        let value = world.grid().get(cell);
                        world.apply(voxcanvas_world::Mutation { cell, value });
                    }
                }
            }

            let start = Instant::now();
            while world.dirty_count() > 0 {
                world.tick();
            }
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }

        BenchmarkResult {
            scene_name: scene.name.to_string(),
            workload: Workload::Incremental,
            filled_cells: world.grid().filled_count() as u32,
            chunk_count: self.cfg.chunk_count() as u32,
            iterations: self.iterations,
            timings: TimingSeries::from_samples(samples),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::FillPattern;

    #[test]
    fn test_timing_series_statistics() {
        let t = TimingSeries::from_samples(vec![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 4.0);
        assert_eq!(t.mean_ms, 2.5);
        assert_eq!(t.median_ms, 2.0);
    }

    #[test]
    fn test_small_world_benchmarks_run() {
        let runner = BenchmarkRunner::new(WorldConfig::new(16, 8, 4), 2);
        let scene = SceneConfig {
            name: "tiny",
            pattern: FillPattern::Sparse { permille: 100 },
        };
        let full = runner.run_full_remesh(&scene);
        assert_eq!(full.iterations, 2);
        assert!(full.filled_cells > 0);

        let inc = runner.run_incremental(&scene);
        assert_eq!(inc.scene_name, "tiny");
        assert_eq!(inc.workload, Workload::Incremental);
        assert!(inc.timings.max_ms >= inc.timings.min_ms);
    }
}
