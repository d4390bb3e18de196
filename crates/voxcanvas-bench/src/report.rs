use std::path::Path;

use crate::runner::{BenchmarkResult, Workload};

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// One scene/workload pair that got slower than the baseline allows.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub scene_name: String,
    pub workload: Workload,
    pub baseline_ms: f64,
    pub current_ms: f64,
    pub pct_change: f64,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline by scene and workload,
/// flagging mean-time slowdowns past the threshold. A scene missing from
/// the baseline is skipped rather than treated as a regression.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let base = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name && b.workload == result.workload);
        let Some(base) = base else { continue };

        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push(Regression {
                scene_name: result.scene_name.clone(),
                workload: result.workload,
                baseline_ms: base.timings.mean_ms,
                current_ms: result.timings.mean_ms,
                pct_change,
            });
        }
    }

    regressions
}

/// Markdown summary: one row per scene, the full-remesh and incremental
/// mean times side by side, with tail latency for the incremental pass
/// since that is the per-frame cost a client actually pays.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str(
        "| Scene | Filled | Full mean (ms) | Incr mean (ms) | Incr p95 (ms) | Incr max (ms) |\n",
    );
    out.push_str(
        "|-------|--------|----------------|----------------|---------------|---------------|\n",
    );

    let mut scenes: Vec<&str> = Vec::new();
    for r in results {
        if !scenes.contains(&r.scene_name.as_str()) {
            scenes.push(&r.scene_name);
        }
    }

    for scene in scenes {
        let find = |w: Workload| {
            results
                .iter()
                .find(|r| r.scene_name == scene && r.workload == w)
        };
        let cell = |v: Option<f64>| match v {
            Some(ms) => format!("{ms:.2}"),
            None => "-".to_string(),
        };
        let full = find(Workload::Full);
        let incr = find(Workload::Incremental);
        let filled = full.or(incr).map(|r| r.filled_cells).unwrap_or(0);
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            scene,
            filled,
            cell(full.map(|r| r.timings.mean_ms)),
            cell(incr.map(|r| r.timings.mean_ms)),
            cell(incr.map(|r| r.timings.p95_ms)),
            cell(incr.map(|r| r.timings.max_ms)),
        ));
    }

    out
}

/// Human-readable regression report.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "No scene slowed down more than {threshold_pct:.0}% against the baseline.\n"
        );
    }

    let mut out = format!(
        "{} scene workload(s) regressed past {threshold_pct:.0}%:\n",
        regressions.len()
    );
    for r in regressions {
        out.push_str(&format!(
            "  {} [{}]: {:.2} ms -> {:.2} ms (+{:.1}%)\n",
            r.scene_name,
            r.workload.label(),
            r.baseline_ms,
            r.current_ms,
            r.pct_change,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TimingSeries;

    fn result(name: &str, workload: Workload, mean: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            workload,
            filled_cells: 10,
            chunk_count: 8,
            iterations: 3,
            timings: TimingSeries {
                mean_ms: mean,
                median_ms: mean,
                p95_ms: mean,
                p99_ms: mean,
                min_ms: mean,
                max_ms: mean,
            },
        }
    }

    #[test]
    fn test_compare_flags_only_regressions() {
        let baseline = Baseline {
            timestamp: "0".to_string(),
            results: vec![
                result("a", Workload::Full, 10.0),
                result("b", Workload::Full, 10.0),
            ],
        };
        let current = vec![
            result("a", Workload::Full, 12.5),
            result("b", Workload::Full, 10.2),
        ];
        let regressions = compare(&current, &baseline, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].scene_name, "a");
        assert!((regressions[0].pct_change - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_keys_on_workload_too() {
        // A slow full remesh must not be charged against the incremental
        // baseline of the same scene.
        let baseline = Baseline {
            timestamp: "0".to_string(),
            results: vec![result("a", Workload::Incremental, 1.0)],
        };
        let current = vec![result("a", Workload::Full, 100.0)];
        assert!(compare(&current, &baseline, 10.0).is_empty());
    }

    #[test]
    fn test_markdown_pairs_workloads_per_scene() {
        let md = format_markdown(&[
            result("a", Workload::Full, 1.0),
            result("a", Workload::Incremental, 2.0),
            result("b", Workload::Full, 3.0),
        ]);
        // Header, separator, one row per scene.
        assert_eq!(md.lines().count(), 4);
        assert!(md.contains("| a | 10 | 1.00 | 2.00 |"));
        // Scene b has no incremental result; those cells are dashes.
        assert!(md.contains("| b | 10 | 3.00 | - | - | - |"));
    }
}
