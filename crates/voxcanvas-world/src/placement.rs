//! Placement resolution: turn a ray-pick result from the external
//! renderer into the two candidate cells an edit can target. Pure
//! coordinate math; no grid or mesh state is touched here.

use glam::{IVec3, Vec3};
use voxcanvas_core::config::WorldConfig;
use voxcanvas_core::coords::centered_to_grid;
use voxcanvas_core::types::CellCoord;

/// A surface hit produced by the renderer's ray intersection: a point in
/// centered world coordinates and the outward-facing normal of the face
/// that was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// The two candidate target cells for an edit, in centered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Half a cell inward from the surface: the cell that was hit.
    /// Used by "replace"/erase edits.
    pub replace: IVec3,
    /// Half a cell outward along the normal: the empty cell in front of
    /// the surface. Used by "place adjacent" edits.
    pub adjacent: IVec3,
}

/// Round half-up per component, matching how the original client rounds
/// pick coordinates (-64.5 rounds to -64, not -65).
fn round_half_up(v: Vec3) -> IVec3 {
    (v + Vec3::splat(0.5)).floor().as_ivec3()
}

fn clamp_centered(cfg: &WorldConfig, v: IVec3) -> IVec3 {
    let half = cfg.half_extent();
    v.clamp(IVec3::splat(-half), IVec3::splat(half - 1))
}

/// Resolve a pick into its two clamped candidates.
///
/// When the inward candidate is at or below the world floor (picking the
/// ground plane), the outward candidate's height is forced to the floor so
/// ground placement never produces a floating block. This intentionally
/// applies to the y axis only, and before clamping.
pub fn resolve_placement(cfg: &WorldConfig, hit: PickHit) -> Placement {
    let half = cfg.half_extent();
    let replace = round_half_up(hit.point - hit.normal * 0.5);
    let mut adjacent = round_half_up(hit.point + hit.normal * 0.5);

    if replace.y <= -half {
        adjacent.y = -half;
    }

    Placement {
        replace: clamp_centered(cfg, replace),
        adjacent: clamp_centered(cfg, adjacent),
    }
}

/// Convert a centered candidate into the absolute grid coordinate handed
/// to the mutation applier.
pub fn candidate_to_cell(cfg: &WorldConfig, candidate: IVec3) -> CellCoord {
    centered_to_grid(cfg, candidate)
}
