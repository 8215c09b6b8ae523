//! Circle-versus-rectangle intersection.
//!
//! The avatar is a circle in maze space; every wall and zone is an
//! axis-aligned rectangle, so a single predicate covers all collision and
//! goal queries.

use glam::Vec2;

use crate::game::world::Rect;

/// Returns true when the circle touches or overlaps the rectangle.
///
/// The circle center is clamped to the rectangle bounds on each axis
/// independently, yielding the rectangle point nearest to the center; the
/// circle intersects iff that point lies within `radius` of the center,
/// boundary inclusive. The same clamp handles a center inside the
/// rectangle, near an edge, and near a corner.
pub fn circle_intersects_rect(rect: &Rect, center: Vec2, radius: f32) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.w),
        center.y.clamp(rect.y, rect.y + rect.h),
    );
    center.distance_squared(nearest) <= radius * radius
}
