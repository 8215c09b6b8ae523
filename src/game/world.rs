//! Maze-space world model.
//!
//! Converts the generated cell grid into a flat list of wall rectangles
//! plus start/end zones, and owns the scroll offset that keeps the avatar
//! pinned to the viewport center while the maze slides underneath it.

use glam::Vec2;

use crate::game::collision::circle_intersects_rect;
use crate::maze::generator::{Direction, Grid};

/// Axis-aligned rectangle in maze-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The same rectangle shrunk by `inset` on all four sides. Dimensions
    /// floor at zero, so an oversized inset degenerates to a point rather
    /// than an inverted rectangle.
    pub fn shrunk(&self, inset: f32) -> Rect {
        Rect::new(
            self.x + inset,
            self.y + inset,
            (self.w - 2.0 * inset).max(0.0),
            (self.h - 2.0 * inset).max(0.0),
        )
    }
}

/// Per-level world geometry and scroll state.
///
/// Built once per level from the generated grid and replaced wholesale on
/// the next level; only `offset` mutates during play. Screen space and
/// maze space are related by `screen = maze + offset`.
#[derive(Debug, Clone)]
pub struct WorldModel {
    /// Every wall rectangle, the four oversized boundary rects last.
    pub walls: Vec<Rect>,
    /// Collision-safe spawn region inside the top-left cell.
    pub start_zone: Rect,
    /// Win-trigger region inside the bottom-right cell.
    pub end_zone: Rect,
    /// Maze-space to screen-space translation.
    pub offset: Vec2,
}

impl WorldModel {
    /// Converts the cell grid into flat collision geometry.
    ///
    /// Each wall side still present in the grid becomes one rectangle at
    /// the cell's pixel corner: `cell_size × wall_thickness` for horizontal
    /// walls, `wall_thickness × cell_size` for vertical ones. Four boundary
    /// rectangles framing the grid with a one-cell margin close the level
    /// off so the avatar cannot scroll out of bounds even if a perimeter
    /// wall were ever missing. Start and end zones are the top-left and
    /// bottom-right cell interiors inset by the wall thickness.
    pub fn build(grid: &Grid, cell_size: f32, wall_thickness: f32) -> Self {
        let mut walls = Vec::new();

        for col in 0..grid.cols() {
            for row in 0..grid.rows() {
                let cell = grid.cell(col, row);
                let px = col as f32 * cell_size;
                let py = row as f32 * cell_size;

                if cell.walls[Direction::Top.index()] {
                    walls.push(Rect::new(px, py, cell_size, wall_thickness));
                }
                if cell.walls[Direction::Right.index()] {
                    walls.push(Rect::new(
                        px + cell_size - wall_thickness,
                        py,
                        wall_thickness,
                        cell_size,
                    ));
                }
                if cell.walls[Direction::Bottom.index()] {
                    walls.push(Rect::new(
                        px,
                        py + cell_size - wall_thickness,
                        cell_size,
                        wall_thickness,
                    ));
                }
                if cell.walls[Direction::Left.index()] {
                    walls.push(Rect::new(px, py, wall_thickness, cell_size));
                }
            }
        }

        let grid_w = grid.cols() as f32 * cell_size;
        let grid_h = grid.rows() as f32 * cell_size;
        walls.push(Rect::new(
            -cell_size,
            -cell_size,
            grid_w + 2.0 * cell_size,
            cell_size,
        ));
        walls.push(Rect::new(
            -cell_size,
            grid_h,
            grid_w + 2.0 * cell_size,
            cell_size,
        ));
        walls.push(Rect::new(-cell_size, 0.0, cell_size, grid_h));
        walls.push(Rect::new(grid_w, 0.0, cell_size, grid_h));

        let zone = cell_size - 2.0 * wall_thickness;
        let start_zone = Rect::new(wall_thickness, wall_thickness, zone, zone);
        let end_zone = Rect::new(
            (grid.cols() - 1) as f32 * cell_size + wall_thickness,
            (grid.rows() - 1) as f32 * cell_size + wall_thickness,
            zone,
            zone,
        );

        Self {
            walls,
            start_zone,
            end_zone,
            offset: Vec2::ZERO,
        }
    }

    /// Re-centers the avatar on the start zone: after this call the
    /// avatar's maze position equals the start-zone center for the given
    /// viewport.
    pub fn reset_offset(&mut self, viewport: Vec2) {
        self.offset = viewport * 0.5 - self.start_zone.center();
    }

    /// Applies relative pointer motion. The maze scrolls opposite to the
    /// raw delta so the avatar appears to move with the mouse. No clamping:
    /// collision against the boundary walls is the only containment.
    pub fn apply_motion(&mut self, delta: Vec2, sensitivity: f32) {
        self.offset -= delta * sensitivity;
    }

    /// The avatar's position in maze space, given that its screen position
    /// is always the viewport center.
    pub fn avatar_maze_pos(&self, viewport: Vec2) -> Vec2 {
        viewport * 0.5 - self.offset
    }

    /// True when a circle of `radius` at `pos` touches any wall.
    pub fn hits_wall(&self, pos: Vec2, radius: f32) -> bool {
        self.walls
            .iter()
            .any(|wall| circle_intersects_rect(wall, pos, radius))
    }

    /// True when a circle of `radius` at `pos` touches the end zone shrunk
    /// by `inset` on all sides. The shrink makes the avatar commit to the
    /// goal instead of grazing its edge.
    pub fn reached_goal(&self, pos: Vec2, radius: f32, inset: f32) -> bool {
        circle_intersects_rect(&self.end_zone.shrunk(inset), pos, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::generator::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CELL: f32 = 180.0;
    const THICKNESS: f32 = 10.0;

    fn reference_world() -> WorldModel {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate(5, 5, &mut rng);
        WorldModel::build(&grid, CELL, THICKNESS)
    }

    /// The wall list carries one rectangle per wall flag still present in
    /// the grid, plus exactly four boundary rectangles at the end.
    #[test]
    fn wall_list_matches_grid_flags() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate(5, 5, &mut rng);
        let world = WorldModel::build(&grid, CELL, THICKNESS);

        let mut flags = 0;
        for col in 0..grid.cols() {
            for row in 0..grid.rows() {
                flags += grid.cell(col, row).walls.iter().filter(|&&w| w).count();
            }
        }
        assert_eq!(world.walls.len(), flags + 4);

        let grid_w = 5.0 * CELL;
        let grid_h = 5.0 * CELL;
        let boundary = &world.walls[world.walls.len() - 4..];
        assert_eq!(
            boundary[0],
            Rect::new(-CELL, -CELL, grid_w + 2.0 * CELL, CELL),
            "top boundary frames the grid with a one-cell margin"
        );
        assert_eq!(boundary[1], Rect::new(-CELL, grid_h, grid_w + 2.0 * CELL, CELL));
        assert_eq!(boundary[2], Rect::new(-CELL, 0.0, CELL, grid_h));
        assert_eq!(boundary[3], Rect::new(grid_w, 0.0, CELL, grid_h));
    }

    /// Start and end zones are corner-cell interiors inset by the wall
    /// thickness, so the start-zone center is the first cell's center.
    #[test]
    fn zones_are_inset_corner_cells() {
        let world = reference_world();

        assert_eq!(
            world.start_zone,
            Rect::new(THICKNESS, THICKNESS, CELL - 2.0 * THICKNESS, CELL - 2.0 * THICKNESS)
        );
        assert_eq!(world.start_zone.center(), Vec2::new(CELL / 2.0, CELL / 2.0));
        assert_eq!(
            world.end_zone,
            Rect::new(
                4.0 * CELL + THICKNESS,
                4.0 * CELL + THICKNESS,
                CELL - 2.0 * THICKNESS,
                CELL - 2.0 * THICKNESS
            )
        );
    }

    /// reset_offset followed by avatar_maze_pos lands exactly on the
    /// start-zone center, whatever the viewport size.
    #[test]
    fn offset_round_trip() {
        let mut world = reference_world();

        for viewport in [
            Vec2::new(800.0, 600.0),
            Vec2::new(1920.0, 1080.0),
            Vec2::new(333.0, 777.0),
        ] {
            world.reset_offset(viewport);
            assert_eq!(
                world.avatar_maze_pos(viewport),
                world.start_zone.center(),
                "round trip must hold for viewport {:?}",
                viewport
            );
        }
    }

    /// Motion scrolls the offset opposite to the pointer delta, scaled by
    /// sensitivity, which moves the avatar's maze position with the delta.
    #[test]
    fn motion_scrolls_against_the_delta() {
        let mut world = reference_world();
        let viewport = Vec2::new(1000.0, 1000.0);
        world.reset_offset(viewport);
        let before = world.avatar_maze_pos(viewport);

        world.apply_motion(Vec2::new(100.0, -40.0), 0.5);

        assert_eq!(
            world.avatar_maze_pos(viewport),
            before + Vec2::new(50.0, -20.0)
        );
    }

    /// The start-zone center is collision free at the forgiving radius.
    #[test]
    fn spawn_point_is_safe() {
        let world = reference_world();
        assert!(!world.hits_wall(world.start_zone.center(), 30.0 * 0.8));
    }

    /// The goal test is stricter than the wall test: a small avatar inside
    /// the end zone but still within the inset band can touch the raw zone
    /// without reaching the shrunk one.
    #[test]
    fn goal_requires_more_precision_than_walls() {
        let world = reference_world();
        let inset = 10.0;
        let radius = 4.0;

        // 5 units past the zone's left edge: inside the raw zone, 5 units
        // short of the shrunk zone.
        let center = Vec2::new(
            world.end_zone.x + 5.0,
            world.end_zone.y + world.end_zone.h / 2.0,
        );

        assert!(circle_intersects_rect(&world.end_zone, center, radius));
        assert!(!world.reached_goal(center, radius, inset));

        // Dead center always wins.
        assert!(world.reached_goal(world.end_zone.center(), radius, inset));
    }

    /// An inset larger than half the zone collapses it to a point instead
    /// of an inverted rectangle, so the goal predicate stays total even
    /// under out-of-range tuning.
    #[test]
    fn oversized_inset_degenerates_to_a_point() {
        let zone = Rect::new(740.0, 740.0, 160.0, 160.0);
        let shrunk = zone.shrunk(100.0);

        assert_eq!(shrunk.w, 0.0);
        assert_eq!(shrunk.h, 0.0);
        assert!(circle_intersects_rect(&shrunk, Vec2::new(840.0, 840.0), 1.0));
        assert!(!circle_intersects_rect(&shrunk, Vec2::new(0.0, 0.0), 1.0));

        let world = reference_world();
        assert!(!world.reached_goal(Vec2::new(90.0, 90.0), 4.0, 100.0));
    }
}
