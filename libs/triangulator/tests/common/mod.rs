//! Shared fixtures and mesh checks for the integration tests.

#![allow(dead_code)]

use triangulator::{Triangulation, Vec2};

/// An outer shape plus the holes cut into it, in cutting order.
pub struct Scene {
    pub name: &'static str,
    pub shape: Vec<Vec2>,
    pub holes: Vec<Vec<Vec2>>,
}

impl Scene {
    /// Area left once every hole is removed from the shape.
    pub fn expected_area(&self) -> f64 {
        polygon_area(&self.shape) - self.holes.iter().map(|h| polygon_area(h)).sum::<f64>()
    }

    /// Vertex count after every hole has been merged.
    pub fn merged_len(&self) -> usize {
        self.shape.len() + self.holes.iter().map(|h| h.len() + 2).sum::<usize>()
    }
}

pub fn pts(points: &[(f64, f64)]) -> Vec<Vec2> {
    points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

// =============================================================================
// CHECKS
// =============================================================================

/// Unsigned shoelace area.
pub fn polygon_area(ring: &[Vec2]) -> f64 {
    let n = ring.len();
    let twice: f64 = (0..n).map(|i| ring[i].perp_dot(ring[(i + 1) % n])).sum();
    twice.abs() / 2.0
}

/// Every vertex of the mesh is used by at least one triangle and no index is
/// out of range.
pub fn covers_every_vertex(mesh: &Triangulation) -> bool {
    let mut used = vec![false; mesh.vertices.len()];
    for &i in &mesh.indices {
        match used.get_mut(i as usize) {
            Some(slot) => *slot = true,
            None => return false,
        }
    }
    used.into_iter().all(|u| u)
}

fn orientation(a: Vec2, b: Vec2, c: Vec2) -> i8 {
    let cross = (b - a).perp_dot(c - a);
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

/// Returns `true` if two edges of the ring cross at a point interior to both.
/// Overlapping bridge edges and shared endpoints do not count.
pub fn has_proper_crossing(ring: &[Vec2]) -> bool {
    let n = ring.len();
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        for j in (i + 1)..n {
            let (c, d) = (ring[j], ring[(j + 1) % n]);
            let straddles_cd = orientation(a, b, c) * orientation(a, b, d) < 0;
            let straddles_ab = orientation(c, d, a) * orientation(c, d, b) < 0;
            if straddles_cd && straddles_ab {
                return true;
            }
        }
    }
    false
}

// =============================================================================
// SCENES
// =============================================================================

/// Hexagon with the same hexagonal hole cut three times at different heights.
pub fn stacked_hexagon_holes() -> Scene {
    Scene {
        name: "stacked_hexagon_holes",
        shape: pts(&[
            (-100.0, -100.0),
            (0.0, -200.0),
            (100.0, -100.0),
            (100.0, 100.0),
            (0.0, 200.0),
            (-100.0, 100.0),
        ]),
        holes: vec![
            pts(&[
                (-40.0, -40.0),
                (-40.0, 40.0),
                (0.0, 20.0),
                (40.0, 40.0),
                (40.0, -40.0),
                (0.0, -20.0),
            ]),
            pts(&[
                (-40.0, 50.0),
                (-40.0, 130.0),
                (0.0, 110.0),
                (40.0, 130.0),
                (40.0, 50.0),
                (0.0, 70.0),
            ]),
            pts(&[
                (-40.0, -130.0),
                (-40.0, -50.0),
                (0.0, -70.0),
                (40.0, -50.0),
                (40.0, -130.0),
                (0.0, -110.0),
            ]),
        ],
    }
}

/// Two holes whose rightmost vertices both bridge to the same corner.
pub fn aligned_holes_on_right() -> Scene {
    Scene {
        name: "aligned_holes_on_right",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (150.0, 100.0),
                (175.0, 100.0),
                (175.0, 125.0),
                (150.0, 125.0),
            ]),
            pts(&[
                (150.0, 25.0),
                (175.0, 25.0),
                (175.0, 75.0),
                (125.0, 75.0),
                (125.0, 140.0),
                (100.0, 135.0),
                (100.0, 50.0),
                (150.0, 50.0),
            ]),
        ],
    }
}

/// Second hole whose ray passes exactly through a vertex of the first.
pub fn polygon_point_on_ray() -> Scene {
    Scene {
        name: "polygon_point_on_ray",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (140.0, 90.0),
                (175.0, 105.0),
                (160.0, 140.0),
            ]),
            pts(&[
                (35.0, 90.0),
                (95.0, 90.0),
                (70.0, 115.0),
            ]),
        ],
    }
}

/// Three holes in a row; later rays meet earlier bridge vertices.
pub fn double_injection_point_on_ray() -> Scene {
    Scene {
        name: "double_injection_point_on_ray",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (125.0, 50.0),
                (150.0, 50.0),
                (150.0, 100.0),
                (125.0, 100.0),
            ]),
            pts(&[
                (75.0, 50.0),
                (100.0, 50.0),
                (100.0, 75.0),
                (75.0, 75.0),
            ]),
            pts(&[
                (25.0, 50.0),
                (50.0, 50.0),
                (50.0, 100.0),
                (25.0, 100.0),
            ]),
        ],
    }
}

/// Notched shape where the ray endpoint is hidden behind a reflex corner.
pub fn invisible_injection_vertex() -> Scene {
    Scene {
        name: "invisible_injection_vertex",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (150.0, 150.0),
            (150.0, 75.0),
            (125.0, 75.0),
            (125.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (120.0, 10.0),
                (150.0, 10.0),
                (150.0, 40.0),
                (120.0, 40.0),
            ]),
            pts(&[
                (30.0, 55.0),
                (85.0, 55.0),
                (45.0, 95.0),
            ]),
        ],
    }
}

/// Rectangle with a ten-point star hole.
pub fn star_hole() -> Scene {
    Scene {
        name: "star_hole",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (54.402, 60.551),
                (68.344, 76.276),
                (87.648, 67.97),
                (77.001, 86.088),
                (90.866, 101.881),
                (70.344, 97.354),
                (59.609, 115.421),
                (57.573, 94.504),
                (37.073, 89.877),
                (56.337, 81.477),
            ]),
        ],
    }
}

/// Rectangle with seven holes of mixed shapes, including a 24-gon.
pub fn many_holes() -> Scene {
    Scene {
        name: "many_holes",
        shape: pts(&[
            (0.0, 0.0),
            (210.0, 0.0),
            (210.0, 150.0),
            (0.0, 150.0),
        ]),
        holes: vec![
            pts(&[
                (160.0, 30.0),
                (200.0, 15.0),
                (195.0, 30.0),
            ]),
            pts(&[
                (95.0, 110.0),
                (120.0, 65.0),
                (130.0, 105.0),
                (180.0, 115.0),
                (190.0, 65.0),
                (200.0, 120.0),
                (165.0, 135.0),
            ]),
            pts(&[
                (75.0, 25.0),
                (100.0, 5.0),
                (100.0, 35.0),
                (175.0, 35.0),
                (175.0, 50.0),
                (75.0, 50.0),
            ]),
            pts(&[
                (150.0, 75.0),
                (175.0, 75.0),
                (175.0, 100.0),
                (150.0, 100.0),
            ]),
            pts(&[
                (65.0, 15.0),
                (70.0, 15.0),
                (70.0, 55.0),
                (100.0, 65.0),
                (70.0, 130.0),
                (25.0, 125.0),
                (30.0, 95.0),
                (70.0, 100.0),
                (85.0, 70.0),
                (65.0, 55.0),
            ]),
            pts(&[
                (53.44, 60.382),
                (59.172, 60.911),
                (64.322, 62.404),
                (68.685, 64.719),
                (72.056, 67.717),
                (74.23, 71.254),
                (75.0, 75.191),
                (74.23, 79.128),
                (72.056, 82.665),
                (68.685, 85.663),
                (64.322, 87.978),
                (59.172, 89.471),
                (53.44, 90.0),
                (47.708, 89.471),
                (42.558, 87.978),
                (38.195, 85.663),
                (34.824, 82.665),
                (32.65, 79.128),
                (31.88, 75.191),
                (32.65, 71.254),
                (34.824, 67.717),
                (38.195, 64.719),
                (42.558, 62.404),
                (47.708, 60.911),
            ]),
            pts(&[
                (20.0, 10.0),
                (60.0, 10.0),
                (60.0, 40.0),
                (20.0, 40.0),
            ]),
        ],
    }
}

/// Every scene above.
pub fn all_scenes() -> Vec<Scene> {
    vec![
        stacked_hexagon_holes(),
        aligned_holes_on_right(),
        polygon_point_on_ray(),
        double_injection_point_on_ray(),
        invisible_injection_vertex(),
        star_hole(),
        many_holes(),
    ]
}
