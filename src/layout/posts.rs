//! Post placement - perimeter corners, mid-span subdivision, attachment
//! exclusion

use serde::Serialize;

use crate::catalog::BeamSpec;
use crate::config::AttachedSides;

/// A support position in structure-local plan coordinates
///
/// Origin at the structure centre, x along the width axis, z along the
/// depth axis with the open front edge at +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostPosition {
    pub x: f64,
    pub z: f64,
}

/// A post candidate tagged with the edges it lies on
#[derive(Debug, Clone, Copy)]
struct Candidate {
    x: f64,
    z: f64,
    on_back: bool,
    on_left: bool,
    on_right: bool,
}

impl Candidate {
    fn front(x: f64, z: f64) -> Self {
        Self {
            x,
            z,
            on_back: false,
            on_left: false,
            on_right: false,
        }
    }

    fn back(x: f64, z: f64) -> Self {
        Self {
            x,
            z,
            on_back: true,
            on_left: false,
            on_right: false,
        }
    }
}

/// Attachment exclusion rule.
///
/// The structural wall substitutes for any post on an attached edge. For
/// corner posts the back flag wins over left/right: a back corner is checked
/// against the back edge first and removed when the back is attached even if
/// its side edge is not.
fn on_attached_edge(candidate: &Candidate, attached: &AttachedSides) -> bool {
    if candidate.on_back && attached.back {
        return true;
    }
    if candidate.on_left && attached.left {
        return true;
    }
    if candidate.on_right && attached.right {
        return true;
    }
    false
}

/// Place perimeter and mid-span posts for a structure.
///
/// Order is corners first (front-left, front-right, back-left, back-right),
/// then front mid posts left to right, then back mid posts. The order is
/// stable for identical input so downstream consumers stay reproducible.
pub fn place_posts(
    width: f64,
    depth: f64,
    beam: &BeamSpec,
    freestanding: bool,
    attached: &AttachedSides,
) -> Vec<PostPosition> {
    let half_width = width / 2.0;
    let half_depth = depth / 2.0;

    let mut candidates = vec![
        // Corners, each tagged with every edge it lies on
        Candidate {
            x: -half_width,
            z: half_depth,
            on_back: false,
            on_left: true,
            on_right: false,
        },
        Candidate {
            x: half_width,
            z: half_depth,
            on_back: false,
            on_left: false,
            on_right: true,
        },
        Candidate {
            x: -half_width,
            z: -half_depth,
            on_back: true,
            on_left: true,
            on_right: false,
        },
        Candidate {
            x: half_width,
            z: -half_depth,
            on_back: true,
            on_left: false,
            on_right: true,
        },
    ];

    // Mid-span subdivision along the front edge when the beam cannot carry
    // the full width, mirrored on the back edge when a back beam exists.
    let max_span = beam.max_span_m();
    if width > max_span {
        let mid_count = (width / max_span).ceil() as usize - 1;
        let spacing = width / (mid_count + 1) as f64;

        for i in 1..=mid_count {
            let x = -half_width + spacing * i as f64;
            candidates.push(Candidate::front(x, half_depth));
        }

        if freestanding || !attached.back {
            for i in 1..=mid_count {
                let x = -half_width + spacing * i as f64;
                candidates.push(Candidate::back(x, -half_depth));
            }
        }
    }

    if freestanding {
        return candidates
            .into_iter()
            .map(|c| PostPosition { x: c.x, z: c.z })
            .collect();
    }

    candidates
        .into_iter()
        .filter(|c| !on_attached_edge(c, attached))
        .map(|c| PostPosition { x: c.x, z: c.z })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BEAM_110;

    #[test]
    fn test_freestanding_corners() {
        let posts = place_posts(4.0, 3.0, &BEAM_110, true, &AttachedSides::none());
        assert_eq!(posts.len(), 4);
    }

    #[test]
    fn test_back_attached_drops_back_corners() {
        let posts = place_posts(3.0, 3.0, &BEAM_110, false, &AttachedSides::back_only());
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.z > 0.0));
    }

    #[test]
    fn test_left_attached_drops_left_corners() {
        let attached = AttachedSides {
            back: false,
            left: true,
            right: false,
        };
        let posts = place_posts(4.0, 3.0, &BEAM_110, false, &attached);
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.x > 0.0));
    }

    #[test]
    fn test_back_wins_over_unattached_side() {
        // Back-left corner must go even though the left edge is open
        let posts = place_posts(4.0, 3.0, &BEAM_110, false, &AttachedSides::back_only());
        assert!(!posts.iter().any(|p| p.z < 0.0));
        assert!(posts.iter().any(|p| p.x < 0.0 && p.z > 0.0));
    }

    #[test]
    fn test_mid_post_insertion() {
        // 5 m width over a 4.5 m beam needs one mid post per edge
        let posts = place_posts(5.0, 3.5, &BEAM_110, true, &AttachedSides::none());
        assert_eq!(posts.len(), 6);
        let mids: Vec<_> = posts.iter().filter(|p| p.x.abs() < 1e-9).collect();
        assert_eq!(mids.len(), 2);
    }

    #[test]
    fn test_mid_post_spacing_even() {
        // 12 m over 4.5 m => ceil(12/4.5)-1 = 2 mid posts, 4 m apart
        let posts = place_posts(12.0, 3.0, &BEAM_110, true, &AttachedSides::none());
        let mut front_xs: Vec<f64> = posts.iter().filter(|p| p.z > 0.0).map(|p| p.x).collect();
        front_xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(front_xs.len(), 4);
        for pair in front_xs.windows(2) {
            assert!((pair[1] - pair[0] - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_attached_back_suppresses_back_mids() {
        let posts = place_posts(5.0, 3.5, &BEAM_110, false, &AttachedSides::back_only());
        // Front corners plus one front mid, nothing on the back line
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.z > 0.0));
    }
}
