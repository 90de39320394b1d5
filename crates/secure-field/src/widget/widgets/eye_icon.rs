//! Eye glyphs for the password toggle button.
//!
//! Both glyphs are authored on a 32x32 grid and filled with the non-zero
//! rule. Holes are cut by drawing their subpaths in the opposite direction
//! to the surrounding outline.

use secure_field_render::{Path, Point};

/// Side length of the design grid the glyphs are authored on.
pub const ICON_GRID: f32 = 32.0;

const CENTER: Point = Point::new(16.0, 16.0);
const PUPIL_RADIUS: f32 = 3.5;

/// Outer almond outline, clockwise on screen.
fn outer_lids(path: &mut Path) {
    path.move_to(Point::new(3.0, 16.0))
        .cubic_to(Point::new(9.0, 7.0), Point::new(23.0, 7.0), Point::new(29.0, 16.0))
        .cubic_to(Point::new(23.0, 25.0), Point::new(9.0, 25.0), Point::new(3.0, 16.0))
        .close();
}

/// Inner almond, counter-clockwise so it punches the white of the eye.
fn inner_lids(path: &mut Path) {
    path.move_to(Point::new(6.0, 16.0))
        .cubic_to(Point::new(11.0, 22.0), Point::new(21.0, 22.0), Point::new(26.0, 16.0))
        .cubic_to(Point::new(21.0, 10.0), Point::new(11.0, 10.0), Point::new(6.0, 16.0))
        .close();
}

/// The open eye: lids with a solid pupil. Shown while plain text is revealed.
pub fn open_eye() -> Path {
    let mut path = Path::new();
    outer_lids(&mut path);
    inner_lids(&mut path);
    path.add_ellipse(CENTER, PUPIL_RADIUS, PUPIL_RADIUS);
    path
}

/// The slashed eye: the open eye crossed by a diagonal bar. Shown while masked.
pub fn slashed_eye() -> Path {
    let mut path = open_eye();
    path.move_to(Point::new(6.0, 4.5))
        .line_to(Point::new(27.5, 26.0))
        .line_to(Point::new(26.0, 27.5))
        .line_to(Point::new(4.5, 6.0))
        .close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_field_render::{DEFAULT_TOLERANCE, FillRule, tessellate_fill};

    #[test]
    fn test_glyphs_stay_on_grid() {
        for path in [open_eye(), slashed_eye()] {
            let bounds = path.control_bounds().unwrap();
            assert!(bounds.left() >= 0.0 && bounds.top() >= 0.0);
            assert!(bounds.right() <= ICON_GRID && bounds.bottom() <= ICON_GRID);
        }
    }

    #[test]
    fn test_glyphs_differ_and_tessellate() {
        let open = open_eye();
        let slashed = slashed_eye();
        assert_ne!(open, slashed);
        assert!(slashed.commands().len() > open.commands().len());

        for path in [open, slashed] {
            let mesh = tessellate_fill(&path, FillRule::NonZero, DEFAULT_TOLERANCE);
            assert!(!mesh.is_empty());
        }
    }
}
