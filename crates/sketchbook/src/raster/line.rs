//! Integer line walk

/// Bresenham walk over the lattice points from `from` to `to`, both inclusive
///
/// A zero-length walk yields the single start point. Error terms are kept
/// in `i64`, so any pair of `i32` endpoints walks without overflow.
#[derive(Debug, Clone)]
pub struct LineWalk {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LineWalk {
    pub fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        let (x0, y0) = (from.0 as i64, from.1 as i64);
        let (x1, y1) = (to.0 as i64, to.1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Every visited point lies between the two i32 endpoints
        let point = (self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let points: Vec<_> = LineWalk::new((3, 4), (3, 4)).collect();
        assert_eq!(points, vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal() {
        let points: Vec<_> = LineWalk::new((0, 0), (4, 0)).collect();
        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_reverse_vertical() {
        let points: Vec<_> = LineWalk::new((2, 3), (2, 0)).collect();
        assert_eq!(points, vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_diagonal() {
        let points: Vec<_> = LineWalk::new((0, 0), (-3, 3)).collect();
        assert_eq!(points, vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]);
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let points: Vec<_> = LineWalk::new((i32::MIN, 0), (i32::MIN + 3, 0)).collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points.last(), Some(&(i32::MIN + 3, 0)));

        let mut walk = LineWalk::new((i32::MIN, i32::MIN), (i32::MAX, i32::MAX));
        assert_eq!(walk.next(), Some((i32::MIN, i32::MIN)));
        assert_eq!(walk.next(), Some((i32::MIN + 1, i32::MIN + 1)));
    }

    #[test]
    fn test_steps_are_connected() {
        let points: Vec<_> = LineWalk::new((-5, 2), (17, -9)).collect();
        assert_eq!(points.first(), Some(&(-5, 2)));
        assert_eq!(points.last(), Some(&(17, -9)));
        // One point per step along the major axis
        assert_eq!(points.len(), 23);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
        }
    }
}
