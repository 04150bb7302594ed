// rigid coordinate frames in 3D: an origin plus a right-handed
// orthonormal basis. frames are immutable values; every derived
// frame is a new one.

use crate::{Point3d, Rotation3d, Unit3d, Vec3d};

//////////////////////////////////////////////////////////////////////
// name one of a frame's own axes

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FrameAxis {
    X,
    Y,
    Z
}

//////////////////////////////////////////////////////////////////////
// origin plus orthonormal basis vectors

#[derive(Debug, Clone, Copy)]
pub struct Frame {
    origin: Point3d,
    ax: Vec3d,
    ay: Vec3d,
    az: Vec3d
}

impl Frame {

    // frame at the world origin aligned with the world axes
    pub fn identity() -> Self {
        Frame {
            origin: Point3d::origin(),
            ax: Vec3d::x(),
            ay: Vec3d::y(),
            az: Vec3d::z()
        }
    }

    // build a frame from an origin and two directions: x follows
    // dir_x exactly, z follows dir_z as closely as orthonormality
    // allows, y is derived via cross product. dir_x and dir_z must
    // not be parallel.
    pub fn new(origin: Point3d, dir_x: Vec3d, dir_z: Vec3d) -> Self {

        let ax = dir_x.normalize();
        let ay = dir_z.cross(&dir_x).normalize();
        let az = ax.cross(&ay);

        debug_assert!(ax.dot(&ay).abs() < 1e-9);
        debug_assert!((az.norm() - 1.0).abs() < 1e-9);

        Frame { origin: origin, ax: ax, ay: ay, az: az }

    }

    pub fn origin(&self) -> Point3d {
        self.origin
    }

    pub fn axis(&self, which: FrameAxis) -> Vec3d {
        match which {
            FrameAxis::X => self.ax,
            FrameAxis::Y => self.ay,
            FrameAxis::Z => self.az
        }
    }

    // world point -> frame-local coordinates
    pub fn express(&self, p: &Point3d) -> Point3d {

        let d = *p - self.origin;

        Point3d::new(d.dot(&self.ax), d.dot(&self.ay), d.dot(&self.az))

    }

    // frame-local coordinates -> world point; exact inverse of
    // express for any orthonormal basis
    pub fn emplace(&self, p: &Point3d) -> Point3d {
        self.origin + self.ax * p.x + self.ay * p.y + self.az * p.z
    }

    // new frame rotated about one of its own axes
    pub fn rotated(&self, about: FrameAxis, angle: f64) -> Self {

        let axis = Unit3d::new_normalize(self.axis(about));
        let r = Rotation3d::from_axis_angle(&axis, angle);

        Frame {
            origin: self.origin,
            ax: r * self.ax,
            ay: r * self.ay,
            az: r * self.az
        }

    }

    // new frame translated along a world vector
    pub fn translated(&self, v: &Vec3d) -> Self {
        Frame {
            origin: self.origin + *v,
            ax: self.ax,
            ay: self.ay,
            az: self.az
        }
    }

    // new frame with the given axis inverted. a single inversion
    // flips handedness, which is what mirror-image constructions
    // want; chain two calls to stay right-handed.
    pub fn mirrored(&self, about: FrameAxis) -> Self {

        let mut f = *self;

        match about {
            FrameAxis::X => { f.ax = -f.ax; }
            FrameAxis::Y => { f.ay = -f.ay; }
            FrameAxis::Z => { f.az = -f.az; }
        }

        f

    }

}

//////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {

    use super::*;
    use crate::PI;

    fn vclose(a: &Vec3d, b: &Vec3d) -> bool {
        (a - b).norm() < 1e-9
    }

    fn skew_frame() -> Frame {
        Frame::new(Point3d::new(1.0, -2.0, 0.5),
                   Vec3d::new(1.0, 1.0, 0.0),
                   Vec3d::new(0.2, -0.3, 1.0))
    }

    #[test]
    fn basis_is_right_handed_orthonormal() {

        let f = skew_frame();

        for &axis in &[FrameAxis::X, FrameAxis::Y, FrameAxis::Z] {
            assert!((f.axis(axis).norm() - 1.0).abs() < 1e-9);
        }

        assert!(f.axis(FrameAxis::X).dot(&f.axis(FrameAxis::Y)).abs() < 1e-9);
        assert!(f.axis(FrameAxis::Y).dot(&f.axis(FrameAxis::Z)).abs() < 1e-9);

        let cross = f.axis(FrameAxis::X).cross(&f.axis(FrameAxis::Y));
        assert!(vclose(&cross, &f.axis(FrameAxis::Z)));

    }

    #[test]
    fn express_emplace_round_trip() {

        let f = skew_frame();

        let probes = [
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(3.0, -1.0, 2.0),
            Point3d::new(-0.25, 7.5, -4.0)
        ];

        for p in &probes {

            let there = f.emplace(&f.express(p));
            assert!((there - *p).norm() < 1e-9);

            let back = f.express(&f.emplace(p));
            assert!((back - *p).norm() < 1e-9);

        }

    }

    #[test]
    fn round_trip_survives_mirroring() {

        let f = skew_frame().mirrored(FrameAxis::Y);
        let p = Point3d::new(2.0, 3.0, -1.0);

        let there = f.emplace(&f.express(&p));
        assert!((there - p).norm() < 1e-9);

    }

    #[test]
    fn quarter_turn_about_own_z() {

        let f = Frame::identity().rotated(FrameAxis::Z, 0.5 * PI);

        assert!(vclose(&f.axis(FrameAxis::X), &Vec3d::y()));
        assert!(vclose(&f.axis(FrameAxis::Y), &-Vec3d::x()));
        assert!(vclose(&f.axis(FrameAxis::Z), &Vec3d::z()));

    }

    #[test]
    fn translation_moves_origin_only() {

        let f = skew_frame();
        let g = f.translated(&Vec3d::new(0.0, 0.0, 4.0));

        assert!((g.origin() - f.origin() - Vec3d::new(0.0, 0.0, 4.0)).norm() < 1e-12);
        assert!(vclose(&g.axis(FrameAxis::X), &f.axis(FrameAxis::X)));
        assert!(vclose(&g.axis(FrameAxis::Z), &f.axis(FrameAxis::Z)));

    }

    #[test]
    fn mirroring_negates_exactly_one_axis() {

        let f = skew_frame();
        let g = f.mirrored(FrameAxis::Z);

        assert!(vclose(&g.axis(FrameAxis::X), &f.axis(FrameAxis::X)));
        assert!(vclose(&g.axis(FrameAxis::Y), &f.axis(FrameAxis::Y)));
        assert!(vclose(&g.axis(FrameAxis::Z), &-f.axis(FrameAxis::Z)));

    }

}
