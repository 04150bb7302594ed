// rhombic faces for the 3D quasi-crystal: a golden rhombus carrying
// a connector type that restricts which other faces it may join to.

use std::fmt;

use crate::frame::Frame;
use crate::{Point3d, Vec3d};

//////////////////////////////////////////////////////////////////////
// connector types enforce aperiodicity: LINE is symmetric (two
// valid attach orientations), ARROW and TRIANGLE are chiral
// (exactly one).

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum ConnectorType {
    Line,
    Arrow,
    Triangle
}

impl ConnectorType {

    pub fn is_chiral(self) -> bool {
        match self {
            ConnectorType::Line => false,
            ConnectorType::Arrow | ConnectorType::Triangle => true
        }
    }

}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ConnectorType::Line => "LINE",
            ConnectorType::Arrow => "ARROW",
            ConnectorType::Triangle => "TRIANGLE"
        };
        write!(f, "{:}", name)
    }
}

//////////////////////////////////////////////////////////////////////
// where the rhombus sits relative to its construction frame

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AnchorMode {
    Centre,
    LongAxis,
    ShortAxis
}

//////////////////////////////////////////////////////////////////////
// cos and sin of half the rhombus corner angle at the long-diagonal
// ends (the full angle is arccos(1/sqrt(5))); the half-diagonal
// ratio they produce is exactly phi

const COS_HALF_CORNER: f64 = 0.8506508083520399;
const SIN_HALF_CORNER: f64 = 0.5257311121191336;

//////////////////////////////////////////////////////////////////////
// a golden rhombus in 3D. pt1/pt3 are the long-diagonal pair,
// pt2/pt4 the short-diagonal pair, in cyclic order. the connector
// type is fixed at construction and never changes.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosahedralFace {
    pts: [Point3d; 4],
    connector: ConnectorType
}

impl IcosahedralFace {

    // build the rhombus in the frame's local x-z plane (long
    // diagonal along z, short diagonal along x), place it per the
    // anchor mode, then map every vertex to world coordinates
    // through the frame.
    pub fn new(side_len: f64,
               frame: &Frame,
               anchor: AnchorMode,
               connector: ConnectorType) -> Self {

        debug_assert!(side_len > 0.0);

        let hl = side_len * COS_HALF_CORNER; // half the long diagonal
        let hs = side_len * SIN_HALF_CORNER; // half the short diagonal

        let local = match anchor {

            AnchorMode::Centre => [
                Point3d::new(0.0, 0.0, hl),
                Point3d::new(hs, 0.0, 0.0),
                Point3d::new(0.0, 0.0, -hl),
                Point3d::new(-hs, 0.0, 0.0)
            ],

            // pt1 at the origin, long diagonal running up +z
            AnchorMode::LongAxis => [
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(hs, 0.0, hl),
                Point3d::new(0.0, 0.0, 2.0 * hl),
                Point3d::new(-hs, 0.0, hl)
            ],

            // rotated -90 degrees in-plane, then pt2 at the origin
            AnchorMode::ShortAxis => [
                Point3d::new(-hl, 0.0, -hs),
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(hl, 0.0, -hs),
                Point3d::new(0.0, 0.0, -2.0 * hs)
            ],

        };

        let mut pts = [Point3d::origin(); 4];

        for (i, p) in local.iter().enumerate() {
            pts[i] = frame.emplace(p);
        }

        IcosahedralFace { pts: pts, connector: connector }

    }

    pub fn connector(&self) -> ConnectorType {
        self.connector
    }

    pub fn pt1(&self) -> Point3d { self.pts[0] }
    pub fn pt2(&self) -> Point3d { self.pts[1] }
    pub fn pt3(&self) -> Point3d { self.pts[2] }
    pub fn pt4(&self) -> Point3d { self.pts[3] }

    pub fn points(&self) -> &[Point3d; 4] {
        &self.pts
    }

    // intersection of the diagonals
    pub fn centre(&self) -> Point3d {
        self.pts[0] + 0.5 * (self.pts[2] - self.pts[0])
    }

    // unit vector along the long diagonal, pt3 toward pt1
    pub fn long_axis(&self) -> Vec3d {
        (self.pts[0] - self.pts[2]).normalize()
    }

    // unit vector along the short diagonal, pt4 toward pt2
    pub fn short_axis(&self) -> Vec3d {
        (self.pts[1] - self.pts[3]).normalize()
    }

    // unit normal; the diagonals are orthogonal so no extra
    // normalization is needed
    pub fn normal(&self) -> Vec3d {
        self.long_axis().cross(&self.short_axis())
    }

    // oriented edge of the cycle pt1->pt2->pt3->pt4->pt1
    pub fn edge(&self, index: usize) -> (Point3d, Point3d) {
        debug_assert!(index < 4);
        (self.pts[index], self.pts[(index + 1) % 4])
    }

    // local frame of an oriented edge: origin at the edge start,
    // x along the edge, z along the face normal
    pub fn edge_frame(&self, index: usize) -> Frame {
        let (p0, p1) = self.edge(index);
        Frame::new(p0, p1 - p0, self.normal())
    }

    // swap pt1 and pt3: mirror across the short axis
    pub fn flip_short_axis(&self) -> Self {
        let mut f = *self;
        f.pts.swap(0, 2);
        f
    }

    // swap pt2 and pt4: mirror across the long axis
    pub fn flip_long_axis(&self) -> Self {
        let mut f = *self;
        f.pts.swap(1, 3);
        f
    }

    // map every vertex through the given point transform
    pub(crate) fn apply<F>(&mut self, f: &F)
        where F: Fn(&Point3d) -> Point3d
    {
        for p in self.pts.iter_mut() {
            *p = f(p);
        }
    }

}

//////////////////////////////////////////////////////////////////////
