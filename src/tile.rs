// composite quasi-tiles: ordered face lists built as rotated,
// tilted domes of golden rhombi, plus the rigid attachment protocol
// that glues tiles together face to face.

use std::collections::HashSet;

use crate::errors::*;
use crate::face::{AnchorMode, ConnectorType, IcosahedralFace};
use crate::frame::{Frame, FrameAxis};
use crate::{quantize, round_to, Point3d, Vec3d, INV_ROOT5, PI};

//////////////////////////////////////////////////////////////////////
// attach orientation. LINE faces accept either one; chiral faces
// only the standard one.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    Standard,
    Flipped
}

// dedup identity precision for 3D tiles
pub const CENTROID_DECIMALS: i32 = 4;

//////////////////////////////////////////////////////////////////////
// dome construction helpers

// polar angle of the dome edges meeting at the pole, solved so that
// two edges 2*pi/n apart in azimuth subtend exactly the rhombus
// corner angle whose cosine is pole_cos
fn pole_edge_angle(n: usize, pole_cos: f64) -> f64 {

    let denom = 1.0 - (2.0 * PI / n as f64).cos();

    ((1.0 - pole_cos) / denom).sqrt().asin()

}

// tilt of a dome face away from the dome axis: the face diagonal
// through the pole bisects two adjacent pole edges
fn face_tilt(n: usize, edge_angle: f64) -> f64 {
    (edge_angle.tan() * (PI / n as f64).cos()).atan()
}

// one dome of n faces sharing a pole corner. faces sit in frames
// rotated 2*pi/n apart about the dome axis and tipped outward by
// the face tilt. the mirrored dome is staggered half a step, built
// in a z-inverted frame, and gets its vertex cycle flipped to keep
// face orientations consistent with the top dome.
fn dome_faces(base: &Frame,
              side_len: f64,
              n: usize,
              anchor: AnchorMode,
              connector: ConnectorType,
              tilt: f64,
              mirror: bool,
              pole_offset: f64) -> Vec<IcosahedralFace> {

    let mut faces = vec![];

    for i in 0..n {

        let mut az = (i as f64 + 0.5) * 2.0 * PI / n as f64;

        if mirror {
            az += PI / n as f64;
        }

        let shift = base.axis(FrameAxis::Z) * pole_offset;

        let mut f = base.translated(&shift).rotated(FrameAxis::Z, az);

        if mirror {
            f = f.mirrored(FrameAxis::Z);
        }

        f = f.rotated(FrameAxis::X, tilt);

        let face = IcosahedralFace::new(side_len, &f, anchor, connector);

        faces.push(if mirror { face.flip_long_axis() } else { face });

    }

    faces

}

//////////////////////////////////////////////////////////////////////
// a composite tile: an ordered face list, a display tag, and a
// memoized rounded centroid that is cleared whenever the geometry
// is transformed.

#[derive(Debug, Clone)]
pub struct QuasiTile {
    tag: &'static str,
    faces: Vec<IcosahedralFace>,
    centroid: Option<Point3d>
}

impl QuasiTile {

    pub fn from_faces(tag: &'static str, faces: Vec<IcosahedralFace>) -> Self {
        debug_assert!(!faces.is_empty());
        QuasiTile { tag: tag, faces: faces, centroid: None }
    }

    //////////////////////////////////////////////////
    // the four elementary shapes. all are pure functions of the
    // base frame and the face side length.

    // 3-fold atom with acute corners at the poles: 6 faces,
    // LINE on the top dome and ARROW on the mirrored one
    pub fn prolate(base: &Frame, side_len: f64) -> Self {

        let beta = pole_edge_angle(3, INV_ROOT5);
        let tilt = face_tilt(3, beta);
        let drop = -3.0 * side_len * beta.cos();

        let mut faces = dome_faces(base, side_len, 3, AnchorMode::LongAxis,
                                   ConnectorType::Line, tilt, false, 0.0);

        faces.extend(dome_faces(base, side_len, 3, AnchorMode::LongAxis,
                                ConnectorType::Arrow, tilt, true, drop));

        Self::from_faces("prolate", faces)

    }

    // 3-fold atom with obtuse corners at the poles: a much flatter
    // dome, anchored on the short diagonal, TRIANGLE over ARROW
    pub fn oblate(base: &Frame, side_len: f64) -> Self {

        let beta = pole_edge_angle(3, -INV_ROOT5);
        let tilt = face_tilt(3, beta);
        let drop = -3.0 * side_len * beta.cos();

        let mut faces = dome_faces(base, side_len, 3, AnchorMode::ShortAxis,
                                   ConnectorType::Triangle, tilt, false, 0.0);

        faces.extend(dome_faces(base, side_len, 3, AnchorMode::ShortAxis,
                                ConnectorType::Arrow, tilt, true, drop));

        Self::from_faces("oblate", faces)

    }

    // 5-fold atom: two opposing 5-domes, 10 faces
    pub fn dome(base: &Frame, side_len: f64) -> Self {

        let beta = pole_edge_angle(5, INV_ROOT5);
        let tilt = face_tilt(5, beta);
        let drop = -5.0 * side_len * beta.cos();

        let mut faces = dome_faces(base, side_len, 5, AnchorMode::LongAxis,
                                   ConnectorType::Line, tilt, false, 0.0);

        faces.extend(dome_faces(base, side_len, 5, AnchorMode::LongAxis,
                                ConnectorType::Arrow, tilt, true, drop));

        Self::from_faces("dome", faces)

    }

    // 5-fold atom with a bridge ring: two 5-domes plus 10
    // alternating equatorial faces between the tips of adjacent
    // dome faces, 20 faces total
    pub fn icosa(base: &Frame, side_len: f64) -> Self {

        let beta = pole_edge_angle(5, INV_ROOT5);
        let tilt = face_tilt(5, beta);
        let drop = -5.0 * side_len * beta.cos();

        let mut faces = dome_faces(base, side_len, 5, AnchorMode::LongAxis,
                                   ConnectorType::Line, tilt, false, 0.0);

        faces.extend(dome_faces(base, side_len, 5, AnchorMode::LongAxis,
                                ConnectorType::Line, tilt, true, drop));

        for i in 0..10 {

            let az = i as f64 * PI / 5.0;

            let shift = base.axis(FrameAxis::Z) * (0.5 * drop);

            let mut f = base.translated(&shift).rotated(FrameAxis::Z, az);

            if i % 2 == 1 {
                f = f.mirrored(FrameAxis::Z);
            }

            f = f.rotated(FrameAxis::X, 0.5 * PI);

            let face = IcosahedralFace::new(side_len, &f, AnchorMode::Centre,
                                            ConnectorType::Triangle);

            faces.push(if i % 2 == 1 { face.flip_long_axis() } else { face });

        }

        Self::from_faces("icosa", faces)

    }

    //////////////////////////////////////////////////

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn faces(&self) -> &[IcosahedralFace] {
        &self.faces
    }

    // apply an arbitrary point transform to every vertex of every
    // face; invalidates the memoized centroid
    pub fn apply_trafo<F>(&mut self, f: F)
        where F: Fn(&Point3d) -> Point3d
    {
        for face in self.faces.iter_mut() {
            face.apply(&f);
        }
        self.centroid = None;
    }

    // average of the distinct vertices over all faces, everything
    // rounded to 4 decimals. this is the sole identity test for
    // "same physical tile".
    fn compute_centroid(&self) -> Point3d {

        let mut seen = HashSet::new();
        let mut sum = Vec3d::zeros();
        let mut count = 0;

        for face in &self.faces {
            for p in face.points() {

                let key = (quantize(p.x, CENTROID_DECIMALS),
                           quantize(p.y, CENTROID_DECIMALS),
                           quantize(p.z, CENTROID_DECIMALS));

                if seen.insert(key) {
                    sum += p.coords;
                    count += 1;
                }

            }
        }

        debug_assert!(count > 0);

        let mean = sum / count as f64;

        Point3d::new(round_to(mean.x, CENTROID_DECIMALS),
                     round_to(mean.y, CENTROID_DECIMALS),
                     round_to(mean.z, CENTROID_DECIMALS))

    }

    // memoized rounded centroid, recomputed lazily after any
    // transform
    pub fn rounded_centroid(&mut self) -> Point3d {

        if self.centroid.is_none() {
            self.centroid = Some(self.compute_centroid());
        }

        self.centroid.unwrap()

    }

    // centroid without touching the memo, for read-only callers
    fn centroid_hint(&self) -> Point3d {
        match self.centroid {
            Some(c) => c,
            None => self.compute_centroid()
        }
    }

    // connector frame for a face: origin at the face centre, z
    // along the face normal pointing away from the tile's own
    // centroid, x along the face long axis -- negated for a LINE
    // face's secondary orientation. chiral connectors have no
    // secondary orientation.
    pub fn connector_frame(&self,
                           face_index: usize,
                           orientation: Orientation) -> Result<Frame> {

        if face_index >= self.faces.len() {
            bail!(ErrorKind::SourceFaceIndex(face_index, self.faces.len()));
        }

        let face = &self.faces[face_index];

        if orientation == Orientation::Flipped && face.connector().is_chiral() {
            bail!(ErrorKind::ChiralFlip(face.connector()));
        }

        let centre = face.centre();

        let mut normal = face.normal();

        if normal.dot(&(centre - self.centroid_hint())) < 0.0 {
            normal = -normal;
        }

        let mut long = face.long_axis();

        if orientation == Orientation::Flipped {
            long = -long;
        }

        Ok(Frame::new(centre, long, normal))

    }

    // rigidly re-seat this tile so that its face src_index mates
    // with other's face dst_index: every vertex is expressed in the
    // source connector frame and re-emplaced in the target one,
    // half-turned about the shared long axis so the two tiles end
    // up on opposite sides of the mated face. the target tile is
    // never touched.
    pub fn attach(&mut self,
                  src_index: usize,
                  other: &QuasiTile,
                  dst_index: usize,
                  orientation: Orientation) -> Result<()> {

        if src_index >= self.faces.len() {
            bail!(ErrorKind::SourceFaceIndex(src_index, self.faces.len()));
        }

        if dst_index >= other.faces.len() {
            bail!(ErrorKind::TargetFaceIndex(dst_index, other.faces.len()));
        }

        let src_ct = self.faces[src_index].connector();
        let dst_ct = other.faces[dst_index].connector();

        if src_ct != dst_ct {
            bail!(ErrorKind::ConnectorMismatch(src_ct, dst_ct));
        }

        let src_frame = self.connector_frame(src_index, Orientation::Standard)?;

        let dst_frame = other
            .connector_frame(dst_index, orientation)?
            .rotated(FrameAxis::X, PI);

        self.apply_trafo(|p| dst_frame.emplace(&src_frame.express(p)));

        Ok(())

    }

}

//////////////////////////////////////////////////////////////////////
