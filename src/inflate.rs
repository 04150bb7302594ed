// the quasi-tile substitution engine: replaces one rhombic face
// with a fixed chain of elementary tiles, scaled and seated flush
// against one of the face's edges. everything here is a pure
// function of the input face; no state survives a call.

use crate::errors::*;
use crate::face::{ConnectorType, IcosahedralFace};
use crate::frame::{Frame, FrameAxis};
use crate::tile::{Orientation, QuasiTile};
use crate::{Point3d, Vec3d, PI};

//////////////////////////////////////////////////////////////////////
// fixed substitution rules

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChainKind {
    Primary,
    Secondary
}

// one rule per face edge: which chain, at which multiple of pi/5
#[derive(Debug, Clone, Copy)]
pub struct EdgeRule {
    pub kind: ChainKind,
    pub phase: usize
}

// rules per connector type, indexed by the connector discriminant.
// LINE substitutes the primary chain on all four edges; ARROW and
// TRIANGLE swap in the secondary chain on complementary edge pairs.
static EDGE_RULES: [[EdgeRule; 4]; 3] = [
    // LINE
    [EdgeRule { kind: ChainKind::Primary, phase: 0 },
     EdgeRule { kind: ChainKind::Primary, phase: 1 },
     EdgeRule { kind: ChainKind::Primary, phase: 1 },
     EdgeRule { kind: ChainKind::Primary, phase: 0 }],
    // ARROW
    [EdgeRule { kind: ChainKind::Primary, phase: 1 },
     EdgeRule { kind: ChainKind::Primary, phase: 0 },
     EdgeRule { kind: ChainKind::Secondary, phase: 1 },
     EdgeRule { kind: ChainKind::Secondary, phase: 2 }],
    // TRIANGLE
    [EdgeRule { kind: ChainKind::Secondary, phase: 1 },
     EdgeRule { kind: ChainKind::Secondary, phase: 2 },
     EdgeRule { kind: ChainKind::Primary, phase: 1 },
     EdgeRule { kind: ChainKind::Primary, phase: 0 }],
];

// connector discriminants outside the table are a hard error
// rather than a panic
pub fn edge_rules(connector: ConnectorType) -> Result<&'static [EdgeRule; 4]> {

    let index = connector as usize;

    match EDGE_RULES.get(index) {
        Some(rules) => Ok(rules),
        None => bail!(ErrorKind::UnsupportedConnector(index))
    }

}

//////////////////////////////////////////////////////////////////////
// a freshly built chain of unit-size tiles plus the reference edge
// the remap will grab it by

struct Chain {
    tiles: Vec<QuasiTile>,
    ref_a: Point3d,
    ref_b: Point3d,
    normal: Vec3d
}

// ring of 5 prolate tiles: tiles 1..3 chained face 0 onto the
// previous tile's face 1, then the closing tile seated the
// opposite way round (its face 1 onto tile 0's face 0)
fn build_ring() -> Result<Vec<QuasiTile>> {

    let base = Frame::identity();

    let mut ring = vec![QuasiTile::prolate(&base, 1.0)];

    for i in 1..4 {

        let mut t = QuasiTile::prolate(&base, 1.0);
        t.attach(0, &ring[i - 1], 1, Orientation::Standard)?;

        ring.push(t);

    }

    let mut closer = QuasiTile::prolate(&base, 1.0);
    closer.attach(1, &ring[0], 0, Orientation::Standard)?;

    ring.push(closer);

    Ok(ring)

}

// reference corners shared by both chains: first tile's face 0 pt1
// and the closing tile's face 1 pt3
fn chain_refs(ring: &[QuasiTile]) -> (Point3d, Point3d, Vec3d) {

    let ref_a = ring[0].faces()[0].pt1();
    let ref_b = ring[4].faces()[1].pt3();
    let normal = ring[0].faces()[0].normal();

    (ref_a, ref_b, normal)

}

// primary chain: the 5-ring, one dome seated transversally on it,
// and 5 more prolate tiles fanned radially around the dome.
// 11 tiles.
fn primary_chain() -> Result<Chain> {

    let base = Frame::identity();

    let mut tiles = build_ring()?;
    let (ref_a, ref_b, normal) = chain_refs(&tiles);

    let mut mid = QuasiTile::dome(&base, 1.0);
    mid.attach(5, &tiles[0], 3, Orientation::Standard)?;

    let mut spokes = vec![];

    for k in 0..5 {

        let mut spoke = QuasiTile::prolate(&base, 1.0);
        spoke.attach(0, &mid, k, Orientation::Standard)?;

        spokes.push(spoke);

    }

    tiles.push(mid);
    tiles.append(&mut spokes);

    Ok(Chain { tiles: tiles, ref_a: ref_a, ref_b: ref_b, normal: normal })

}

// secondary chain: the 5-ring plus a single transversal oblate,
// no radial fan. 6 tiles.
fn secondary_chain() -> Result<Chain> {

    let base = Frame::identity();

    let mut tiles = build_ring()?;
    let (ref_a, ref_b, normal) = chain_refs(&tiles);

    let mut mid = QuasiTile::oblate(&base, 1.0);
    mid.attach(3, &tiles[2], 4, Orientation::Standard)?;

    tiles.push(mid);

    Ok(Chain { tiles: tiles, ref_a: ref_a, ref_b: ref_b, normal: normal })

}

//////////////////////////////////////////////////////////////////////
// substitute one face: each of its 4 oriented edges receives a
// chain, rescaled by the edge length ratio and re-expressed from
// the chain's reference-edge frame into the target-edge frame,
// in-plane rotated by the rule's phase angle plus pi/10.

pub fn inflate_face(face: &IcosahedralFace) -> Result<Vec<QuasiTile>> {

    let rules = edge_rules(face.connector())?;

    let mut out = vec![];

    for (edge_index, rule) in rules.iter().enumerate() {

        let mut chain = match rule.kind {
            ChainKind::Primary => primary_chain()?,
            ChainKind::Secondary => secondary_chain()?
        };

        let (e0, e1) = face.edge(edge_index);

        let target_len = (e1 - e0).norm();
        let current_len = (chain.ref_b - chain.ref_a).norm();

        debug_assert!(current_len > 0.0);

        let scale = target_len / current_len;

        let current = Frame::new(chain.ref_a,
                                 chain.ref_b - chain.ref_a,
                                 chain.normal);

        let angle = rule.phase as f64 * PI / 5.0 + PI / 10.0;

        let target = face.edge_frame(edge_index).rotated(FrameAxis::Z, angle);

        for tile in chain.tiles.iter_mut() {
            tile.apply_trafo(|p| {
                let local = current.express(p);
                target.emplace(&Point3d::from(local.coords * scale))
            });
        }

        out.append(&mut chain.tiles);

    }

    Ok(out)

}

//////////////////////////////////////////////////////////////////////
