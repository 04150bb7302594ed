//! Tests for the face-to-face attachment protocol.

use qcrystal_rs::errors::ErrorKind;
use qcrystal_rs::face::ConnectorType;
use qcrystal_rs::frame::{Frame, FrameAxis};
use qcrystal_rs::tile::{Orientation, QuasiTile};
use qcrystal_rs::{Point3d, Vec3d};

fn vertices(tile: &QuasiTile) -> Vec<Point3d> {
    tile.faces().iter()
        .flat_map(|f| f.points().iter().cloned())
        .collect()
}

#[test]
fn matching_attach_mates_frames_and_spares_the_target() {

    let base = Frame::identity();

    let target = QuasiTile::dome(&base, 1.0);
    let mut mover = QuasiTile::prolate(&base, 1.0);

    let target_before = vertices(&target);

    // prolate LINE face onto dome LINE face
    mover.attach(0, &target, 2, Orientation::Standard).unwrap();

    let target_after = vertices(&target);
    assert_eq!(target_before, target_after);

    let src = mover.connector_frame(0, Orientation::Standard).unwrap();
    let dst = target.connector_frame(2, Orientation::Standard).unwrap();

    assert!((src.origin() - dst.origin()).norm() < 1e-9,
            "mated face centres should coincide");

    assert!(src.axis(FrameAxis::Z).dot(&dst.axis(FrameAxis::Z)) < -0.99,
            "mated faces should press against each other");

}

#[test]
fn attach_is_rigid() {

    let base = Frame::identity();

    let target = QuasiTile::prolate(&base, 2.0);
    let mut mover = QuasiTile::oblate(&base, 2.0);

    let before = vertices(&mover);

    // oblate ARROW face onto prolate ARROW face
    mover.attach(4, &target, 5, Orientation::Standard).unwrap();

    let after = vertices(&mover);

    // every pairwise distance within the tile is preserved
    for i in 0..before.len() {
        for j in (i + 1)..before.len() {
            let d0 = (before[j] - before[i]).norm();
            let d1 = (after[j] - after[i]).norm();
            assert!((d0 - d1).abs() < 1e-9);
        }
    }

}

#[test]
fn chained_attachments_keep_every_face_golden() {

    let base = Frame::identity();

    let mut tiles = vec![QuasiTile::prolate(&base, 1.0)];

    for i in 1..5 {
        let mut t = QuasiTile::prolate(&base, 1.0);
        t.attach(0, &tiles[i - 1], 1, Orientation::Standard).unwrap();
        tiles.push(t);
    }

    for tile in tiles.iter() {
        for face in tile.faces() {

            let long = (face.pt1() - face.pt3()).norm();
            let short = (face.pt2() - face.pt4()).norm();

            assert!((long / short - 1.618033988749895).abs() < 1e-9);

            for e in 0..4 {
                let (p0, p1) = face.edge(e);
                assert!(((p1 - p0).norm() - 1.0).abs() < 1e-9);
            }

        }
    }

}

#[test]
fn connector_taxonomy_is_enforced() {

    let base = Frame::identity();

    let prolate = QuasiTile::prolate(&base, 1.0);
    let oblate = QuasiTile::oblate(&base, 1.0);
    let icosa = QuasiTile::icosa(&base, 1.0);

    // LINE onto TRIANGLE: refused
    let mut mover = QuasiTile::prolate(&base, 1.0);
    match mover.attach(0, &oblate, 0, Orientation::Standard).unwrap_err().kind() {
        ErrorKind::ConnectorMismatch(s, t) => {
            assert_eq!(*s, ConnectorType::Line);
            assert_eq!(*t, ConnectorType::Triangle);
        }
        other => panic!("wrong error kind: {:?}", other)
    }

    // ARROW onto LINE: refused the other way round too
    let mut mover = QuasiTile::oblate(&base, 1.0);
    match mover.attach(3, &icosa, 0, Orientation::Standard).unwrap_err().kind() {
        ErrorKind::ConnectorMismatch(s, t) => {
            assert_eq!(*s, ConnectorType::Arrow);
            assert_eq!(*t, ConnectorType::Line);
        }
        other => panic!("wrong error kind: {:?}", other)
    }

    // TRIANGLE onto TRIANGLE: fine
    let mut mover = QuasiTile::oblate(&base, 1.0);
    assert!(mover.attach(0, &icosa, 10, Orientation::Standard).is_ok());

    // but never with the flipped orientation
    let mut mover = QuasiTile::oblate(&base, 1.0);
    match mover.attach(0, &icosa, 10, Orientation::Flipped).unwrap_err().kind() {
        ErrorKind::ChiralFlip(ct) => assert_eq!(*ct, ConnectorType::Triangle),
        other => panic!("wrong error kind: {:?}", other)
    }

    // face indices at the count report which side was wrong
    let mut mover = QuasiTile::prolate(&base, 1.0);
    match mover.attach(6, &prolate, 0, Orientation::Standard).unwrap_err().kind() {
        ErrorKind::SourceFaceIndex(index, count) => {
            assert_eq!((*index, *count), (6, 6));
        }
        other => panic!("wrong error kind: {:?}", other)
    }

    let mut mover = QuasiTile::prolate(&base, 1.0);
    match mover.attach(0, &icosa, 20, Orientation::Standard).unwrap_err().kind() {
        ErrorKind::TargetFaceIndex(index, count) => {
            assert_eq!((*index, *count), (20, 20));
        }
        other => panic!("wrong error kind: {:?}", other)
    }

}

#[test]
fn failed_attach_never_moves_the_tile() {

    let base = Frame::identity();

    let oblate = QuasiTile::oblate(&base, 1.0);
    let mut mover = QuasiTile::prolate(&base, 1.0);

    let before = vertices(&mover);

    assert!(mover.attach(0, &oblate, 0, Orientation::Standard).is_err());
    assert!(mover.attach(9, &oblate, 0, Orientation::Standard).is_err());
    assert!(mover.attach(3, &oblate, 4, Orientation::Flipped).is_err());

    assert_eq!(before, vertices(&mover));

}

#[test]
fn line_orientations_give_two_distinct_seatings() {

    let base = Frame::identity();
    let target = QuasiTile::icosa(&base, 1.0);

    let mut a = QuasiTile::dome(&base, 1.0);
    a.attach(0, &target, 4, Orientation::Standard).unwrap();

    let mut b = QuasiTile::dome(&base, 1.0);
    b.attach(0, &target, 4, Orientation::Flipped).unwrap();

    let offset = (a.rounded_centroid() - b.rounded_centroid()).norm();
    assert!(offset > 1e-3, "the two LINE seatings should differ");

    // translating a tile before attaching changes nothing: attach
    // re-seats it absolutely
    let mut c = QuasiTile::dome(&base, 1.0);
    c.apply_trafo(|p| *p + Vec3d::new(5.0, -3.0, 2.0));
    c.attach(0, &target, 4, Orientation::Standard).unwrap();

    let drift = (a.faces()[0].pt1() - c.faces()[0].pt1()).norm();
    assert!(drift < 1e-9, "pre-translation should not survive an attach");

}
