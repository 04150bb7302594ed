// quasi-crystal generation driver: seeds generation 0, then
// repeatedly inflates every face of every tile. a face shared by
// two adjacent parents is inflated once per parent, so each
// generation is deduplicated by rounded centroid before it is
// finalized.

use std::collections::HashSet;

use crate::errors::*;
use crate::face::IcosahedralFace;
use crate::frame::Frame;
use crate::inflate::inflate_face;
use crate::tile::{Orientation, QuasiTile, CENTROID_DECIMALS};
use crate::{quantize, Point3d};

//////////////////////////////////////////////////////////////////////
// how generation 0 comes to be. the presets are seed assemblies
// built purely through the attachment protocol.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Preset {
    Patch,
    Studded
}

pub enum Seed {
    Tiles(Vec<QuasiTile>),
    Face(IcosahedralFace),
    Preset(Preset)
}

//////////////////////////////////////////////////////////////////////
// one beam per face edge, handed to the solid-modeling collaborator
// for wireframe voxelization

#[derive(Debug, Clone, Copy)]
pub struct Beam {
    pub p0: Point3d,
    pub r0: f64,
    pub p1: Point3d,
    pub r1: f64
}

//////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct QuasiCrystal {
    generations: Vec<Vec<QuasiTile>>
}

impl QuasiCrystal {

    pub fn new(seed: Seed, n_generations: usize, edge_len: f64) -> Result<Self> {

        if n_generations < 1 {
            bail!(ErrorKind::BadParameter("n_generations", n_generations as f64));
        }

        if edge_len <= 0.0 {
            bail!(ErrorKind::BadParameter("edge_len", edge_len));
        }

        let gen0 = match seed {
            Seed::Tiles(tiles) => tiles,
            Seed::Face(face) => inflate_face(&face)?,
            Seed::Preset(Preset::Patch) => patch_preset(edge_len)?,
            Seed::Preset(Preset::Studded) => studded_preset(edge_len)?
        };

        let mut generations = vec![dedup_tiles(gen0)];

        for _ in 1..n_generations {

            let prev = generations.last().unwrap();

            let mut next = vec![];

            for tile in prev {
                for face in tile.faces() {
                    next.extend(inflate_face(face)?);
                }
            }

            generations.push(dedup_tiles(next));

        }

        Ok(QuasiCrystal { generations: generations })

    }

    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    pub fn generation(&self, index: usize) -> Result<&[QuasiTile]> {

        if index >= self.generations.len() {
            bail!(ErrorKind::GenerationNotFound(index, self.generations.len()));
        }

        Ok(&self.generations[index])

    }

    // one beam per face edge of every tile in the generation
    pub fn wireframe(&self, index: usize, beam_radius: f64) -> Result<Vec<Beam>> {

        if beam_radius <= 0.0 {
            bail!(ErrorKind::BadParameter("beam_radius", beam_radius));
        }

        let tiles = self.generation(index)?;

        let mut beams = vec![];

        for tile in tiles {
            for face in tile.faces() {
                for e in 0..4 {

                    let (p0, p1) = face.edge(e);

                    beams.push(Beam {
                        p0: p0,
                        r0: beam_radius,
                        p1: p1,
                        r1: beam_radius
                    });

                }
            }
        }

        Ok(beams)

    }

}

//////////////////////////////////////////////////////////////////////
// dedup by quantized rounded centroid, first occurrence wins

fn dedup_tiles(tiles: Vec<QuasiTile>) -> Vec<QuasiTile> {

    let mut seen = HashSet::new();
    let mut kept = vec![];

    for mut tile in tiles {

        let c = tile.rounded_centroid();

        let key = (quantize(c.x, CENTROID_DECIMALS),
                   quantize(c.y, CENTROID_DECIMALS),
                   quantize(c.z, CENTROID_DECIMALS));

        if seen.insert(key) {
            kept.push(tile);
        }

    }

    kept

}

//////////////////////////////////////////////////////////////////////
// preset seed assemblies

// grid-like patch of 20 prolate tiles: rows of 5 chained along
// their LINE faces, rows linked through the first column. both the
// 5-ring period of the column step and the row step keep all 20
// poses distinct.
fn patch_preset(edge_len: f64) -> Result<Vec<QuasiTile>> {

    let base = Frame::identity();

    let mut tiles: Vec<QuasiTile> = vec![];

    for row in 0..4 {

        for col in 0..5 {

            let mut t = QuasiTile::prolate(&base, edge_len);

            if col > 0 {
                let prev = tiles.len() - 1;
                t.attach(0, &tiles[prev], 1, Orientation::Standard)?;
            } else if row > 0 {
                let above = tiles.len() - 5;
                t.attach(0, &tiles[above], 2, Orientation::Standard)?;
            }

            tiles.push(t);

        }

    }

    Ok(tiles)

}

// the patch with dome tiles studding the exposed ARROW faces of
// the first row, and one icosa seated (in the secondary LINE
// orientation) on the last row
fn studded_preset(edge_len: f64) -> Result<Vec<QuasiTile>> {

    let base = Frame::identity();

    let mut tiles = patch_preset(edge_len)?;

    for k in 0..5 {

        let mut stud = QuasiTile::dome(&base, edge_len);
        stud.attach(5, &tiles[k], 4, Orientation::Standard)?;

        tiles.push(stud);

    }

    let mut cap = QuasiTile::icosa(&base, edge_len);
    cap.attach(0, &tiles[15], 2, Orientation::Flipped)?;

    tiles.push(cap);

    Ok(tiles)

}

//////////////////////////////////////////////////////////////////////
