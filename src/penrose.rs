// 2D Penrose substitution engine: Robinson triangles, skinny/fat
// rhombic tiles, and the generation-by-generation pattern driver.

use std::collections::HashSet;

use crate::errors::*;
use crate::{quantize, Point2d, Vec2d, INVPHI, PHI, PI};

//////////////////////////////////////////////////////////////////////
// isoceles triangle with base corners a, c and tip b. two of these
// (one flipped through the base midpoint) make one rhombic tile.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobinsonTriangle {
    pub a: Point2d,
    pub b: Point2d,
    pub c: Point2d
}

impl RobinsonTriangle {

    pub fn new(a: Point2d, b: Point2d, c: Point2d) -> Self {
        RobinsonTriangle { a: a, b: b, c: c }
    }

    // midpoint of the base a-c
    pub fn centre(&self) -> Point2d {
        self.a + 0.5 * (self.c - self.a)
    }

    // new triangle with b reflected through the centre, same base
    pub fn flip(&self) -> Self {

        let centre = self.centre();
        let b = self.b + 2.0 * (centre - self.b);

        RobinsonTriangle { a: self.a, b: b, c: self.c }

    }

}

//////////////////////////////////////////////////////////////////////
// the two rhombus variants

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum RhombKind {
    Skinny,
    Fat
}

// a rhombic tile is a triangle plus its flip, giving the 4 ordered
// vertices (a, b, c, b')

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhombicTile {
    pub kind: RhombKind,
    pub tri: RobinsonTriangle
}

impl RhombicTile {

    pub fn new(kind: RhombKind, tri: RobinsonTriangle) -> Self {
        RhombicTile { kind: kind, tri: tri }
    }

    pub fn verts(&self) -> [Point2d; 4] {
        let flipped = self.tri.flip();
        [self.tri.a, self.tri.b, self.tri.c, flipped.b]
    }

    // vertex-average centroid, the dedup identity for tiles
    pub fn centroid(&self) -> Point2d {

        let v = self.verts();
        let sum = v[0].coords + v[1].coords + v[2].coords + v[3].coords;

        Point2d::from(sum / 4.0)

    }

    // substitute this tile by its children. the rules are fixed:
    // each of the two triangles is subdivided at the golden ratio;
    // skinny tiles give 4 children, fat tiles give 6.
    pub fn inflate(&self) -> Vec<RhombicTile> {

        let mut children = vec![];

        for tri in &[self.tri, self.tri.flip()] {

            let (a, b, c) = (tri.a, tri.b, tri.c);

            match self.kind {

                RhombKind::Skinny => {

                    // split b->a at the golden ratio
                    let d = b + INVPHI * (a - b);

                    children.push(RhombicTile::new(
                        RhombKind::Skinny,
                        RobinsonTriangle::new(d, c, a)));

                    children.push(RhombicTile::new(
                        RhombKind::Fat,
                        RobinsonTriangle::new(c, d, b)));

                }

                RhombKind::Fat => {

                    // split a->b and a->c at the golden ratio
                    let d = a + INVPHI * (b - a);
                    let e = a + INVPHI * (c - a);

                    children.push(RhombicTile::new(
                        RhombKind::Fat,
                        RobinsonTriangle::new(e, d, a)));

                    children.push(RhombicTile::new(
                        RhombKind::Skinny,
                        RobinsonTriangle::new(d, e, b)));

                    children.push(RhombicTile::new(
                        RhombKind::Fat,
                        RobinsonTriangle::new(c, e, b)));

                }

            }

        }

        children

    }

}

//////////////////////////////////////////////////////////////////////
// generation-by-generation pattern: generation 0 is a sun of 5 fat
// tiles, each later generation inflates every tile of the previous
// one and drops coincident children.

// 2 decimals is plenty in the plane
const DEDUP_DECIMALS: i32 = 2;

#[derive(Debug)]
pub struct PenrosePattern {
    generations: Vec<Vec<RhombicTile>>
}

impl PenrosePattern {

    pub fn new(n_generations: usize, side_len: f64) -> Result<Self> {

        if n_generations < 1 {
            bail!(ErrorKind::BadParameter("n_generations", n_generations as f64));
        }

        if side_len <= 0.0 {
            bail!(ErrorKind::BadParameter("side_len", side_len));
        }

        let mut generations = vec![Self::seed_sun(side_len)];

        for _ in 1..n_generations {

            let prev = generations.last().unwrap();

            let next = prev.iter().flat_map(|t| t.inflate()).collect();

            generations.push(dedup_tiles(next));

        }

        Ok(PenrosePattern { generations: generations })

    }

    // 5 fat tiles sharing their 72 degree corner at the origin, one
    // every 2*pi/5; the 108 degree apex of each tile points outward
    fn seed_sun(side_len: f64) -> Vec<RhombicTile> {

        let dir = |ang: f64| Vec2d::new(ang.cos(), ang.sin());

        (0..5).map(|k| {

            let theta = k as f64 * 2.0 * PI / 5.0;

            let a = Point2d::origin();
            let b = a + side_len * dir(theta - PI / 5.0);
            let c = a + PHI * side_len * dir(theta);

            RhombicTile::new(RhombKind::Fat, RobinsonTriangle::new(a, b, c))

        }).collect()

    }

    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    pub fn generation(&self, index: usize) -> Result<&[RhombicTile]> {

        if index >= self.generations.len() {
            bail!(ErrorKind::GenerationNotFound(index, self.generations.len()));
        }

        Ok(&self.generations[index])

    }

}

//////////////////////////////////////////////////////////////////////
// dedup by quantized centroid, first occurrence wins

fn dedup_tiles(tiles: Vec<RhombicTile>) -> Vec<RhombicTile> {

    let mut seen = HashSet::new();
    let mut kept = vec![];

    for tile in tiles {

        let c = tile.centroid();

        let key = (quantize(c.x, DEDUP_DECIMALS),
                   quantize(c.y, DEDUP_DECIMALS));

        if seen.insert(key) {
            kept.push(tile);
        }

    }

    kept

}

//////////////////////////////////////////////////////////////////////
