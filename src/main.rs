/*

driver for the substitution engines: picks a mode and parameters
from the command line, runs the requested number of generations,
logs per-generation tile counts, and dumps the final generation's
wireframe beam list for the solid-modeling pipeline.

 */

#[macro_use]
extern crate error_chain;

use std::fs::File;
use std::io::{BufWriter, Write};

use phf::phf_map;

use qcrystal_rs::crystal::{Preset, QuasiCrystal, Seed};
use qcrystal_rs::errors::*;
use qcrystal_rs::penrose::{PenrosePattern, RhombKind};

//////////////////////////////////////////////////////////////////////
// modes the driver knows how to run

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Penrose,
    Patch,
    Studded
}

// define a lookup table matching mode strings to modes
static MODES: phf::Map<&'static str, Mode> = phf_map! {
    "penrose" => Mode::Penrose,
    "patch" => Mode::Patch,
    "studded" => Mode::Studded,
};

// wireframe beam radius as a fraction of the edge length
const BEAM_RADIUS_FRAC: f64 = 0.05;

//////////////////////////////////////////////////////////////////////
// run the 2D engine and log the per-generation breakdown

fn run_penrose(n_generations: usize, side_len: f64) -> Result<()> {

    let pattern = PenrosePattern::new(n_generations, side_len)?;

    for g in 0..pattern.num_generations() {

        let tiles = pattern.generation(g)?;

        let skinny = tiles.iter().filter(|t| t.kind == RhombKind::Skinny).count();
        let fat = tiles.len() - skinny;

        println!("generation {:}: {:} tiles ({:} skinny, {:} fat)",
                 g, tiles.len(), skinny, fat);

    }

    Ok(())

}

//////////////////////////////////////////////////////////////////////
// run the 3D engine, log counts, dump the final wireframe

fn run_crystal(preset: Preset,
               n_generations: usize,
               edge_len: f64,
               outfile: &str) -> Result<()> {

    let crystal = QuasiCrystal::new(Seed::Preset(preset), n_generations, edge_len)?;

    for g in 0..crystal.num_generations() {

        let tiles = crystal.generation(g)?;

        let faces: usize = tiles.iter().map(|t| t.faces().len()).sum();

        println!("generation {:}: {:} tiles, {:} faces", g, tiles.len(), faces);

    }

    let last = crystal.num_generations() - 1;

    let beams = crystal.wireframe(last, BEAM_RADIUS_FRAC * edge_len)?;

    let f = File::create(outfile)?;
    let mut w = BufWriter::new(f);

    for beam in &beams {
        writeln!(w, "{:} {:} {:} {:} {:} {:} {:} {:}",
                 beam.p0.x, beam.p0.y, beam.p0.z, beam.r0,
                 beam.p1.x, beam.p1.y, beam.p1.z, beam.r1)?;
    }

    println!("wrote {:} beams to {:}", beams.len(), outfile);

    Ok(())

}

//////////////////////////////////////////////////////////////////////

fn run() -> Result<()> {

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        eprintln!("usage: {:} MODE NGEN SIDE [OUTFILE]", args[0]);
        eprintln!("  MODE is one of: penrose, patch, studded");
        std::process::exit(1);
    }

    let mode = match MODES.get(args[1].as_str()) {
        Some(&m) => m,
        None => bail!("unknown mode \"{:}\"", args[1])
    };

    let n_generations: usize = args[2].parse()?;
    let side_len: f64 = args[3].parse()?;

    let outfile = if args.len() == 5 { args[4].as_str() } else { "beams.txt" };

    match mode {
        Mode::Penrose => run_penrose(n_generations, side_len),
        Mode::Patch => run_crystal(Preset::Patch, n_generations, side_len, outfile),
        Mode::Studded => run_crystal(Preset::Studded, n_generations, side_len, outfile)
    }

}

quick_main!(run);

//////////////////////////////////////////////////////////////////////
