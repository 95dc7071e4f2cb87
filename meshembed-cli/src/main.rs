use std::path::PathBuf;

use clap::Parser;
use meshembed::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "meshembed",
    about = "Embed chain constraints into a triangle mesh",
    version,
    after_help = "\
Typical workflow:
  meshembed mesh.json constraints.json --max-edge-length 0.1 -o out.json

`mesh.json` holds a JSON-encoded Model ({vertices, triangles}); \
`constraints.json` a JSON array of Constraint ({chain, value, radius}).
Pass `-` for `constraints` to run with no constraints (refinement only, if
`--max-edge-length` is below the input's longest edge)."
)]
struct Cli {
    /// Input mesh, as JSON ({ "vertices": [...], "triangles": [...] })
    mesh: PathBuf,

    /// Constraint list, as JSON ([{ "chain": [...], "value": ..., "radius": ... }]), or `-` for none
    constraints: String,

    /// Maximum edge length after refinement
    #[arg(long)]
    max_edge_length: f32,

    /// Override the embedded planar map's near-coincident-vertex merge tolerance
    #[arg(long)]
    epm_merge_tolerance: Option<f32>,

    /// Output path for the constrained mesh + values (JSON); stdout if omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Suppress informational messages on stderr
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Serialize)]
struct Output {
    model: Model,
    values: Vec<f32>,
    snapped_paths: Vec<Vec<u32>>,
    contour_loops: Vec<Vec<Vec3>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        env_logger::init();
    }

    let mesh_json = std::fs::read_to_string(&cli.mesh)?;
    let model: Model = serde_json::from_str(&mesh_json)?;

    let constraints: Vec<Constraint> = if cli.constraints == "-" {
        Vec::new()
    } else {
        let raw = std::fs::read_to_string(&cli.constraints)?;
        serde_json::from_str(&raw)?
    };

    let mut params = Parameters::new(cli.max_edge_length)?;
    if let Some(tolerance) = cli.epm_merge_tolerance {
        params = params.with_epm_merge_tolerance(tolerance);
    }

    let (model, values, debug) = embed_constraints(&model, &constraints, &params)?;

    let out = Output {
        model,
        values,
        snapped_paths: debug.snapped_paths,
        contour_loops: debug.contour_loops,
    };
    let rendered = serde_json::to_string_pretty(&out)?;

    match cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
