use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use zone_reshape::ZoneEditor;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Operation {
    Cut,
    Reshape,
    Reshape2,
    Simplify,
    MuffAndSimp,
    Merge,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    op: Operation,

    /// Zone WKT (Polygon or MultiPolygon)
    #[arg(short, long, conflicts_with = "zone_file")]
    zone: Option<String>,

    /// File holding the zone WKT
    #[arg(long)]
    zone_file: Option<PathBuf>,

    /// Edit line WKT (cut, reshape, reshape2)
    #[arg(short, long)]
    line: Option<String>,

    /// Simplification tolerance for muff-and-simp
    #[arg(short, long, default_value_t = 0.0)]
    tolerance: f64,

    /// Merge distance for merge
    #[arg(short, long, default_value_t = 0.0)]
    distance: f64,

    /// Half-width of cut corridors
    #[arg(long)]
    cut_buffer: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let zone = match (&args.zone, &args.zone_file) {
        (Some(wkt), _) => wkt.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err("either --zone or --zone-file is required".into()),
    };

    let mut editor = ZoneEditor::new();
    if let Some(dist) = args.cut_buffer {
        editor = editor.with_cut_line_buff_dist(dist);
    }
    let line = || args.line.as_deref().ok_or("--line is required for this operation");

    let start = std::time::Instant::now();
    let output = match args.op {
        Operation::Cut => editor.cut(&zone, line()?)?,
        Operation::Reshape => vec![editor.reshape(&zone, line()?)?],
        Operation::Reshape2 => vec![editor.reshape2(&zone, line()?)?],
        Operation::Simplify => vec![editor.simplify(&zone)?],
        Operation::MuffAndSimp => vec![editor.muff_and_simp(&zone, args.tolerance)?],
        Operation::Merge => vec![editor.merge_zone(&zone, args.distance)?],
    };
    eprintln!("{:?} took {:?}", args.op, start.elapsed());

    for piece in output {
        println!("{}", piece);
    }
    Ok(())
}
