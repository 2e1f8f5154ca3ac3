// crates/quadcode-cli/src/cmd/stats.rs

use clap::Args;
use quadcode_core::encode;

use crate::io::pbm;

#[derive(Args)]
pub struct StatsArgs {
    /// Input image in plain PBM (P1) format
    #[arg(long)]
    pub r#in: String,

    /// Also print the code itself to stdout
    #[arg(long, default_value_t = false)]
    pub print_code: bool,
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let raster = pbm::load_pbm(&args.r#in)?;
    let code = encode(&raster)?;

    let cells = raster.width() * raster.height();
    let mut white = 0usize;
    let mut black = 0usize;
    let mut splits = 0usize;
    for c in code.as_str().chars() {
        match c {
            'W' => white += 1,
            'B' => black += 1,
            _ => splits += 1,
        }
    }
    let leaves = white + black;
    let ratio = if cells == 0 {
        0.0
    } else {
        code.len() as f64 / cells as f64
    };

    eprintln!("--- stats ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("raster          = {}x{} ({} cells)", raster.width(), raster.height(), cells);
    eprintln!("code_symbols    = {}", code.len());
    eprintln!("leaves          = {} (white={}, black={})", leaves, white, black);
    eprintln!("splits          = {}", splits);
    eprintln!("symbols/cell    = {:.4}", ratio);

    if args.print_code {
        println!("{code}");
    }

    Ok(())
}
