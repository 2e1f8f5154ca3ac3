// crates/quadcode-cli/src/cmd/encode.rs

use anyhow::Context;
use clap::Args;
use quadcode_core::encode;

use crate::io::pbm;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input image in plain PBM (P1) format
    #[arg(long)]
    pub r#in: String,

    /// Write the code text here instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let raster = pbm::load_pbm(&args.r#in)?;
    let code = encode(&raster)?;

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, format!("{code}\n")).with_context(|| format!("write {path}"))?;
            eprintln!(
                "encoded {}x{} -> {} symbols -> {}",
                raster.width(),
                raster.height(),
                code.len(),
                path
            );
        }
        None => println!("{code}"),
    }

    Ok(())
}
