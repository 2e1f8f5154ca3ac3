// crates/quadcode-cli/src/io/pbm.rs
//
// Plain PBM (P1) reader. Layout: "P1" magic, width, height, then
// width*height cell values, all whitespace-separated; '#' starts a comment
// running to end of line and may appear between any tokens.

use anyhow::{bail, Context};
use quadcode_core::{Pixel, Raster};

/// Load a plain PBM file into a raster.
pub fn load_pbm(path: &str) -> anyhow::Result<Raster> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_pbm(&text).with_context(|| format!("parse {path}"))
}

/// Parse plain PBM text. Cell values must be exactly `0` (white) or `1`
/// (black); anything else is outside the two-value alphabet and rejected.
pub fn parse_pbm(text: &str) -> anyhow::Result<Raster> {
    let mut tokens = tokens(text);

    match tokens.next() {
        Some("P1") => {}
        Some(other) => bail!("bad magic: expected P1, got {other:?}"),
        None => bail!("empty input: expected P1 header"),
    }

    let width = dimension(tokens.next(), "width")?;
    let height = dimension(tokens.next(), "height")?;

    let mut cells = Vec::with_capacity(width * height);
    for i in 0..width * height {
        match tokens.next() {
            Some("0") => cells.push(Pixel::White),
            Some("1") => cells.push(Pixel::Black),
            Some(other) => bail!("cell {i}: expected 0 or 1, got {other:?}"),
            None => bail!(
                "truncated data: expected {} cells, got {}",
                width * height,
                i
            ),
        }
    }

    Raster::from_cells(width, height, cells).map_err(Into::into)
}

fn dimension(token: Option<&str>, what: &str) -> anyhow::Result<usize> {
    let t = token.with_context(|| format!("missing {what}"))?;
    t.parse::<usize>().with_context(|| format!("bad {what}: {t:?}"))
}

/// Whitespace-separated tokens with '#' comments stripped through end of line.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        })
        .flat_map(|line| line.split_whitespace())
}
