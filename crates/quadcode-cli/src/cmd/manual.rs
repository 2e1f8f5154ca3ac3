// crates/quadcode-cli/src/cmd/manual.rs
//
// Interactive entry: width and height, then width*height cells as 0/1,
// whitespace-separated in any grouping. Prompts go to stderr so stdout
// carries only the resulting code.

use std::io::BufRead;

use anyhow::{bail, Context};
use clap::Args;
use quadcode_core::{encode, Pixel, Raster};

#[derive(Args)]
pub struct ManualArgs {}

pub fn run(_args: ManualArgs) -> anyhow::Result<()> {
    eprintln!("Enter WIDTH and HEIGHT:");
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let (width, height) = read_dimensions(&mut input)?;
    eprintln!("Enter the {} cells (0 or 1), row by row:", width * height);

    let raster = read_cells(&mut input, width, height)?;
    let code = encode(&raster)?;
    println!("{code}");
    Ok(())
}

fn read_dimensions(input: &mut impl BufRead) -> anyhow::Result<(usize, usize)> {
    let mut tokens = TokenReader::new(input);
    let width = tokens.next_token()?.parse::<usize>().context("bad width")?;
    let height = tokens.next_token()?.parse::<usize>().context("bad height")?;
    Ok((width, height))
}

fn read_cells(input: &mut impl BufRead, width: usize, height: usize) -> anyhow::Result<Raster> {
    let mut tokens = TokenReader::new(input);
    let mut cells = Vec::with_capacity(width * height);
    for i in 0..width * height {
        match tokens.next_token()?.as_str() {
            "0" => cells.push(Pixel::White),
            "1" => cells.push(Pixel::Black),
            other => bail!("cell {i}: expected 0 or 1, got {other:?}"),
        }
    }
    Raster::from_cells(width, height, cells).map_err(Into::into)
}

/// Pulls whitespace-separated tokens line by line from a reader.
struct TokenReader<'a, R: BufRead> {
    input: &'a mut R,
    pending: Vec<String>,
}

impl<'a, R: BufRead> TokenReader<'a, R> {
    fn new(input: &'a mut R) -> Self {
        TokenReader {
            input,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(tok) = self.pending.pop() {
                return Ok(tok);
            }
            let mut line = String::new();
            let n = self.input.read_line(&mut line).context("read input")?;
            if n == 0 {
                bail!("unexpected end of input");
            }
            // reversed so pop() hands tokens back in order
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }
}
