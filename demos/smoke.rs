//! Host smoke test: map a wiring and print the resulting output bytes.
//!
//! Usage: `cargo run --features host --bin segmap-smoke -- [MAP_STR] [anode] [GLYPH_SET]`
//!
//! With no arguments, maps `"ABCDEFG@"` for a common-cathode display and glyph set 1;
//! the byte for '8' is then 254.

use std::env;
use std::process::ExitCode;

use segmap595::{Polarity, SegMap, to_binary_string};

const DEFAULT_MAP_STR: &str = "ABCDEFG@";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let map_str = args.next().unwrap_or_else(|| DEFAULT_MAP_STR.to_owned());
    let polarity = match args.next().as_deref() {
        Some("anode") => Polarity::CommonAnode,
        _ => Polarity::CommonCathode,
    };
    let glyph_set = args
        .next()
        .and_then(|number| number.parse::<u32>().ok())
        .unwrap_or(1);

    let mut seg_map = SegMap::new();
    let result = seg_map.load_with(map_str.as_str(), polarity, glyph_set);
    println!("{}", seg_map.status().code());
    println!("{}", seg_map.mapped_byte_for('8'));

    if let Err(error) = result {
        eprintln!("{map_str:?}: {error}");
        return ExitCode::FAILURE;
    }

    println!("dot bit: {}", seg_map.dot_bit_pos());
    for (ch, bits) in seg_map.glyphs() {
        println!("{ch} {}", to_binary_string(bits));
    }
    ExitCode::SUCCESS
}
