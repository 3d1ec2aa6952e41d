// crates/vizlink-cli/src/cmd/color.rs

use clap::Args;
use vizlink_core::palette::codec;

#[derive(Args)]
pub struct ColorArgs {
    /// One value: a color code to decode. Three values: an RGB triple
    /// to quantize. Any other count is a no-op.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

/// Prints in the fixed layout other tooling scrapes. Unexpected
/// argument counts exit normally with no output.
pub fn run(args: ColorArgs) -> anyhow::Result<()> {
    match args.values.as_slice() {
        [code] => {
            let code = *code as i64 as u8;
            let rgb = codec::decode(code);
            println!("> ColorCode: {}", code);
            println!("<      Red: {:.6}", rgb.r);
            println!("<    Green: {:.6}", rgb.g);
            println!("<     Blue: {:.6}", rgb.b);
        }
        [r, g, b] => {
            let code = codec::encode(*r as f32, *g as f32, *b as f32);
            let rgb = codec::decode(code);
            println!(">      Red: {:.6}", rgb.r);
            println!(">    Green: {:.6}", rgb.g);
            println!(">     Blue: {:.6}", rgb.b);
            println!("< ColorCode: {}", code);
        }
        _ => {}
    }

    Ok(())
}
