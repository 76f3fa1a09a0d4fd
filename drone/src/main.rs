use clap::Parser;
use drone::prelude::*;
use drone_core::{BASE_FREQ_HZ, SAMPLE_RATE_HZ};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "drone")]
#[command(
    about = "Render a drone made of hundreds of detuned sine waves to a mono 32-bit wav file"
)]
struct Args {
    /// File to write to
    #[arg(long, default_value = "output.wav")]
    output: String,
    /// Length of the output file in seconds
    #[arg(long, default_value_t = 5.0)]
    length: f64,
    #[arg(long, default_value_t = SAMPLE_RATE_HZ)]
    sample_rate: u32,
    #[arg(long, default_value_t = BASE_FREQ_HZ)]
    base_freq: f64,
}

fn run(args: Args) -> anyhow::Result<RenderSummary> {
    let config = SynthConfig {
        sample_rate_hz: args.sample_rate,
        base_freq_hz: args.base_freq,
        ..Default::default()
    };
    render_to_file(config, args.length, &args.output)
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let args = Args::parse();
    let output = args.output.clone();
    match run(args) {
        Ok(summary) => log::info!(
            "wrote {} frames ({} sec) to {}",
            summary.num_frames,
            summary.length_s,
            output
        ),
        Err(e) => {
            log::error!("{e:#}");
            process::exit(1);
        }
    }
}
