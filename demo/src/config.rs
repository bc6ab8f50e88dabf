use clap::Parser;

/// Input used when no values are given on the command line
pub const DEFAULT_INPUT: [f32; 6] = [-1.0, -0.5, 0.0, 0.25, 0.75, 1.0];

#[derive(Parser, Debug)]
#[command(author, version, about = "Quantize an f32 buffer to int8 and report the savings")]
pub struct Args {
    /// Values to quantize
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f32>,

    /// Also print the half precision encoding of each input value
    #[arg(long)]
    pub f16: bool,
}

/// Settings for one demo run
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub input: Vec<f32>,
    pub show_f16: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_vec(),
            show_f16: false,
        }
    }
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        let mut config = DemoConfig::default();
        if !args.values.is_empty() {
            config.input = args.values;
        }
        config.show_f16 = args.f16;
        config
    }
}
