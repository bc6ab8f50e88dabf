mod config;

use anyhow::Context;
use clap::Parser;
use log::info;
use qtensor::{f16_to_f32, f32_to_f16, Tensor, TensorError};

use crate::config::{Args, DemoConfig};

fn run(config: &DemoConfig) -> anyhow::Result<()> {
    if config.show_f16 {
        println!("Half precision encodings:");
        for &x in &config.input {
            let bits = f32_to_f16(x);
            println!("  {:>12} -> {:#06x} -> {}", x, bits, f16_to_f32(bits));
        }
    }

    // 1. Build the f32 tensor
    let mut tensor = Tensor::from_f32(&config.input).context("create f32 tensor")?;
    let bytes_before = tensor.byte_size();
    info!("Created f32 tensor: {} elements, {} bytes", tensor.len(), bytes_before);

    // 2. Quantize in place
    tensor
        .quantize_int8_in_place()
        .context("quantize to int8")?;
    let bytes_after = tensor.byte_size();
    let bytes_saved = bytes_before.saturating_sub(bytes_after);
    let ratio = if bytes_after > 0 {
        bytes_before as f64 / bytes_after as f64
    } else {
        0.0
    };

    println!("Elements          : {}", tensor.len());
    println!("Quantization scale: {:.6}", tensor.scale());
    println!("Bytes before      : {}", bytes_before);
    println!("Bytes after       : {}", bytes_after);
    println!("Bytes saved       : {} (about {:.2}x smaller)", bytes_saved, ratio);

    if let Some(values) = tensor.as_i8() {
        println!("Quantized int8 values:");
        let line: Vec<String> = values.iter().map(|v| format!("{:4}", v)).collect();
        println!("{}", line.join(" "));
    }

    tensor.release();
    Ok(())
}

fn main() {
    env_logger::init();
    let config = DemoConfig::from(Args::parse());
    info!("Running quantization demo on {} values", config.input.len());

    if let Err(err) = run(&config) {
        match err.downcast_ref::<TensorError>() {
            Some(e) => eprintln!("error: {:#} (code {})", err, e.code()),
            None => eprintln!("error: {:#}", err),
        }
        std::process::exit(1);
    }
}
