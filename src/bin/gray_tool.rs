use gray_ops::config::load_config;
use gray_ops::histogram::HistogramComparison;
use gray_ops::image::io::{load_grayscale_image, save_grayscale, write_json_file};
use gray_ops::report::{ImageDescriptor, RunReport};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let original = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let (edited, steps) = config
        .pipeline
        .run(&original)
        .map_err(|e| e.to_string())?;

    save_grayscale(&edited, &config.output.image).map_err(|e| e.to_string())?;
    println!(
        "Applied {} step(s) to {} ({}x{}), saved to {}",
        steps.len(),
        config.input.display(),
        original.width(),
        original.height(),
        config.output.image.display()
    );

    if let Some(report_path) = &config.output.report {
        let histograms =
            HistogramComparison::new(&original, &edited).map_err(|e| e.to_string())?;
        let report = RunReport::new(
            ImageDescriptor {
                width: original.width(),
                height: original.height(),
            },
            steps,
            histograms,
        );
        write_json_file(report_path, &report).map_err(|e| e.to_string())?;
        println!(
            "Saved run report ({:.3} ms total) to {}",
            report.total_ms,
            report_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: gray_tool <config.json>".to_string()
}
