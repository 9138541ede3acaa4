use gray_ops::histogram::Histogram;
use gray_ops::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Demo: degrade a synthetic ramp, restore it, and print a few statistics
    let img = GrayImage::from_fn(256, 64, |x, _| x as u8);
    let mut rng = StdRng::seed_from_u64(2024);

    let noisy = salt_and_pepper(&img, 0.05, SaltPepperKind::Both, &mut rng);
    let restored = median_filter(&noisy, 3)?;
    let (_, outcome) = adaptive_threshold(&restored, &AdaptiveOptions::default())?;

    let mean = |g: &GrayImage| Histogram::from_image(g).mean().unwrap_or(0.0);
    println!(
        "mean original={:.2} noisy={:.2} restored={:.2} threshold={:.2} (iterations={})",
        mean(&img),
        mean(&noisy),
        mean(&restored),
        outcome.threshold,
        outcome.iterations
    );
    Ok(())
}
