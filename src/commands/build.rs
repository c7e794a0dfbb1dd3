//! Build the site

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Run a full build
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site);
    generator.generate().await?;

    let duration = start.elapsed();
    tracing::info!("Built in {:.2}s", duration.as_secs_f64());

    Ok(())
}
