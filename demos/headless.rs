use std::time::{Duration, Instant};

use pixeltile::prelude::*;

/// Example of using the pixelated tile layer headlessly, without a map UI:
/// fetch one OpenStreetMap tile, pixelate it, then re-request it to show the
/// cached payload being substituted.
fn main() -> pixeltile::Result<()> {
    env_logger::init();

    println!("pixeltile headless example");
    println!("==========================");

    let mut layer = PixelatedTileLayer::new(
        Box::new(OpenStreetMapSource::new()),
        PixelatedLayerOptions {
            pixelation_factor: 8,
            attribution: Some("© OpenStreetMap contributors".to_string()),
            ..Default::default()
        },
    );

    layer.on_add();
    println!("Layer attached (factor {})", layer.options().pixelation_factor);

    let coord = TileCoord::new(163, 395, 10); // San Francisco
    println!("Requesting tile {} from {}", coord, layer.resolve_tile_url(coord));

    for round in 1..=2 {
        layer.create_tile(
            coord,
            Box::new(move |result| match result {
                Ok(tile) => println!(
                    "Round {}: tile ready, {}x{}, src {}...",
                    round,
                    tile.width(),
                    tile.height(),
                    &tile.src()[..40.min(tile.src().len())]
                ),
                Err(e) => println!("Round {}: tile failed: {}", round, e),
            }),
        )?;

        // Pump completions the way a host event loop would.
        let deadline = Instant::now() + Duration::from_secs(30);
        while layer.pending_count() > 0 && Instant::now() < deadline {
            layer.poll_completions();
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    println!(
        "Done: {} transform pass(es), {} cached payload(s)",
        layer.transform_count(),
        layer.cache().len()
    );
    println!("The second round reused the cached payload without re-pixelating.");

    Ok(())
}
