use anyhow::Context;
use clap::Parser;
use horoscope::ephemeris::FixedSiderealTime;
use horoscope::rendering::ChartSpecGenerator;
use horoscope::{render_report, resolve_or_default, Angle, MeanSiderealClock, NatalChart};
use horoscope_config::{load_chart_request, ChartRequest};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cast a natal chart from a TOML request")]
struct Args {
    /// Chart request file.
    request: PathBuf,

    /// Write the chart drawing spec as JSON to this path.
    #[arg(long)]
    spec: Option<PathBuf>,
}

fn cast(request: &ChartRequest) -> anyhow::Result<NatalChart> {
    let location = resolve_or_default(
        &request.gazetteer,
        &request.location,
        request.fallback_location,
    );

    let chart = match request.sidereal_time {
        Some(lst) => {
            log::info!("Using sidereal time override {:.4}°", lst);
            NatalChart::cast(
                request.moment,
                location,
                &request.ephemeris,
                &FixedSiderealTime(Angle::new(lst)),
                &request.settings,
            )
        }
        None => NatalChart::cast(
            request.moment,
            location,
            &request.ephemeris,
            &MeanSiderealClock::new(),
            &request.settings,
        ),
    };
    chart.context("Could not cast chart")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = load_chart_request(&args.request)?;
    let chart = cast(&request)?;

    print!("{}", render_report(&chart)?);

    if let Some(path) = args.spec {
        let spec = ChartSpecGenerator::new().generate(
            &chart,
            request.render.width,
            request.render.height,
        );
        let json = serde_json::to_string_pretty(&spec)?;
        fs::write(&path, json)
            .with_context(|| format!("Could not write chart spec to {}", path.display()))?;
        log::info!("Wrote chart spec ({} shapes) to {}", spec.shapes.len(), path.display());
    }

    Ok(())
}
