use clap::Parser;
use color_eyre::eyre::Result;
use log::*;

use relscout::{
    Detector, DetectedRelease,
    cli::{Args, DetectSettings},
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relscout")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn print_release(release: &DetectedRelease) {
    println!("version:   {}", release.version);
    println!("name:      {}", release.name);
    println!("asset:     {}", release.asset_name);
    println!("url:       {}", release.asset_url);
    println!("size:      {}", release.asset_size);
    if let Some(id) = release.validation_asset_id {
        println!("validator: asset #{id}");
    }
    if let Some(published_at) = release.published_at {
        println!("published: {}", published_at.to_rfc3339());
    }
    println!("page:      {}", release.url);
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = cli_args.resolve_config()?;
    let settings = DetectSettings::from_config(&config)?;

    info!(
        "detecting release of {} for {} (policy: {})",
        cli_args.slug, settings.platform, settings.policy
    );

    let mut detector = Detector::github_with(settings.remote)?
        .with_platform(settings.platform);
    if let Some(validator) = settings.validator {
        detector = detector.with_validator(validator);
    }

    let detected = detector
        .detect_version_of_type(
            &cli_args.slug,
            cli_args.tag.as_deref(),
            settings.policy,
        )
        .await?;

    match detected {
        Some(release) if cli_args.json => {
            println!("{}", serde_json::to_string_pretty(&release)?);
        }
        Some(release) => print_release(&release),
        None => {
            warn!("no matching release found for {}", cli_args.slug);
        }
    }

    Ok(())
}
