use clap::Parser;
use log::info;
use std::path::PathBuf;

use bing_wallpaper::{desktop::get_wallpaper_setter, BingClient};

#[derive(Parser)]
#[command(name = "bing-wallpaper")]
#[command(
    version,
    about = "Downloads the Bing image of the day and sets it as your desktop wallpaper."
)]
pub struct Args {
    #[arg(
        long,
        default_value_t = 0,
        help = "How many days before today the image was featured (0 = today)"
    )]
    days_before: u32,
    #[arg(
        long,
        help = "Folder to download images to (defaults to the Pictures directory)"
    )]
    base_path: Option<PathBuf>,
    #[arg(
        long,
        help = "Set the downloaded image as wallpaper on this display (1-based); skipped when absent"
    )]
    display: Option<u32>,
}

fn default_base_path() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bing-wallpapers")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let client = BingClient::new()?;
        let image_path = client.download_image(&base_path, args.days_before).await?;

        if let Some(display) = args.display {
            let setter = get_wallpaper_setter()?;
            setter.set_wallpaper(display, &image_path)?;
            info!("Wallpaper of display {} updated", display);
        }

        Ok::<(), bing_wallpaper::Error>(())
    })?;

    Ok(())
}
