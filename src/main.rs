use anyhow::{Context, Result};
use sdl2::image::InitFlag;
use starfield_menu::error::FrontendError;
use starfield_menu::input_system;
use starfield_menu::render::SdlRenderer;
use starfield_menu::{MenuConfig, MenuController, MenuSignal};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    init_tracing();

    if let Err(error) = run() {
        tracing::error!("{:#}", error);
        return Err(error);
    }
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

fn run() -> Result<()> {
    // Optional config path as the only argument
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, source) =
        MenuConfig::load(explicit.as_deref()).context("Failed to load menu configuration")?;
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "loaded config"),
        None => tracing::info!("no config file found, using defaults"),
    }

    let sdl_context = sdl2::init().map_err(FrontendError::Toolkit)?;
    let video_subsystem = sdl_context.video().map_err(FrontendError::Toolkit)?;
    let _image_context = sdl2::image::init(InitFlag::PNG).map_err(FrontendError::Toolkit)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| FrontendError::Toolkit(e.to_string()))?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .allow_highdpi()
        .build()
        .map_err(|e| FrontendError::Toolkit(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| FrontendError::Toolkit(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let renderer = SdlRenderer::load(
        &texture_creator,
        &ttf_context,
        &config.assets,
        config.window.width,
    )?;

    let mut event_pump = sdl_context.event_pump().map_err(FrontendError::Toolkit)?;
    let mut controller = MenuController::new(&config);
    let frame_duration = config.frame_duration();

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        stars = config.stars.count,
        "menu started"
    );

    loop {
        let events = input_system::poll_events(&mut event_pump);
        let output = controller.update(&events, Instant::now());

        for signal in &output.signals {
            match signal {
                MenuSignal::StartGame => tracing::info!("Start Game!"),
            }
        }

        renderer
            .execute(&mut canvas, output.plan)
            .map_err(FrontendError::Toolkit)?;
        canvas.present();

        if output.terminate {
            break;
        }

        std::thread::sleep(frame_duration);
    }

    tracing::info!("menu closed");
    Ok(())
}
