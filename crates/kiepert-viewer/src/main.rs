//! kiepert-viewer - headless driver for the Kiepert surface render session.
//!
//! Builds the session from a TOML config, renders against a recording
//! backend, replays marker keys (one frame per key) and prints what was
//! drawn.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use kiepert_render::{RecordingRenderer, RenderSession, SessionConfig, TextureInfo};

mod input;

#[derive(Parser)]
#[command(name = "kiepert-viewer")]
#[command(about = "Tessellate the Kiepert surface and replay marker input", long_about = None)]
struct Cli {
    /// TOML session config (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Marker keys to replay: w/s move along v, d/a along u
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Starting marker u, in radians
    #[arg(long)]
    marker_u: Option<f64>,

    /// Starting marker v, in radians
    #[arg(long)]
    marker_v: Option<f64>,

    /// Surface grid step in degrees
    #[arg(long)]
    grid_step: Option<f64>,

    /// Texture image; enables texturing
    #[arg(long, conflicts_with = "no_texture")]
    texture: Option<PathBuf>,

    /// Draw untextured even if the config enables a texture
    #[arg(long)]
    no_texture: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut renderer = RecordingRenderer::new();
    let mut session =
        RenderSession::new(config, &mut renderer).context("failed to set up render session")?;
    session.render_frame(&mut renderer)?;

    if let Some(path) = session.config().texture.path.clone() {
        if session.config().texture.enabled {
            match texture_info(&path) {
                Ok(info) => {
                    if session.texture_loaded(info) {
                        session.render_frame(&mut renderer)?;
                    }
                }
                Err(err) => session.texture_failed(format!("{:#}", err)),
            }
        }
    }

    for command in input::parse_keys(&cli.keys) {
        session.handle_command(command);
        session.render_frame(&mut renderer)?;
    }

    print_summary(&session, &renderer);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut SessionConfig, cli: &Cli) {
    if let Some(u) = cli.marker_u {
        config.marker.start_u = u;
    }
    if let Some(v) = cli.marker_v {
        config.marker.start_v = v;
    }
    if let Some(step) = cli.grid_step {
        config.grid_step_degrees = step;
    }
    if let Some(path) = &cli.texture {
        config.texture.enabled = true;
        config.texture.path = Some(path.clone());
    }
    if cli.no_texture {
        config.texture.enabled = false;
    }
}

fn texture_info(path: &Path) -> Result<TextureInfo> {
    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("cannot read texture {}", path.display()))?;
    Ok(TextureInfo { width, height })
}

fn print_summary(session: &RenderSession, renderer: &RecordingRenderer) {
    let stats = session.surface_stats();
    println!(
        "surface: {} vertices, {} triangles, {} degenerate normals",
        stats.vertex_count, stats.triangle_count, stats.degenerate_normals
    );
    if let Some(bounds) = stats.bounds {
        println!("  bounds: {:?} .. {:?}", bounds.min, bounds.max);
    }

    let marker = session.marker_position();
    let p = session.marker_translation();
    println!(
        "marker: u={:.3} v={:.3} at ({:.4}, {:.4}, {:.4})",
        marker.u(),
        marker.v(),
        p.x,
        p.y,
        p.z
    );
    println!("texture: {:?}", session.texture_state());

    println!("frames: {}", renderer.frame_count());
    for draw in renderer.last_frame() {
        println!(
            "  draw {} (textured: {})",
            renderer.label(draw.mesh).unwrap_or("?"),
            draw.uniforms.textured()
        );
    }
}
