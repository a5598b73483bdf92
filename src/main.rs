// src/main.rs

//! Demo host for the GenBrush canvas engine.
//!
//! Loads an optional JSON configuration, builds a canvas in the configured
//! mode, and drives the update/render cycle the way a GUI run loop would:
//! paint the pending plane, commit, flush to the backend, repeat.

use anyhow::Context;
use genbrush::canvas::Canvas;
use genbrush::config::{Config, Mode};
use genbrush::coord::Coord2;
use genbrush::pixel::Pixel;
use log::{info, warn};
use std::path::Path;
use genbrush::backend::HostWidget;
use std::rc::{Rc, Weak};

/// The demo paint pass: a coordinate gradient with red tracking x and
/// blue tracking y, fully opaque.
fn gradient(pos: Coord2) -> Pixel {
    Pixel::new(pos.x().min(255) as i32, 0, pos.y().min(255) as i32, 255)
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => {
            info!("no config file given, using defaults");
            Config::default()
        }
    };

    let dim = Coord2::new(config.surface.width, config.surface.height);
    let mut canvas = match config.render.mode {
        Mode::Image => Canvas::image(dim),
        Mode::Widget => Canvas::widget(dim),
    }
    .context("failed to create canvas")?;
    info!(
        "starting genbrush demo host: {} mode, surface {}",
        canvas.mode_name(),
        dim
    );

    // Keep the host widget alive for the whole run; the canvas only holds
    // a non-owning handle to it.
    let host_widget = genbrush::backend::HeadlessWidget::new();
    match config.render.mode {
        Mode::Image => {
            let path = config
                .render
                .output_path
                .clone()
                .unwrap_or_else(|| "genbrush-out.tga".into());
            canvas
                .set_output_path(&path)
                .context("failed to set output path")?;
            info!("rendering to {}", path.display());
        }
        Mode::Widget => {
            let handle: Weak<dyn HostWidget> = Rc::<genbrush::backend::HeadlessWidget>::downgrade(&host_widget);
            canvas
                .bind_widget_handle(handle)
                .context("failed to bind widget handle")?;
        }
    }

    let frames = config.render.frames.max(1);
    if config.render.frames == 0 {
        warn!("frames configured as 0, rendering a single frame anyway");
    }
    for frame in 0..frames {
        canvas
            .update(gradient)
            .with_context(|| format!("update failed on frame {}", frame))?;
        canvas
            .render()
            .with_context(|| format!("render failed on frame {}", frame))?;
    }

    if config.render.mode == Mode::Widget {
        info!("host widget observed {} repaint(s)", host_widget.frame_count());
    }

    canvas.free();
    info!("done after {} frame(s)", frames);
    Ok(())
}
