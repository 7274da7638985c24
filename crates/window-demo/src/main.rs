// File: crates/window-demo/src/main.rs
// Summary: Windowed animated gallery; each chart type animates in on its own frame loop, any key advances.
// Usage: chart-window-demo [data.csv] [theme]

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{Context, Result};
use chart_core::theme;
use chart_demo::cli::WindowArgs;
use chart_demo::{build_configs, load_label_values, resolve_path};
use chart_window_demo::{blit, Gallery};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = WindowArgs::parse();
    let dataset = match &args.input {
        Some(raw) => {
            let (path, _used_alt) = resolve_path(raw)?;
            Some(load_label_values(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?)
        }
        None => None,
    };
    let theme = theme::find(&args.theme);
    let configs = build_configs(dataset.as_ref(), &theme);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Animated Charts - press any key for the next chart")
        .with_inner_size(winit::dpi::LogicalSize::new(480.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut buffer_surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut dpr = window.scale_factor() as f32;
    let mut gallery = Gallery::new(configs, theme, window.inner_size(), dpr)?;
    let clock = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        let result: Result<()> = (|| {
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        gallery.chart.teardown(&mut gallery.sched);
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        gallery.resize(size, dpr)?;
                        window.request_redraw();
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                        dpr = scale_factor as f32;
                        gallery.resize(*new_inner_size, dpr)?;
                        window.request_redraw();
                    }
                    WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                        gallery.advance()?;
                        *control_flow = ControlFlow::Poll;
                    }
                    _ => {}
                },
                Event::MainEventsCleared => {
                    if !gallery.sched.is_idle() {
                        window.request_redraw();
                    }
                }
                Event::RedrawRequested(_) => {
                    let wants_more = gallery.tick(clock.elapsed().as_secs_f64() * 1000.0)?;
                    let (w, h) = gallery.surface.pixel_size();
                    let (Some(nw), Some(nh)) = (NonZeroU32::new(w as u32), NonZeroU32::new(h as u32)) else {
                        return Ok(());
                    };
                    buffer_surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize buffer: {e}"))?;
                    let (rgba, _, _, _) = gallery.surface.read_rgba8()?;
                    let mut frame = buffer_surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
                    blit(&rgba, &mut frame);
                    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
                    if *control_flow != ControlFlow::Exit {
                        *control_flow = if wants_more { ControlFlow::Poll } else { ControlFlow::Wait };
                    }
                }
                _ => {}
            }
            Ok(())
        })();
        if let Err(e) = result {
            tracing::error!(error = %format!("{e:#}"), "window demo stopped");
            *control_flow = ControlFlow::Exit;
        }
    });
}

