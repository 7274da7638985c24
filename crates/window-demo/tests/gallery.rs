// File: crates/window-demo/tests/gallery.rs
// Purpose: Gallery frame servicing, repaint after a resize or scale change, and the 0RGB blit.

use chart_core::{ChartConfig, Color, Phase, Theme};
use chart_window_demo::{blit, Gallery};
use winit::dpi::PhysicalSize;

fn red_disc_gallery() -> Gallery {
    let cfg = ChartConfig::pie(vec![1.0]).with_colors(vec![Color::rgb(255, 0, 0)]);
    Gallery::new(vec![cfg], Theme::classic(), PhysicalSize::new(300, 300), 1.0).expect("gallery")
}

fn settle(gallery: &mut Gallery) {
    let mut ts = 0.0;
    while gallery.tick(ts).expect("tick") {
        ts += 16.0;
        assert!(ts < 10_000.0, "animation never settled");
    }
    assert_eq!(gallery.chart.phase(), Phase::Settled);
}

#[test]
fn settled_chart_is_repainted_on_scale_change() {
    let mut gallery = red_disc_gallery();
    settle(&mut gallery);

    gallery.resize(PhysicalSize::new(200, 100), 2.0).expect("resize");
    let (px, w, h, stride) = gallery.surface.read_rgba8().expect("read pixels");
    assert_eq!((w, h), (200, 100));
    assert_eq!(gallery.surface.dpr(), 2.0);

    let bg = Theme::classic().background;
    assert_eq!(&px[..3], &[bg.r, bg.g, bg.b]);
    // 3 logical px below the centre of a 5 px disc
    let i = 56 * stride + 100 * 4;
    assert!(px[i] > 200 && px[i + 1] < 60 && px[i + 2] < 60, "disc not repainted: {:?}", &px[i..i + 4]);

    // no frame was requested for the repaint
    assert!(gallery.sched.is_idle());
}

#[test]
fn advance_cycles_and_restarts_animation() {
    let configs = vec![ChartConfig::pie(vec![1.0, 2.0, 3.0]), ChartConfig::polar(vec![1.0, 2.0, 3.0])];
    let mut gallery = Gallery::new(configs, Theme::dark(), PhysicalSize::new(120, 120), 1.0).expect("gallery");
    settle(&mut gallery);

    gallery.advance().expect("advance");
    assert_eq!(gallery.index, 1);
    assert_eq!(gallery.chart.phase(), Phase::Animating);
    assert!(!gallery.sched.is_idle());

    gallery.advance().expect("advance");
    assert_eq!(gallery.index, 0);
}

#[test]
fn blit_packs_rgb_into_low_bytes() {
    let rgba = [0x12, 0x34, 0x56, 0xFF, 0xAA, 0xBB, 0xCC, 0x00];
    let mut frame = [0u32; 2];
    blit(&rgba, &mut frame);
    assert_eq!(frame, [0x0012_3456, 0x00AA_BBCC]);
}
