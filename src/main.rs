// src/main.rs

//! Demo entry point for `glyphflow`.
//!
//! Draws a small showcase scene — boxed shapes, curves, an antialiased
//! line, a gradient strip, and a dithered radial field — and prints it as
//! plain text, or as the JSON color-run view with `--json`.

use anyhow::Context;
use log::info;

use glyphflow::buffer::CharBuffer;
use glyphflow::color::{Color, NamedColor};
use glyphflow::config::{
    AaLineOptions, CurveOptions, DitherOptions, EllipseOptions, FilledRectOptions, GradientOptions,
    StrokeOptions,
};
use glyphflow::dither::{dither_into, DitherAlgorithm, IntensityField};
use glyphflow::raster::{
    draw_circle, draw_line_aa, draw_quad_bezier, fill_rect, gradient_fill, GradientDirection,
};
use glyphflow::style::BoxStyle;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting glyphflow demo scene...");

    let mut buf = CharBuffer::new(72, 22).context("allocating demo buffer")?;

    // A filled, bordered panel.
    fill_rect(
        &mut buf,
        2,
        1,
        26,
        9,
        &FilledRectOptions {
            ch: '·',
            border: Some(BoxStyle::Rounded),
            color: Color::Named(NamedColor::Blue),
            depth: 1.0,
        },
    );

    // A circle overlapping the panel at a higher depth.
    draw_circle(
        &mut buf,
        20,
        7,
        4,
        &EllipseOptions {
            ch: 'o',
            color: Color::Named(NamedColor::Yellow),
            depth: 2.0,
        },
    );

    // A curve swinging across the scene.
    draw_quad_bezier(
        &mut buf,
        (2.0, 20.0),
        (36.0, 4.0),
        (70.0, 20.0),
        &CurveOptions {
            stroke: StrokeOptions {
                depth: 3.0,
                color: Color::Named(NamedColor::Green),
                ..Default::default()
            },
            segments: None,
        },
    );

    // An antialiased diagonal.
    draw_line_aa(
        &mut buf,
        40.0,
        1.0,
        70.0,
        12.0,
        &AaLineOptions {
            depth: 2.5,
            ..Default::default()
        },
    );

    // A gradient strip along the bottom.
    gradient_fill(
        &mut buf,
        2,
        21,
        68,
        1,
        GradientDirection::Horizontal,
        &GradientOptions::default(),
    );

    // A dithered radial vignette.
    let mut field = IntensityField::new(24, 8);
    for y in 0..8usize {
        for x in 0..24usize {
            let dx = (x as f64 - 11.5) / 11.5;
            let dy = (y as f64 - 3.5) / 3.5;
            field.set(x, y, 1.0 - (dx * dx + dy * dy).sqrt().min(1.0));
        }
    }
    dither_into(
        &mut buf,
        44,
        13,
        &field,
        &DitherOptions {
            algorithm: DitherAlgorithm::FloydSteinberg,
            ..Default::default()
        },
        Color::Named(NamedColor::Magenta),
        1.5,
    );

    if std::env::args().any(|arg| arg == "--json") {
        let view = serde_json::to_string_pretty(&buf.color_runs())
            .context("serializing color-run view")?;
        println!("{}", view);
    } else {
        println!("{}", buf);
    }

    Ok(())
}
