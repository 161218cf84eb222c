extern crate plotters;
use plotters::prelude::*;

use quadraster::{draw_polyline, sample, ControlPolygon, PixelBuffer, Point2, Rgb};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (200usize, 200usize);
    let mut image = PixelBuffer::new(width, height);

    // [end, control, start]
    let polygon = ControlPolygon::from([
        Point2::new(20, 20),
        Point2::new(70, 80),
        Point2::new(120, 20),
    ]);
    let points = sample(&polygon, 99)?;
    draw_polyline(&mut image, &points, Rgb::WHITE)?;

    let root = BitMapBackend::new("quadratic_spline.png", (width as u32, height as u32))
        .into_drawing_area();
    root.fill(&BLACK)?;

    // copy the rasterized buffer pixel by pixel, skipping the background
    for y in 0..height {
        for x in 0..width {
            match image.get(x, y) {
                Some(p) if p != Rgb::BLACK => {
                    root.draw_pixel((x as i32, y as i32), &RGBColor(p.r, p.g, p.b))?;
                }
                _ => {}
            }
        }
    }

    // mark the control points on top
    for p in polygon.points() {
        root.draw(&Circle::new((p.x(), p.y()), 2, RED.filled()))?;
    }

    root.present()?;
    println!("wrote quadratic_spline.png ({} samples)", points.len());
    Ok(())
}
