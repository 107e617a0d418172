//! SVG rendering of an input cloud and its hull outline.

use std::fmt::Write;

use hull2d::prelude::closed;
use hull2d::Point;

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderCfg {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Padding around the points (fraction of the data extent)
    pub padding: f64,
    /// Point marker radius in pixels
    pub point_radius: f64,
    /// Hull stroke width in pixels
    pub stroke_width: f64,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            padding: 0.08,
            point_radius: 3.0,
            stroke_width: 2.0,
        }
    }
}

/// Render points (blue) and the closed hull boundary (red) with a title.
///
/// The y axis points up, as in a plot. The hull slice is not modified; the
/// closing edge is added on a copy.
pub fn render_svg(
    points: &[Point],
    hull: &[Point],
    title: &str,
    cfg: &RenderCfg,
) -> Result<String, std::fmt::Error> {
    let (min_x, max_x, min_y, max_y) = bounds(points.iter().chain(hull));
    let span = (max_x - min_x).max(max_y - min_y).max(1.0);
    let pad = span * cfg.padding;
    // Data units per pixel, uniform in both axes.
    let scale = (span + 2.0 * pad) / cfg.width.min(cfg.height);
    let view_x = min_x - pad;
    let view_y = -max_y - pad;
    let view_w = (max_x - min_x) + 2.0 * pad;
    let view_h = (max_y - min_y) + 2.0 * pad;

    let mut svg = String::new();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        cfg.width,
        cfg.height,
        view_x,
        view_y,
        view_w.max(scale),
        view_h.max(scale)
    )?;
    writeln!(&mut svg, "  <title>{}</title>", escape(title))?;
    writeln!(
        &mut svg,
        r#"  <rect x="{view_x}" y="{view_y}" width="100%" height="100%" fill="white"/>"#
    )?;

    writeln!(&mut svg, r##"  <g fill="#377eb8">"##)?;
    for &p in points {
        let (x, y) = svg_xy(p);
        writeln!(
            &mut svg,
            r#"    <circle cx="{x}" cy="{y}" r="{}"/>"#,
            cfg.point_radius * scale
        )?;
    }
    writeln!(&mut svg, "  </g>")?;

    if !hull.is_empty() {
        let coords: Vec<String> = closed(hull)
            .iter()
            .map(|&p| {
                let (x, y) = svg_xy(p);
                format!("{x},{y}")
            })
            .collect();
        writeln!(
            &mut svg,
            r##"  <polyline points="{}" fill="none" stroke="#e41a1c" stroke-width="{}" stroke-linejoin="round"/>"##,
            coords.join(" "),
            cfg.stroke_width * scale
        )?;
    }

    writeln!(
        &mut svg,
        r#"  <text x="{}" y="{}" font-size="{}" font-family="sans-serif">{}</text>"#,
        view_x + 0.5 * pad,
        view_y + 0.7 * pad,
        14.0 * scale,
        escape(title)
    )?;
    writeln!(&mut svg, "</svg>")?;
    Ok(svg)
}

/// Data point to SVG user space (y flipped).
fn svg_xy(p: Point) -> (f64, f64) {
    let v = p.to_vec2();
    (v.x, 0.0 - v.y)
}

fn bounds<'a>(pts: impl Iterator<Item = &'a Point>) -> (f64, f64, f64, f64) {
    let mut b: Option<(f64, f64, f64, f64)> = None;
    for p in pts {
        let v = p.to_vec2();
        b = Some(match b {
            None => (v.x, v.x, v.y, v.y),
            Some((x0, x1, y0, y1)) => (x0.min(v.x), x1.max(v.x), y0.min(v.y), y1.max(v.y)),
        });
    }
    b.unwrap_or((0.0, 1.0, 0.0, 1.0))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_point_and_a_closed_outline() {
        let pts = vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
            Point::new(2, 2),
        ];
        let hull = pts[..4].to_vec();
        let svg = render_svg(&pts, &hull, "Square <demo>", &RenderCfg::default()).unwrap();
        assert_eq!(svg.matches("<circle").count(), 5);
        // closing edge returns to the first vertex
        assert!(svg.contains(r#"points="0,0 4,0 4,-4 0,-4 0,0""#));
        assert!(svg.contains("Square &lt;demo&gt;"));
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn empty_input_still_renders() {
        let svg = render_svg(&[], &[], "empty", &RenderCfg::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<polyline"));
    }
}
