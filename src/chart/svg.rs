use std::fmt::{self, Write};
use std::io::Write as _;
use std::path::Path;

use super::{Figure, Panel};
use crate::errors::BenchError;
use crate::fsutil::write_atomic;

const FONT: &str = "font-family=\"sans-serif\"";

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Pixel rectangle of one panel's plotting area.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

fn panel_frames(fig: &Figure) -> Vec<Frame> {
    let l = &fig.layout;
    let (w, h) = (f64::from(l.width), f64::from(l.height));
    let n = fig.panels.len().max(1) as f64;
    let top = (1.0 - l.top) * h;
    let bottom = (1.0 - l.bottom) * h;
    let panel_h = (bottom - top) / (n + (n - 1.0) * l.hspace);
    let gap = panel_h * l.hspace;
    (0..fig.panels.len())
        .map(|i| {
            let y0 = top + i as f64 * (panel_h + gap);
            Frame { x0: l.left * w, x1: l.right * w, y0, y1: y0 + panel_h }
        })
        .collect()
}

fn write_panel<W: Write>(out: &mut W, panel: &Panel, fr: Frame) -> fmt::Result {
    writeln!(out, "<g class=\"panel\">")?;
    writeln!(
        out,
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"white\" stroke=\"#333\"/>",
        fr.x0,
        fr.y0,
        fr.x1 - fr.x0,
        fr.y1 - fr.y0
    )?;
    for k in panel.x_scale.decades() {
        let x = panel.x_scale.project(10f64.powi(k), fr.x0, fr.x1);
        writeln!(
            out,
            "<line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" stroke=\"#ddd\"/>",
            fr.y0, fr.y1
        )?;
        writeln!(
            out,
            "<text x=\"{x:.1}\" y=\"{:.1}\" {FONT} font-size=\"11\" text-anchor=\"middle\">10<tspan baseline-shift=\"super\" font-size=\"8\">{k}</tspan></text>",
            fr.y1 + 14.0
        )?;
    }
    for k in panel.y_scale.decades() {
        let y = panel.y_scale.project(10f64.powi(k), fr.y1, fr.y0);
        writeln!(
            out,
            "<line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#ddd\"/>",
            fr.x0, fr.x1
        )?;
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"11\" text-anchor=\"end\">10<tspan baseline-shift=\"super\" font-size=\"8\">{k}</tspan></text>",
            fr.x0 - 4.0,
            y + 4.0
        )?;
    }
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"14\" text-anchor=\"start\">{}</text>",
        fr.x0,
        fr.y0 - 6.0,
        escape(&panel.title)
    )?;
    let mid = (fr.y0 + fr.y1) / 2.0;
    let lx = fr.x0 - 44.0;
    writeln!(
        out,
        "<text x=\"{lx:.1}\" y=\"{mid:.1}\" {FONT} font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 {lx:.1} {mid:.1})\">{}</text>",
        escape(&panel.y_label)
    )?;
    for s in panel.series.iter().filter(|s| !s.points.is_empty()) {
        write!(out, "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" points=\"", s.color)?;
        for (i, &(x, y)) in s.points.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            let px = panel.x_scale.project(x, fr.x0, fr.x1);
            let py = panel.y_scale.project(y, fr.y1, fr.y0);
            write!(out, "{px:.1},{py:.1}")?;
        }
        writeln!(out, "\"><title>{}</title></polyline>", escape(&s.label))?;
    }
    writeln!(out, "</g>")
}

/// Write `fig` as a standalone SVG document.
pub fn write_svg<W: Write>(out: &mut W, fig: &Figure) -> fmt::Result {
    let l = &fig.layout;
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = l.width,
        h = l.height
    )?;
    writeln!(out, "<rect width=\"100%\" height=\"100%\" fill=\"white\"/>")?;
    let frames = panel_frames(fig);
    for (panel, fr) in fig.panels.iter().zip(frames.iter()) {
        write_panel(out, panel, *fr)?;
    }
    let lx = l.right * f64::from(l.width) + 12.0;
    let ly = frames.first().map_or(20.0, |f| f.y0);
    writeln!(out, "<g class=\"legend\">")?;
    for (i, e) in fig.legend.iter().enumerate() {
        let y = ly + 18.0 * i as f64 + 8.0;
        writeln!(
            out,
            "<line x1=\"{lx:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-width=\"2\"/>",
            lx + 20.0,
            e.color
        )?;
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" {FONT} font-size=\"12\">{}</text>",
            lx + 26.0,
            y + 4.0,
            escape(&e.label)
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

pub fn render_svg(fig: &Figure) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut s, fig);
    s
}

/// Render `fig` and atomically replace `path` with it.
///
/// # Errors
/// Returns `BenchError::Io` if the file cannot be written.
pub fn save_svg(fig: &Figure, path: &Path) -> Result<(), BenchError> {
    let doc = render_svg(fig);
    write_atomic(path, |w| w.write_all(doc.as_bytes()))
        .map_err(|e| BenchError::Io(format!("{}: {e}", path.display())))?;
    log::info!("chart: wrote {} ({} bytes)", path.display(), doc.len());
    Ok(())
}
