use std::fmt::Write as _;

use crate::{
    elements::{arrow::ArrowChannels, cloud::CloudConfig, moon::MoonConfig, star::StarConfig},
    eval::frame::{Channels, ElementFrame, Frame},
    foundation::core::{Line, Point, Viewport},
    foundation::error::{NightscrollError, NightscrollResult},
    scene::{
        config::{ElementConfig, SceneConfig},
        layer::{Layer, LayerStyle},
    },
    shape::outline::{
        ARROW_HEAD_LEFT, ARROW_HEAD_RIGHT, ARROW_SHAFT, ARROW_VIEW_BOX, CLOUD_VIEW_BOX,
        cloud_outline, trim_line,
    },
};

/// Render `frame` as a standalone SVG document sized to `viewport`.
///
/// The page is black; every element is positioned from its resolved frame values, so the output
/// is a pure function of `(scene, frame, viewport)`.
#[tracing::instrument(level = "debug", skip_all, fields(elements = frame.elements.len()))]
pub fn frame_to_svg(
    scene: &SceneConfig,
    frame: &Frame,
    viewport: Viewport,
) -> NightscrollResult<String> {
    if !(viewport.width.is_finite() && viewport.height.is_finite())
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return Err(NightscrollError::render(format!(
            "viewport must be positive, got {}x{}",
            viewport.width, viewport.height
        )));
    }

    let (w, h) = (viewport.width, viewport.height);
    let mut out = String::with_capacity(4096);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let arrow_layer = scene
        .elements
        .iter()
        .find(|el| matches!(el, ElementConfig::Arrow(_)))
        .map(ElementConfig::layer);
    write_glow_filters(&mut out, arrow_layer);
    let _ = writeln!(out, r#"<rect x="0" y="0" width="{w}" height="{h}" fill="black"/>"#);

    for el in &frame.elements {
        let config = scene.elements.get(el.id.0).ok_or_else(|| {
            NightscrollError::render(format!("frame element {} is not in the scene", el.id.0))
        })?;
        match (config, &el.channels) {
            (ElementConfig::Arrow(_), Channels::Arrow(ch)) => {
                write_arrow(&mut out, el, ch, viewport)
            }
            (ElementConfig::Star(star), Channels::Star(_)) => {
                write_star(&mut out, el, star, viewport)?
            }
            (ElementConfig::Moon(moon), Channels::Moon(ch)) => {
                write_moon(&mut out, el, moon, ch.stroke_opacity, viewport)
            }
            (ElementConfig::Cloud(cloud), Channels::Cloud(ch)) => {
                write_cloud(&mut out, el, cloud, ch.stroke_opacity, viewport)
            }
            _ => {
                return Err(NightscrollError::render(format!(
                    "frame element {} does not match its configured kind",
                    el.id.0
                )));
            }
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn glow_id(layer: Layer) -> &'static str {
    match layer {
        Layer::Background => "glow-background",
        Layer::Midground => "glow-midground",
        Layer::Foreground => "glow-foreground",
    }
}

// Bounding-box filter regions collapse on a straight vertical stroke, so the arrow group gets a
// user-space region covering its whole view box.
const ARROW_GLOW_ID: &str = "glow-arrow";

fn write_glow_filters(out: &mut String, arrow_layer: Option<Layer>) {
    const MERGE: &str = r#"<feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>"#;
    out.push_str("<defs>\n");
    for layer in [Layer::Background, Layer::Midground, Layer::Foreground] {
        let shadow = layer.style().shadow;
        if shadow <= 0.0 {
            continue;
        }
        let _ = writeln!(
            out,
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur in="SourceGraphic" stdDeviation="{:.3}" result="blur"/>{MERGE}</filter>"#,
            glow_id(layer),
            shadow / 2.0
        );
    }
    if let Some(layer) = arrow_layer
        && layer.style().shadow > 0.0
    {
        let (vw, vh) = ARROW_VIEW_BOX;
        let _ = writeln!(
            out,
            r#"<filter id="{ARROW_GLOW_ID}" filterUnits="userSpaceOnUse" x="-20" y="-20" width="{}" height="{}"><feGaussianBlur in="SourceGraphic" stdDeviation="{:.3}" result="blur"/>{MERGE}</filter>"#,
            vw + 40.0,
            vh + 40.0,
            layer.style().shadow / 2.0
        );
    }
    out.push_str("</defs>\n");
}

fn stroke_attrs(style: &LayerStyle, filter_id: &str) -> String {
    let mut s = format!(
        r#"stroke="{}" stroke-width="{:.3}""#,
        style.color.css(),
        style.stroke_width
    );
    if style.shadow > 0.0 {
        let _ = write!(s, r#" filter="url(#{filter_id})""#);
    }
    s
}

fn write_arrow(out: &mut String, el: &ElementFrame, ch: &ArrowChannels, viewport: Viewport) {
    let pos = el.position(viewport);
    let (vw, vh) = ARROW_VIEW_BOX;
    let _ = writeln!(
        out,
        r#"<g transform="translate({:.3} {:.3})" fill="none" stroke-linecap="round" {}>"#,
        pos.x - vw / 2.0,
        pos.y - vh / 2.0,
        stroke_attrs(&el.style, ARROW_GLOW_ID)
    );
    for (line, fraction) in [
        (ARROW_SHAFT, ch.shaft),
        (ARROW_HEAD_LEFT, ch.head_left),
        (ARROW_HEAD_RIGHT, ch.head_right),
    ] {
        if fraction <= 0.0 {
            continue;
        }
        write_line(out, trim_line(line, fraction));
    }
    out.push_str("</g>\n");
}

fn write_line(out: &mut String, line: Line) {
    let _ = writeln!(
        out,
        r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}"/>"#,
        line.p0.x, line.p0.y, line.p1.x, line.p1.y
    );
}

fn write_star(
    out: &mut String,
    el: &ElementFrame,
    star: &StarConfig,
    viewport: Viewport,
) -> NightscrollResult<()> {
    if el.opacity <= 0.0 {
        return Ok(());
    }
    let pos = el.position(viewport);
    let path = star.path()?;
    let c = path.center();
    let _ = writeln!(
        out,
        r#"<path d="{}" transform="translate({:.3} {:.3}) scale({:.4}) translate({:.3} {:.3})" fill="none" stroke-linejoin="round" opacity="{:.4}" {}/>"#,
        path.to_svg_d(),
        pos.x,
        pos.y,
        el.scale,
        -c.x,
        -c.y,
        el.opacity,
        stroke_attrs(&el.style, glow_id(el.layer))
    );
    Ok(())
}

fn write_moon(
    out: &mut String,
    el: &ElementFrame,
    moon: &MoonConfig,
    stroke_opacity: f64,
    viewport: Viewport,
) {
    let pos = el.position(viewport);
    let _ = writeln!(
        out,
        r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="black" stroke-opacity="{:.4}" {}/>"#,
        pos.x,
        pos.y,
        moon.radius(),
        stroke_opacity,
        stroke_attrs(&el.style, glow_id(el.layer))
    );
}

/// Uniform scale of the cloud outline inside its box, centered; `right_mid` is the box's
/// right-edge midpoint.
fn cloud_placement(cloud: &CloudConfig, right_mid: Point, viewport: Viewport) -> (Point, f64) {
    let box_w = cloud.box_width(viewport);
    let (ow, oh) = CLOUD_VIEW_BOX;
    let scale = (box_w / ow).min(cloud.height / oh);
    let origin = Point::new(
        right_mid.x - box_w + (box_w - ow * scale) / 2.0,
        right_mid.y - cloud.height / 2.0 + (cloud.height - oh * scale) / 2.0,
    );
    (origin, scale)
}

fn write_cloud(
    out: &mut String,
    el: &ElementFrame,
    cloud: &CloudConfig,
    stroke_opacity: f64,
    viewport: Viewport,
) {
    let (origin, scale) = cloud_placement(cloud, el.position(viewport), viewport);
    let _ = writeln!(
        out,
        r#"<path d="{}" transform="translate({:.3} {:.3}) scale({:.4})" fill="black" stroke-opacity="{:.4}" {}/>"#,
        cloud_outline().to_svg(),
        origin.x,
        origin.y,
        scale,
        stroke_opacity,
        stroke_attrs(&el.style, glow_id(el.layer))
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
