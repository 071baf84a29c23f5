//! A full-surface backdrop grid with three smaller grids on top.

use crate::draw::{Color, DrawResult, Renderer};
use crate::scene::Scene;

const BACKGROUND: Color = Color::from_rgb8(0x22, 0x22, 0x22);
const BACKDROP: Color = Color::from_rgb8(0x33, 0x33, 0x33);
const SKY: Color = Color::from_rgb8(0x66, 0xCC, 0xFF);
const LIME: Color = Color::from_rgb8(0xCC, 0xFF, 0x66);
const ROSE: Color = Color::from_rgb8(0xFF, 0x33, 0x66);

/// Grid sampler that scales its backdrop to the surface size.
#[derive(Debug, Default, Clone, Copy)]
pub struct Grids;

impl Scene for Grids {
    fn init(&mut self, r: &mut Renderer<'_>) -> DrawResult<()> {
        r.background(BACKGROUND)
    }

    fn render(&self, r: &mut Renderer<'_>) -> DrawResult<()> {
        let (w, h) = (r.width(), r.height());

        r.color(BACKDROP);
        r.grid(0.0, 0.0, w / 10.0, h / 10.0, w, h)?;

        r.color(SKY);
        r.grid(30.0, 50.0, 10.0, 10.0, 100.0, 100.0)?;
        r.color(LIME);
        r.grid(160.0, 50.0, 10.0, 10.0, 200.0, 200.0)?;
        r.color(ROSE);
        r.grid(390.0, 50.0, 10.0, 10.0, 400.0, 400.0)
    }
}
