//! One labelled sample of every primitive, laid out left to right.

use crate::draw::{BLACK, DrawResult, Point, RED, Renderer, TextAlign, WHITE};
use crate::scene::Scene;
use std::f64::consts::{PI, TAU};

const LABEL_Y: f64 = 110.0;

const CIRCLE_CENTERS: [(f64, f64); 4] = [(240.0, 25.0), (285.0, 25.0), (240.0, 70.0), (285.0, 70.0)];

const SHAPE_POINTS: [(f64, f64); 5] = [
    (420.0, 10.0),
    (520.0, 30.0),
    (540.0, 90.0),
    (500.0, 80.0),
    (460.0, 60.0),
];

/// Primitive showcase, designed for a 960x120 surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct Drawing;

impl Scene for Drawing {
    fn init(&mut self, r: &mut Renderer<'_>) -> DrawResult<()> {
        r.background(BLACK)?;
        r.text_align(TextAlign::Left);
        Ok(())
    }

    fn render(&self, r: &mut Renderer<'_>) -> DrawResult<()> {
        r.color(WHITE);
        r.line_style(1.0)?;
        r.font("14px Terminus");

        // Four quarter arcs, nudged apart so the seams show
        r.arc(50.0, 50.0, 40.0, PI, TAU * 0.75, false)?;
        r.arc(55.0, 50.0, 40.0, TAU * 0.75, TAU, false)?;
        r.arc(55.0, 55.0, 40.0, 0.0, PI * 0.5, false)?;
        r.arc(50.0, 55.0, 40.0, PI * 0.5, PI, false)?;
        r.text(35.0, LABEL_Y, "arc()")?;

        r.circle(160.0, 50.0, 40.0, false)?;
        r.circle(160.0, 50.0, 20.0, true)?;
        r.text(130.0, LABEL_Y, "circle()")?;

        let centers = CIRCLE_CENTERS.map(Point::from);
        r.with_saved_state(|r| {
            r.circles(&centers, 15.0, true)?;
            r.color(RED);
            r.circles(&centers, 2.0, false)
        })?;
        r.text(230.0, LABEL_Y, "circles()")?;

        r.grid(330.0, 15.0, 10.0, 10.0, 80.0, 80.0)?;
        r.text(350.0, LABEL_Y, "grid()")?;

        r.shape(&SHAPE_POINTS.map(Point::from))?;
        r.text(460.0, LABEL_Y, "shape()")?;

        r.polygon(590.0, 50.0, 40.0, 12, false)?;
        r.polygon(590.0, 50.0, 30.0, 3, false)?;
        r.polygon(590.0, 50.0, 10.0, 6, false)?;
        r.text(560.0, LABEL_Y, "polygon()")?;

        r.polygon_ring(720.0, 50.0, 20.0, 50.0, 6, 6)?;
        r.text(670.0, LABEL_Y, "polygonRing()")?;

        r.rounded_rectangle(830.0, 10.0, 80.0, 80.0, 10.0)?;
        r.text(800.0, LABEL_Y, "roundedRectangle()")
    }
}
