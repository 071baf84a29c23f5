use cairo::{Context, ImageSurface};
use pixelspace::config::Config;
use pixelspace::demos;
use pixelspace::draw::{BLACK, BLUE, CairoSurface, RED, Renderer, Size, TextAlign, WHITE};
use pixelspace::host::{self, RunOptions};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, CairoSurface) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    let adapter = CairoSurface::new(ctx, width as f64, height as f64);
    (surface, adapter)
}

/// Returns (r, g, b, a) of the pixel at `(x, y)`.
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let i = y * stride + x * 4;
    // ARGB32 is stored native-endian; little-endian memory order is B, G, R, A
    (data[i + 2], data[i + 1], data[i], data[i + 3])
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface.flush();
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Leftmost and rightmost columns holding any non-transparent pixel.
fn ink_columns(surface: &mut ImageSurface) -> Option<(usize, usize)> {
    surface.flush();
    let width = surface.width() as usize;
    let height = surface.height() as usize;
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let inked = |x: usize| (0..height).any(|y| data[y * stride + x * 4 + 3] != 0);
    let left = (0..width).find(|&x| inked(x))?;
    let right = (0..width).rev().find(|&x| inked(x))?;
    Some((left, right))
}

fn aligned_text_columns(align: TextAlign, x: f64) -> (usize, usize) {
    let (mut image, mut adapter) = surface_with_context(200, 60);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(200.0, 60.0));
        r.color(WHITE);
        r.font("20px Sans");
        r.text_align(align);
        r.text(x, 40.0, "polygon()").unwrap();
    }
    drop(adapter);
    ink_columns(&mut image).expect("text left no pixels")
}

#[test]
fn filled_circle_covers_its_center() {
    let (mut image, mut adapter) = surface_with_context(100, 100);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(100.0, 100.0));
        r.background(BLACK).unwrap();
        r.color(RED);
        r.circle(50.0, 50.0, 20.0, true).unwrap();
    }
    drop(adapter);

    assert_eq!(pixel(&mut image, 50, 50), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 5, 5), (0, 0, 0, 255));
}

#[test]
fn stroked_circle_leaves_center_untouched() {
    let (mut image, mut adapter) = surface_with_context(100, 100);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(100.0, 100.0));
        r.background(BLACK).unwrap();
        r.color(WHITE);
        r.line_style(4.0).unwrap();
        r.circle(50.0, 50.0, 30.0, false).unwrap();
    }
    drop(adapter);

    assert_eq!(pixel(&mut image, 50, 50), (0, 0, 0, 255));
    assert_eq!(pixel(&mut image, 80, 50), (255, 255, 255, 255));
}

#[test]
fn filled_rounded_rectangle_cuts_corners() {
    let (mut image, mut adapter) = surface_with_context(100, 100);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(100.0, 100.0));
        r.background(BLACK).unwrap();
        r.color(RED);
        r.fill_rounded_rectangle(10.0, 10.0, 80.0, 80.0, 20.0).unwrap();
    }
    drop(adapter);

    assert_eq!(pixel(&mut image, 50, 50), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 50, 12), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 11, 11), (0, 0, 0, 255));
}

#[test]
fn scoped_color_change_does_not_leak() {
    let (mut image, mut adapter) = surface_with_context(100, 40);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(100.0, 40.0));
        r.background(BLACK).unwrap();
        r.color(WHITE);
        r.with_saved_state(|r| {
            r.color(RED);
            r.circle(20.0, 20.0, 10.0, true)
        })
        .unwrap();
        r.circle(70.0, 20.0, 10.0, true).unwrap();
    }
    drop(adapter);

    assert_eq!(pixel(&mut image, 20, 20), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 70, 20), (255, 255, 255, 255));
}

#[test]
fn text_draws_pixels() {
    let (mut image, mut adapter) = surface_with_context(200, 60);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(200.0, 60.0));
        r.color(WHITE);
        r.font("20px Sans");
        r.text(10.0, 40.0, "polygon()").unwrap();
    }
    drop(adapter);
    assert!(surface_has_pixels(&mut image));
}

#[test]
fn text_alignment_anchors_at_x() {
    let (left, right) = aligned_text_columns(TextAlign::Left, 10.0);
    assert!(left >= 9, "left-aligned text starts at {left}");
    assert!(right > 50);

    let (left, right) = aligned_text_columns(TextAlign::Right, 190.0);
    assert!(right <= 191, "right-aligned text ends at {right}");
    assert!(left < 150);

    let (left, right) = aligned_text_columns(TextAlign::Center, 100.0);
    assert!(left < 100 && right > 100);
    assert!(left.abs_diff(200 - right) <= 6, "centered text spans {left}..{right}");
}

#[test]
fn stroke_and_fill_colors_paint_separately() {
    let (mut image, mut adapter) = surface_with_context(100, 50);
    {
        let mut r = Renderer::new(&mut adapter, Size::new(100.0, 50.0));
        r.background(BLACK).unwrap();
        r.stroke_color(RED);
        r.fill_color(BLUE);
        r.line_style(4.0).unwrap();
        r.circle(25.0, 25.0, 15.0, false).unwrap();
        r.circle(75.0, 25.0, 10.0, true).unwrap();
    }
    drop(adapter);

    assert_eq!(pixel(&mut image, 40, 25), (255, 0, 0, 255));
    assert_eq!(pixel(&mut image, 25, 25), (0, 0, 0, 255));
    assert_eq!(pixel(&mut image, 75, 25), (0, 0, 255, 255));
}

#[test]
fn every_demo_renders_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();
    for name in demos::NAMES {
        let mut scene = demos::by_name(name).unwrap();
        let output = dir.path().join(format!("{name}.png"));
        let options = RunOptions {
            width: 320,
            height: 120,
            frames: 2,
        };
        host::render_to_png(scene.as_mut(), &config, options, &output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{name} is not a PNG");
    }
}
