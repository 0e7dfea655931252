use ascii_garden::core::{Compositor, Layer, Scene};
use ascii_garden::term::{encode_diff_into, encode_full_into, FrameBuffer, GardenView, Palette};
use ascii_garden::types::{GardenConfig, GridSize};

fn frame(tick: u64) -> ascii_garden::core::Grid {
    let config = GardenConfig::default();
    let scene = Scene::build(GridSize::new(40, 20), &config);
    Compositor::from_config(&config).compose(&scene, tick)
}

#[test]
fn view_copies_every_glyph() {
    let grid = frame(3);
    let fb = GardenView::default().render(&grid, None);

    assert_eq!(fb.width(), 40);
    assert_eq!(fb.height(), 20);
    for y in 0..20u16 {
        let row: String = fb.row(y).iter().map(|c| c.ch).collect();
        assert_eq!(row, grid.row_text(y));
    }
}

#[test]
fn view_styles_by_layer() {
    let grid = frame(0);
    let view = GardenView::default();
    let fb = view.render(&grid, None);

    let bottom = fb.get(0, 19).unwrap();
    assert_eq!(grid.get(19, 0).unwrap().layer, Layer::Ground);
    assert_eq!(bottom.style, view.palette().ground);
}

#[test]
fn monochrome_view_uses_one_foreground() {
    let grid = frame(5);
    let fb = GardenView::new(true).render(&grid, None);
    let faint = Palette::monochrome().sky;
    assert!(fb.cells().iter().all(|c| c.style == faint));
}

#[test]
fn unchanged_frame_encodes_smaller_than_full_redraw() {
    let view = GardenView::default();
    let a = view.render(&frame(1), None);
    let b = view.render(&frame(1), None);

    let mut full = Vec::new();
    encode_full_into(&a, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();

    assert!(diff.len() < full.len());
}

#[test]
fn render_into_resizes_target() {
    let mut fb = FrameBuffer::new(3, 3);
    GardenView::default().render_into(&frame(2), Some("paused"), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    let top: String = fb.row(0).iter().map(|c| c.ch).collect();
    assert_eq!(&top[1..9], " paused ");
}
