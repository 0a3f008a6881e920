use colorline::{gallery, Aspect, Colormap, Normalized};

#[test]
fn sine_by_time_uses_default_coloring() {
    let fig = gallery::sine_by_time().unwrap();
    let c = &fig.axes.collections()[0];
    assert_eq!(c.len(), 999);
    assert_eq!(c.array().len(), 1000);
    assert_eq!(c.cmap(), &Colormap::Copper);
    assert_eq!(fig.axes.view_limits().y, (-1.0, 1.0));
}

#[test]
fn shifted_sines_have_distinct_uniform_colors() {
    let fig = gallery::shifted_sines().unwrap();
    let cols = fig.axes.collections();
    assert_eq!(cols.len(), 10);
    for (i, c) in cols.iter().enumerate() {
        assert_eq!(c.array(), &[i as f64 / 10.0]);
        assert_eq!(c.segment_color(0), c.segment_color(500));
    }
    assert_ne!(cols[0].segment_color(0), cols[9].segment_color(0));
}

#[test]
fn polar_dashes_wrap_a_fourteen_value_pattern() {
    let fig = gallery::polar_dashes().unwrap();
    let c = &fig.axes.collections()[0];
    let pattern = gallery::colored_dash_pattern();
    assert_eq!(pattern.len(), 14);
    assert_eq!(c.array(), pattern.as_slice());
    assert_eq!(c.segment_color(0), c.segment_color(14));
    assert_ne!(c.segment_color(7), c.segment_color(8));
    assert_eq!(fig.axes.aspect, Aspect::Equal);
    assert!(fig.axes.frame_cleared());
    assert_eq!(fig.size, [600, 600]);
}

#[test]
fn lissajous_width_grows_along_the_curve() {
    let fig = gallery::lissajous_widths().unwrap();
    let c = &fig.axes.collections()[0];
    assert!(c.segment_width(0) < c.segment_width(4000));
    assert_eq!(c.segment_width(0), 0.0);
    assert_eq!(c.segment_color(10).a(), 191);
}

#[test]
fn derivative_coloring_is_discrete() {
    let fig = gallery::sin_inverse_derivative().unwrap();
    let c = &fig.axes.collections()[0];
    assert_eq!(c.array().len(), 4999);
    assert_eq!(c.len(), 4999);
    let palette = Colormap::listed(&["r", "g", "b"]).unwrap();
    let allowed: Vec<_> = (0..3).map(|i| palette.color_at(Normalized::Index(i))).collect();
    for i in (0..c.len()).step_by(37) {
        assert!(allowed.contains(&c.segment_color(i)));
    }
}

#[test]
fn all_figures_render() {
    let figs = gallery::all().unwrap();
    assert_eq!(figs.len(), 5);
    for fig in &figs {
        let small = fig.clone().with_size(120, 90);
        let pixmap = colorline::render_figure(&small).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (120, 90));
    }
}
