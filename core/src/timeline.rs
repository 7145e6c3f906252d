use crate::scene::Rgb;

pub const NODE_IDLE_FILL: Rgb = Rgb::new(0xa8, 0xa2, 0x9e);
pub const NODE_STROKE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const AXIS_COLOR: Rgb = Rgb::new(0x57, 0x53, 0x4e);
pub const GLOW_ALPHA: f64 = 0.3;
pub const LABEL_FONT_ACTIVE: &str = "bold 14px sans-serif";
pub const LABEL_FONT_IDLE: &str = "12px sans-serif";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineStyle {
    pub padding: f64,
    pub base_radius: f64,
    pub active_radius: f64,
    pub glow_radius: f64,
    pub stroke_width: f64,
    pub line_width: f64,
    /// Max pointer distance from a node center that still counts as a click.
    pub hit_radius: f64,
    pub label_offset: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            padding: 60.0,
            base_radius: 8.0,
            active_radius: 12.0,
            glow_radius: 25.0,
            stroke_width: 2.0,
            line_width: 4.0,
            hit_radius: 30.0,
            label_offset: 25.0,
        }
    }
}

/// Node placement for a surface of logical size `width` x `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub count: usize,
}

impl TimelineLayout {
    pub fn new(width: f64, height: f64, padding: f64, count: usize) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            padding,
            count,
        }
    }

    pub fn center_y(&self) -> f64 {
        self.height * 0.5
    }

    pub fn spacing(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.width - self.padding * 2.0) / (self.count - 1) as f64
    }

    pub fn node_x(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        if self.count == 1 {
            return Some(self.width * 0.5);
        }
        Some(self.padding + index as f64 * self.spacing())
    }

    pub fn node_center(&self, index: usize) -> Option<(f64, f64)> {
        self.node_x(index).map(|x| (x, self.center_y()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.count).filter_map(move |index| self.node_center(index))
    }

    /// Endpoints of the axis line: first and last node x.
    pub fn axis(&self) -> Option<(f64, f64)> {
        let first = self.node_x(0)?;
        let last = self.node_x(self.count - 1)?;
        Some((first, last))
    }

    /// Index of the nearest node strictly within `hit_radius` of the point.
    /// Equidistant nodes resolve to the lowest index.
    pub fn hit_test(&self, x: f64, y: f64, hit_radius: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, (node_x, node_y)) in self.nodes().enumerate() {
            let dist = (x - node_x).hypot(y - node_y);
            if dist >= hit_radius {
                continue;
            }
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((index, dist)),
            }
        }
        best.map(|(index, _)| index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePaint {
    pub radius: f64,
    pub fill: Rgb,
    pub glow_radius: Option<f64>,
    pub label_font: &'static str,
    pub label_color: Rgb,
}

pub fn node_paint(active: bool, accent: Rgb, style: &TimelineStyle) -> NodePaint {
    if active {
        NodePaint {
            radius: style.active_radius,
            fill: accent,
            glow_radius: Some(style.glow_radius),
            label_font: LABEL_FONT_ACTIVE,
            label_color: NODE_STROKE,
        }
    } else {
        NodePaint {
            radius: style.base_radius,
            fill: NODE_IDLE_FILL,
            glow_radius: None,
            label_font: LABEL_FONT_IDLE,
            label_color: NODE_IDLE_FILL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let delta = (actual - expected).abs();
        assert!(
            delta <= 1e-9,
            "expected {:.6} got {:.6} (delta {:.6})",
            expected,
            actual,
            delta
        );
    }

    #[test]
    fn five_nodes_evenly_spaced() {
        let layout = TimelineLayout::new(1000.0, 128.0, 60.0, 5);
        let xs: Vec<f64> = layout.nodes().map(|(x, _)| x).collect();
        let expected = [60.0, 280.0, 500.0, 720.0, 940.0];
        assert_eq!(xs.len(), expected.len());
        for (actual, expected) in xs.iter().zip(expected) {
            assert_close(*actual, expected);
        }
        for (_, y) in layout.nodes() {
            assert_close(y, 64.0);
        }
        assert_eq!(layout.axis(), Some((60.0, 940.0)));
    }

    #[test]
    fn single_node_is_centered() {
        let layout = TimelineLayout::new(400.0, 100.0, 60.0, 1);
        assert_eq!(layout.node_center(0), Some((200.0, 50.0)));
        assert_eq!(layout.axis(), Some((200.0, 200.0)));
        assert_eq!(layout.node_x(1), None);
    }

    #[test]
    fn empty_layout_has_no_nodes() {
        let layout = TimelineLayout::new(400.0, 100.0, 60.0, 0);
        assert_eq!(layout.nodes().count(), 0);
        assert_eq!(layout.axis(), None);
        assert_eq!(layout.hit_test(200.0, 50.0, 30.0), None);
    }

    #[test]
    fn hit_test_picks_node_within_radius() {
        let layout = TimelineLayout::new(1000.0, 128.0, 60.0, 5);
        assert_eq!(layout.hit_test(500.0, 64.0, 30.0), Some(2));
        assert_eq!(layout.hit_test(520.0, 80.0, 30.0), Some(2));
        assert_eq!(layout.hit_test(61.0, 60.0, 30.0), Some(0));
    }

    #[test]
    fn hit_test_misses_outside_radius() {
        let layout = TimelineLayout::new(1000.0, 128.0, 60.0, 5);
        assert_eq!(layout.hit_test(390.0, 64.0, 30.0), None);
        assert_eq!(layout.hit_test(500.0, 64.0 + 30.0, 30.0), None);
        assert_eq!(layout.hit_test(500.0, 0.0, 30.0), None);
    }

    #[test]
    fn hit_test_tie_resolves_to_lowest_index() {
        let layout = TimelineLayout::new(200.0, 100.0, 0.0, 3);
        // nodes at 0, 100, 200; midpoint between the first two
        assert_eq!(layout.hit_test(50.0, 50.0, 60.0), Some(0));
        assert_eq!(layout.hit_test(150.0, 50.0, 60.0), Some(1));
    }

    #[test]
    fn resize_recomputes_spacing() {
        let narrow = TimelineLayout::new(600.0, 128.0, 60.0, 5);
        let wide = TimelineLayout::new(1400.0, 128.0, 60.0, 5);
        for layout in [narrow, wide] {
            let xs: Vec<f64> = layout.nodes().map(|(x, _)| x).collect();
            assert_close(xs[0], 60.0);
            assert_close(xs[4], layout.width - 60.0);
            for pair in xs.windows(2) {
                assert_close(pair[1] - pair[0], layout.spacing());
            }
        }
        assert_close(narrow.spacing(), 120.0);
        assert_close(wide.spacing(), 320.0);
    }

    #[test]
    fn active_node_paint_uses_accent() {
        let style = TimelineStyle::default();
        let accent = Rgb::new(0xef, 0x44, 0x44);
        let active = node_paint(true, accent, &style);
        assert_eq!(active.fill, accent);
        assert_eq!(active.radius, 12.0);
        assert_eq!(active.glow_radius, Some(25.0));
        let idle = node_paint(false, accent, &style);
        assert_eq!(idle.fill, NODE_IDLE_FILL);
        assert_eq!(idle.radius, 8.0);
        assert_eq!(idle.glow_radius, None);
    }
}
