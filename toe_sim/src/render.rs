//! Headless scene model
//!
//! Simulations never talk to egui directly. They describe what to show as
//! text blocks and [`Figure`]s and hand them to a [`RenderSink`]. The host
//! records them into a [`Scene`] and paints that; tests inspect it.

/// Named stroke colors for plot layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Auto,
    Black,
    Blue,
    Red,
}

impl Tint {
    /// RGB for explicit tints, `None` lets the plot pick
    pub fn rgb(self) -> Option<[u8; 3]> {
        match self {
            Tint::Auto => None,
            Tint::Black => Some([20, 20, 20]),
            Tint::Blue => Some([31, 119, 180]),
            Tint::Red => Some([214, 39, 40]),
        }
    }
}

/// Color ramps for intensity images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Hot,
    Viridis,
}

const VIRIDIS_ANCHORS: [[f64; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

impl Colormap {
    /// Color at position `t` along the ramp, `t` clamped to `[0, 1]`
    pub fn sample(self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Hot => {
                // black → red → yellow → white
                let r = (t / 0.365).min(1.0);
                let g = ((t - 0.365) / 0.381).clamp(0.0, 1.0);
                let b = ((t - 0.746) / 0.254).clamp(0.0, 1.0);
                [to_byte(r), to_byte(g), to_byte(b)]
            }
            Colormap::Viridis => {
                let scaled = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
                let i = (scaled.floor() as usize).min(VIRIDIS_ANCHORS.len() - 2);
                let f = scaled - i as f64;
                let (a, b) = (VIRIDIS_ANCHORS[i], VIRIDIS_ANCHORS[i + 1]);
                let mix = |k: usize| (a[k] + (b[k] - a[k]) * f).round() as u8;
                [mix(0), mix(1), mix(2)]
            }
        }
    }
}

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round() as u8
}

/// One drawable element of a figure
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Connected (x, y) samples
    Line {
        points: Vec<[f64; 2]>,
        label: Option<String>,
        tint: Tint,
    },
    /// Radius as a function of angle, angles in radians
    Polar { theta: Vec<f64>, radius: Vec<f64> },
    /// Unconnected markers
    Scatter { points: Vec<[f64; 2]>, tint: Tint },
    /// Raw samples, binned at paint time
    Histogram { samples: Vec<f64>, bins: usize },
    /// Row-major intensity grid
    Heatmap {
        rows: usize,
        cols: usize,
        values: Vec<f64>,
        colormap: Colormap,
    },
}

impl Layer {
    pub fn line(points: Vec<[f64; 2]>) -> Self {
        Layer::Line {
            points,
            label: None,
            tint: Tint::Auto,
        }
    }

    /// Polar samples converted to cartesian coordinates
    pub fn polar_points(theta: &[f64], radius: &[f64]) -> Vec<[f64; 2]> {
        theta
            .iter()
            .zip(radius)
            .map(|(&t, &r)| [r * t.cos(), r * t.sin()])
            .collect()
    }
}

/// A finished plot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub layers: Vec<Layer>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Whether any layer carries a legend label
    pub fn has_legend(&self) -> bool {
        self.layers
            .iter()
            .any(|l| matches!(l, Layer::Line { label: Some(_), .. }))
    }
}

/// One histogram bucket, `[start, end)` except the last which is closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width histogram over the sample range. NaNs are skipped.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }

    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: lo + i as f64 * width,
            end: if i == bins - 1 { hi } else { lo + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();

    for v in finite {
        let i = (((v - lo) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}

/// Output surface for simulations
pub trait RenderSink {
    fn heading(&mut self, text: &str);
    fn text(&mut self, text: &str);
    fn figure(&mut self, figure: Figure);
}

/// One recorded output element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Text(String),
    Figure(Figure),
}

/// Everything one dispatch rendered, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub blocks: Vec<Block>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Text(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Figure(f) => Some(f),
            _ => None,
        })
    }
}

impl RenderSink for Scene {
    fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading(text.to_owned()));
    }

    fn text(&mut self, text: &str) {
        self.blocks.push(Block::Text(text.to_owned()));
    }

    fn figure(&mut self, figure: Figure) {
        self.blocks.push(Block::Figure(figure));
    }
}
