//! Building facades: a box body, rows of auto-fitted windows, and a layered
//! roof.
//!
//! ```text
//!   ┌──────────────────────────────────────┐ ← roof layers
//!   │ ┌──┐ ┌──┐ ┌──┐ ┌──┐ ┌──┐ ┌──┐ ┌──┐    │
//!   │ │▒▒│ │  │ │▒▒│ │  │ │▒▒│ │▒▒│ │  │    │ ← split windows: top color
//!   │ │  │ │  │ │  │ │  │ │  │ │  │ │  │    │   above, bottom color below
//!   │ └──┘ └──┘ └──┘ └──┘ └──┘ └──┘ └──┘    │
//!   │  ...                                 │
//!   └──────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::material::{palette, Color, Material};
use crate::math::{Transform, UvRect, Vec2, Vec3};
use crate::scene::{CommandList, QuadCommand, TextureSlot};

/// Margin from each facade edge as a fraction of the half-extent.
pub const MARGIN_FRACTION: f32 = 0.05;
/// Extra bottom margin as a fraction of the half-height.
pub const BOTTOM_MARGIN_FRACTION: f32 = 0.1;
/// Windows float this far in front of the facade.
pub const WINDOW_Z_OFFSET: f32 = 0.01;
pub const WINDOW_SHININESS: f32 = 80.0;

/// Appearance of one window pane.
///
/// `split_ratio` is the fraction of the height, measured from the top, drawn
/// in `top`; the rest is drawn in `bottom`. `1.0` is a solid pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStyle {
    pub top: Color,
    pub split_ratio: f32,
    pub bottom: Color,
}

impl WindowStyle {
    pub const fn solid(color: Color) -> Self {
        Self {
            top: color,
            split_ratio: 1.0,
            bottom: color,
        }
    }

    pub const fn split(top: Color, ratio: f32, bottom: Color) -> Self {
        Self {
            top,
            split_ratio: ratio,
            bottom,
        }
    }

    pub fn is_split(&self) -> bool {
        self.split_ratio < 1.0
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self::solid(palette::WINDOW_DEFAULT)
    }
}

/// One row (or block) of windows on a facade, relative to the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowGrid {
    pub rows: u32,
    pub cols: u32,
    pub offset: Vec2,
    pub spacing: Vec2,
    /// Explicit window width; fitted to the facade when absent.
    #[serde(default)]
    pub window_width: Option<f32>,
    #[serde(default)]
    pub window_height: Option<f32>,
    /// Cycled across cells in row-major order.
    #[serde(default)]
    pub styles: Vec<WindowStyle>,
}

impl WindowGrid {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            offset: Vec2::ZERO,
            spacing: Vec2::ZERO,
            window_width: None,
            window_height: None,
            styles: Vec::new(),
        }
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    pub fn with_spacing(mut self, x: f32, y: f32) -> Self {
        self.spacing = Vec2::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.window_width = Some(width);
        self.window_height = Some(height);
        self
    }

    pub fn with_styles(mut self, styles: impl Into<Vec<WindowStyle>>) -> Self {
        self.styles = styles.into();
        self
    }
}

/// A window grid placed on a particular facade.
#[derive(Debug, Clone, PartialEq)]
pub struct FacadeWindows<'a> {
    pub grid: &'a WindowGrid,
    pub building_center: Vec3,
    /// Half width, half height, half depth of the building.
    pub half_extents: Vec3,
}

/// One resolved window cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowCell {
    pub min: Vec2,
    pub max: Vec2,
    pub style: WindowStyle,
}

impl WindowCell {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// World Y where the top color ends.
    pub fn split_y(&self) -> f32 {
        self.max.y - self.style.split_ratio * self.size().y
    }
}

impl FacadeWindows<'_> {
    /// Usable facade area: `(min, max)` after margins, shifted by the offset.
    pub fn area(&self) -> (Vec2, Vec2) {
        let c = self.building_center;
        let h = self.half_extents;
        let margin = Vec2::new(h.x, h.y) * MARGIN_FRACTION;
        let offset = self.grid.offset;
        let min = Vec2::new(
            c.x - h.x + margin.x + offset.x,
            c.y - h.y + margin.y + h.y * BOTTOM_MARGIN_FRACTION + offset.y,
        );
        let max = Vec2::new(c.x + h.x - margin.x + offset.x, c.y + h.y - margin.y + offset.y);
        (min, max)
    }

    /// Window size: explicit when given, else split evenly from the area.
    pub fn window_size(&self) -> Vec2 {
        let (min, max) = self.area();
        let span = max - min;
        let cols = self.grid.cols.max(1) as f32;
        let rows = self.grid.rows.max(1) as f32;
        let fitted = Vec2::new(
            (span.x - self.grid.spacing.x * (cols - 1.0)) / cols,
            (span.y - self.grid.spacing.y * (rows - 1.0)) / rows,
        );
        Vec2::new(
            self.grid.window_width.unwrap_or(fitted.x),
            self.grid.window_height.unwrap_or(fitted.y),
        )
    }

    /// Total grid extent including spacing.
    pub fn grid_size(&self) -> Vec2 {
        let size = self.window_size();
        let n = Vec2::new(self.grid.cols as f32, self.grid.rows as f32);
        n * size + (n - Vec2::ONE).max(Vec2::ZERO) * self.grid.spacing
    }

    pub fn z(&self) -> f32 {
        self.building_center.z + self.half_extents.z + WINDOW_Z_OFFSET
    }

    /// Cells in row-major order; row 0 is the lowest.
    pub fn cells(&self) -> Vec<WindowCell> {
        let size = self.window_size();
        let grid = self.grid_size();
        let start = Vec2::new(self.building_center.x, self.building_center.y) - grid * 0.5 + self.grid.offset;
        let pitch = size + self.grid.spacing;

        let mut cells = Vec::with_capacity((self.grid.rows * self.grid.cols) as usize);
        for r in 0..self.grid.rows {
            for c in 0..self.grid.cols {
                let index = cells.len();
                let style = match self.grid.styles.len() {
                    0 => WindowStyle::default(),
                    n => self.grid.styles[index % n],
                };
                let min = start + Vec2::new(c as f32, r as f32) * pitch;
                cells.push(WindowCell {
                    min,
                    max: min + size,
                    style,
                });
            }
        }
        cells
    }

    /// The textured quads: a top section per cell, plus a bottom section
    /// when the cell is split.
    pub fn quads(&self) -> Vec<QuadCommand> {
        let z = self.z();
        let mut out = Vec::new();
        for cell in self.cells() {
            let size = cell.size();
            let split_y = cell.split_y();
            let split_v = cell.style.split_ratio * size.y;

            out.push(
                QuadCommand::upright(
                    Vec2::new(cell.min.x, split_y),
                    cell.max,
                    z,
                    UvRect::new(Vec2::ZERO, Vec2::new(size.x, split_v)),
                    Material::new(cell.style.top).with_shininess(WINDOW_SHININESS),
                )
                .textured(TextureSlot::Window),
            );
            if cell.style.is_split() {
                out.push(
                    QuadCommand::upright(
                        cell.min,
                        Vec2::new(cell.max.x, split_y),
                        z,
                        UvRect::new(Vec2::new(0.0, split_v), size),
                        Material::new(cell.style.bottom).with_shininess(WINDOW_SHININESS),
                    )
                    .textured(TextureSlot::Window),
                );
            }
        }
        out
    }

    pub fn build(&self, out: &mut CommandList) {
        for quad in self.quads() {
            out.quad(quad);
        }
    }
}

/// A slab on top of the building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoofLayer {
    /// Height of this layer's base above the building top.
    pub lift: f32,
    pub thickness: f32,
    pub depth: f32,
    pub color: Color,
}

/// A building: body, window grids, roof layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Building {
    pub center: Vec3,
    pub half_extents: Vec3,
    #[serde(default = "Building::default_color")]
    pub color: Color,
    #[serde(default)]
    pub windows: Vec<WindowGrid>,
    #[serde(default)]
    pub roof: Vec<RoofLayer>,
}

impl Building {
    fn default_color() -> Color {
        palette::BUILDING_CREAM
    }

    /// The cream office block seen through the window row.
    pub fn office(center: Vec3) -> Self {
        use crate::material::palette::{
            WINDOW_BLUE as BLUE, WINDOW_CHARCOAL as CHARCOAL, WINDOW_MINT as MINT, WINDOW_MIST as MIST,
            WINDOW_SAGE as SAGE,
        };
        type S = WindowStyle;

        let row = |y: f32, h: f32, styles: [WindowStyle; 7]| {
            WindowGrid::new(1, 7)
                .with_offset(-2.7, y)
                .with_spacing(0.08, 0.08)
                .with_size(2.0, h)
                .with_styles(styles)
        };

        let windows = vec![
            row(2.2, 2.3, [
                S::split(MIST, 0.1, CHARCOAL),
                S::solid(BLUE),
                S::split(MIST, 0.1, BLUE),
                S::solid(MIST),
                S::split(MIST, 0.6, BLUE),
                S::split(MIST, 0.6, BLUE),
                S::solid(MIST),
            ]),
            row(0.4, 0.7, [
                S::solid(CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
                S::split(BLUE, 0.5, CHARCOAL),
            ]),
            row(-0.4, 0.7, [S::solid(MINT); 7]),
            row(-2.0, 2.3, [
                S::split(MINT, 0.64, CHARCOAL),
                S::split(MINT, 0.35, CHARCOAL),
                S::solid(MINT),
                S::split(MINT, 0.17, CHARCOAL),
                S::split(MINT, 0.8, CHARCOAL),
                S::split(MINT, 0.85, CHARCOAL),
                S::split(MINT, 0.90, CHARCOAL),
            ]),
            row(-4.6, 2.3, [S::solid(SAGE); 7]),
        ];

        Self {
            center,
            half_extents: Vec3::new(12.0, 6.5, 1.0),
            color: palette::BUILDING_CREAM,
            windows,
            roof: vec![
                RoofLayer {
                    lift: 0.0,
                    thickness: 0.3,
                    depth: 8.0,
                    color: palette::BUILDING_CREAM,
                },
                RoofLayer {
                    lift: 0.25,
                    thickness: 0.3,
                    depth: 8.0,
                    color: palette::ROOF_TRIM,
                },
            ],
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn facade<'a>(&self, grid: &'a WindowGrid) -> FacadeWindows<'a> {
        FacadeWindows {
            grid,
            building_center: self.center,
            half_extents: self.half_extents,
        }
    }

    pub fn body(&self) -> Transform {
        Transform::boxed(self.center, self.half_extents * 2.0)
    }

    pub fn roof_layer(&self, layer: &RoofLayer) -> Transform {
        let y = self.top() + layer.lift + layer.thickness * 0.5;
        Transform::boxed(
            Vec3::new(self.center.x, y, self.center.z),
            Vec3::new(self.half_extents.x * 2.0, layer.thickness, layer.depth),
        )
    }

    pub fn build(&self, out: &mut CommandList) {
        out.cuboid(self.body(), Material::new(self.color));
        for grid in &self.windows {
            self.facade(grid).build(out);
        }
        for layer in &self.roof {
            out.cuboid(self.roof_layer(layer), Material::new(layer.color));
        }
    }
}
