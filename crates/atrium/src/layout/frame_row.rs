//! Shared-edge placement of a row of window frames.
//!
//! One frame (the anchor) is pinned at a world X; its neighbors are packed
//! outward with no gaps, so each frame's right edge is exactly the next
//! frame's left edge.
//!
//! ```text
//!   left[i] = left[i+1] − w[i]        (walking left from the anchor)
//!   left[i] = left[i−1] + w[i−1]      (walking right from the anchor)
//!
//!   ├── w0 ──┼── w1 ──┼── w2 ──┼── w3 ──┼─ w4 ─┤
//!                              ▲ anchor center
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Width and divider flag of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameSpec {
    pub width: f32,
    #[serde(default = "yes")]
    pub has_middle: bool,
}

fn yes() -> bool {
    true
}

impl FrameSpec {
    pub fn new(width: f32, has_middle: bool) -> Self {
        Self { width, has_middle }
    }
}

/// A frame's resolved horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSlot {
    pub width: f32,
    pub left: f32,
    pub right: f32,
    pub center: f32,
    pub has_middle: bool,
}

/// An ordered row of frames with one anchored frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameRow {
    pub frames: Vec<FrameSpec>,
    pub anchor_index: usize,
    pub anchor_center_x: f32,
}

impl FrameRow {
    pub fn new(frames: Vec<FrameSpec>, anchor_index: usize, anchor_center_x: f32) -> Self {
        Self {
            frames,
            anchor_index,
            anchor_center_x,
        }
    }

    /// Check the row can be laid out.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.frames.is_empty() {
            return Err(SceneError::Layout("frame row is empty".into()));
        }
        if self.anchor_index >= self.frames.len() {
            return Err(SceneError::Layout(format!(
                "anchor index {} out of range for {} frames",
                self.anchor_index,
                self.frames.len()
            )));
        }
        if let Some((i, f)) = self.frames.iter().enumerate().find(|(_, f)| !(f.width > 0.0)) {
            return Err(SceneError::Layout(format!("frame {i} has non-positive width {}", f.width)));
        }
        Ok(())
    }

    pub fn layout(&self) -> Result<RowLayout, SceneError> {
        self.validate()?;

        let n = self.frames.len();
        let k = self.anchor_index;
        let mut left = vec![0.0f32; n];
        left[k] = self.anchor_center_x - self.frames[k].width * 0.5;
        for i in (0..k).rev() {
            left[i] = left[i + 1] - self.frames[i].width;
        }
        for i in k + 1..n {
            left[i] = left[i - 1] + self.frames[i - 1].width;
        }

        let mut slots: Vec<FrameSlot> = self
            .frames
            .iter()
            .zip(&left)
            .map(|(f, &l)| FrameSlot {
                width: f.width,
                left: l,
                right: l + f.width,
                center: l + f.width * 0.5,
                has_middle: f.has_middle,
            })
            .collect();
        // Seams are shared: copy the neighbor's left edge so they match bit for bit.
        for i in 0..n - 1 {
            slots[i].right = slots[i + 1].left;
        }
        slots[k].center = self.anchor_center_x;

        log::debug!(
            "frame row: {} frames, {:.2}..{:.2}",
            n,
            slots[0].left,
            slots[n - 1].right
        );
        Ok(RowLayout { slots })
    }
}

/// Resolved slots of a [`FrameRow`], left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLayout {
    slots: Vec<FrameSlot>,
}

impl RowLayout {
    pub fn row_left(&self) -> f32 {
        self.slots.first().map_or(0.0, |s| s.left)
    }

    pub fn row_right(&self) -> f32 {
        self.slots.last().map_or(0.0, |s| s.right)
    }

    pub fn row_width(&self) -> f32 {
        self.row_right() - self.row_left()
    }

    pub fn center_x(&self) -> f32 {
        (self.row_left() + self.row_right()) * 0.5
    }

    /// Only the first frame draws its left border; every other seam is drawn
    /// once by the right border of the frame to its left.
    pub fn draws_left_border(index: usize) -> bool {
        index == 0
    }
}

impl Deref for RowLayout {
    type Target = [FrameSlot];

    fn deref(&self) -> &[FrameSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn room_row(anchor: usize) -> FrameRow {
        let mut frames = vec![FrameSpec::new(15.4, true); 5];
        frames.push(FrameSpec::new(7.7, false));
        FrameRow::new(frames, anchor, -2.75)
    }

    #[test]
    fn seams_are_shared_exactly() {
        let layout = room_row(3).layout().unwrap();
        for pair in layout.windows(2) {
            assert_eq!(pair[0].right, pair[1].left);
        }
    }

    #[test]
    fn anchor_keeps_its_center() {
        for anchor in 0..6 {
            let layout = room_row(anchor).layout().unwrap();
            assert_eq!(layout[anchor].center, -2.75);
        }
    }

    #[test]
    fn anchored_on_the_fourth_frame() {
        let layout = room_row(3).layout().unwrap();
        assert!((layout.row_left() - (-2.75 - 7.7 - 15.4 * 3.0)).abs() < EPS);
        assert!((layout.row_right() - (layout.row_left() + 15.4 * 5.0 + 7.7)).abs() < EPS);
        assert!((layout.row_width() - 84.7).abs() < EPS);
        assert!(!layout[5].has_middle);
    }

    #[test]
    fn anchored_on_the_third_frame() {
        let layout = room_row(2).layout().unwrap();
        assert!((layout.row_left() - (-2.75 - 15.4 * 2.0 - 15.4 / 2.0)).abs() < EPS);
        assert!((layout.row_left() + 41.25).abs() < EPS);
        assert!((layout.row_right() - (layout.row_left() + 15.4 * 5.0 + 7.7)).abs() < EPS);
    }

    #[test]
    fn only_first_frame_draws_left_border() {
        assert!(RowLayout::draws_left_border(0));
        assert!(!RowLayout::draws_left_border(1));
    }

    #[test]
    fn invalid_rows_are_rejected() {
        assert!(matches!(FrameRow::new(vec![], 0, 0.0).layout(), Err(SceneError::Layout(_))));
        assert!(matches!(room_row(6).layout(), Err(SceneError::Layout(_))));

        let mut row = room_row(0);
        row.frames[2].width = 0.0;
        let err = row.layout().unwrap_err();
        assert!(err.to_string().contains("frame 2"));

        row.frames[2].width = f32::NAN;
        assert!(row.layout().is_err());
    }
}
