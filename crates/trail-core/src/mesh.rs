//! Uniform grid over trail segments for nearest-point queries.
//!
//! Each segment is registered in every cell its bounding box overlaps. A
//! query scans rings of cells outward from the query cell and stops once the
//! best hit is closer than anything an unscanned ring could hold.

use crate::geometry::{Location, bounding_box, project_onto_segment};
use petgraph::graph::EdgeIndex;

/// Upper bound on cell count; finer meshes are rejected.
pub const MAX_CELLS: usize = 1 << 22;

/// One polyline segment of a trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRef {
    pub edge: EdgeIndex,
    pub a: Location,
    pub b: Location,
    /// Arc length along the trail at `a`.
    pub offset: f64,
}

/// Best candidate found by a nearest-point scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub edge: EdgeIndex,
    pub distance_along: f64,
    pub location: Location,
    pub distance: f64,
}

impl SegmentRef {
    pub fn hit(&self, p: Location) -> SegmentHit {
        let (location, t) = project_onto_segment(p, self.a, self.b);
        SegmentHit {
            edge: self.edge,
            distance_along: self.offset + self.a.distance(self.b) * t,
            location,
            distance: location.distance(p),
        }
    }
}

/// Keep the closer of two hits; ties keep the existing one.
pub fn closer(best: Option<SegmentHit>, candidate: SegmentHit) -> Option<SegmentHit> {
    match best {
        Some(b) if b.distance <= candidate.distance => Some(b),
        _ => Some(candidate),
    }
}

#[derive(Debug, Clone)]
pub struct SegmentGrid {
    origin: Location,
    cell: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<SegmentRef>>,
}

impl SegmentGrid {
    /// Build a grid with square cells of side `cell`.
    ///
    /// Returns `None` when `cell` is not a positive finite number or the
    /// resulting grid would exceed `MAX_CELLS`.
    pub fn build(segments: &[SegmentRef], cell: f64) -> Option<Self> {
        if !(cell.is_finite() && cell > 0.0) {
            return None;
        }
        let (min, max) = bounding_box(segments.iter().flat_map(|s| [s.a, s.b]))
            .unwrap_or((Location::ORIGIN, Location::ORIGIN));
        let cols = ((max.x - min.x) / cell).floor() as usize + 1;
        let rows = ((max.y - min.y) / cell).floor() as usize + 1;
        if cols.checked_mul(rows).is_none_or(|n| n > MAX_CELLS) {
            return None;
        }

        let mut grid = Self {
            origin: min,
            cell,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
        };
        for seg in segments {
            let (lo, hi) = bounding_box([seg.a, seg.b]).unwrap_or((seg.a, seg.b));
            let (x0, y0) = grid.clamped_cell(lo);
            let (x1, y1) = grid.clamped_cell(hi);
            for y in y0..=y1 {
                for x in x0..=x1 {
                    grid.cells[y * cols + x].push(*seg);
                }
            }
        }
        log::debug!(
            "closest-point mesh: {cols}x{rows} cells of {cell}, {} segments",
            segments.len()
        );
        Some(grid)
    }

    /// Signed cell coordinates of `p` (may lie outside the grid).
    fn cell_of(&self, p: Location) -> (i64, i64) {
        (
            ((p.x - self.origin.x) / self.cell).floor() as i64,
            ((p.y - self.origin.y) / self.cell).floor() as i64,
        )
    }

    fn clamped_cell(&self, p: Location) -> (usize, usize) {
        let (x, y) = self.cell_of(p);
        (
            x.clamp(0, self.cols as i64 - 1) as usize,
            y.clamp(0, self.rows as i64 - 1) as usize,
        )
    }

    fn scan_cell(&self, x: i64, y: i64, p: Location, best: &mut Option<SegmentHit>) {
        if x < 0 || y < 0 || x >= self.cols as i64 || y >= self.rows as i64 {
            return;
        }
        for seg in &self.cells[y as usize * self.cols + x as usize] {
            *best = closer(*best, seg.hit(p));
        }
    }

    pub fn nearest(&self, p: Location) -> Option<SegmentHit> {
        let (cx, cy) = self.cell_of(p);
        let mut best = None;
        // Rings closer than the grid's bounds hold no cells.
        let gap_x = (-cx).max(cx - (self.cols as i64 - 1)).max(0);
        let gap_y = (-cy).max(cy - (self.rows as i64 - 1)).max(0);
        let mut ring: i64 = gap_x.max(gap_y);
        loop {
            if ring == 0 {
                self.scan_cell(cx, cy, p, &mut best);
            } else {
                // Only the part of the ring that overlaps the grid.
                let (max_x, max_y) = (self.cols as i64 - 1, self.rows as i64 - 1);
                for x in (cx - ring).max(0)..=(cx + ring).min(max_x) {
                    self.scan_cell(x, cy - ring, p, &mut best);
                    self.scan_cell(x, cy + ring, p, &mut best);
                }
                for y in (cy - ring + 1).max(0)..=(cy + ring - 1).min(max_y) {
                    self.scan_cell(cx - ring, y, p, &mut best);
                    self.scan_cell(cx + ring, y, p, &mut best);
                }
            }

            // Cells in ring + 1 are at least `ring` whole cells away.
            if let Some(hit) = best
                && hit.distance <= ring as f64 * self.cell
            {
                return best;
            }
            let covers_grid = cx - ring <= 0
                && cy - ring <= 0
                && cx + ring >= self.cols as i64 - 1
                && cy + ring >= self.rows as i64 - 1;
            if covers_grid {
                return best;
            }
            ring += 1;
        }
    }
}
