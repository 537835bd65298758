//! Frame → flat, keyed list of viewport-space shapes.
//!
//! The list is what a retained renderer diffs against: every item carries a
//! stable `ItemKey`. Exiting paths that have fully retracted are still
//! emitted, with `visible: false`, until the registry flushes them. A host
//! keeps their elements attached and hidden rather than removing them.

use crate::theme::{CircleStyle, LineStyle, Theme};
use trail_core::{EdgeId, Extent, Location, TrailNetwork};
use trail_editor::{CoordinateMapping, Lifecycle, RenderFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Trail(EdgeId),
    /// Exiting path, keyed by its registry id.
    Exiting(u64),
    Preview,
    Hover,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polyline { points: Vec<Location>, style: LineStyle },
    Circle { center: Location, style: CircleStyle },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub key: ItemKey,
    pub shape: Shape,
    pub visible: bool,
}

/// Items in paint order: trails, exiting paths, preview, hover.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub viewport: Extent,
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn build(network: &TrailNetwork, frame: &RenderFrame<'_>, theme: &Theme) -> Self {
        let mapping = &frame.mapping;
        let mut items = Vec::with_capacity(network.graph.edge_count() + frame.exiting.len() + 2);

        for trail in network.trails() {
            items.push(DisplayItem {
                key: ItemKey::Trail(trail.id),
                shape: polyline(mapping, &trail.locations, theme.trail),
                visible: true,
            });
        }

        for entry in frame.exiting {
            items.push(DisplayItem {
                key: ItemKey::Exiting(entry.id),
                shape: polyline(mapping, &entry.path.locations, theme.exiting),
                visible: entry.lifecycle == Lifecycle::Active,
            });
        }

        if let Some(preview) = &frame.preview {
            items.push(DisplayItem {
                key: ItemKey::Preview,
                shape: polyline(mapping, &preview.locations, theme.preview),
                visible: true,
            });
        }

        if let Some(hover) = frame.hover {
            items.push(DisplayItem {
                key: ItemKey::Hover,
                shape: Shape::Circle {
                    center: mapping.to_viewport(hover),
                    style: theme.hover,
                },
                visible: true,
            });
        }

        log::trace!("display list: {} items", items.len());
        Self {
            viewport: mapping.viewport(),
            items,
        }
    }

    pub fn get(&self, key: ItemKey) -> Option<&DisplayItem> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn visible(&self) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter().filter(|item| item.visible)
    }
}

fn polyline(mapping: &CoordinateMapping, locations: &[Location], style: LineStyle) -> Shape {
    Shape::Polyline {
        points: locations.iter().map(|&l| mapping.to_viewport(l)).collect(),
        style,
    }
}
