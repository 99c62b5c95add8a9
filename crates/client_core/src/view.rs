//! Plain view-node data handed to the renderer.
//!
//! Components own their nodes exclusively; embedders read them to mount
//! into whatever scene graph the host uses.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: Vec2,
    pub scale: Vec2,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

/// Stretched sprite (sky backdrop).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub node: Node,
    pub size: Vec2,
    /// Normalized anchor; `(0, 1)` is bottom-left.
    pub anchor: Vec2,
}

/// Repeating texture with a scrollable tile offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingLayer {
    pub node: Node,
    pub size: Vec2,
    pub tile_scale: Vec2,
    pub tile_offset: Vec2,
    pub anchor: Vec2,
}

impl TilingLayer {
    #[must_use]
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            node: Node::default(),
            size: Vec2::new(width, height),
            tile_scale: Vec2::splat(scale),
            tile_offset: Vec2::ZERO,
            anchor: Vec2::new(0.0, 1.0),
        }
    }
}
