//! Immutable stack of 2D coordinate transforms.
//!
//! Each call pushes a new node in front of the previous one; `apply` runs the
//! newest operation first and then hands the result to the older ones. Nodes
//! are shared, so branching off a common base is cheap.

use std::sync::Arc;

use crate::polar::to_radians;
use crate::value::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    Translate(Vec2),
    Scale(f32),
    /// Radians, counter-clockwise.
    Rotate(f32),
}

#[derive(Debug)]
struct Node {
    op: Op,
    previous: Transform,
}

/// A (possibly empty) chain of transform operations.
#[derive(Clone, Debug, Default)]
pub struct Transform {
    head: Option<Arc<Node>>,
}

impl Transform {
    /// The identity transform.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    fn push(&self, op: Op) -> Self {
        Self {
            head: Some(Arc::new(Node {
                op,
                previous: self.clone(),
            })),
        }
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        self.push(Op::Translate(offset))
    }

    pub fn scale(&self, factor: f32) -> Self {
        self.push(Op::Scale(factor))
    }

    pub fn rotate_radians(&self, angle: f32) -> Self {
        self.push(Op::Rotate(angle))
    }

    pub fn rotate_degrees(&self, angle: f32) -> Self {
        self.push(Op::Rotate(to_radians(angle as f64) as f32))
    }

    /// Number of operations in the chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = &self.head;
        while let Some(node) = cur {
            depth += 1;
            cur = &node.previous.head;
        }
        depth
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        let mut v = point;
        let mut cur = &self.head;
        while let Some(node) = cur {
            v = match node.op {
                Op::Translate(offset) => v + offset,
                Op::Scale(factor) => v * factor,
                Op::Rotate(angle) => {
                    let (sin, cos) = angle.sin_cos();
                    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
                }
            };
            cur = &node.previous.head;
        }
        v
    }
}
