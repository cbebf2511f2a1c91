//! Model traversal
//!
//! A traversal walks every material of a loaded model and installs a fresh
//! replacement for the current [`Paint`]. Each visited material keeps its
//! as-authored form for the lifetime of the model; installed materials never
//! feed back into the next paint, so every repaint starts from the sources.
//!
//! Multi-material meshes are visited one material at a time; the renderer
//! splits them per primitive before the walk starts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pipeline::Paint;
use crate::recipe::SynthesizedMaterial;
use crate::role::MaterialRole;
use crate::source::SourceMaterial;

/// An as-authored material the pipeline can paint
pub trait PaintTarget {
    /// What gets installed on the mesh
    type Output;

    /// Build the replacement for `paint`, with the recipe that produced it
    fn paint(&self, paint: Paint) -> (MaterialRole, Self::Output);
}

impl<T: Clone> PaintTarget for SourceMaterial<T> {
    type Output = SynthesizedMaterial<T>;

    fn paint(&self, paint: Paint) -> (MaterialRole, SynthesizedMaterial<T>) {
        let material = paint.apply(self);
        (material.recipe, material)
    }
}

/// Per-recipe count of the materials installed by one paint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaintSummary {
    pub original: usize,
    pub special: usize,
    pub glass: usize,
    pub body: usize,
}

impl RepaintSummary {
    pub fn record(&mut self, role: MaterialRole) {
        match role {
            MaterialRole::Original => self.original += 1,
            MaterialRole::Special => self.special += 1,
            MaterialRole::Glass => self.glass += 1,
            MaterialRole::Body => self.body += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.original + self.special + self.glass + self.body
    }
}

/// One walk over a model's materials with a single paint
#[derive(Debug, Clone, Copy)]
pub struct Repaint {
    paint: Paint,
    summary: RepaintSummary,
}

impl Repaint {
    pub fn new(paint: Paint) -> Self {
        Self::resume(paint, RepaintSummary::default())
    }

    /// Continue a walk whose earlier materials are already counted in
    /// `summary`, e.g. when meshes arrive over several frames
    pub fn resume(paint: Paint, summary: RepaintSummary) -> Self {
        Self { paint, summary }
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }

    pub fn summary(&self) -> RepaintSummary {
        self.summary
    }

    /// Paint one material and count its recipe
    pub fn material<S: PaintTarget>(&mut self, source: &S) -> S::Output {
        let (role, installed) = source.paint(self.paint);
        self.summary.record(role);
        installed
    }

    /// End the walk
    pub fn finish(self) -> RepaintSummary {
        let summary = self.summary;
        debug!(
            "Applied {:?}: {} original, {} special, {} glass, {} body",
            self.paint, summary.original, summary.special, summary.glass, summary.body
        );
        summary
    }
}
