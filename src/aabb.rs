/*

    Axis Aligned Bounding Box

    Stores the two extreme corners of the box. The caller is
    responsible for passing min <= max on every axis; nothing
    here sorts, clamps or reports inverted input.

    transform( ) re-bounds the box after an arbitrary affine
    mapping (rotation, scale, shear, translation) by pushing all
    eight corners through the mapping and taking per-axis extrema.
    Repeated rotations accumulate looseness, e.g. rotating by 45
    degrees and back does NOT give the original box.

    @date: 19 Oct, 2026
*/

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::numeric::{Float, Matrix4, Vector3, transform_point};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    min: Vector3,
    max: Vector3,
}

impl BoundingBox {

    /// Box with exactly the given corners, expects min <= max per axis.
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Degenerate box covering a single point.
    pub fn from_point(p: Vector3) -> Self {
        Self { min: p, max: p }
    }

    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        Self {
            min: Vector3::new(xint.min, yint.min, zint.min),
            max: Vector3::new(xint.max, yint.max, zint.max),
        }
    }

    #[inline]
    pub fn min(&self) -> &Vector3 {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Vector3 {
        &self.max
    }

    /// Extent of the box along axis 0 (x), 1 (y) or 2 (z).
    pub fn axis(&self, i: usize) -> Interval {
        Interval::new(self.min[i], self.max[i])
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// True if min <= max on every axis. Only reports, see header.
    pub fn is_valid(&self) -> bool {
        (0..3).all(|i| self.axis(i).validate())
    }

    pub fn contains_point(&self, p: &Vector3) -> bool {
        (0..3).all(|i| self.axis(i).contains(p[i]))
    }

    /// The eight corners of the box. Corner k takes max on axis a
    /// if bit a of k is set, min otherwise, so corners[0] == min
    /// and corners[7] == max.
    pub fn corners(&self) -> [Vector3; 8] {
        let (lo, hi) = (self.min, self.max);
        let pick = |k: usize, a: usize| -> Float {
            if k & (1 << a) != 0 { hi[a] } else { lo[a] }
        };
        std::array::from_fn(|k| Vector3::new(pick(k, 0), pick(k, 1), pick(k, 2)))
    }

    /// Tightest axis aligned box around the image of this box under `mat`.
    /// `mat` is applied to positions, so its translation part counts.
    pub fn transformed(&self, mat: &Matrix4) -> Self {
        let mut xint = Interval::EMPTY;
        let mut yint = Interval::EMPTY;
        let mut zint = Interval::EMPTY;

        for corner in self.corners() {
            let p = transform_point(mat, &corner);
            xint.expand(p.x);
            yint.expand(p.y);
            zint.expand(p.z);
        }

        Self::new_from(&xint, &yint, &zint)
    }

    /// In-place version of transformed( ). All eight corners are read from
    /// the old box before min and max are replaced together.
    pub fn transform(&mut self, mat: &Matrix4) {
        *self = self.transformed(mat);
    }
}
