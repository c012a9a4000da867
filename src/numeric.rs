/*

    Declare numeric types used throughout this crate.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change all of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;
    pub type Matrix4 = Mat4;

    @date: 19 Oct, 2026
*/

use bevy_math::{DMat4, DVec3, DVec4};

pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update vector and matrix types
pub type Vector3 = DVec3;
pub type Vector4 = DVec4;
pub type Matrix4 = DMat4;

pub const EPSILON: Float = 1e-8;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < EPSILON
}

pub fn approx_eq_vec(a: &Vector3, b: &Vector3) -> bool {
    approx_zero(a.x - b.x) && approx_zero(a.y - b.y) && approx_zero(a.z - b.z)
}

pub fn transform_point(mat: &Matrix4, v: &Vector3) -> Vector3 {
    let v4 = Vector4::new(v.x, v.y, v.z, 1.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}

pub fn transform_dir(mat: &Matrix4, v: &Vector3) -> Vector3 {
    // Only difference from transform_point is that last component
    // w = 0, so translation is dropped
    let v4 = Vector4::new(v.x, v.y, v.z, 0.0);
    let r = *mat * v4;
    Vector3::new(r.x, r.y, r.z)
}
