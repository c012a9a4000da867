/*

    Named affine mappings as given in the JSON input:

    - Translation: "_data": "tx ty tz"
    - Scaling:     "_data": "sx sy sz"
    - Rotation:    "_data": "angle_in_degrees ax ay az"
    - Composite:   "_data": 16 floats, row-major 4x4

    Boxes refer to these by expressions like "r1 t2", see
    parse_transform_expression( ) in json_parser.rs.

    @date: 19 Oct, 2026
*/

use serde::{Deserialize, Deserializer};
use serde::de::{self, DeserializeOwned};

use crate::prelude::*;
use crate::json_parser::{deser_float_vec, deser_usize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Translation,
    Scaling,
    Rotation,
    Composite,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Transformation {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,
    #[serde(deserialize_with = "deser_float_vec")]
    pub _data: Vec<Float>,
}

impl Transformation {
    pub fn new(_id: usize, _data: Vec<Float>) -> Self {
        Self { _id, _data }
    }

    /// Matrix for this record read as `kind`. Records with the wrong
    /// number of values are reported and treated as identity.
    pub fn get_mat4(&self, kind: TransformKind) -> Matrix4 {
        let expected = match kind {
            TransformKind::Translation | TransformKind::Scaling => 3,
            TransformKind::Rotation => 4,
            TransformKind::Composite => 16,
        };
        if self._data.len() != expected {
            warn!("{:?} {} has {} values, expected {}. Using identity.", kind, self._id, self._data.len(), expected);
            return Matrix4::IDENTITY;
        }

        let d = &self._data;
        match kind {
            TransformKind::Translation => Matrix4::from_translation(Vector3::new(d[0], d[1], d[2])),
            TransformKind::Scaling => Matrix4::from_scale(Vector3::new(d[0], d[1], d[2])),
            TransformKind::Rotation => {
                let axis = Vector3::new(d[1], d[2], d[3]);
                if approx_zero(axis.length_squared()) {
                    warn!("Rotation {} has a zero axis. Using identity.", self._id);
                    return Matrix4::IDENTITY;
                }
                Matrix4::from_axis_angle(axis.normalize(), d[0].to_radians())
            }
            TransformKind::Composite => {
                // Given row-major, glam reads column-major
                let mut arr = [0.0; 16];
                arr.copy_from_slice(d);
                Matrix4::from_cols_array(&arr).transpose()
            }
        }
    }
}


#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Transformations {
    #[serde(rename = "Translation")]
    pub translations: SingleOrVec<Transformation>,
    #[serde(rename = "Scaling")]
    pub scalings: SingleOrVec<Transformation>,
    #[serde(rename = "Rotation")]
    pub rotations: SingleOrVec<Transformation>,
    #[serde(rename = "Composite")]
    pub composites: SingleOrVec<Transformation>,
}

impl Transformations {
    pub fn find_translation(&self, id: usize) -> Option<&Transformation> {
        self.translations.find(|t| t._id == id)
    }

    pub fn find_scaling(&self, id: usize) -> Option<&Transformation> {
        self.scalings.find(|t| t._id == id)
    }

    pub fn find_rotation(&self, id: usize) -> Option<&Transformation> {
        self.rotations.find(|t| t._id == id)
    }

    pub fn find_composite(&self, id: usize) -> Option<&Transformation> {
        self.composites.find(|t| t._id == id)
    }
}


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Clone)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

// Dispatch on the JSON shape instead of trying each variant in turn,
// so errors from the element (e.g. a bad "Min") reach the caller as is.
impl<'de, T> Deserialize<'de> for SingleOrVec<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(SingleOrVec::Empty),
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    T::deserialize(item).map_err(|e| de::Error::custom(format!("element {i}: {e}")))
                })
                .collect::<Result<Vec<T>, D::Error>>()
                .map(SingleOrVec::Multiple),
            other => T::deserialize(other)
                .map(SingleOrVec::Single)
                .map_err(de::Error::custom),
        }
    }
}

impl<T> SingleOrVec<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            SingleOrVec::Empty => &[],
            SingleOrVec::Single(t) => std::slice::from_ref(t),
            SingleOrVec::Multiple(vec) => vec.as_slice(),
        }
    }

    pub fn find<P>(&self, pred: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.as_slice().iter().find(|t| pred(t))
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}
