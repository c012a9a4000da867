/*

    Provide utilities to parse bounds JSON files.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "_id": "6" and "_id": 6
    works as _id: usize in source code

    Vector3 fields are given either as "<a> <a> <a>" or [<a>, <a>, <a>].

    @date: 19 Oct, 2026
*/

use std::fmt::{self};
use std::marker::PhantomData;
use std::str::FromStr;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::prelude::*;
use crate::bounds::RootBounds;
use crate::transformations::{Transformations, TransformKind};

pub fn parse_bounds_json(path: &str) -> Result<RootBounds, Box<dyn std::error::Error>> {

    let span = tracing::span!(tracing::Level::INFO, "load_bounds");
    let _enter = span.enter();

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path);

    let root: RootBounds = serde_json::from_reader(reader)?;
    Ok(root)
}


pub(crate) fn deser_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize usize type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_u64()
            .map(|v| v as usize)
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        serde_json::Value::String(s) => s.trim().parse::<usize>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {t}"))),
    }
}


pub trait From3<T>: Sized {
    fn new(x: T, y: T, z: T) -> Self;
}

impl From3<f32> for bevy_math::Vec3 {
    fn new(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z)
    }
}

impl From3<f64> for bevy_math::DVec3 {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }
}

pub(crate) fn deser_vec3<'de, D, V, F>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    F: Deserialize<'de> + FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    struct Vec3Visitor<V, F>(PhantomData<(V, F)>);

    impl<'de, V, F> Visitor<'de> for Vec3Visitor<V, F>
    where
        F: Deserialize<'de> + FromStr,
        F::Err: fmt::Display,
        V: From3<F>,
    {
        type Value = V;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<V, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<V, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let y: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            let z: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))?;
            if seq.next_element::<F>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(V::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor(PhantomData))
}

/// Helper function: parse a string like "25 25 25" into Vector3
fn parse_vec3_str<V, F>(s: &str) -> Result<V, String>
where
    F: FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<F>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<F>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<F>().map_err(|e| e.to_string())?;
    Ok(V::new(x, y, z))
}


pub(crate) fn deser_float_vec<'de, D>(deserializer: D) -> Result<Vec<Float>, D::Error>
where
    D: Deserializer<'de>,
{
    // Either "0 2 3" or [0, 2, 3], numbers inside the array
    // may also be quoted.
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::String(s) => s
            .split_whitespace()
            .map(|x| -> Result<Float, D::Error> { x.parse::<Float>().map_err(de::Error::custom) })
            .collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|v| -> Result<Float, D::Error> { match v {
                serde_json::Value::Number(n) => n.as_f64()
                    .ok_or_else(|| de::Error::custom("Invalid float")),
                serde_json::Value::String(s) => s.trim().parse::<Float>()
                    .map_err(de::Error::custom),
                t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
            }})
            .collect(),
        t => Err(de::Error::custom(format!("Expected string or array of floats, found {t}"))),
    }
}


/// Compose the mapping named by `expr`, e.g. "r1 t2 s1". The leftmost
/// token is applied to the box first. Unknown tokens and ids are skipped
/// with a warning, an empty expression gives identity.
pub fn parse_transform_expression(
    expr: &str,
    global_transforms: &Transformations
) -> Matrix4 {

    let mut out = Matrix4::IDENTITY;

    for token in expr.split_whitespace() {
        debug!("Parsing token {}", token);
        if token.len() < 2 {
            warn!("Found token '{}' shorter than 2 chars, skipping...", token);
            continue;
        }

        let Some(kind_char) = token.chars().next() else { continue };
        let id_str = &token[kind_char.len_utf8()..];
        let id: usize = match id_str.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("Invalid transformation id in '{}'", token);
                continue;
            }
        };

        let (kind, found) = match kind_char {
            't' | 'T' => (TransformKind::Translation, global_transforms.find_translation(id)),
            's' | 'S' => (TransformKind::Scaling, global_transforms.find_scaling(id)),
            'r' | 'R' => (TransformKind::Rotation, global_transforms.find_rotation(id)),
            'c' | 'C' => (TransformKind::Composite, global_transforms.find_composite(id)),
            _ => {
                warn!("Unknown transform token '{}'", kind_char);
                continue;
            }
        };

        match found {
            Some(tf) => {
                debug!("Found {:?}: {:?}", kind, tf);
                out = tf.get_mat4(kind) * out;
            }
            None => warn!("No {:?} with id {} found, skipping '{}'", kind, id, token),
        }
    }

    out
}
