/*

    Declare the bounds document: a library of named
    transformations and a list of boxes, each with the
    expression of the mapping to re-bound it under.

    {
      "Bounds": {
        "Transformations": { "Rotation": {...}, "Translation": [...] },
        "Boxes": {
          "Box": [ { "_id": "1", "Min": "0 0 0", "Max": "1 1 1", "Transformations": "r1 t1" } ]
        }
      }
    }

    Input validation lives here rather than in BoundingBox,
    which takes whatever corners it is given.

    @date: 19 Oct, 2026
*/

use serde::Serialize;

use crate::prelude::*;
use crate::aabb::BoundingBox;
use crate::transformations::{SingleOrVec, Transformations};

#[derive(Debug, Deserialize)]
pub struct RootBounds {
    #[serde(rename = "Bounds")]
    pub bounds: BoundsDocument,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BoundsDocument {
    #[serde(rename = "Transformations")]
    pub transformations: Transformations,
    #[serde(rename = "Boxes")]
    pub boxes: BoxList,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BoxList {
    #[serde(rename = "Box")]
    pub entries: SingleOrVec<BoxEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoxEntry {
    #[serde(deserialize_with = "deser_usize")]
    pub _id: usize,
    #[serde(rename = "Min", deserialize_with = "deser_vec3")]
    pub min: Vector3,
    #[serde(rename = "Max", deserialize_with = "deser_vec3")]
    pub max: Vector3,
    #[serde(rename = "Transformations", default)]
    pub transformations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxResult {
    pub id: usize,
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BoundsReport {
    pub boxes: Vec<BoxResult>,
}

impl BoxEntry {
    pub fn evaluate(&self, transforms: &Transformations) -> BoxResult {
        let mut bbox = BoundingBox::new(self.min, self.max);
        if !bbox.is_valid() {
            // Still evaluated, the result comes out ordered anyway
            warn!("Box {} has Min > Max on some axis: min {} max {}", self._id, self.min, self.max);
        }

        let mat = parse_transform_expression(&self.transformations, transforms);
        bbox.transform(&mat);
        debug!("Box {} under '{}' -> min {} max {}", self._id, self.transformations, bbox.min(), bbox.max());

        BoxResult {
            id: self._id,
            bounds: bbox,
        }
    }
}

impl BoundsDocument {
    /// Evaluate every box in file order.
    pub fn evaluate_all(&self) -> BoundsReport {
        let span = tracing::span!(tracing::Level::INFO, "evaluate_bounds");
        let _enter = span.enter();

        let entries = self.boxes.entries.as_slice();
        if entries.is_empty() {
            warn!("No boxes found in bounds document.");
        }
        info!("Evaluating {} box(es)...", entries.len());

        BoundsReport {
            boxes: entries
                .iter()
                .map(|entry| entry.evaluate(&self.transformations))
                .collect(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const WORKED: &str = r#"{
        "Bounds": {
            "Transformations": {
                "Translation": { "_id": "1", "_data": "2 0 0" },
                "Rotation": { "_id": "1", "_data": "90 0 0 1" }
            },
            "Boxes": {
                "Box": [
                    { "_id": "1", "Min": "0 0 0", "Max": "1 1 1", "Transformations": "r1 t1" },
                    { "_id": 2, "Min": [5, 5, 5], "Max": [5, 5, 5] },
                    { "_id": "3", "Min": "1 1 1", "Max": "0 0 0", "Transformations": "t1" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_worked_document() {
        let root: RootBounds = serde_json::from_str(WORKED).unwrap();
        let report = root.bounds.evaluate_all();
        assert_eq!(report.boxes.len(), 3);

        let first = &report.boxes[0];
        assert_eq!(first.id, 1);
        assert!(approx_eq_vec(first.bounds.min(), &Vector3::new(1., 0., 0.)));
        assert!(approx_eq_vec(first.bounds.max(), &Vector3::new(2., 1., 1.)));

        // No expression means identity
        let second = &report.boxes[1];
        assert_eq!(*second.bounds.min(), Vector3::splat(5.));
        assert_eq!(*second.bounds.max(), Vector3::splat(5.));

        // Inverted input is warned about, output is still ordered
        let third = &report.boxes[2];
        assert!(third.bounds.is_valid());
        assert!(approx_eq_vec(third.bounds.min(), &Vector3::new(2., 0., 0.)));
        assert!(approx_eq_vec(third.bounds.max(), &Vector3::new(3., 1., 1.)));
    }

    #[test]
    fn test_single_box_and_empty_document() {
        let root: RootBounds = serde_json::from_str(r#"{
            "Bounds": { "Boxes": { "Box": { "_id": "4", "Min": "-1 -1 -1", "Max": "1 1 1" } } }
        }"#).unwrap();
        let report = root.bounds.evaluate_all();
        assert_eq!(report.boxes.len(), 1);
        assert_eq!(report.boxes[0].id, 4);

        let empty: RootBounds = serde_json::from_str(r#"{ "Bounds": {} }"#).unwrap();
        assert!(empty.bounds.evaluate_all().boxes.is_empty());
    }

    #[test]
    fn test_missing_corner_is_an_error() {
        let err = serde_json::from_str::<RootBounds>(r#"{
            "Bounds": { "Boxes": { "Box": { "_id": "1", "Min": "0 0 0" } } }
        }"#).unwrap_err();
        assert!(err.to_string().contains("Max"), "{err}");
    }

    #[test]
    fn test_bad_corner_reports_vec3_message() {
        let err = serde_json::from_str::<RootBounds>(r#"{
            "Bounds": { "Boxes": { "Box": [
                { "_id": "1", "Min": "0 0 0", "Max": "1 1 1" },
                { "_id": "2", "Min": "0 0", "Max": "1 1 1" }
            ] } }
        }"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Expected 3 values, got 2"), "{msg}");
        assert!(msg.contains("element 1"), "{msg}");
    }

    #[test]
    fn test_report_json_shape() {
        let report = BoundsReport {
            boxes: vec![BoxResult {
                id: 9,
                bounds: BoundingBox::new(Vector3::ZERO, Vector3::ONE),
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["boxes"][0]["id"], 9);
        assert_eq!(value["boxes"][0]["min"], serde_json::json!([0.0, 0.0, 0.0]));
        assert_eq!(value["boxes"][0]["max"], serde_json::json!([1.0, 1.0, 1.0]));
    }
}
