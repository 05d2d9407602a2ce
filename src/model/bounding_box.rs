use super::NetclipError;
use geo::{coord, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a rectangular extent described by its four bounding coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<BoundingBox, NetclipError> {
        if south >= north {
            return Err(NetclipError::ConfigurationError(format!(
                "bounding box south must be less than north, found [{south}, {north}]"
            )));
        }
        if west >= east {
            return Err(NetclipError::ConfigurationError(format!(
                "bounding box west must be less than east, found [{west}, {east}]"
            )));
        }
        Ok(BoundingBox {
            north,
            south,
            east,
            west,
        })
    }

    /// rectangular polygon covering this bounding box, boundary included
    pub fn to_polygon(&self) -> Polygon {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
        .to_polygon()
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(n: {}, s: {}, e: {}, w: {})",
            self.north, self.south, self.east, self.west
        )
    }
}

/// unvalidated mirror of [`BoundingBox`] used as the deserialization
/// target, converted through [`BoundingBox::new`]
#[derive(Deserialize)]
struct RawBoundingBox {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = NetclipError;

    fn try_from(raw: RawBoundingBox) -> Result<BoundingBox, NetclipError> {
        BoundingBox::new(raw.north, raw.south, raw.east, raw.west)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Intersects, Point};

    #[test]
    fn test_new_rejects_inverted_axes() {
        assert!(BoundingBox::new(0.0, 1.0, 1.0, 0.0).is_err());
        assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(BoundingBox::new(1.0, 0.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_inverted_axes() {
        let inverted = serde_json::from_str::<BoundingBox>(
            r#"{ "north": -0.5, "south": 1.5, "east": 1.0, "west": -1.0 }"#,
        );
        assert!(inverted.is_err());
        let valid = serde_json::from_str::<BoundingBox>(
            r#"{ "north": 1.5, "south": -0.5, "east": 1.0, "west": -1.0 }"#,
        )
        .unwrap();
        assert_eq!((valid.north, valid.south), (1.5, -0.5));
    }

    #[test]
    fn test_to_polygon_covers_boundary() {
        let bbox = BoundingBox::new(1.0, -1.0, 2.0, -2.0).unwrap();
        let polygon = bbox.to_polygon();
        assert!(polygon.intersects(&Point::new(0.0, 0.0)));
        assert!(polygon.intersects(&Point::new(-2.0, 1.0)), "corner included");
        assert!(!polygon.intersects(&Point::new(2.5, 0.0)));
    }
}
