//! Position Keys
//!
//! Lists and cards are ordered by a float `pos` supplied by the API. A drop
//! computes the new key from the neighbours at the target index.

use serde::{Serialize, Serializer};

/// Gap the API leaves between consecutive positions
pub const POS_STEP: f64 = 65536.0;

/// Position sent with a create or move request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pos {
    Top,
    Bottom,
    At(f64),
}

impl Pos {
    /// Query-string form
    pub fn as_param(&self) -> String {
        match self {
            Pos::Top => "top".to_string(),
            Pos::Bottom => "bottom".to_string(),
            Pos::At(value) => format_pos(*value),
        }
    }

    /// Local sort key used until the server answers with the real one.
    /// `siblings` are the ordered positions the item lands among.
    pub fn resolve(&self, siblings: &[f64]) -> f64 {
        match self {
            Pos::At(value) => *value,
            Pos::Top => match siblings.first() {
                Some(first) if *first > 0.0 => first / 2.0,
                Some(first) => first - POS_STEP,
                None => POS_STEP,
            },
            Pos::Bottom => siblings.last().map(|last| last + POS_STEP).unwrap_or(POS_STEP),
        }
    }
}

impl Serialize for Pos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pos::Top => serializer.serialize_str("top"),
            Pos::Bottom => serializer.serialize_str("bottom"),
            Pos::At(value) => serializer.serialize_f64(*value),
        }
    }
}

fn format_pos(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Position for an item dropped at `index` among `siblings` (sorted, with the
/// moved item already taken out).
pub fn drop_position(siblings: &[f64], index: usize) -> Pos {
    if siblings.is_empty() || index >= siblings.len() {
        Pos::Bottom
    } else if index == 0 {
        Pos::Top
    } else {
        Pos::At((siblings[index - 1] + siblings[index]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_between_neighbours() {
        let siblings = [100.0, 200.0, 300.0];
        assert_eq!(drop_position(&siblings, 1), Pos::At(150.0));
        assert_eq!(drop_position(&siblings, 2), Pos::At(250.0));
    }

    #[test]
    fn test_ends_use_sentinels() {
        let siblings = [100.0, 200.0];
        assert_eq!(drop_position(&siblings, 0), Pos::Top);
        assert_eq!(drop_position(&siblings, 2), Pos::Bottom);
        assert_eq!(drop_position(&siblings, 9), Pos::Bottom);
        assert_eq!(drop_position(&[], 0), Pos::Bottom);
    }

    #[test]
    fn test_resolve_keeps_order() {
        let siblings = [100.0, 200.0];
        let top = Pos::Top.resolve(&siblings);
        let bottom = Pos::Bottom.resolve(&siblings);
        assert!(top < 100.0 && top > 0.0);
        assert!(bottom > 200.0);
        assert_eq!(Pos::Bottom.resolve(&[]), POS_STEP);
        assert!(Pos::Top.resolve(&[0.0]) < 0.0);
    }

    #[test]
    fn test_param_and_json() {
        assert_eq!(Pos::Top.as_param(), "top");
        assert_eq!(Pos::At(65536.0).as_param(), "65536");
        assert_eq!(Pos::At(12.5).as_param(), "12.5");
        assert_eq!(serde_json::to_string(&Pos::Bottom).unwrap(), "\"bottom\"");
        assert_eq!(serde_json::to_string(&Pos::At(1.5)).unwrap(), "1.5");
    }
}
