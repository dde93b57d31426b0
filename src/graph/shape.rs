//! Edge shape classification

use log::debug;

use crate::models::{Description, Direction, FromTo, Shape, Visualization};

/// Collapse an anchored pair into a renderable edge
///
/// * no target (key registration, state proof): `point`
/// * an unresolved end: `point` on the sender's column, unanchored if the
///   sender is unresolved too
/// * same column: `selfLoop`
/// * otherwise `vector`, normalized so `from` is the lower column. The
///   direction keeps the original orientation and must not be re-derived
///   from the normalized indexes.
pub fn classify(from: FromTo, to: Option<FromTo>, description: Description) -> Visualization {
    let to = match to {
        Some(to) if !from.is_fallback() && !to.is_fallback() => to,
        Some(_) => {
            debug!("Unresolved edge end for {:?}, drawing a point", description);
            return point(from, description);
        },
        None => return point(from, description),
    };

    let (from_id, to_id) = match (from.vertical_id(), to.vertical_id()) {
        (Some(from_id), Some(to_id)) => (from_id, to_id),
        _ => return point(from, description),
    };

    if from_id == to_id {
        return Visualization {
            from_vertical_index: Some(from_id),
            from_account_index: from.account_number(),
            to_vertical_index: None,
            to_account_index: None,
            direction: None,
            shape: Shape::SelfLoop,
            description,
        };
    }

    let (direction, low, high) = if from_id < to_id {
        (Direction::LeftToRight, from, to)
    } else {
        (Direction::RightToLeft, to, from)
    };

    Visualization {
        from_vertical_index: low.vertical_id(),
        from_account_index: low.account_number(),
        to_vertical_index: high.vertical_id(),
        to_account_index: high.account_number(),
        direction: Some(direction),
        shape: Shape::Vector,
        description,
    }
}

fn point(from: FromTo, description: Description) -> Visualization {
    Visualization {
        from_vertical_index: from.vertical_id(),
        from_account_index: from.account_number(),
        to_vertical_index: None,
        to_account_index: None,
        direction: None,
        shape: Shape::Point,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_is_normalized() {
        let edge = classify(FromTo::account(3, 1), Some(FromTo::vertical(1)), Description::StateProof);
        assert_eq!(edge.shape, Shape::Vector);
        assert_eq!(edge.from_vertical_index, Some(1));
        assert_eq!(edge.from_account_index, None);
        assert_eq!(edge.to_vertical_index, Some(3));
        assert_eq!(edge.to_account_index, Some(1));
        assert_eq!(edge.direction, Some(Direction::RightToLeft));
    }

    #[test]
    fn test_same_column_is_self_loop() {
        let edge = classify(FromTo::account(2, 0), Some(FromTo::account(2, 1)), Description::StateProof);
        assert_eq!(edge.shape, Shape::SelfLoop);
        assert_eq!(edge.from_vertical_index, Some(2));
        assert_eq!(edge.from_account_index, Some(0));
        assert_eq!(edge.to_vertical_index, None);
        assert_eq!(edge.direction, None);
    }

    #[test]
    fn test_missing_target_is_point() {
        let edge = classify(FromTo::vertical(0), None, Description::StateProof);
        assert_eq!(edge.shape, Shape::Point);
        assert_eq!(edge.from_vertical_index, Some(0));
    }

    #[test]
    fn test_fallback_degrades_to_point() {
        let edge = classify(FromTo::vertical(4), Some(FromTo::Fallback), Description::Payment { amount: 1 });
        assert_eq!(edge.shape, Shape::Point);
        assert_eq!(edge.from_vertical_index, Some(4));

        let edge = classify(FromTo::Fallback, Some(FromTo::vertical(4)), Description::Payment { amount: 1 });
        assert_eq!(edge.shape, Shape::Point);
        assert_eq!(edge.from_vertical_index, None);
    }
}
