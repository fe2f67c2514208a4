use thiserror::Error;

/// Inputs for which the curve/segment intersection is not a finite set of points.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DegenerateGeometry {
    #[error("Input coordinates must be finite.")]
    NonFiniteInput,
    #[error("The line segment's endpoints are equal.")]
    ZeroLengthSegment,
    #[error("The curve lies on the line supporting the segment.")]
    CurveOnLine,
}

#[test]
fn error_messages() {
    use std::string::ToString;

    assert_eq!(
        DegenerateGeometry::ZeroLengthSegment.to_string(),
        "The line segment's endpoints are equal."
    );
    assert_eq!(
        DegenerateGeometry::CurveOnLine.to_string(),
        "The curve lies on the line supporting the segment."
    );
}
