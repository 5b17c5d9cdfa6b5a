//! Serialization round trips (feature `serde`)

use tagged_units::si::{self, Length};
use tagged_units::{AlignedVector, Tagged};

tagged_units::tag!(Offset);

#[test]
fn test_tagged_serializes_as_payload() {
    let json = serde_json::to_string(&si::meters(2.5)).expect("serialize");
    assert_eq!(json, "2.5");

    let back: Length = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, si::meters(2.5));
}

#[test]
fn test_vector_serializes_as_array() {
    let v = AlignedVector::new([1_i32, 2, 3]);
    let json = serde_json::to_string(&v).expect("serialize");
    assert_eq!(json, "[1,2,3]");

    let back: AlignedVector<i32, 3> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, v);
}

#[test]
fn test_vector_length_mismatch_is_rejected() {
    let short = serde_json::from_str::<AlignedVector<i32, 3>>("[1,2]");
    assert!(short.is_err());
}

#[test]
fn test_tagged_vector_payload() {
    let v: Tagged<AlignedVector<f32, 2>, Offset> = Tagged::new(AlignedVector::new([0.5, 1.5]));
    let json = serde_json::to_string(&v).expect("serialize");
    assert_eq!(json, "[0.5,1.5]");
}
