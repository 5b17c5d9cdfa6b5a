//! Relation entries between the SI tags

use super::tags::*;
use crate::NoTag;

crate::additive!(
    Length,
    Mass,
    Time,
    Area,
    Speed,
    Acceleration,
    Force,
    Energy,
    Hertz,
    Celsius,
    Volt,
    Radian,
    Steradian,
);

crate::product!(
    Length * Length => Area,
    Speed * Time => Length,
    Time * Speed => Length,
    Mass * Acceleration => Force,
    Acceleration * Mass => Force,
    Force * Length => Energy,
    Length * Force => Energy,
    Hertz * Time => NoTag,
    Time * Hertz => NoTag,
    Length * Hertz => Speed,
    Hertz * Length => Speed,
);

crate::quotient!(
    Length / Time => Speed,
    Speed / Time => Acceleration,
    Length / Speed => Time,
    Area / Length => Length,
    Force / Mass => Acceleration,
    Force / Acceleration => Mass,
    Energy / Length => Force,
    Energy / Force => Length,
);

crate::reciprocal!(Time => Hertz, Hertz => Time);
