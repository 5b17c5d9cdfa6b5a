//! SI tags
//!
//! Base dimensions first, then the derived dimensions the catalog relates.

crate::tag! {
    /// Length, meter (m)
    pub Length => "m";
    /// Mass, kilogram (kg)
    pub Mass => "kg";
    /// Time, second (s)
    pub Time => "s";
}

crate::tag! {
    /// Area, square meter (m²)
    pub Area => "m²";
    /// Speed, meter per second (m/s)
    pub Speed => "m/s";
    /// Acceleration, meter per second squared (m/s²)
    pub Acceleration => "m/s²";
    /// Force, newton (N = kg·m/s²)
    pub Force => "N";
    /// Energy, joule (J = N·m)
    pub Energy => "J";
    /// Frequency, hertz (Hz = 1/s)
    pub Hertz => "Hz";
    /// Temperature difference in degrees Celsius
    pub Celsius => "°C";
    /// Electric potential, volt (V)
    pub Volt => "V";
    /// Plane angle, radian
    pub Radian => "rad";
    /// Solid angle, steradian
    pub Steradian => "sr";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    #[test]
    fn test_symbols() {
        assert_eq!(Length::SYMBOL, "m");
        assert_eq!(Force::SYMBOL, "N");
        assert_eq!(Hertz::SYMBOL, "Hz");
        assert_eq!(Acceleration::NAME, "Acceleration");
    }
}
