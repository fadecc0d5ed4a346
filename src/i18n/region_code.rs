pub struct RegionCode {}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    pub fn us() -> &'static str {
        return "US";
    }

    pub fn ca() -> &'static str {
        return "CA";
    }

    pub fn bs() -> &'static str {
        return "BS";
    }

    pub fn gb() -> &'static str {
        return "GB";
    }

    pub fn fi() -> &'static str {
        return "FI";
    }

    pub fn ax() -> &'static str {
        return "AX";
    }

    pub fn ru() -> &'static str {
        return "RU";
    }

    pub fn kz() -> &'static str {
        return "KZ";
    }

    pub fn fj() -> &'static str {
        return "FJ";
    }
}
