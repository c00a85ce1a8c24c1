/// Storm-intensity category for a single index measurement.
///
/// Variants run from the most negative disturbance to the most positive.
/// The ranges tile the whole real line: every non-sentinel value lands in
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Superstorm,
    IntenseStorm,
    ModerateStorm,
    WeakStorm,
    BelowAverage,
    Average,
    AboveAverage,
    FarAboveAverage,
    Above38,
}

impl Bucket {
    pub const COUNT: usize = 9;

    /// All buckets in report order.
    pub const ALL: [Bucket; Bucket::COUNT] = [
        Bucket::Superstorm,
        Bucket::IntenseStorm,
        Bucket::ModerateStorm,
        Bucket::WeakStorm,
        Bucket::BelowAverage,
        Bucket::Average,
        Bucket::AboveAverage,
        Bucket::FarAboveAverage,
        Bucket::Above38,
    ];

    /// Classify one measurement. Lower bounds are inclusive, upper bounds
    /// exclusive, except the open ends of the first and last bucket.
    ///
    /// Sentinel filtering happens before this is called; `classify` itself
    /// is total over the reals.
    pub fn classify(value: f64) -> Bucket {
        if value < -250.0 {
            Bucket::Superstorm
        } else if value < -100.0 {
            Bucket::IntenseStorm
        } else if value < -49.0 {
            Bucket::ModerateStorm
        } else if value < -29.0 {
            Bucket::WeakStorm
        } else if value < -9.0 {
            Bucket::BelowAverage
        } else if value < 11.0 {
            Bucket::Average
        } else if value < 31.0 {
            Bucket::AboveAverage
        } else if value < 39.0 {
            Bucket::FarAboveAverage
        } else {
            Bucket::Above38
        }
    }

    /// Label used in the printed report.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Superstorm => "super-storm",
            Bucket::IntenseStorm => "intense storm",
            Bucket::ModerateStorm => "moderate storm",
            Bucket::WeakStorm => "weak storm",
            Bucket::BelowAverage => "below average",
            Bucket::Average => "average",
            Bucket::AboveAverage => "above average",
            Bucket::FarAboveAverage => "far above average",
            Bucket::Above38 => "above 38",
        }
    }
}
