// 硬币面额分类
//
// 区间闭合且互不重叠；区间之间的空隙（3..=4、17..）归为 Unknown
use crate::error::{Error, Result};

/// 硬币面额
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoinType {
    /// 无法识别
    Unknown,
    /// 1 比索
    OnePeso,
    /// 2 比索
    TwoPeso,
    /// 5 比索
    FivePeso,
}

impl CoinType {
    /// 面值（Unknown 为 0）
    pub const fn value(self) -> u32 {
        match self {
            CoinType::Unknown => 0,
            CoinType::OnePeso => 1,
            CoinType::TwoPeso => 2,
            CoinType::FivePeso => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CoinType::Unknown => "Unknown",
            CoinType::OnePeso => "1 Peso",
            CoinType::TwoPeso => "2 Pesos",
            CoinType::FivePeso => "5 Pesos",
        }
    }

    /// 按默认比索区间表分类
    pub fn classify(pulses: u32) -> Self {
        CoinTable::PESO.classify(pulses)
    }
}

/// 脉冲数区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseRange {
    pub min: u32,
    pub max: u32,
    pub coin: CoinType,
}

impl PulseRange {
    pub const fn new(min: u32, max: u32, coin: CoinType) -> Self {
        Self { min, max, coin }
    }

    pub const fn contains(&self, pulses: u32) -> bool {
        pulses >= self.min && pulses <= self.max
    }

    const fn overlaps(&self, other: &PulseRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// 默认区间（中速档实测，允许漂移）
pub const PESO_RANGES: [PulseRange; 3] = [
    PulseRange::new(1, 2, CoinType::OnePeso),
    PulseRange::new(5, 10, CoinType::TwoPeso),
    PulseRange::new(11, 16, CoinType::FivePeso),
];

/// 分类区间表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinTable<'a> {
    ranges: &'a [PulseRange],
}

impl CoinTable<'static> {
    /// 默认比索区间表
    pub const PESO: Self = Self {
        ranges: &PESO_RANGES,
    };
}

impl<'a> CoinTable<'a> {
    /// 校验并创建区间表
    ///
    /// 每个区间须满足 `1 <= min <= max`、面额不为 Unknown，且两两不重叠
    pub fn new(ranges: &'a [PulseRange]) -> Result<Self> {
        for (i, range) in ranges.iter().enumerate() {
            if range.min == 0 || range.min > range.max || range.coin == CoinType::Unknown {
                warn!("Invalid pulse range {}..={}", range.min, range.max);
                return Err(Error::InvalidParameter);
            }

            if ranges[i + 1..].iter().any(|other| range.overlaps(other)) {
                warn!("Overlapping pulse range {}..={}", range.min, range.max);
                return Err(Error::InvalidParameter);
            }
        }

        Ok(Self { ranges })
    }

    /// 分类（全函数，落不进任何区间即 Unknown）
    pub fn classify(&self, pulses: u32) -> CoinType {
        self.ranges
            .iter()
            .find(|range| range.contains(pulses))
            .map(|range| range.coin)
            .unwrap_or(CoinType::Unknown)
    }
}

impl Default for CoinTable<'static> {
    fn default() -> Self {
        Self::PESO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_classification() {
        let cases = [
            (1, CoinType::OnePeso, 1),
            (2, CoinType::OnePeso, 1),
            (3, CoinType::Unknown, 0),
            (5, CoinType::TwoPeso, 2),
            (10, CoinType::TwoPeso, 2),
            (11, CoinType::FivePeso, 5),
            (16, CoinType::FivePeso, 5),
            (17, CoinType::Unknown, 0),
        ];

        for (pulses, coin, value) in cases {
            assert_eq!(CoinType::classify(pulses), coin, "pulses = {pulses}");
            assert_eq!(CoinType::classify(pulses).value(), value);
        }
    }

    #[test]
    fn gaps_fall_through_to_unknown() {
        for pulses in [0, 3, 4, 17, 100, u32::MAX] {
            assert_eq!(CoinType::classify(pulses), CoinType::Unknown);
        }
    }

    #[test]
    fn every_count_matches_at_most_one_range() {
        for pulses in 0..=64 {
            let hits = PESO_RANGES.iter().filter(|r| r.contains(pulses)).count();
            assert!(hits <= 1, "pulses = {pulses} matched {hits} ranges");

            let coin = CoinType::classify(pulses);
            assert_eq!(hits == 0, coin == CoinType::Unknown);
        }
    }

    #[test]
    fn default_table_is_valid() {
        assert_eq!(CoinTable::new(&PESO_RANGES), Ok(CoinTable::PESO));
    }

    #[test]
    fn rejects_overlapping_ranges() {
        let ranges = [
            PulseRange::new(1, 5, CoinType::OnePeso),
            PulseRange::new(5, 10, CoinType::TwoPeso),
        ];
        assert_eq!(CoinTable::new(&ranges), Err(Error::InvalidParameter));
    }

    #[test]
    fn rejects_malformed_ranges() {
        let zero = [PulseRange::new(0, 2, CoinType::OnePeso)];
        let inverted = [PulseRange::new(4, 3, CoinType::OnePeso)];
        let unknown = [PulseRange::new(1, 2, CoinType::Unknown)];

        assert!(CoinTable::new(&zero).is_err());
        assert!(CoinTable::new(&inverted).is_err());
        assert!(CoinTable::new(&unknown).is_err());
    }

    #[test]
    fn custom_table_classifies() {
        let ranges = [PulseRange::new(3, 4, CoinType::TwoPeso)];
        let table = CoinTable::new(&ranges).unwrap();

        assert_eq!(table.classify(3), CoinType::TwoPeso);
        assert_eq!(table.classify(1), CoinType::Unknown);
    }

    #[test]
    fn labels() {
        assert_eq!(CoinType::FivePeso.label(), "5 Pesos");
        assert_eq!(CoinType::Unknown.label(), "Unknown");
    }
}
