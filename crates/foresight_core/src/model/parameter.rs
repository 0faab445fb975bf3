use serde::{Deserialize, Serialize};

/// A model parameter that a sweep axis can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Gross interest factor R
    InterestFactor,
    /// Discount factor beta
    DiscountFactor,
    /// Relative risk aversion rho
    RiskAversion,
    /// Gross income growth factor G
    IncomeGrowth,
    /// Permanent income p
    PermanentIncome,
    /// Prior-period assets a
    PriorAssets,
    /// Net interest rate r (drives R = 1 + r)
    NetInterestRate,
    /// Net income growth g (drives G = 1 + g)
    NetIncomeGrowth,
    /// Time preference rate v (drives beta = 1 / (1 + v))
    TimePreference,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 9] = [
        Self::InterestFactor,
        Self::DiscountFactor,
        Self::RiskAversion,
        Self::IncomeGrowth,
        Self::PermanentIncome,
        Self::PriorAssets,
        Self::NetInterestRate,
        Self::NetIncomeGrowth,
        Self::TimePreference,
    ];

    /// Short symbol used for axis titles
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::InterestFactor => "R",
            Self::DiscountFactor => "beta",
            Self::RiskAversion => "rho",
            Self::IncomeGrowth => "G",
            Self::PermanentIncome => "p",
            Self::PriorAssets => "assets",
            Self::NetInterestRate => "r",
            Self::NetIncomeGrowth => "g",
            Self::TimePreference => "v",
        }
    }

    /// Get a display label for the parameter
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InterestFactor => "Interest factor",
            Self::DiscountFactor => "Discount factor",
            Self::RiskAversion => "Risk aversion",
            Self::IncomeGrowth => "Income growth factor",
            Self::PermanentIncome => "Permanent income",
            Self::PriorAssets => "Prior assets",
            Self::NetInterestRate => "Net interest rate",
            Self::NetIncomeGrowth => "Net income growth",
            Self::TimePreference => "Time preference rate",
        }
    }

    /// Whether this parameter and `other` write to the same underlying field
    #[must_use]
    pub fn aliases(&self, other: SweepParameter) -> bool {
        self.field() == other.field()
    }

    fn field(&self) -> u8 {
        match self {
            Self::InterestFactor | Self::NetInterestRate => 0,
            Self::DiscountFactor | Self::TimePreference => 1,
            Self::RiskAversion => 2,
            Self::IncomeGrowth | Self::NetIncomeGrowth => 3,
            Self::PermanentIncome => 4,
            Self::PriorAssets => 5,
        }
    }
}
