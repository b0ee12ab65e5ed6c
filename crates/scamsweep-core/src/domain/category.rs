use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamCategory {
    FakePolice,
    FakeElectricityCompany,
    #[serde(rename = "fake_bank_credit_securities")]
    FakeBanking,
    PhoneSpam,
    OnlineDelivery,
    #[serde(rename = "fake_ads_prize")]
    FakePrize,
    CustomerService,
    RealEstate,
    Insurance,
    Scam,
    Other,
}

impl ScamCategory {
    pub const ALL: [ScamCategory; 11] = [
        ScamCategory::FakePolice,
        ScamCategory::FakeElectricityCompany,
        ScamCategory::FakeBanking,
        ScamCategory::PhoneSpam,
        ScamCategory::OnlineDelivery,
        ScamCategory::FakePrize,
        ScamCategory::CustomerService,
        ScamCategory::RealEstate,
        ScamCategory::Insurance,
        ScamCategory::Scam,
        ScamCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScamCategory::FakePolice => "fake_police",
            ScamCategory::FakeElectricityCompany => "fake_electricity_company",
            ScamCategory::FakeBanking => "fake_bank_credit_securities",
            ScamCategory::PhoneSpam => "phone_spam",
            ScamCategory::OnlineDelivery => "online_delivery",
            ScamCategory::FakePrize => "fake_ads_prize",
            ScamCategory::CustomerService => "customer_service",
            ScamCategory::RealEstate => "real_estate",
            ScamCategory::Insurance => "insurance",
            ScamCategory::Scam => "scam",
            ScamCategory::Other => "other",
        }
    }

    /// Vietnamese display label used in reports and description-style output.
    pub fn description(self) -> &'static str {
        match self {
            ScamCategory::FakePolice => "Giả mạo công an / dịch vụ công",
            ScamCategory::FakeElectricityCompany => "Lừa đảo đóng tiền điện nước",
            ScamCategory::FakeBanking => "Giả mạo, lừa đảo ngân hàng / tín dụng / chứng khoán",
            ScamCategory::PhoneSpam => "Nháy máy spam",
            ScamCategory::OnlineDelivery => "Giao hàng trực tuyến",
            ScamCategory::FakePrize => "Quảng cáo / trúng thưởng",
            ScamCategory::CustomerService => "Dịch vụ / CSKH / Tổng đài",
            ScamCategory::RealEstate => "Bất động sản",
            ScamCategory::Insurance => "Bảo hiểm",
            ScamCategory::Scam => "Lừa đảo",
            ScamCategory::Other => "Khác",
        }
    }
}

impl fmt::Display for ScamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScamCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ScamCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| CoreError::UnknownCategory(trimmed.to_string()))
    }
}

/// Describes a category given by its tag; unknown tags read as `other`.
pub fn describe_tag(tag: &str) -> &'static str {
    tag.parse::<ScamCategory>()
        .unwrap_or(ScamCategory::Other)
        .description()
}
