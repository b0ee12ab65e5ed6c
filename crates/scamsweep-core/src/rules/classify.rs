use crate::domain::ScamCategory;

/// Ordered keyword cascade. The first rule with any keyword contained in the
/// lower-cased label wins, so the order here is part of the contract.
///
/// `lừa` and `đảo` in the `Scam` rule match far more than fraud labels; they
/// are kept broad on purpose and only reached after every dedicated rule.
pub const CLASSIFICATION_RULES: &[(ScamCategory, &[&str])] = &[
    (
        ScamCategory::FakePolice,
        &["công an", "police", "dịch vụ công", "công chức"],
    ),
    (
        ScamCategory::FakeElectricityCompany,
        &["điện", "nước", "evn", "tiền điện"],
    ),
    (
        ScamCategory::FakeBanking,
        &[
            "ngân hàng",
            "bank",
            "tín dụng",
            "chứng khoán",
            "vp bank",
            "vietcombank",
            "acb",
            "techcombank",
            "bidv",
            "tài chính",
        ],
    ),
    (
        ScamCategory::PhoneSpam,
        &["nháy máy", "nhá máy", "spam call", "missed call"],
    ),
    (
        ScamCategory::OnlineDelivery,
        &[
            "giao hàng",
            "ship",
            "delivery",
            "vận chuyển",
            "grab",
            "shopee",
            "lazada",
        ],
    ),
    (
        ScamCategory::FakePrize,
        &[
            "quảng cáo",
            "trúng thưởng",
            "khuyến mãi",
            "voucher",
            "giải thưởng",
            "ads",
        ],
    ),
    (
        ScamCategory::CustomerService,
        &[
            "cskh",
            "chăm sóc khách hàng",
            "tổng đài",
            "hỗ trợ",
            "customer service",
            "dịch vụ",
        ],
    ),
    (
        ScamCategory::RealEstate,
        &[
            "bất động sản",
            "nhà đất",
            "real estate",
            "môi giới",
            "căn hộ",
            "chung cư",
        ],
    ),
    (
        ScamCategory::Insurance,
        &["bảo hiểm", "insurance", "daichi", "prudential", "manulife"],
    ),
    (
        ScamCategory::Scam,
        &[
            "lừa đảo", "lừa", "đảo", "scam", "fraud", "đòi nợ", "lua dao",
        ],
    ),
    (ScamCategory::PhoneSpam, &["spam", "bot", "rác"]),
];

pub fn classify_scam_type(raw_label: &str) -> ScamCategory {
    let normalized = raw_label.to_lowercase();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return ScamCategory::Other;
    }

    CLASSIFICATION_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(ScamCategory::Other)
}
