//! 展示规则
//!
//! 后端给出的分数、标题等原始值如何映射为界面文本与样式。
//! 不依赖 DOM，前端组件只做拼装。

use crate::{MatchResult, SaleListing, Scalar};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

// =========================================================
// 匹配分档
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 40.0 {
            ScoreTier::Excellent
        } else if score >= 30.0 {
            ScoreTier::Good
        } else {
            ScoreTier::Fair
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent match! This property closely matches your criteria.",
            ScoreTier::Good => "Good match! Similar features and location.",
            ScoreTier::Fair => "Fair match. Worth exploring for alternatives.",
        }
    }

    /// daisyUI 徽章样式
    pub fn badge_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "badge badge-success badge-lg",
            ScoreTier::Good => "badge badge-warning badge-lg",
            ScoreTier::Fair => "badge badge-error badge-lg",
        }
    }
}

// =========================================================
// 平台配色
// =========================================================

pub fn platform_badge_class(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "airbnb" => "badge bg-red-100 text-red-700",
        "vrbo" => "badge bg-blue-100 text-blue-700",
        _ => "badge bg-indigo-100 text-indigo-700",
    }
}

// =========================================================
// 在售房源文本
// =========================================================

/// 在售房源标题
///
/// 抓取失败时后端可能给出 "Enable JavaScript" 或 "Unknown Property" 之类的标题，
/// 这时退回显示搜索 URL。
pub fn sale_headline<'a>(listing: Option<&'a SaleListing>, search_url: &'a str) -> &'a str {
    match listing.and_then(|l| l.title.as_deref()) {
        Some(title) if is_scrape_noise(title) => search_url,
        Some(title) if !title.trim().is_empty() => title,
        _ => search_url,
    }
}

fn is_scrape_noise(title: &str) -> bool {
    let lower = title.to_lowercase();
    lower.contains("javascript") || lower.contains("unknown property")
}

pub fn description_preview(desc: Option<&str>) -> String {
    match desc.filter(|d| !d.is_empty()) {
        Some(d) => {
            let head: String = d.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
        None => "No description available.".to_string(),
    }
}

/// 价格千分位 (`2450000` -> `2,450,000`)
pub fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 { format!("-{}", out) } else { out }
}

/// 售价标签：数字按千分位加 `$`，文本原样显示，缺失为 `N/A`
pub fn price_label(price: Option<&Scalar>) -> String {
    match price {
        Some(Scalar::Int(n)) => format!("${}", format_price(*n as f64)),
        Some(Scalar::Float(n)) => format!("${}", format_price(*n)),
        Some(Scalar::Text(text)) if !text.trim().is_empty() => text.clone(),
        _ => "N/A".to_string(),
    }
}

pub fn results_headline(count: usize) -> String {
    format!("Found {} Similar Rental Properties", count)
}

// =========================================================
// 对比视图
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub percent: u8,
    pub color: &'static str,
}

/// 将一个匹配结果拆成四条分数条
pub fn score_breakdown(result: &MatchResult) -> Vec<ScoreBar> {
    vec![
        bar("Text Similarity", result.text_similarity, "bg-info"),
        bar("Structured Similarity", result.structured_similarity, "bg-secondary"),
        bar("Image Similarity", result.image_similarity, "bg-accent"),
        bar("Final Score", result.final_score, "bg-primary"),
    ]
}

fn bar(label: &'static str, value: Option<f64>, color: &'static str) -> ScoreBar {
    ScoreBar {
        label,
        percent: to_percent(value),
        color,
    }
}

pub fn to_percent(value: Option<f64>) -> u8 {
    match value {
        Some(v) if v.is_finite() => v.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// 设施差异
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmenityDiff {
    pub shared: Vec<String>,
    pub only_listing: Vec<String>,
    pub only_rental: Vec<String>,
}

impl AmenityDiff {
    /// 任何一侧没有设施数据时返回 `None`
    pub fn between(listing: &[String], rental: &[String]) -> Option<Self> {
        if listing.is_empty() || rental.is_empty() {
            return None;
        }
        let norm = |s: &String| s.trim().to_lowercase();
        let rental_keys: Vec<String> = rental.iter().map(norm).collect();
        let listing_keys: Vec<String> = listing.iter().map(norm).collect();

        let mut diff = AmenityDiff::default();
        for (raw, key) in listing.iter().zip(&listing_keys) {
            if rental_keys.contains(key) {
                diff.shared.push(raw.clone());
            } else {
                diff.only_listing.push(raw.clone());
            }
        }
        for (raw, key) in rental.iter().zip(&rental_keys) {
            if !listing_keys.contains(key) {
                diff.only_rental.push(raw.clone());
            }
        }
        Some(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(39.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(30.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(29.99), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Fair);
    }

    #[test]
    fn test_sale_headline_noise_falls_back_to_url() {
        let url = "https://example.com/listing/1";
        let listing = SaleListing {
            title: Some("Please enable JavaScript".into()),
            ..Default::default()
        };
        assert_eq!(sale_headline(Some(&listing), url), url);

        let listing = SaleListing {
            title: Some("Unknown Property".into()),
            ..Default::default()
        };
        assert_eq!(sale_headline(Some(&listing), url), url);

        let listing = SaleListing {
            title: Some("Villa in Tuscany".into()),
            ..Default::default()
        };
        assert_eq!(sale_headline(Some(&listing), url), "Villa in Tuscany");
        assert_eq!(sale_headline(None, url), url);
    }

    #[test]
    fn test_description_preview_truncates_on_chars() {
        let long = "é".repeat(250);
        let out = description_preview(Some(&long));
        assert_eq!(out.chars().count(), 203);
        assert!(out.ends_with("..."));
        assert_eq!(description_preview(None), "No description available.");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2_450_000.0), "2,450,000");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1000.4), "1,000");
        assert_eq!(format_price(-12345.0), "-12,345");
    }

    #[test]
    fn test_price_label_keeps_scraped_text() {
        assert_eq!(price_label(Some(&Scalar::Int(2_450_000))), "$2,450,000");
        assert_eq!(price_label(Some(&Scalar::Float(1999.6))), "$2,000");
        assert_eq!(
            price_label(Some(&Scalar::Text("€2,450,000".into()))),
            "€2,450,000"
        );
        assert_eq!(price_label(Some(&Scalar::Text(" ".into()))), "N/A");
        assert_eq!(price_label(None), "N/A");
    }

    #[test]
    fn test_platform_badge_default_palette() {
        assert_eq!(platform_badge_class("Airbnb"), "badge bg-red-100 text-red-700");
        assert_eq!(platform_badge_class("N/A"), platform_badge_class("booking.com"));
    }

    #[test]
    fn test_breakdown_clamps_percent() {
        let result = MatchResult {
            text_similarity: Some(120.0),
            structured_similarity: Some(-3.0),
            image_similarity: None,
            final_score: Some(42.6),
            ..Default::default()
        };
        let bars: Vec<u8> = score_breakdown(&result).iter().map(|b| b.percent).collect();
        assert_eq!(bars, vec![100, 0, 0, 43]);
        assert_eq!(to_percent(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_amenity_diff() {
        let listing = vec!["Pool".to_string(), "wifi".to_string(), "Garden".to_string()];
        let rental = vec!["WiFi".to_string(), "pool ".to_string(), "Parking".to_string()];
        let diff = AmenityDiff::between(&listing, &rental).unwrap();
        assert_eq!(diff.shared, vec!["Pool", "wifi"]);
        assert_eq!(diff.only_listing, vec!["Garden"]);
        assert_eq!(diff.only_rental, vec!["Parking"]);

        assert!(AmenityDiff::between(&[], &rental).is_none());
    }

    #[test]
    fn test_results_headline() {
        assert_eq!(results_headline(0), "Found 0 Similar Rental Properties");
    }
}
