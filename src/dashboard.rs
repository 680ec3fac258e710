//! Fixed dashboard layout data
//!
//! Metric cards, chart series and the selectable sections. Prose for the
//! detail modal lives in the content store; items here only name a topic key.

use crate::config::colors;
use ratatui::style::Color;

pub const TITLE: &str = "GRS Certification Dashboard";
pub const TITLE_SUFFIX: &str = "(For Garment Factories)";
pub const SUBTITLE: &str = "A quick overview of Global Recycled Standard (GRS) certification requirements, benefits, and key insights tailored for garment manufacturing facilities.";

/// Progress indicator value against a maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub value: f64,
    pub max: f64,
}

impl Progress {
    pub const fn new(value: f64, max: f64) -> Self {
        Self { value, max }
    }

    /// Filled share as a percentage (0 when `max` is not positive)
    pub fn percent(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.value / self.max * 100.0
    }

    /// Filled share for a gauge, clamped to 0..=1
    pub fn ratio(&self) -> f64 {
        (self.percent() / 100.0).clamp(0.0, 1.0)
    }
}

/// Headline metric card
#[derive(Debug, Clone, Copy)]
pub struct MetricCard {
    pub icon: &'static str,
    pub headline: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub accent: Color,
    pub progress: Option<Progress>,
}

pub const METRIC_CARDS: [MetricCard; 6] = [
    MetricCard {
        icon: "♻️",
        headline: "20%",
        title: "Minimum Recycled Content in Garments",
        caption: "Required for garments manufactured by your factory to be GRS eligible.",
        accent: colors::GREEN,
        progress: None,
    },
    MetricCard {
        icon: "🧵",
        headline: "20%",
        title: "Max Non-Recycled Additives",
        caption: "Allowed in garments (e.g., dyes, trims, finishing agents).",
        accent: colors::RED,
        progress: None,
    },
    MetricCard {
        icon: "🗓️",
        headline: "1 Year",
        title: "Factory Certificate Validity",
        caption: "Requires annual audits for your garment factory's renewal.",
        accent: colors::BLUE,
        progress: None,
    },
    MetricCard {
        icon: "✂️",
        headline: "15-20%",
        title: "Recycled Material Cost Savings",
        caption: "Less than virgin textiles, beneficial for your factory's material costs.",
        accent: colors::PURPLE,
        progress: None,
    },
    MetricCard {
        icon: "🇪🇺",
        headline: "30%",
        title: "EU Recycled Textile Mandate",
        caption: "In apparel by 2030, driving GRS adoption for your factory's products.",
        accent: colors::ORANGE,
        progress: Some(Progress::new(30.0, 100.0)),
    },
    MetricCard {
        icon: "👕",
        headline: "100%",
        title: "Brand Recycled Content Target",
        caption: "Many brands target 100% GRS-certified recycled content by 2025, impacting your factory.",
        accent: colors::INDIGO,
        progress: Some(Progress::new(100.0, 100.0)),
    },
];

/// One labelled chart value (0..=100)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u64,
}

/// Certification tiers bar chart
pub const TIERS_TITLE: &str = "GRS Certification Tiers for Garment Products";
pub const TIERS_SERIES_NAME: &str = "Recycled Content";
pub const TIERS_CAPTION: &str =
    "Garments manufactured by your factory with 50%+ recycled content can use the \"GRS Recycled\" label.";
pub const TIERS: [ChartPoint; 4] = [
    ChartPoint { label: "20% (Basic)", value: 20 },
    ChartPoint { label: "50%", value: 50 },
    ChartPoint { label: "70%", value: 70 },
    ChartPoint { label: "100%", value: 100 },
];
pub const TIERS_MAX: u64 = 100;

/// Consumer trust proportion chart
pub const TRUST_TITLE: &str = "Consumer Perception & Market Demand for Garments";
pub const TRUST_CAPTION: &str = "72% of buyers view GRS certification as proof of genuine sustainability, impacting demand for your factory's apparel products.";
pub const CONSUMER_TRUST: [ChartPoint; 2] = [
    ChartPoint { label: "View GRS as Proof", value: 72 },
    ChartPoint { label: "Other", value: 28 },
];
pub const SLICE_COLORS: [Color; 2] = [colors::SLICE_CERTIFIED, colors::SLICE_OTHER];

/// Colour for the slice at `index`, cycling through the palette
pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Whole-percent share of each point in the series total
pub fn shares(points: &[ChartPoint]) -> Vec<u64> {
    let total: u64 = points.iter().map(|p| p.value).sum();
    if total == 0 {
        return vec![0; points.len()];
    }
    points
        .iter()
        .map(|p| (p.value as f64 / total as f64 * 100.0).round() as u64)
        .collect()
}

/// Selectable list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionItem {
    /// Bold lead-in (group name for benefits, question for FAQs)
    pub label: &'static str,
    pub summary: &'static str,
    /// Content store key shown when selected
    pub topic: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub items: &'static [SectionItem],
}

const fn item(label: &'static str, summary: &'static str, topic: &'static str) -> SectionItem {
    SectionItem {
        label,
        summary,
        topic,
    }
}

pub const SECTIONS: [Section; 4] = [
    Section {
        heading: "Supply Chain Traceability for Your Garment Factory",
        items: &[
            item("Transaction Certificates (TCs)", "Verify material flow at each production stage.", "tc"),
            item("Scope Certificates (SCs)", "Authorize your factory to produce GRS-certified apparel.", "sc"),
            item("Record-Keeping", "Purchase invoices, shipping records, and production logs must align with TC data.", "record_keeping"),
            item("Separate Storage", "Recycled materials must be stored separately to avoid contamination.", "separate_storage"),
            item("Issue", "Complex supply chains often lack transparent records.", "traceability_issue"),
            item("Solution", "Implement blockchain technology for end-to-end tracking.", "traceability_solution"),
        ],
    },
    Section {
        heading: "Environmental & Social Compliance for Your Garment Factory",
        items: &[
            item("Wastewater Treatment", "COD ≤ 80mg/L (stricter than many national standards).", "wastewater_treatment"),
            item("Chemical Restrictions", "Prohibits hazardous substances (e.g., AZO dyes, PFAS).", "chemical_restrictions"),
            item("Energy Efficiency", "Monitor energy and water usage.", "energy_efficiency"),
            item("Labor Rights", "Prohibits forced/child labor, discrimination; ensures fair wages, safe conditions.", "labor_rights"),
            item("Audits", "Third-party inspections verify compliance.", "audits"),
        ],
    },
    Section {
        heading: "Benefits of GRS Certification for Your Garment Factory",
        items: &[
            item("Market Access", "Required by major brands (H&M, Zara, IKEA).", "market_access_brands"),
            item("Market Access", "Avoids trade barriers in EU and U.S. markets.", "market_access_trade"),
            item("Brand Reputation", "Builds consumer trust (72% view as proof of genuine sustainability).", "brand_reputation_trust"),
            item("Brand Reputation", "Enables premium pricing (15-30% price premium).", "brand_reputation_premium"),
            item("Cost Reduction", "Reduces reliance on virgin materials.", "cost_reduction_resource"),
            item("Cost Reduction", "Minimizes waste, cutting landfill fees and energy consumption.", "cost_reduction_waste"),
            item("Cost Reduction", "Potential government subsidies (e.g., China offers 30-50% rebates).", "cost_reduction_subsidies"),
        ],
    },
    Section {
        heading: "FAQs About GRS Certification for Garment Factories",
        items: &[
            item("Can blended materials be used?", "Yes, but non-recycled components must not exceed 20% of the total weight.", "faq_blended_materials"),
            item("How long does GRS certification last?", "Certificates are valid for 1 year and require annual audits for renewal.", "faq_certification_duration"),
            item("Is GRS certification mandatory?", "No, but it’s highly recommended for businesses targeting international markets or sustainability-focused consumers.", "faq_is_mandatory"),
            item("What happens if a supplier fails to provide TCs?", "The entire supply chain loses GRS eligibility until the issue is resolved.", "faq_supplier_fails_tcs"),
        ],
    },
];

/// Every selectable item, in focus order
pub fn items() -> impl Iterator<Item = &'static SectionItem> {
    SECTIONS.iter().flat_map(|s| s.items.iter())
}

pub fn item_count() -> usize {
    SECTIONS.iter().map(|s| s.items.len()).sum()
}

/// Item at a flattened focus index
pub fn item_at(index: usize) -> Option<&'static SectionItem> {
    items().nth(index)
}

/// Flattened index of the first item in section `section`
pub fn section_offset(section: usize) -> usize {
    SECTIONS.iter().take(section).map(|s| s.items.len()).sum()
}

/// Topic keys referenced by the sections
pub fn topic_keys() -> impl Iterator<Item = &'static str> {
    items().map(|i| i.topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert!((Progress::new(30.0, 100.0).percent() - 30.0).abs() < f64::EPSILON);
        assert!((Progress::new(100.0, 100.0).percent() - 100.0).abs() < f64::EPSILON);
        assert!((Progress::new(30.0, 100.0).ratio() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_degenerate() {
        assert_eq!(Progress::new(5.0, 0.0).percent(), 0.0);
        assert_eq!(Progress::new(150.0, 100.0).ratio(), 1.0);
        assert_eq!(Progress::new(-1.0, 100.0).ratio(), 0.0);
    }

    #[test]
    fn test_card_progress_values() {
        let with_progress: Vec<_> = METRIC_CARDS
            .iter()
            .filter_map(|c| c.progress.map(|p| p.percent().round() as u64))
            .collect();
        assert_eq!(with_progress, vec![30, 100]);
    }

    #[test]
    fn test_tier_series() {
        let values: Vec<u64> = TIERS.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![20, 50, 70, 100]);
        assert_eq!(TIERS[0].label, "20% (Basic)");
        assert!(TIERS.iter().all(|p| p.value <= TIERS_MAX));
    }

    #[test]
    fn test_trust_series_sums_to_100() {
        let values: Vec<u64> = CONSUMER_TRUST.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![72, 28]);
        assert_eq!(values.iter().sum::<u64>(), 100);
        assert_eq!(shares(&CONSUMER_TRUST), vec![72, 28]);
    }

    #[test]
    fn test_shares_of_uneven_total() {
        let points = [
            ChartPoint { label: "a", value: 1 },
            ChartPoint { label: "b", value: 2 },
        ];
        assert_eq!(shares(&points), vec![33, 67]);
        let empty = [ChartPoint { label: "z", value: 0 }];
        assert_eq!(shares(&empty), vec![0]);
    }

    #[test]
    fn test_slice_colors_cycle() {
        assert_eq!(slice_color(0), colors::SLICE_CERTIFIED);
        assert_eq!(slice_color(1), colors::SLICE_OTHER);
        assert_eq!(slice_color(2), colors::SLICE_CERTIFIED);
    }

    #[test]
    fn test_item_indexing() {
        assert_eq!(item_count(), 22);
        assert_eq!(section_offset(0), 0);
        assert_eq!(section_offset(1), 6);
        assert_eq!(section_offset(2), 11);
        assert_eq!(section_offset(3), 18);
        assert_eq!(item_at(0).unwrap().topic, "tc");
        assert_eq!(item_at(21).unwrap().topic, "faq_supplier_fails_tcs");
        assert!(item_at(22).is_none());
    }

    #[test]
    fn test_topic_keys_unique() {
        let mut keys: Vec<_> = topic_keys().collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
