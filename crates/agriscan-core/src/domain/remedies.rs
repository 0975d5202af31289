//! Remedy catalogue and the label sets the mock analyzer draws from.

pub const PLANT_NAMES: [&str; 4] = ["Tomato Plant", "Rose Bush", "Pepper Plant", "Corn Plant"];

pub const DIAGNOSES: [&str; 4] = [
    "Nitrogen Deficiency",
    "Iron Deficiency",
    "Phosphorus Deficiency",
    "Potassium Deficiency",
];

const NITROGEN: &[&str] = &[
    "Apply nitrogen-rich fertilizer (10-5-5 NPK ratio)",
    "Add compost or aged manure to soil",
    "Use fish emulsion as a quick nitrogen boost",
    "Ensure proper watering to help nutrient absorption",
    "Consider planting nitrogen-fixing cover crops",
];

const IRON: &[&str] = &[
    "Apply chelated iron supplement to soil",
    "Lower soil pH if too alkaline (target 6.0-6.5)",
    "Add sulfur to acidify soil gradually",
    "Improve drainage to prevent nutrient lockout",
    "Use foliar spray for quick results",
];

const PHOSPHORUS: &[&str] = &[
    "Apply phosphorus-rich fertilizer (5-10-5 NPK)",
    "Add bone meal to soil",
    "Test and adjust soil pH to 6.0-7.0",
    "Ensure soil temperature is adequate (above 55°F)",
    "Reduce soil compaction for better root growth",
];

const POTASSIUM: &[&str] = &[
    "Apply potassium-rich fertilizer (0-0-10 NPK)",
    "Add wood ash to soil (use sparingly)",
    "Use kelp meal as an organic option",
    "Improve soil drainage and aeration",
    "Mulch to maintain consistent soil moisture",
];

const GENERIC: &[&str] = &[
    "Consult with a local agricultural expert",
    "Test your soil for nutrient levels",
    "Ensure proper watering schedule",
    "Monitor plant progress regularly",
];

/// Suggested remedies for a diagnosis. Unknown diagnoses get generic advice.
pub fn remedies_for(diagnosis: &str) -> Vec<String> {
    let list = match diagnosis {
        "Nitrogen Deficiency" => NITROGEN,
        "Iron Deficiency" => IRON,
        "Phosphorus Deficiency" => PHOSPHORUS,
        "Potassium Deficiency" => POTASSIUM,
        _ => GENERIC,
    };
    list.iter().map(|r| r.to_string()).collect()
}
