//! Launch statistics types and defect summary formatting.

use serde::{Deserialize, Serialize};

use crate::format::bold;

/// Response from GET /api/v1/{project}/launch/{launch_id} (fields we read).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchDetails {
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub defects: Option<Defects>,
}

/// Defect breakdown by category. Absent categories had no defects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defects {
    #[serde(default)]
    pub product_bug: Option<DefectCategory>,

    #[serde(default)]
    pub automation_bug: Option<DefectCategory>,

    #[serde(default)]
    pub system_issue: Option<DefectCategory>,

    #[serde(default)]
    pub no_defect: Option<DefectCategory>,

    #[serde(default)]
    pub to_investigate: Option<DefectCategory>,
}

/// Per-category counts; only `total` is rendered, sub-type counts are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefectCategory {
    #[serde(default)]
    pub total: u64,
}

impl LaunchDetails {
    pub fn defects(&self) -> Option<&Defects> {
        self.statistics.as_ref().and_then(|s| s.defects.as_ref())
    }
}

/// One entry per category in fixed order; present categories are bold.
pub fn defects_summary(defects: &Defects) -> Vec<String> {
    [
        (&defects.product_bug, "Product Bug"),
        (&defects.automation_bug, "Automation Bug"),
        (&defects.system_issue, "System Issue"),
        (&defects.no_defect, "No Defect"),
        (&defects.to_investigate, "To Investigate"),
    ]
    .into_iter()
    .map(|(category, label)| match category {
        Some(c) => bold(&format!("{} {}", c.total, label)),
        None => format!("0 {}", label),
    })
    .collect()
}
