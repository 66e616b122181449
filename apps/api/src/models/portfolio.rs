//! Row types for the portfolio collections.
//!
//! Wire names are camelCase to match the dashboard's existing API contract.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A completed course assignment on the learning timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub module_number: i32,
    pub description: String,
    pub key_learnings: Vec<String>,
    /// Display date, e.g. "Okt 2025".
    pub date: Option<String>,
    /// Lucide icon name used by the timeline view.
    pub icon: Option<String>,
}

/// A skill self-assessment feeding the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// "Technisch", "Soft Skill" or "Strategisch".
    pub category: String,
    pub level_before: i32,
    pub level_after: i32,
}

/// A written reflection on the learning journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: i64,
    pub topic: String,
    pub content: String,
}

/// One answer from the "is er vlaai?" demo set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FunAnswer {
    pub id: i64,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Insert types — used only by the startup seed; ids are store-assigned.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub module_number: i32,
    pub description: String,
    pub key_learnings: Vec<String>,
    pub date: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub level_before: i32,
    pub level_after: i32,
}

#[derive(Debug, Clone)]
pub struct NewReflection {
    pub topic: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewFunAnswer {
    pub text: String,
}

impl NewSkill {
    /// Levels are self-assessments on a 0–10 scale; both stores call this
    /// before inserting.
    pub fn validate(&self) -> Result<(), String> {
        for (field, level) in [
            ("levelBefore", self.level_before),
            ("levelAfter", self.level_after),
        ] {
            if !(0..=10).contains(&level) {
                return Err(format!(
                    "{field} must be between 0 and 10, got {level} for skill '{}'",
                    self.name
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(before: i32, after: i32) -> NewSkill {
        NewSkill {
            name: "Programmeren".to_string(),
            category: "Technisch".to_string(),
            level_before: before,
            level_after: after,
        }
    }

    #[test]
    fn test_skill_levels_within_bounds() {
        assert!(skill(0, 10).validate().is_ok());
        assert!(skill(4, 7).validate().is_ok());
    }

    #[test]
    fn test_skill_levels_out_of_bounds() {
        assert!(skill(-1, 5).validate().is_err());
        assert!(skill(5, 11).validate().is_err());
        let err = skill(5, 42).validate().unwrap_err();
        assert!(err.contains("levelAfter"));
    }
}
