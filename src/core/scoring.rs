use std::collections::HashMap;

use crate::models::{Goal, Idea, SuccessMetric};

/// Static table mapping each engagement goal to the success metrics that
/// count as evidence of achieving it
///
/// This is catalog metadata, not user data. It is injected into the matcher
/// so scoring stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct GoalMetricsMap {
    table: HashMap<Goal, Vec<SuccessMetric>>,
}

impl GoalMetricsMap {
    pub fn new(table: HashMap<Goal, Vec<SuccessMetric>>) -> Self {
        Self { table }
    }

    /// Metrics implied by a goal; a goal with no mapping implies none
    pub fn metrics_for(&self, goal: Goal) -> &[SuccessMetric] {
        self.table.get(&goal).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for GoalMetricsMap {
    fn default() -> Self {
        use Goal::*;
        use SuccessMetric::*;

        Self::new(HashMap::from([
            (IncreaseBrandLoyalty, vec![EngagementRate, AppDownloads]),
            (DriveSales, vec![SalesConversion]),
            (BuildCommunity, vec![UserGeneratedContent, Attendance, SocialSharing]),
            (IncreaseSocialPresence, vec![SocialSharing, EngagementRate]),
            (GenerateUserContent, vec![UserGeneratedContent]),
            (CollectCustomerData, vec![EmailSignups, AppDownloads]),
            (ImproveAttendance, vec![Attendance]),
        ]))
    }
}

/// Count the (requested goal, idea metric) pairs where the metric is in the
/// goal's mapped set
///
/// An idea relevant to two requested goals through two different metrics
/// scores higher than one relevant through a single metric.
pub fn goal_relevance_score(idea: &Idea, goals: &[Goal], map: &GoalMetricsMap) -> u32 {
    let mut score = 0;
    for goal in goals {
        let relevant = map.metrics_for(*goal);
        for metric in &idea.success_metrics {
            if relevant.contains(metric) {
                score += 1;
            }
        }
    }
    score
}

/// Reorder ideas by descending goal relevance
///
/// `Vec::sort_by` is stable, so ideas with equal scores keep their relative
/// order from the input sequence. Primary-filter results therefore stay
/// ahead of expansion-added results on ties, since expansion appends.
pub fn sort_by_goal_relevance(ideas: Vec<Idea>, goals: &[Goal], map: &GoalMetricsMap) -> Vec<Idea> {
    let mut scored: Vec<(u32, Idea)> = ideas
        .into_iter()
        .map(|idea| (goal_relevance_score(&idea, goals, map), idea))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().map(|(_, idea)| idea).collect()
}
