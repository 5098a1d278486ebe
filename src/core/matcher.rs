use crate::core::predicate::IdeaPredicate;
use crate::core::scoring::{sort_by_goal_relevance, GoalMetricsMap};
use crate::models::{Idea, MatchLimits, UserProfile};
use crate::services::{CatalogError, IdeaCatalog};

/// Result of the matching pipeline
#[derive(Debug)]
pub struct MatchResult {
    pub ideas: Vec<Idea>,
    /// How many ideas the primary filter produced before any expansion
    pub primary_count: usize,
    /// True when the fallback expansion query ran
    pub expanded: bool,
}

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Build the candidate predicate from the profile and fetch primary
///    matches from the catalog (capped)
/// 2. If the yield is scarce and an organization type was given, widen to
///    the organization-only predicate and top up, de-duplicating by id
/// 3. If goals were given, reorder by goal relevance (stable)
/// 4. Truncate to the result cap
#[derive(Debug, Clone)]
pub struct Matcher {
    limits: MatchLimits,
    goal_metrics: GoalMetricsMap,
}

impl Matcher {
    pub fn new(limits: MatchLimits, goal_metrics: GoalMetricsMap) -> Self {
        Self {
            limits,
            goal_metrics,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MatchLimits::default(), GoalMetricsMap::default())
    }

    /// Match catalog ideas against an organization profile
    ///
    /// The only failure mode is the catalog read; it propagates unchanged
    /// and no retries happen here. Scarcity is not an error.
    pub async fn match_ideas<C: IdeaCatalog>(
        &self,
        catalog: &C,
        profile: &UserProfile,
    ) -> Result<MatchResult, CatalogError> {
        let predicate = IdeaPredicate::from_profile(profile);

        // The cap applies to the primary query before the scarcity check,
        // so a full page of weak matches never triggers expansion.
        let mut ideas = catalog
            .find_matching(&predicate, self.limits.max_results)
            .await?;
        let primary_count = ideas.len();

        let mut expanded = false;
        if primary_count < self.limits.expansion_threshold {
            // Expansion needs an organization anchor to stay relevant; a
            // scarce result without one is returned as-is.
            if let Some(org) = profile.organization_type {
                let widened = IdeaPredicate::organization_only(org);
                let room = self.limits.max_results - primary_count;
                let additional = catalog.find_matching(&widened, room).await?;

                for idea in additional {
                    if !ideas.iter().any(|existing| existing.id == idea.id) {
                        ideas.push(idea);
                    }
                }
                expanded = true;

                tracing::debug!(
                    "Expanded scarce result: {} primary, {} after top-up",
                    primary_count,
                    ideas.len()
                );
            }
        }

        if !profile.goals.is_empty() {
            ideas = sort_by_goal_relevance(ideas, &profile.goals, &self.goal_metrics);
        }

        ideas.truncate(self.limits.max_results);

        Ok(MatchResult {
            ideas,
            primary_count,
            expanded,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vocab::{
        BudgetRange, Category, Difficulty, Goal, OrganizationType, Resource, SuccessMetric,
    };
    use crate::models::TargetAudience;
    use crate::services::InMemoryCatalog;

    fn create_idea(
        id: &str,
        orgs: Vec<OrganizationType>,
        budget: BudgetRange,
        metrics: Vec<SuccessMetric>,
    ) -> Idea {
        Idea {
            id: id.to_string(),
            title: format!("Idea {}", id),
            description: "Test idea".to_string(),
            category: Category::Contest,
            organization_types: orgs,
            target_audience: TargetAudience::default(),
            budget_range: budget,
            implementation_difficulty: Difficulty::Easy,
            required_resources: vec![Resource::SocialMedia],
            success_metrics: metrics,
            example_case_study: None,
            created_at: None,
        }
    }

    fn catalog_of(ideas: Vec<Idea>) -> InMemoryCatalog {
        InMemoryCatalog::from_ideas(ideas).unwrap()
    }

    #[tokio::test]
    async fn test_empty_profile_returns_capped_catalog() {
        let ideas = (0..15)
            .map(|i| {
                create_idea(
                    &format!("idea-{}", i),
                    vec![OrganizationType::Brand],
                    BudgetRange::Low,
                    vec![SuccessMetric::EngagementRate],
                )
            })
            .collect();
        let catalog = catalog_of(ideas);
        let matcher = Matcher::with_defaults();

        let result = matcher
            .match_ideas(&catalog, &UserProfile::default())
            .await
            .unwrap();

        assert_eq!(result.ideas.len(), 10);
        assert_eq!(result.primary_count, 10);
        assert!(!result.expanded);
    }

    #[tokio::test]
    async fn test_expansion_tops_up_scarce_results() {
        // Two Low-budget ideas plus six more for the same organization
        let mut ideas = vec![
            create_idea(
                "low-1",
                vec![OrganizationType::EventOrganizer],
                BudgetRange::Low,
                vec![SuccessMetric::Attendance],
            ),
            create_idea(
                "low-2",
                vec![OrganizationType::EventOrganizer],
                BudgetRange::Low,
                vec![SuccessMetric::Attendance],
            ),
        ];
        for i in 0..6 {
            ideas.push(create_idea(
                &format!("high-{}", i),
                vec![OrganizationType::EventOrganizer],
                BudgetRange::High,
                vec![SuccessMetric::Attendance],
            ));
        }
        let catalog = catalog_of(ideas);
        let matcher = Matcher::with_defaults();

        let profile = UserProfile {
            organization_type: Some(OrganizationType::EventOrganizer),
            budget_range: Some(BudgetRange::Low),
            ..Default::default()
        };
        let result = matcher.match_ideas(&catalog, &profile).await.unwrap();

        assert_eq!(result.primary_count, 2);
        assert!(result.expanded);
        assert_eq!(result.ideas.len(), 8);

        // Primary results are never displaced by expansion
        assert_eq!(result.ideas[0].id, "low-1");
        assert_eq!(result.ideas[1].id, "low-2");
    }

    #[tokio::test]
    async fn test_no_expansion_without_organization_anchor() {
        let ideas = vec![
            create_idea(
                "low-1",
                vec![OrganizationType::Brand],
                BudgetRange::Low,
                vec![SuccessMetric::EngagementRate],
            ),
            create_idea(
                "high-1",
                vec![OrganizationType::Brand],
                BudgetRange::High,
                vec![SuccessMetric::EngagementRate],
            ),
        ];
        let catalog = catalog_of(ideas);
        let matcher = Matcher::with_defaults();

        let profile = UserProfile {
            budget_range: Some(BudgetRange::Low),
            ..Default::default()
        };
        let result = matcher.match_ideas(&catalog, &profile).await.unwrap();

        // Scarce (1 < 5) but no organization type, so no widening
        assert_eq!(result.ideas.len(), 1);
        assert_eq!(result.ideas[0].id, "low-1");
        assert!(!result.expanded);
    }

    #[tokio::test]
    async fn test_expansion_never_duplicates() {
        // All four org ideas also match the primary filter, so the
        // expansion page overlaps the primary set completely
        let ideas: Vec<Idea> = (0..4)
            .map(|i| {
                create_idea(
                    &format!("idea-{}", i),
                    vec![OrganizationType::MediaCompany],
                    BudgetRange::Medium,
                    vec![SuccessMetric::EngagementRate],
                )
            })
            .collect();
        let catalog = catalog_of(ideas);
        let matcher = Matcher::with_defaults();

        let profile = UserProfile {
            organization_type: Some(OrganizationType::MediaCompany),
            budget_range: Some(BudgetRange::Medium),
            ..Default::default()
        };
        let result = matcher.match_ideas(&catalog, &profile).await.unwrap();

        assert!(result.expanded);
        assert_eq!(result.ideas.len(), 4);
        let mut ids: Vec<&str> = result.ideas.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn test_goals_reorder_combined_set() {
        let ideas = vec![
            create_idea(
                "no-attendance",
                vec![OrganizationType::SportsTeam],
                BudgetRange::Low,
                vec![SuccessMetric::EmailSignups],
            ),
            create_idea(
                "attendance",
                vec![OrganizationType::SportsTeam],
                BudgetRange::Low,
                vec![SuccessMetric::Attendance],
            ),
        ];
        let catalog = catalog_of(ideas);
        let matcher = Matcher::with_defaults();

        let profile = UserProfile {
            organization_type: Some(OrganizationType::SportsTeam),
            goals: vec![Goal::ImproveAttendance],
            ..Default::default()
        };
        let result = matcher.match_ideas(&catalog, &profile).await.unwrap();

        assert_eq!(result.ideas[0].id, "attendance");
        assert_eq!(result.ideas[1].id, "no-attendance");
    }
}
