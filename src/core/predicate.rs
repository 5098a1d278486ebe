use crate::models::{AgeGroup, BudgetRange, FanType, Idea, OrganizationType, UserProfile};

/// A single store-agnostic filter condition over catalog ideas
///
/// Equality and set-membership clauses cover everything the matcher needs,
/// so the catalog collaborator can execute a predicate however it likes and
/// the filter stays unit-testable without any storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// budgetRange must equal the given value exactly, no range coercion
    BudgetEquals(BudgetRange),
    /// organizationTypes must contain the given value
    OrganizationContains(OrganizationType),
    /// targetAudience.ageGroups must intersect the requested set
    AgeGroupsIntersect(Vec<AgeGroup>),
    /// targetAudience.fanTypes must intersect the requested set
    FanTypesIntersect(Vec<FanType>),
    /// At least one inner clause must hold
    AnyOf(Vec<Clause>),
}

impl Clause {
    pub fn matches(&self, idea: &Idea) -> bool {
        match self {
            Clause::BudgetEquals(budget) => idea.budget_range == *budget,
            Clause::OrganizationContains(org) => idea.organization_types.contains(org),
            Clause::AgeGroupsIntersect(requested) => idea
                .target_audience
                .age_groups
                .iter()
                .any(|group| requested.contains(group)),
            Clause::FanTypesIntersect(requested) => idea
                .target_audience
                .fan_types
                .iter()
                .any(|fan_type| requested.contains(fan_type)),
            Clause::AnyOf(clauses) => clauses.iter().any(|clause| clause.matches(idea)),
        }
    }
}

/// Conjunction of clauses; an empty predicate matches every idea
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaPredicate {
    clauses: Vec<Clause>,
}

impl IdeaPredicate {
    /// Build the primary candidate filter from a profile
    ///
    /// organization AND budget AND (ageGroups intersect OR fanTypes
    /// intersect). The audience disjunction is only added when the profile
    /// actually requests an audience, so an empty audience never filters.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut clauses = Vec::new();

        if let Some(org) = profile.organization_type {
            clauses.push(Clause::OrganizationContains(org));
        }

        if let Some(budget) = profile.budget_range {
            clauses.push(Clause::BudgetEquals(budget));
        }

        let mut audience = Vec::new();
        if !profile.age_groups.is_empty() {
            audience.push(Clause::AgeGroupsIntersect(profile.age_groups.clone()));
        }
        if !profile.fan_types.is_empty() {
            audience.push(Clause::FanTypesIntersect(profile.fan_types.clone()));
        }
        if !audience.is_empty() {
            clauses.push(Clause::AnyOf(audience));
        }

        Self { clauses }
    }

    /// Widened filter keeping only the organization anchor, used by the
    /// fallback expansion
    pub fn organization_only(org: OrganizationType) -> Self {
        Self {
            clauses: vec![Clause::OrganizationContains(org)],
        }
    }

    pub fn matches(&self, idea: &Idea) -> bool {
        self.clauses.iter().all(|clause| clause.matches(idea))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Difficulty, Resource, SuccessMetric, TargetAudience};

    fn create_idea(
        id: &str,
        orgs: Vec<OrganizationType>,
        budget: BudgetRange,
        age_groups: Vec<AgeGroup>,
        fan_types: Vec<FanType>,
    ) -> Idea {
        Idea {
            id: id.to_string(),
            title: format!("Idea {}", id),
            description: "Test idea".to_string(),
            category: Category::Contest,
            organization_types: orgs,
            target_audience: TargetAudience {
                age_groups,
                fan_types,
            },
            budget_range: budget,
            implementation_difficulty: Difficulty::Easy,
            required_resources: vec![Resource::SocialMedia],
            success_metrics: vec![SuccessMetric::EngagementRate],
            example_case_study: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        let predicate = IdeaPredicate::from_profile(&UserProfile::default());
        let idea = create_idea(
            "1",
            vec![OrganizationType::Brand],
            BudgetRange::High,
            vec![],
            vec![],
        );

        assert!(predicate.is_unconstrained());
        assert!(predicate.matches(&idea));
    }

    #[test]
    fn test_organization_filter() {
        let profile = UserProfile {
            organization_type: Some(OrganizationType::SportsTeam),
            ..Default::default()
        };
        let predicate = IdeaPredicate::from_profile(&profile);

        let sports = create_idea(
            "1",
            vec![OrganizationType::SportsTeam, OrganizationType::Brand],
            BudgetRange::Low,
            vec![],
            vec![],
        );
        let venue = create_idea(
            "2",
            vec![OrganizationType::EntertainmentVenue],
            BudgetRange::Low,
            vec![],
            vec![],
        );

        assert!(predicate.matches(&sports));
        assert!(!predicate.matches(&venue));
    }

    #[test]
    fn test_budget_must_equal_exactly() {
        let profile = UserProfile {
            budget_range: Some(BudgetRange::Medium),
            ..Default::default()
        };
        let predicate = IdeaPredicate::from_profile(&profile);

        let medium = create_idea(
            "1",
            vec![OrganizationType::Brand],
            BudgetRange::Medium,
            vec![],
            vec![],
        );
        let low = create_idea(
            "2",
            vec![OrganizationType::Brand],
            BudgetRange::Low,
            vec![],
            vec![],
        );

        assert!(predicate.matches(&medium));
        assert!(!predicate.matches(&low));
    }

    #[test]
    fn test_audience_is_or_of_ors() {
        let profile = UserProfile {
            age_groups: vec![AgeGroup::Age18To24],
            fan_types: vec![FanType::Superfan],
            ..Default::default()
        };
        let predicate = IdeaPredicate::from_profile(&profile);

        // Age matches but fan type does not: passes
        let age_only = create_idea(
            "1",
            vec![OrganizationType::Brand],
            BudgetRange::Low,
            vec![AgeGroup::Age18To24],
            vec![FanType::Casual],
        );
        // Fan type matches but age does not: passes
        let fan_only = create_idea(
            "2",
            vec![OrganizationType::Brand],
            BudgetRange::Low,
            vec![AgeGroup::Age55Plus],
            vec![FanType::Superfan],
        );
        // Neither matches: fails
        let neither = create_idea(
            "3",
            vec![OrganizationType::Brand],
            BudgetRange::Low,
            vec![AgeGroup::Age55Plus],
            vec![FanType::Casual],
        );

        assert!(predicate.matches(&age_only));
        assert!(predicate.matches(&fan_only));
        assert!(!predicate.matches(&neither));
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let profile = UserProfile {
            organization_type: Some(OrganizationType::SportsTeam),
            budget_range: Some(BudgetRange::Low),
            fan_types: vec![FanType::Casual],
            ..Default::default()
        };
        let predicate = IdeaPredicate::from_profile(&profile);

        let all_match = create_idea(
            "1",
            vec![OrganizationType::SportsTeam],
            BudgetRange::Low,
            vec![],
            vec![FanType::Casual],
        );
        let wrong_budget = create_idea(
            "2",
            vec![OrganizationType::SportsTeam],
            BudgetRange::High,
            vec![],
            vec![FanType::Casual],
        );

        assert!(predicate.matches(&all_match));
        assert!(!predicate.matches(&wrong_budget));
    }

    #[test]
    fn test_organization_only_drops_other_constraints() {
        let predicate = IdeaPredicate::organization_only(OrganizationType::MediaCompany);
        assert_eq!(predicate.clauses().len(), 1);

        let idea = create_idea(
            "1",
            vec![OrganizationType::MediaCompany],
            BudgetRange::High,
            vec![AgeGroup::Under18],
            vec![FanType::Lapsed],
        );
        assert!(predicate.matches(&idea));
    }
}
