//! Opportunity builders.

use chrono::NaiveDate;
use volunteer_directory::{Catalog, Opportunity};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Builder for a single opportunity with neutral defaults.
pub struct OpportunityBuilder {
    opp: Opportunity,
}

impl OpportunityBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            opp: Opportunity {
                id: id.to_string(),
                title: format!("Opportunity {}", id),
                organization: "Helping Hands".to_string(),
                description: "General volunteering.".to_string(),
                location: "Springfield".to_string(),
                date: date(2024, 6, 1),
                commitment_level: "One-time".to_string(),
                cause: "Community".to_string(),
                image_url: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.opp.title = title.to_string();
        self
    }

    pub fn organization(mut self, organization: &str) -> Self {
        self.opp.organization = organization.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.opp.description = description.to_string();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.opp.location = location.to_string();
        self
    }

    pub fn cause(mut self, cause: &str) -> Self {
        self.opp.cause = cause.to_string();
        self
    }

    pub fn commitment(mut self, level: &str) -> Self {
        self.opp.commitment_level = level.to_string();
        self
    }

    pub fn on(mut self, y: i32, m: u32, d: u32) -> Self {
        self.opp.date = date(y, m, d);
        self
    }

    pub fn build(self) -> Opportunity {
        self.opp
    }
}

pub fn opp(id: &str) -> OpportunityBuilder {
    OpportunityBuilder::new(id)
}

pub fn catalog(records: Vec<Opportunity>) -> Catalog {
    Catalog::new(records).expect("fixture ids are unique")
}

/// A varied catalog covering every cause, commitment level, and a spread
/// of dates around June 2024.
pub fn mixed_catalog() -> Catalog {
    catalog(vec![
        opp("id-1")
            .title("River Restoration")
            .organization("Watershed Alliance")
            .cause("Environment")
            .commitment("One-time")
            .on(2024, 6, 9)
            .build(),
        opp("id-2")
            .title("Homework Help")
            .organization("Study Buddies")
            .description("Tutor middle schoolers in math.")
            .cause("Education")
            .commitment("Weekly")
            .on(2024, 6, 10)
            .build(),
        opp("id-3")
            .title("Park Cleanup")
            .organization("Friends of the Park")
            .location("Riverside")
            .cause("Environment")
            .commitment("Ongoing")
            .on(2024, 6, 11)
            .build(),
        opp("id-4")
            .title("Meal Delivery")
            .organization("Meals on Wheels")
            .cause("Hunger")
            .commitment("Weekly")
            .on(2024, 6, 20)
            .build(),
        opp("id-5")
            .title("Clinic Greeter")
            .organization("Free Health Clinic")
            .cause("Health")
            .commitment("Ongoing")
            .on(2024, 5, 30)
            .build(),
    ])
}

pub fn ids(results: &[&Opportunity]) -> Vec<String> {
    results.iter().map(|opp| opp.id.clone()).collect()
}
