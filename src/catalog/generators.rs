//! Synthetic record generators, one per category.
//!
//! Categorical fields cycle through fixed vocabularies by index so every
//! status/priority value is represented in each batch; numeric amounts and
//! dates are drawn from the context's RNG.

use crate::model::Record;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// RNG and time anchor shared by the generators of one batch.
pub struct GenerationContext {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl GenerationContext {
    /// Deterministic context: the same seed and anchor yield the same batch.
    #[must_use]
    pub fn seeded(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    /// Context seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            now,
        }
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn amount(&mut self, min: i64, spread: i64) -> i64 {
        self.rng.random_range(0..spread) + min
    }

    fn days_ago(&mut self, max_days: i64) -> String {
        let offset = self.rng.random_range(0..max_days * MILLIS_PER_DAY);
        iso(self.now - Duration::milliseconds(offset))
    }

    fn days_ahead(&mut self, max_days: i64) -> String {
        let offset = self.rng.random_range(0..max_days * MILLIS_PER_DAY);
        iso(self.now + Duration::milliseconds(offset))
    }
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn cycle<'a>(values: &[&'a str], i: usize) -> &'a str {
    values[i % values.len()]
}

/// `A`..`Z`, wrapping.
fn letter(i: usize) -> char {
    char::from(b'A' + (i % 26) as u8)
}

pub(super) fn contract(ctx: &mut GenerationContext, i: usize) -> Record {
    const STATUSES: &[&str] = &["draft", "under_review", "approved", "executed", "expired"];
    const TYPES: &[&str] = &["NDA", "Service Agreement", "Employment", "Vendor", "Partnership"];
    const PRIORITIES: &[&str] = &["high", "medium", "low"];
    let n = i + 1;

    Record::new()
        .with("id", format!("contract-{n:03}"))
        .with("title", format!("{} Contract {n}", cycle(TYPES, i)))
        .with("counterparty", format!("Company {}", letter(i)))
        .with("value", ctx.amount(10_000, 500_000))
        .with("status", cycle(STATUSES, i))
        .with("priority", cycle(PRIORITIES, i))
        .with("created_date", ctx.days_ago(365))
        .with("expiry_date", ctx.days_ahead(365))
        .with("owner", format!("Legal Team {}", i % 3 + 1))
}

pub(super) fn matter(ctx: &mut GenerationContext, i: usize) -> Record {
    const STATUSES: &[&str] = &["active", "pending", "closed", "on_hold"];
    const TYPES: &[&str] = &["Litigation", "Corporate", "IP", "Employment", "Regulatory"];
    const PRIORITIES: &[&str] = &["critical", "high", "medium", "low"];
    let n = i + 1;

    Record::new()
        .with("id", format!("matter-{n:03}"))
        .with("title", format!("{} Matter {n}", cycle(TYPES, i)))
        .with("client", format!("Client {}", letter(i)))
        .with("budget", ctx.amount(5_000, 200_000))
        .with("spent", ctx.amount(1_000, 150_000))
        .with("status", cycle(STATUSES, i))
        .with("priority", cycle(PRIORITIES, i))
        .with("opened_date", ctx.days_ago(180))
        .with("deadline", ctx.days_ahead(90))
        .with("attorney", format!("Attorney {}", i % 5 + 1))
}

pub(super) fn task(ctx: &mut GenerationContext, i: usize) -> Record {
    const STATUSES: &[&str] = &["pending", "in_progress", "completed", "overdue"];
    const PRIORITIES: &[&str] = &["urgent", "high", "medium", "low"];
    const TYPES: &[&str] = &["Review", "Draft", "Research", "Filing", "Meeting"];
    let n = i + 1;
    let kind = cycle(TYPES, i);

    Record::new()
        .with("id", format!("task-{n:03}"))
        .with("title", format!("{kind} Task {n}"))
        .with(
            "description",
            format!("Task description for {} work", kind.to_lowercase()),
        )
        .with("assignee", format!("Team Member {}", i % 8 + 1))
        .with("status", cycle(STATUSES, i))
        .with("priority", cycle(PRIORITIES, i))
        .with("created_date", ctx.days_ago(30))
        .with("due_date", ctx.days_ahead(14))
        .with("estimated_hours", ctx.amount(1, 20))
        .with("actual_hours", ctx.amount(1, 25))
}

pub(super) fn risk(ctx: &mut GenerationContext, i: usize) -> Record {
    const SEVERITIES: &[&str] = &["critical", "high", "medium", "low"];
    const CATEGORIES: &[&str] = &["Compliance", "Financial", "Operational", "Strategic", "Legal"];
    const STATUSES: &[&str] = &["open", "mitigating", "closed", "monitoring"];
    let n = i + 1;
    let category = cycle(CATEGORIES, i);

    Record::new()
        .with("id", format!("risk-{n:03}"))
        .with("title", format!("{category} Risk {n}"))
        .with(
            "description",
            format!("Risk assessment for {} issues", category.to_lowercase()),
        )
        .with("severity", cycle(SEVERITIES, i))
        .with("category", category)
        .with("status", cycle(STATUSES, i))
        .with("probability", ctx.amount(1, 100))
        .with("impact", ctx.amount(1, 100))
        .with("identified_date", ctx.days_ago(60))
        .with("review_date", ctx.days_ahead(30))
        .with("owner", format!("Risk Manager {}", i % 3 + 1))
}

pub(super) fn compliance(ctx: &mut GenerationContext, i: usize) -> Record {
    const FRAMEWORKS: &[&str] = &["GDPR", "CCPA", "SOX", "HIPAA", "PCI-DSS"];
    const STATUSES: &[&str] = &["compliant", "non_compliant", "in_progress", "needs_review"];
    const PRIORITIES: &[&str] = &["critical", "high", "medium", "low"];
    let n = i + 1;
    let framework = cycle(FRAMEWORKS, i);

    Record::new()
        .with("id", format!("compliance-{n:03}"))
        .with("framework", framework)
        .with("requirement", format!("Requirement {n}"))
        .with(
            "description",
            format!("Compliance requirement for {framework}"),
        )
        .with("status", cycle(STATUSES, i))
        .with("priority", cycle(PRIORITIES, i))
        .with("score", ctx.amount(1, 100))
        .with("last_assessment", ctx.days_ago(90))
        .with("next_review", ctx.days_ahead(90))
        .with("owner", format!("Compliance Officer {}", i % 2 + 1))
}
