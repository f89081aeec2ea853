//! Job posting records and listing filters.

use super::{IdentityId, JobId};

/// Number of description characters copied into a derived teaser.
pub const TEASER_LEN: usize = 80;

/// A job posting owned by one employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub teaser: String,
    pub employer_id: IdentityId,
}

impl Job {
    pub fn is_owned_by(&self, identity_id: IdentityId) -> bool {
        self.employer_id == identity_id
    }
}

/// A validated job ready for insertion. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub teaser: String,
    pub employer_id: IdentityId,
}

/// Raw job fields as submitted by an employer.
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub teaser: Option<String>,
}

/// Listing filters. Each is an optional case-insensitive substring match;
/// all supplied filters must match.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Matches title, description, company or location.
    pub q: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        let q_ok = term(&self.q).is_none_or(|t| {
            contains(&job.title, &t)
                || contains(&job.description, &t)
                || contains(&job.company, &t)
                || contains(&job.location, &t)
        });
        let location_ok = term(&self.location).is_none_or(|t| contains(&job.location, &t));
        let company_ok = term(&self.company).is_none_or(|t| contains(&job.company, &t));
        q_ok && location_ok && company_ok
    }
}

/// Trimmed, lowercased filter term; blank means no filter.
fn term(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Default teaser: the first 80 characters of the description plus `...`.
pub fn derive_teaser(description: &str) -> String {
    let head: String = description.chars().take(TEASER_LEN).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, location: &str) -> Job {
        Job {
            id: 1,
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: "Build things".into(),
            teaser: "Build things...".into(),
            employer_id: 7,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(JobFilter::default().matches(&job("A", "B", "C")));
    }

    #[test]
    fn q_searches_all_text_fields() {
        let j = job("Backend Engineer", "Acme", "Remote");
        for q in ["engineer", "ACME", "remote", "build"] {
            let filter = JobFilter {
                q: Some(q.into()),
                ..Default::default()
            };
            assert!(filter.matches(&j), "q={q} should match");
        }
        let filter = JobFilter {
            q: Some("designer".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&j));
    }

    #[test]
    fn filters_are_anded() {
        let j = job("Frontend Dev", "Acme", "NYC");
        let filter = JobFilter {
            q: Some("engineer".into()),
            location: Some("nyc".into()),
            company: None,
        };
        assert!(!filter.matches(&j));
        let filter = JobFilter {
            q: None,
            location: Some("ny".into()),
            company: Some("acm".into()),
        };
        assert!(filter.matches(&j));
    }

    #[test]
    fn location_filter_ignores_other_fields() {
        let j = job("Remote-first lead", "Acme", "Berlin");
        let filter = JobFilter {
            location: Some("remote".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&j));
    }

    #[test]
    fn blank_filter_is_no_filter() {
        let filter = JobFilter {
            q: Some("   ".into()),
            location: Some(String::new()),
            company: None,
        };
        assert!(filter.matches(&job("A", "B", "C")));
    }

    #[test]
    fn teaser_appends_marker_to_short_description() {
        assert_eq!(derive_teaser("D"), "D...");
    }

    #[test]
    fn teaser_truncates_at_eighty_chars() {
        let description = "é".repeat(100);
        let teaser = derive_teaser(&description);
        assert_eq!(teaser.chars().count(), TEASER_LEN + 3);
        assert!(teaser.ends_with("..."));
    }
}
