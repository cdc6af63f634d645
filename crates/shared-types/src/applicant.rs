use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a candidate stands in the hiring pipeline.
///
/// The wire strings are capitalized (`"Interview"`), matching what the
/// applicant table and status select display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ApplicantStatus {
    #[default]
    New,
    Reviewed,
    Interview,
    Offered,
    Hired,
    Rejected,
}

impl ApplicantStatus {
    /// Pipeline order.
    pub const ALL: [ApplicantStatus; 6] = [
        ApplicantStatus::New,
        ApplicantStatus::Reviewed,
        ApplicantStatus::Interview,
        ApplicantStatus::Offered,
        ApplicantStatus::Hired,
        ApplicantStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantStatus::New => "New",
            ApplicantStatus::Reviewed => "Reviewed",
            ApplicantStatus::Interview => "Interview",
            ApplicantStatus::Offered => "Offered",
            ApplicantStatus::Hired => "Hired",
            ApplicantStatus::Rejected => "Rejected",
        }
    }

    /// Exact match on the wire string.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Closed applications no longer move through the pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(self, ApplicantStatus::Hired | ApplicantStatus::Rejected)
    }
}

/// A candidate's application against one of the employer's postings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Applicant {
    pub id: String,
    pub job_id: String,
    pub candidate_id: i64,
    pub name: String,
    pub email: String,
    /// Title of the posting at the time of application.
    pub position: String,
    pub status: ApplicantStatus,
    pub applied_at: DateTime<Utc>,
}

/// Status select on the applicants page: `"all"` or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicantStatus),
}

impl StatusFilter {
    /// Parse a select value. Anything that is not a known status means "all".
    pub fn parse(value: &str) -> Self {
        ApplicantStatus::from_str_opt(value)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn admits(&self, status: ApplicantStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Search by name, email or position (case-insensitive substring) combined
/// with the status filter.
pub fn filter_applicants(
    applicants: &[Applicant],
    query: &str,
    filter: StatusFilter,
) -> Vec<Applicant> {
    let needle = query.to_lowercase();
    applicants
        .iter()
        .filter(|a| {
            let matches_search = a.name.to_lowercase().contains(&needle)
                || a.email.to_lowercase().contains(&needle)
                || a.position.to_lowercase().contains(&needle);
            matches_search && filter.admits(a.status)
        })
        .cloned()
        .collect()
}

/// Counts behind the applicant stats cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApplicantStats {
    pub total: usize,
    pub new: usize,
    pub reviewed: usize,
    pub interview: usize,
    pub offered: usize,
    pub hired: usize,
    pub rejected: usize,
}

impl ApplicantStats {
    pub fn from_applicants(applicants: &[Applicant]) -> Self {
        let mut stats = Self {
            total: applicants.len(),
            ..Self::default()
        };
        for applicant in applicants {
            let slot = match applicant.status {
                ApplicantStatus::New => &mut stats.new,
                ApplicantStatus::Reviewed => &mut stats.reviewed,
                ApplicantStatus::Interview => &mut stats.interview,
                ApplicantStatus::Offered => &mut stats.offered,
                ApplicantStatus::Hired => &mut stats.hired,
                ApplicantStatus::Rejected => &mut stats.rejected,
            };
            *slot += 1;
        }
        stats
    }

    pub fn count(&self, status: ApplicantStatus) -> usize {
        match status {
            ApplicantStatus::New => self.new,
            ApplicantStatus::Reviewed => self.reviewed,
            ApplicantStatus::Interview => self.interview,
            ApplicantStatus::Offered => self.offered,
            ApplicantStatus::Hired => self.hired,
            ApplicantStatus::Rejected => self.rejected,
        }
    }

    /// Applications still moving through the pipeline.
    pub fn in_progress(&self) -> usize {
        self.total - self.hired - self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn applicant(id: &str, name: &str, email: &str, position: &str, status: ApplicantStatus) -> Applicant {
        Applicant {
            id: id.into(),
            job_id: "job-1".into(),
            candidate_id: 10,
            name: name.into(),
            email: email.into(),
            position: position.into(),
            status,
            applied_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    fn pool() -> Vec<Applicant> {
        vec![
            applicant("a", "Maya Chen", "maya@example.com", "Backend Engineer", ApplicantStatus::New),
            applicant("b", "Omar Haddad", "omar@mail.io", "Product Designer", ApplicantStatus::Interview),
            applicant("c", "Lena Fischer", "lena@example.com", "Backend Engineer", ApplicantStatus::Rejected),
            applicant("d", "Tom Ward", "tom@ward.dev", "Data Analyst", ApplicantStatus::Interview),
        ]
    }

    fn ids(list: &[Applicant]) -> Vec<&str> {
        list.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn search_matches_name_email_or_position() {
        assert_eq!(ids(&filter_applicants(&pool(), "MAYA", StatusFilter::All)), vec!["a"]);
        assert_eq!(ids(&filter_applicants(&pool(), "ward.dev", StatusFilter::All)), vec!["d"]);
        assert_eq!(
            ids(&filter_applicants(&pool(), "backend", StatusFilter::All)),
            vec!["a", "c"]
        );
    }

    #[test]
    fn status_filter_is_exact_equality() {
        let only_interview = StatusFilter::Only(ApplicantStatus::Interview);
        assert_eq!(ids(&filter_applicants(&pool(), "", only_interview)), vec!["b", "d"]);
        assert_eq!(
            ids(&filter_applicants(&pool(), "designer", only_interview)),
            vec!["b"]
        );
        assert!(filter_applicants(&pool(), "", StatusFilter::Only(ApplicantStatus::Hired)).is_empty());
    }

    #[test]
    fn empty_query_with_all_keeps_everyone() {
        assert_eq!(filter_applicants(&pool(), "", StatusFilter::All).len(), 4);
    }

    #[test]
    fn filter_values_parse_from_the_select() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("Interview"),
            StatusFilter::Only(ApplicantStatus::Interview)
        );
        // Status strings are case-sensitive, like the select values.
        assert_eq!(StatusFilter::parse("interview"), StatusFilter::All);
        assert_eq!(StatusFilter::Only(ApplicantStatus::Hired).as_value(), "Hired");
    }

    #[test]
    fn stats_count_each_status() {
        let stats = ApplicantStats::from_applicants(&pool());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.interview, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.count(ApplicantStatus::Offered), 0);
        assert_eq!(stats.in_progress(), 3);
    }

    #[test]
    fn status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&ApplicantStatus::Interview).unwrap(),
            "\"Interview\""
        );
        assert!(ApplicantStatus::Rejected.is_closed());
        assert!(!ApplicantStatus::Offered.is_closed());
    }
}
