use serde::{Deserialize, Serialize};

/// Status of a freelance project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Review => "Review",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Badge color family.
    pub fn tone(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "blue",
            ProjectStatus::Review => "amber",
            ProjectStatus::Completed => "emerald",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskProgress {
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub freelancer: String,
    pub status: ProjectStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub budget_cents: i64,
    pub days_left: i64,
    pub tasks: TaskProgress,
    pub last_activity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectTab {
    #[default]
    All,
    Active,
    Review,
    Completed,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::All,
        ProjectTab::Active,
        ProjectTab::Review,
        ProjectTab::Completed,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProjectTab::All => "all",
            ProjectTab::Active => "active",
            ProjectTab::Review => "review",
            ProjectTab::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::All => "All Projects",
            ProjectTab::Active => "Active",
            ProjectTab::Review => "In Review",
            ProjectTab::Completed => "Completed",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectTab::All => true,
            ProjectTab::Active => project.status == ProjectStatus::InProgress,
            ProjectTab::Review => project.status == ProjectStatus::Review,
            ProjectTab::Completed => project.status == ProjectStatus::Completed,
        }
    }
}

pub fn project_tab_counts(projects: &[Project]) -> Vec<(ProjectTab, usize)> {
    ProjectTab::ALL
        .iter()
        .map(|tab| (*tab, projects.iter().filter(|p| tab.matches(p)).count()))
        .collect()
}

/// Progress bar color: green from 80%, blue from 50%, amber below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTone {
    Emerald,
    Blue,
    Amber,
}

impl ProgressTone {
    pub fn for_progress(progress: u8) -> Self {
        if progress >= 80 {
            ProgressTone::Emerald
        } else if progress >= 50 {
            ProgressTone::Blue
        } else {
            ProgressTone::Amber
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ProgressTone::Emerald => "emerald",
            ProgressTone::Blue => "blue",
            ProgressTone::Amber => "amber",
        }
    }
}

/// Deadline text color: red at three days or fewer, amber within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineUrgency {
    Urgent,
    Soon,
    Normal,
}

impl DeadlineUrgency {
    pub fn for_days_left(days_left: i64) -> Self {
        if days_left <= 3 {
            DeadlineUrgency::Urgent
        } else if days_left <= 7 {
            DeadlineUrgency::Soon
        } else {
            DeadlineUrgency::Normal
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DeadlineUrgency::Urgent => "urgent",
            DeadlineUrgency::Soon => "soon",
            DeadlineUrgency::Normal => "normal",
        }
    }
}

pub fn deadline_label(days_left: i64) -> String {
    if days_left > 0 {
        format!("{days_left} days left")
    } else {
        "Completed".to_string()
    }
}

/// Whole dollars with thousands separators, e.g. `$12,500`.
pub fn format_budget(cents: i64) -> String {
    let dollars = cents / 100;
    let digits = dollars.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Quick stats row on the projects page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSummary {
    pub active: usize,
    pub average_progress: u8,
    pub total_budget_cents: i64,
    pub due_this_week: usize,
}

impl ProjectSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        if projects.is_empty() {
            return Self::default();
        }
        let progress_sum: u32 = projects.iter().map(|p| u32::from(p.progress)).sum();
        let count = u32::try_from(projects.len()).unwrap_or(u32::MAX);
        Self {
            active: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
            average_progress: u8::try_from(progress_sum / count).unwrap_or(100),
            total_budget_cents: projects.iter().map(|p| p.budget_cents).sum(),
            due_this_week: projects
                .iter()
                .filter(|p| p.status != ProjectStatus::Completed && (1..=7).contains(&p.days_left))
                .count(),
        }
    }
}
