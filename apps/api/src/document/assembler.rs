//! Document Assembler: builds the page-by-page layout of a résumé variant.
//!
//! # Page rules
//! - The header (name, titles, about) and the work-experience title appear on
//!   the first page only.
//! - The left column shows the profile on the first page and the
//!   certifications on every following page.
//! - The last page reserves a trailing margin.
//! - A project's timeline connector terminates on the last project of its
//!   page and extends toward the next entry otherwise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{DocumentVariant, LayoutSettings, StyledRun};
use crate::errors::AppError;
use crate::layout::wrapper::wrap_to_strings;
use crate::layout::{paginate, segment, url_breaks, word_breaks, Page, PartitionPlan, SpecialSet};
use crate::resume::models::{Profile, Project};
use crate::resume::ResumeStore;

const FULL_WORK_EXPERIENCE_TITLE: &str = "Work Experience";
const ONE_PAGE_WORK_EXPERIENCE_TITLE: &str = "Most Relevant Work Experience";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLayout {
    pub variant: DocumentVariant,
    pub pages: Vec<PageLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub index: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub header: Option<HeaderBlock>,
    pub work_experience_title: Option<String>,
    pub left_column: LeftColumn,
    pub projects: Vec<ProjectBlock>,
    pub reserve_trailing_margin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: Vec<StyledRun>,
    pub titles: Vec<String>,
    pub about: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeftColumn {
    Profile(ProfileColumn),
    Certifications { items: Vec<CertificationBlock> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileColumn {
    pub contacts: Vec<ContactBlock>,
    pub skills: Vec<SkillBlock>,
    pub education: EducationBlock,
    /// Each contribution URL pre-wrapped into rows.
    pub blog_contributions: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactBlock {
    pub text: Vec<StyledRun>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBlock {
    pub name: String,
    pub years: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationBlock {
    pub institution: String,
    pub degree: String,
    pub location: Vec<StyledRun>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationBlock {
    pub name_lines: Vec<String>,
    pub date: String,
}

/// What the timeline connector does below a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Extend,
    Terminate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBlock {
    pub key: String,
    pub name: String,
    pub title: String,
    pub company: Option<String>,
    pub period: String,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
    pub timeline: Timeline,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the layout of `variant` from the store's content.
pub fn assemble(
    variant: DocumentVariant,
    store: &dyn ResumeStore,
    special: &SpecialSet,
    settings: &LayoutSettings,
) -> Result<DocumentLayout, AppError> {
    let mut projects = store.projects_for(variant)?;

    let (plan, work_experience_title) = match variant {
        DocumentVariant::Full => (
            front_loaded_plan(
                projects.len(),
                settings.first_page_projects,
                settings.projects_per_page,
            ),
            FULL_WORK_EXPERIENCE_TITLE,
        ),
        DocumentVariant::OnePage => {
            for project in &mut projects {
                project.achievements.truncate(settings.one_page_achievements);
            }
            (
                PartitionPlan::Sizes(vec![projects.len() as i64]),
                ONE_PAGE_WORK_EXPERIENCE_TITLE,
            )
        }
    };

    let pages = paginate(&projects, &plan)?;
    let builder = PageBuilder {
        profile: store.profile(),
        special,
        settings,
    };

    let pages = pages
        .into_iter()
        .map(|page| builder.build(page, work_experience_title))
        .collect::<Result<Vec<_>, AppError>>()?;

    debug!(
        variant = %variant,
        projects = projects.len(),
        pages = pages.len(),
        "Assembled document layout"
    );

    Ok(DocumentLayout { variant, pages })
}

/// `first` entries on page one, then chunks of `per_page`.
///
/// Zero values are passed through so that the paginator rejects them.
pub(crate) fn front_loaded_plan(total: usize, first: usize, per_page: usize) -> PartitionPlan {
    if total == 0 {
        return PartitionPlan::Sizes(Vec::new());
    }

    let first = first.min(total);
    let mut sizes = vec![first as i64];
    let mut remaining = total - first;

    if remaining > 0 && per_page == 0 {
        sizes.push(0);
        return PartitionPlan::Sizes(sizes);
    }
    while remaining > 0 {
        let size = per_page.min(remaining);
        sizes.push(size as i64);
        remaining -= size;
    }
    PartitionPlan::Sizes(sizes)
}

struct PageBuilder<'a> {
    profile: &'a Profile,
    special: &'a SpecialSet,
    settings: &'a LayoutSettings,
}

impl PageBuilder<'_> {
    fn build(&self, page: Page<Project>, work_experience_title: &str) -> Result<PageLayout, AppError> {
        let header = page.is_first_page.then(|| self.header());
        let work_experience_title = page
            .is_first_page
            .then(|| work_experience_title.to_string());

        let left_column = if page.is_first_page {
            LeftColumn::Profile(self.profile_column()?)
        } else {
            LeftColumn::Certifications {
                items: self.certifications()?,
            }
        };

        let projects = page
            .entries
            .into_iter()
            .map(|placed| project_block(placed.entry, placed.is_last_in_page))
            .collect();

        Ok(PageLayout {
            index: page.index,
            is_first_page: page.is_first_page,
            is_last_page: page.is_last_page,
            header,
            work_experience_title,
            left_column,
            projects,
            reserve_trailing_margin: page.is_last_page,
        })
    }

    fn styled(&self, text: &str) -> Vec<StyledRun> {
        self.settings.fonts.style(segment(text, self.special))
    }

    fn header(&self) -> HeaderBlock {
        HeaderBlock {
            name: self.styled(&self.profile.full_name),
            titles: self.profile.titles.clone(),
            about: self.profile.about.clone(),
        }
    }

    fn profile_column(&self) -> Result<ProfileColumn, AppError> {
        let contacts = self
            .profile
            .contacts
            .iter()
            .map(|c| ContactBlock {
                text: self.styled(&c.text),
                link: c.link.clone(),
            })
            .collect();

        let skills = self
            .profile
            .skills
            .iter()
            .map(|s| SkillBlock {
                name: s.name.clone(),
                years: s.years,
            })
            .collect();

        let education = EducationBlock {
            institution: self.profile.education.institution.clone(),
            degree: self.profile.education.degree.clone(),
            location: self.styled(&self.profile.education.location),
        };

        let blog_contributions = self
            .profile
            .blog_contributions
            .iter()
            .map(|url| wrap_to_strings(url, self.settings.url_line_width, url_breaks()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProfileColumn {
            contacts,
            skills,
            education,
            blog_contributions,
        })
    }

    fn certifications(&self) -> Result<Vec<CertificationBlock>, AppError> {
        self.profile
            .certifications
            .iter()
            .map(|c| -> Result<CertificationBlock, AppError> {
                Ok(CertificationBlock {
                    name_lines: wrap_to_strings(
                        &c.name,
                        self.settings.certification_line_width,
                        word_breaks(),
                    )?,
                    date: c.date.clone(),
                })
            })
            .collect()
    }
}

fn project_block(project: Project, is_last_in_page: bool) -> ProjectBlock {
    let period = project.period();
    ProjectBlock {
        key: project.key,
        name: project.name,
        title: project.title,
        company: project.company,
        period,
        achievements: project.achievements,
        skills: project.skills,
        timeline: if is_last_in_page {
            Timeline::Terminate
        } else {
            Timeline::Extend
        },
    }
}
