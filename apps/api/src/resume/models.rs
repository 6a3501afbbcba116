use serde::{Deserialize, Serialize};

/// One work-experience entry. The unit the paginator moves between pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique key used by the enabled-project lists.
    pub key: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub title: String,
    pub company: Option<String>,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
}

impl Project {
    pub fn period(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub text: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    pub years: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
}

/// Everything on the résumé that is not a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub titles: Vec<String>,
    pub about: Vec<String>,
    pub contacts: Vec<ContactItem>,
    pub skills: Vec<SkillLevel>,
    pub education: Education,
    pub certifications: Vec<Certification>,
    pub blog_contributions: Vec<String>,
}
