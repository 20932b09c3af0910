use serde::Serialize;

/// Summary record shown on the projects listing page.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Slug-form identifier, unique within the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: bool,
}

/// Full record behind a project detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub problem_statement: String,
    pub features: Vec<String>,
    pub technical_implementation: String,
    /// Ordered area -> stack pairs ("Frontend" -> "HTML5, CSS3, ...").
    pub technologies: Vec<TechnologyNote>,
    pub challenges: String,
    pub results: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyNote {
    pub area: String,
    pub stack: String,
}

/// A skill with a 0-100 proficiency level.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// A named grouping on the developer page ("Languages", "Frameworks", ...).
#[derive(Debug, Clone, Serialize)]
pub struct TechnologyGroup {
    pub name: String,
    pub items: Vec<String>,
}
