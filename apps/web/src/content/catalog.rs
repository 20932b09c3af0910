use super::models::{
    ExperienceEntry, Project, ProjectDetail, Skill, TechnologyGroup, TechnologyNote,
};

/// Category labels offered by the listing UI, in display order. The filter
/// itself accepts any string; these only drive the filter buttons.
pub const CATEGORY_LABELS: [&str; 5] = ["All", "Full Stack", "Frontend", "Backend", "Data Science"];

/// Sentinel category that bypasses filtering. Case-sensitive.
pub const ALL_CATEGORIES: &str = "all";

/// The static content registry. Sample data stands in for a future
/// database; every accessor hands out read-only borrows.
pub struct Catalog {
    projects: Vec<Project>,
    project_details: Vec<ProjectDetail>,
    business_skills: Vec<Skill>,
    experience: Vec<ExperienceEntry>,
    developer_skills: Vec<Skill>,
    technologies: Vec<TechnologyGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            projects: sample_projects(),
            project_details: sample_project_details(),
            business_skills: sample_business_skills(),
            experience: sample_experience(),
            developer_skills: sample_developer_skills(),
            technologies: sample_technologies(),
        }
    }

    /// The full project catalog in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Subset of the catalog whose category matches exactly, order
    /// preserved. `"all"` bypasses filtering; an unknown category yields an
    /// empty list rather than an error.
    pub fn filter_projects(&self, category: &str) -> Vec<&Project> {
        if category == ALL_CATEGORIES {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }

    pub fn project_detail(&self, id: &str) -> Option<&ProjectDetail> {
        self.project_details.iter().find(|detail| detail.id == id)
    }

    pub fn business_skills(&self) -> &[Skill] {
        &self.business_skills
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn developer_skills(&self) -> &[Skill] {
        &self.developer_skills
    }

    pub fn technologies(&self) -> &[TechnologyGroup] {
        &self.technologies
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: None,
    }
}

fn categorized_skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: Some(category.to_string()),
    }
}

fn group(name: &str, items: &[&str]) -> TechnologyGroup {
    TechnologyGroup {
        name: name.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn note(area: &str, stack: &str) -> TechnologyNote {
    TechnologyNote {
        area: area.to_string(),
        stack: stack.to_string(),
    }
}

fn sample_business_skills() -> Vec<Skill> {
    vec![
        skill("Business Analysis", 90),
        skill("Project Management", 85),
        skill("Strategic Planning", 88),
        skill("Data Analysis", 85),
        skill("Process Optimization", 80),
        skill("Stakeholder Management", 87),
    ]
}

fn sample_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Business Analyst Intern".into(),
            company: "Tech Solutions Inc.".into(),
            period: "2023 - 2024".into(),
            description: "Analyzed business processes and developed optimization strategies".into(),
        },
        ExperienceEntry {
            title: "Project Coordinator".into(),
            company: "Innovation Labs".into(),
            period: "2022 - 2023".into(),
            description: "Coordinated cross-functional teams and managed project timelines".into(),
        },
    ]
}

fn sample_developer_skills() -> Vec<Skill> {
    vec![
        categorized_skill("Python", 90, "Backend"),
        categorized_skill("Flask/Django", 85, "Backend"),
        categorized_skill("JavaScript", 80, "Frontend"),
        categorized_skill("HTML/CSS", 88, "Frontend"),
        categorized_skill("SQL/PostgreSQL", 82, "Database"),
        categorized_skill("Git/GitHub", 87, "Tools"),
        categorized_skill("REST APIs", 85, "Backend"),
        categorized_skill("Testing (pytest)", 88, "Quality"),
    ]
}

fn sample_technologies() -> Vec<TechnologyGroup> {
    vec![
        group("Languages", &["Python", "JavaScript", "HTML/CSS", "SQL"]),
        group(
            "Frameworks",
            &["Flask", "Django", "Tailwind CSS", "Alpine.js"],
        ),
        group("Tools", &["Git", "VS Code", "Docker", "Pytest"]),
        group("Databases", &["PostgreSQL", "SQLite", "MongoDB"]),
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "therapy-app".into(),
            title: "AI Therapy Application".into(),
            description: "Mental health support app with AI-powered chatbot using OpenAI API"
                .into(),
            tags: vec![
                "Python".into(),
                "Flask".into(),
                "OpenAI".into(),
                "Healthcare".into(),
            ],
            category: "Full Stack".into(),
            image: Some("/static/images/projects/therapy-app.jpg".into()),
            github: Some("https://github.com/NizaJ27/IS218-AI-Demo".into()),
            demo: Some("https://tapp.theratoast.com".into()),
            featured: true,
        },
        Project {
            id: "module14".into(),
            title: "FastAPI Calculator with JWT Auth".into(),
            description: "Advanced web application with JWT authentication, PostgreSQL database, and calculation BREAD operations".into(),
            tags: vec![
                "Python".into(),
                "FastAPI".into(),
                "PostgreSQL".into(),
                "JWT".into(),
                "CI/CD".into(),
            ],
            category: "Backend".into(),
            image: Some("/static/images/projects/module14.jpg".into()),
            github: Some("https://github.com/NizaJ27/IS218-Module-14".into()),
            demo: Some("https://calc.theratoast.com".into()),
            featured: true,
        },
        Project {
            id: "portfolio".into(),
            title: "Personal Portfolio".into(),
            description: "This portfolio website built with Flask, Python, and TDD methodology"
                .into(),
            tags: vec![
                "Python".into(),
                "Flask".into(),
                "Tailwind CSS".into(),
                "Pytest".into(),
            ],
            category: "Full Stack".into(),
            image: Some("/static/images/projects/portfolio.jpg".into()),
            github: Some("https://github.com/NizaJ27/Portfolio".into()),
            demo: None,
            featured: false,
        },
    ]
}

fn sample_project_details() -> Vec<ProjectDetail> {
    vec![
        ProjectDetail {
            id: "therapy-app".into(),
            title: "AI Therapy Application".into(),
            category: "Full Stack".into(),
            description: "Mental health support app with AI-powered chatbot using OpenAI API"
                .into(),
            tags: vec![
                "Python".into(),
                "Flask".into(),
                "OpenAI".into(),
                "Healthcare".into(),
                "AI".into(),
                "REST API".into(),
            ],
            github: Some("https://github.com/NizaJ27/IS218-AI-Demo".into()),
            demo: Some("https://tapp.theratoast.com".into()),
            problem_statement: "Mental health support is often inaccessible due to cost, availability, and stigma. Many individuals need immediate support but face barriers in accessing professional help. This project addresses the need for an accessible, private, and immediate mental health support tool.".into(),
            features: vec![
                "AI-powered conversational therapy chatbot using OpenAI GPT-4".into(),
                "Secure user authentication and session management".into(),
                "Real-time chat interface with contextual understanding".into(),
                "Privacy-focused architecture with encrypted conversations".into(),
                "Responsive design for mobile and desktop access".into(),
                "Sentiment analysis for monitoring user emotional state".into(),
            ],
            technical_implementation: "Built with Flask backend integrated with OpenAI API for natural language processing. Implements RESTful API architecture for chat interactions. Uses session management for conversation context and user data protection.".into(),
            technologies: vec![
                note("Frontend", "HTML5, CSS3, Tailwind CSS, JavaScript"),
                note("Backend", "Python, Flask, OpenAI API"),
                note("Testing", "pytest, unittest, API mocking"),
                note("Deployment", "Docker, Caddy, Digital Ocean"),
            ],
            challenges: "Key challenges included managing API rate limits, maintaining conversation context across sessions, ensuring user privacy, and creating a natural conversational flow. Implemented caching strategies, session state management, and robust error handling to address these issues.".into(),
            results: "Successfully deployed application providing 24/7 mental health support access. Maintains conversation context across sessions with low latency responses. Positive user feedback on conversational quality and accessibility.".into(),
        },
        ProjectDetail {
            id: "module14".into(),
            title: "FastAPI Calculator with JWT Auth".into(),
            category: "Backend".into(),
            description: "Advanced web application with JWT authentication, PostgreSQL database, and calculation BREAD operations".into(),
            tags: vec![
                "Python".into(),
                "FastAPI".into(),
                "PostgreSQL".into(),
                "JWT".into(),
                "Docker".into(),
                "CI/CD".into(),
            ],
            github: Some("https://github.com/NizaJ27/IS218-Module-14".into()),
            demo: Some("https://calc.theratoast.com".into()),
            problem_statement: "Modern web applications require secure user authentication, persistent data storage, and full CRUD operations. This project demonstrates enterprise-grade backend development with FastAPI, implementing secure JWT authentication and comprehensive calculation history management.".into(),
            features: vec![
                "JWT-based authentication with access and refresh tokens".into(),
                "Complete BREAD operations (Browse, Read, Edit, Add, Delete) for calculations".into(),
                "PostgreSQL database with SQLAlchemy ORM".into(),
                "User registration and login with password hashing".into(),
                "Calculation history tracking per user".into(),
                "RESTful API with OpenAPI/Swagger documentation".into(),
                "Comprehensive pytest test suite with 100% coverage".into(),
                "CI/CD pipeline with GitHub Actions".into(),
            ],
            technical_implementation: "Built with FastAPI framework for high-performance API endpoints. Uses SQLAlchemy for database ORM with PostgreSQL backend. Implements secure password hashing with bcrypt and JWT token management. Follows TDD methodology with comprehensive test coverage.".into(),
            technologies: vec![
                note("Backend", "Python, FastAPI, SQLAlchemy, Pydantic"),
                note("Database", "PostgreSQL, Alembic migrations"),
                note("Security", "JWT, bcrypt, python-jose"),
                note("Testing", "pytest, pytest-cov, httpx"),
                note("DevOps", "Docker, GitHub Actions, Watchtower"),
            ],
            challenges: "Implementing secure JWT token refresh flow, managing database migrations, ensuring test isolation with fixtures, and handling concurrent user sessions. Solved through comprehensive security testing, proper fixture scoping, and transaction management.".into(),
            results: "Production-ready API with 100% test coverage deployed with automated CI/CD. Handles multiple concurrent users with secure authentication. Comprehensive API documentation via OpenAPI. Successfully demonstrates enterprise backend development practices.".into(),
        },
        ProjectDetail {
            id: "portfolio".into(),
            title: "Personal Portfolio".into(),
            category: "Full Stack".into(),
            description: "This portfolio website built with Flask, Python, and TDD methodology"
                .into(),
            tags: vec![
                "Python".into(),
                "Flask".into(),
                "Tailwind CSS".into(),
                "Pytest".into(),
                "Docker".into(),
                "TDD".into(),
            ],
            github: Some("https://github.com/NizaJ27/JNN-Portfolio".into()),
            demo: Some("https://theratoast.com".into()),
            problem_statement: "Professional developers need a compelling portfolio to showcase their work, skills, and experience. This portfolio demonstrates full-stack development capabilities, testing methodology, and modern DevOps practices while maintaining clean, maintainable code.".into(),
            features: vec![
                "Multi-page Flask application with Blueprint routing".into(),
                "Responsive design with Tailwind CSS".into(),
                "100% test coverage with 36 comprehensive tests".into(),
                "Featured projects showcase with live demos".into(),
                "Business and developer personas highlighting dual expertise".into(),
                "Contact form with professional inquiry handling".into(),
                "Dockerized deployment with automated CI/CD".into(),
                "HTTPS with automatic SSL certificate management".into(),
            ],
            technical_implementation: "Built using Flask application factory pattern with Blueprint-based routing for modularity. Implements comprehensive pytest test suite following TDD methodology. Uses Jinja2 templating with Tailwind CSS for responsive design. Deployed with Docker, GitHub Actions, and Watchtower for continuous deployment.".into(),
            technologies: vec![
                note("Backend", "Python 3.13, Flask 3.0, Jinja2"),
                note("Frontend", "Tailwind CSS, Alpine.js, HTML5"),
                note("Testing", "pytest, pytest-cov, pytest-flask"),
                note("DevOps", "Docker, GitHub Actions, Caddy, Watchtower"),
                note("Quality", "pylint, black, 100% test coverage"),
            ],
            challenges: "Achieving 100% test coverage, implementing efficient CI/CD pipeline, managing multiple domain configurations with Caddy, and ensuring zero-downtime deployments. Addressed through comprehensive test strategy, proper Docker networking, and automated deployment workflows.".into(),
            results: "Professional portfolio with 100% test coverage successfully deployed at theratoast.com. Automated CI/CD pipeline ensures all tests pass before deployment. Zero-downtime updates via Watchtower. Demonstrates both technical skills and professional presentation.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bypasses_filtering() {
        let catalog = Catalog::new();
        let filtered = catalog.filter_projects("all");
        assert_eq!(filtered.len(), catalog.projects().len());
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["therapy-app", "module14", "portfolio"]);
    }

    #[test]
    fn test_filter_exact_category_preserves_order() {
        let catalog = Catalog::new();
        let full_stack = catalog.filter_projects("Full Stack");
        let ids: Vec<&str> = full_stack.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["therapy-app", "portfolio"]);
    }

    #[test]
    fn test_filter_backend() {
        let catalog = Catalog::new();
        let backend = catalog.filter_projects("Backend");
        assert_eq!(backend.len(), 1);
        assert_eq!(backend[0].id, "module14");
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let catalog = Catalog::new();
        assert!(catalog.filter_projects("full stack").is_empty());
        // The capitalized UI label is not the sentinel.
        assert!(catalog.filter_projects("All").is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let catalog = Catalog::new();
        assert!(catalog.filter_projects("Embedded").is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_catalog() {
        let catalog = Catalog::new();
        let before: Vec<String> = catalog.projects().iter().map(|p| p.id.clone()).collect();
        catalog.filter_projects("Backend");
        let after: Vec<String> = catalog.projects().iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_detail_lookup_hit() {
        let catalog = Catalog::new();
        let detail = catalog.project_detail("therapy-app").unwrap();
        assert_eq!(detail.title, "AI Therapy Application");
        assert_eq!(detail.demo.as_deref(), Some("https://tapp.theratoast.com"));
    }

    #[test]
    fn test_detail_lookup_miss() {
        let catalog = Catalog::new();
        assert!(catalog.project_detail("does-not-exist").is_none());
    }

    #[test]
    fn test_every_summary_has_a_detail() {
        let catalog = Catalog::new();
        for project in catalog.projects() {
            assert!(
                catalog.project_detail(&project.id).is_some(),
                "missing detail for {}",
                project.id
            );
        }
    }

    #[test]
    fn test_category_labels_order() {
        assert_eq!(
            CATEGORY_LABELS,
            ["All", "Full Stack", "Frontend", "Backend", "Data Science"]
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let catalog = Catalog::new();
        for s in catalog.business_skills().iter().chain(catalog.developer_skills()) {
            assert!(s.level <= 100, "{} has level {}", s.name, s.level);
        }
    }
}
