//! One named view struct per page. Views borrow from the catalog; nothing
//! here allocates beyond the output string.

use std::fmt::Write;

use crate::content::{
    ExperienceEntry, Project, ProjectDetail, Skill, TechnologyGroup, CATEGORY_LABELS,
};
use crate::forms::ContactForm;
use crate::render::{escape, PageView};

const SITE_AUTHOR: &str = "Joshua Nizamudin";

/// GET /
pub struct LandingView;

impl PageView for LandingView {
    fn title(&self) -> String {
        format!("{SITE_AUTHOR} | Portfolio")
    }

    fn body(&self) -> String {
        format!(
            r#"    <section class="py-12 text-center">
      <h1 class="text-4xl font-bold">{SITE_AUTHOR}</h1>
      <p class="mt-4 text-lg text-gray-600">Bridging business strategy and software engineering.</p>
    </section>
    <section class="grid gap-6 md:grid-cols-2">
      <a href="/business/" class="rounded-lg bg-white p-8 shadow hover:shadow-md">
        <h2 class="text-2xl font-semibold">Business Strategist</h2>
        <p class="mt-2 text-gray-600">Analysis, planning and process optimization.</p>
      </a>
      <a href="/developer/" class="rounded-lg bg-white p-8 shadow hover:shadow-md">
        <h2 class="text-2xl font-semibold">Web Developer</h2>
        <p class="mt-2 text-gray-600">Full-stack applications built test-first.</p>
      </a>
    </section>"#
        )
    }
}

/// GET /business/
pub struct BusinessView<'a> {
    pub skills: &'a [Skill],
    pub experience: &'a [ExperienceEntry],
}

impl PageView for BusinessView<'_> {
    fn title(&self) -> String {
        format!("Business Professional | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        let mut body = String::from(
            r#"    <h1 class="text-3xl font-bold">Business Professional</h1>
    <section class="mt-8">
      <h2 class="text-xl font-semibold">Core Competencies</h2>
      <div class="mt-4 space-y-3">
"#,
        );
        for skill in self.skills {
            push_skill_bar(&mut body, skill);
        }
        body.push_str(
            r#"      </div>
    </section>
    <section class="mt-8">
      <h2 class="text-xl font-semibold">Professional Experience</h2>
      <div class="mt-4 space-y-4">
"#,
        );
        for entry in self.experience {
            let _ = write!(
                body,
                r#"        <div class="rounded bg-white p-4 shadow">
          <h3 class="font-semibold">{title}</h3>
          <p class="text-sm text-gray-500">{company} &middot; {period}</p>
          <p class="mt-2 text-gray-600">{description}</p>
        </div>
"#,
                title = escape(&entry.title),
                company = escape(&entry.company),
                period = escape(&entry.period),
                description = escape(&entry.description),
            );
        }
        body.push_str("      </div>\n    </section>");
        body
    }
}

/// GET /business/resume
pub struct ResumeView;

impl PageView for ResumeView {
    fn title(&self) -> String {
        format!("Resume | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        r#"    <h1 class="text-3xl font-bold">Resume</h1>
    <p class="mt-4 text-gray-600">A downloadable resume is on its way. In the meantime, the <a href="/business/" class="text-blue-600 hover:underline">business</a> and <a href="/developer/" class="text-blue-600 hover:underline">developer</a> pages cover the highlights.</p>"#
            .to_string()
    }
}

/// GET /developer/
pub struct DeveloperView<'a> {
    pub skills: &'a [Skill],
    pub technologies: &'a [TechnologyGroup],
}

impl PageView for DeveloperView<'_> {
    fn title(&self) -> String {
        format!("Web Developer | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        let mut body = String::from(
            r#"    <h1 class="text-3xl font-bold">Web Developer</h1>
    <section class="mt-8">
      <h2 class="text-xl font-semibold">Technical Skills</h2>
      <div class="mt-4 space-y-3">
"#,
        );
        for skill in self.skills {
            push_skill_bar(&mut body, skill);
        }
        body.push_str(
            r#"      </div>
    </section>
    <section class="mt-8">
      <h2 class="text-xl font-semibold">Technologies &amp; Tools</h2>
      <div class="mt-4 grid gap-4 md:grid-cols-2">
"#,
        );
        for group in self.technologies {
            let _ = write!(
                body,
                r#"        <div class="rounded bg-white p-4 shadow">
          <h3 class="font-semibold">{name}</h3>
          <p class="mt-1 text-gray-600">{items}</p>
        </div>
"#,
                name = escape(&group.name),
                items = escape(&group.items.join(", ")),
            );
        }
        body.push_str("      </div>\n    </section>");
        body
    }
}

/// GET /developer/github
pub struct GithubView;

impl PageView for GithubView {
    fn title(&self) -> String {
        format!("GitHub Profile | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        r#"    <h1 class="text-3xl font-bold">GitHub Profile</h1>
    <p class="mt-4 text-gray-600">Open source work and coursework live on GitHub.</p>
    <a href="https://github.com/NizaJ27" class="mt-4 inline-block rounded bg-gray-900 px-4 py-2 text-white hover:bg-gray-700">github.com/NizaJ27</a>"#
        .to_string()
    }
}

/// GET /projects/ — also the fallback view for unknown project ids.
pub struct ProjectListView<'a> {
    pub projects: Vec<&'a Project>,
    pub active_category: &'a str,
}

impl PageView for ProjectListView<'_> {
    fn title(&self) -> String {
        format!("Projects | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        let mut body = String::from(
            r#"    <h1 class="text-3xl font-bold">Project Portfolio</h1>
    <div class="mt-6 flex flex-wrap gap-2">
"#,
        );
        for label in CATEGORY_LABELS {
            let value = category_value(label);
            let classes = if value == self.active_category {
                "bg-blue-600 text-white"
            } else {
                "bg-white text-gray-700 hover:bg-gray-100"
            };
            let _ = write!(
                body,
                "      <a href=\"/projects/?category={href}\" class=\"rounded px-3 py-1 text-sm shadow {classes}\">{label}</a>\n",
                href = query_escape(value),
            );
        }
        body.push_str("    </div>\n");

        if self.projects.is_empty() {
            body.push_str(
                "    <p class=\"mt-8 text-gray-500\">No projects found in this category.</p>",
            );
            return body;
        }

        body.push_str("    <div class=\"mt-8 grid gap-6 md:grid-cols-2\">\n");
        for project in &self.projects {
            push_project_card(&mut body, project);
        }
        body.push_str("    </div>");
        body
    }
}

/// GET /projects/:project_id
pub struct ProjectDetailView<'a> {
    pub project: &'a ProjectDetail,
}

impl PageView for ProjectDetailView<'_> {
    fn title(&self) -> String {
        format!("{} | {SITE_AUTHOR}", self.project.title)
    }

    fn body(&self) -> String {
        let project = self.project;
        let mut body = format!(
            r#"    <p class="text-sm text-blue-600">{category}</p>
    <h1 class="mt-1 text-3xl font-bold">{title}</h1>
    <p class="mt-3 text-lg text-gray-600">{description}</p>
    <div class="mt-4 flex flex-wrap gap-2">
"#,
            category = escape(&project.category),
            title = escape(&project.title),
            description = escape(&project.description),
        );
        for tag in &project.tags {
            let _ = write!(
                body,
                "      <span class=\"rounded bg-gray-200 px-2 py-0.5 text-xs\">{}</span>\n",
                escape(tag)
            );
        }
        body.push_str("    </div>\n    <div class=\"mt-4 space-x-3\">\n");
        if let Some(github) = &project.github {
            let _ = write!(
                body,
                "      <a href=\"{}\" class=\"text-blue-600 hover:underline\">View on GitHub</a>\n",
                escape(github)
            );
        }
        if let Some(demo) = &project.demo {
            let _ = write!(
                body,
                "      <a href=\"{}\" class=\"text-blue-600 hover:underline\">{}</a>\n",
                escape(demo),
                escape(demo.trim_start_matches("https://")),
            );
        }
        body.push_str("    </div>\n");

        push_text_section(&mut body, "Problem Statement", &project.problem_statement);

        body.push_str(
            "    <section class=\"mt-8\">\n      <h2 class=\"text-xl font-semibold\">Features</h2>\n      <ul class=\"mt-3 list-disc space-y-1 pl-6 text-gray-600\">\n",
        );
        for feature in &project.features {
            let _ = write!(body, "        <li>{}</li>\n", escape(feature));
        }
        body.push_str("      </ul>\n    </section>\n");

        push_text_section(
            &mut body,
            "Technical Implementation",
            &project.technical_implementation,
        );

        body.push_str(
            "    <section class=\"mt-8\">\n      <h2 class=\"text-xl font-semibold\">Technologies</h2>\n      <dl class=\"mt-3 space-y-1 text-gray-600\">\n",
        );
        for tech in &project.technologies {
            let _ = write!(
                body,
                "        <div><dt class=\"inline font-medium\">{area}:</dt> <dd class=\"inline\">{stack}</dd></div>\n",
                area = escape(&tech.area),
                stack = escape(&tech.stack),
            );
        }
        body.push_str("      </dl>\n    </section>\n");

        push_text_section(&mut body, "Challenges", &project.challenges);
        push_text_section(&mut body, "Results", &project.results);
        body
    }
}

/// GET+POST /contact/ — `form` echoes trimmed values back after a rejected
/// submission; a blank form renders on plain GETs.
pub struct ContactView<'a> {
    pub form: &'a ContactForm,
}

impl PageView for ContactView<'_> {
    fn title(&self) -> String {
        format!("Contact | {SITE_AUTHOR}")
    }

    fn body(&self) -> String {
        format!(
            r#"    <h1 class="text-3xl font-bold">Get In Touch</h1>
    <p class="mt-3 text-gray-600">Questions, opportunities or collaboration ideas are all welcome.</p>
    <section class="mt-8 max-w-xl">
      <h2 class="text-xl font-semibold">Send Me a Message</h2>
      <form method="post" action="/contact/" class="mt-4 space-y-4">
        <div>
          <label for="name" class="block text-sm font-medium">Name</label>
          <input type="text" id="name" name="name" value="{name}" class="mt-1 w-full rounded border px-3 py-2">
        </div>
        <div>
          <label for="email" class="block text-sm font-medium">Email</label>
          <input type="text" id="email" name="email" value="{email}" class="mt-1 w-full rounded border px-3 py-2">
        </div>
        <div>
          <label for="subject" class="block text-sm font-medium">Subject (optional)</label>
          <input type="text" id="subject" name="subject" value="{subject}" class="mt-1 w-full rounded border px-3 py-2">
        </div>
        <div>
          <label for="message" class="block text-sm font-medium">Message</label>
          <textarea id="message" name="message" rows="5" class="mt-1 w-full rounded border px-3 py-2">{message}</textarea>
        </div>
        <button type="submit" class="rounded bg-blue-600 px-4 py-2 text-white hover:bg-blue-700">Send Message</button>
      </form>
    </section>"#,
            name = escape(&self.form.name),
            email = escape(&self.form.email),
            subject = escape(&self.form.subject),
            message = escape(&self.form.message),
        )
    }
}

/// Maps a UI label to the query value it filters by.
fn category_value(label: &str) -> &str {
    if label == "All" {
        "all"
    } else {
        label
    }
}

/// Minimal query-string escaping; category values only ever contain letters
/// and spaces.
fn query_escape(value: &str) -> String {
    value.replace(' ', "%20")
}

fn push_skill_bar(body: &mut String, skill: &Skill) {
    let label = match &skill.category {
        Some(category) => format!("{} ({})", escape(&skill.name), escape(category)),
        None => escape(&skill.name),
    };
    let _ = write!(
        body,
        r#"        <div>
          <div class="flex justify-between text-sm"><span>{label}</span><span>{level}%</span></div>
          <div class="mt-1 h-2 rounded bg-gray-200"><div class="h-2 rounded bg-blue-600" style="width: {level}%"></div></div>
        </div>
"#,
        level = skill.level,
    );
}

fn push_project_card(body: &mut String, project: &Project) {
    let _ = write!(
        body,
        r#"      <div class="rounded-lg bg-white p-6 shadow">
        <p class="text-sm text-blue-600">{category}</p>
        <h3 class="mt-1 text-lg font-semibold"><a href="/projects/{id}" class="hover:text-blue-600">{title}</a></h3>
"#,
        category = escape(&project.category),
        id = escape(&project.id),
        title = escape(&project.title),
    );
    if project.featured {
        body.push_str(
            "        <span class=\"mt-1 inline-block rounded bg-yellow-100 px-2 py-0.5 text-xs text-yellow-800\">Featured</span>\n",
        );
    }
    let _ = write!(
        body,
        "        <p class=\"mt-2 text-gray-600\">{}</p>\n        <div class=\"mt-3 flex flex-wrap gap-2\">\n",
        escape(&project.description)
    );
    for tag in &project.tags {
        let _ = write!(
            body,
            "          <span class=\"rounded bg-gray-200 px-2 py-0.5 text-xs\">{}</span>\n",
            escape(tag)
        );
    }
    body.push_str("        </div>\n        <div class=\"mt-3 space-x-3 text-sm\">\n");
    if let Some(github) = &project.github {
        let _ = write!(
            body,
            "          <a href=\"{}\" class=\"text-blue-600 hover:underline\">GitHub</a>\n",
            escape(github)
        );
    }
    if let Some(demo) = &project.demo {
        let _ = write!(
            body,
            "          <a href=\"{}\" class=\"text-blue-600 hover:underline\">Live Demo</a>\n",
            escape(demo)
        );
    }
    body.push_str("        </div>\n      </div>\n");
}

fn push_text_section(body: &mut String, heading: &str, text: &str) {
    let _ = write!(
        body,
        "    <section class=\"mt-8\">\n      <h2 class=\"text-xl font-semibold\">{}</h2>\n      <p class=\"mt-3 text-gray-600\">{}</p>\n    </section>\n",
        escape(heading),
        escape(text),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn test_landing_view_personas() {
        let body = LandingView.body();
        assert!(body.contains("Business Strategist"));
        assert!(body.contains("Web Developer"));
        assert_eq!(LandingView.title(), "Joshua Nizamudin | Portfolio");
    }

    #[test]
    fn test_business_view_sections() {
        let catalog = Catalog::new();
        let view = BusinessView {
            skills: catalog.business_skills(),
            experience: catalog.experience(),
        };
        let body = view.body();
        assert!(body.contains("Core Competencies"));
        assert!(body.contains("Professional Experience"));
        assert!(body.contains("Business Analysis"));
        assert!(body.contains("Tech Solutions Inc."));
    }

    #[test]
    fn test_developer_view_sections() {
        let catalog = Catalog::new();
        let view = DeveloperView {
            skills: catalog.developer_skills(),
            technologies: catalog.technologies(),
        };
        let body = view.body();
        assert!(body.contains("Technical Skills"));
        assert!(body.contains("Technologies &amp; Tools"));
        assert!(body.contains("Python (Backend)"));
        assert!(body.contains("PostgreSQL, SQLite, MongoDB"));
    }

    #[test]
    fn test_project_list_marks_active_category() {
        let catalog = Catalog::new();
        let view = ProjectListView {
            projects: catalog.filter_projects("Backend"),
            active_category: "Backend",
        };
        let body = view.body();
        assert!(body.contains("Project Portfolio"));
        assert!(body.contains("category=Full%20Stack"));
        assert!(body.contains("FastAPI Calculator"));
        assert!(!body.contains("AI Therapy Application"));
    }

    #[test]
    fn test_project_list_empty_state() {
        let catalog = Catalog::new();
        let view = ProjectListView {
            projects: catalog.filter_projects("Data Science"),
            active_category: "Data Science",
        };
        assert!(view.body().contains("No projects found in this category."));
    }

    #[test]
    fn test_detail_view_sections() {
        let catalog = Catalog::new();
        let view = ProjectDetailView {
            project: catalog.project_detail("therapy-app").unwrap(),
        };
        let body = view.body();
        assert!(body.contains("Problem Statement"));
        assert!(body.contains("tapp.theratoast.com"));
        assert!(body.contains("OpenAI"));
        assert_eq!(view.title(), "AI Therapy Application | Joshua Nizamudin");
    }

    #[test]
    fn test_contact_view_echoes_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello there".into(),
        };
        let body = ContactView { form: &form }.body();
        assert!(body.contains("Get In Touch"));
        assert!(body.contains("Send Me a Message"));
        assert!(body.contains(r#"value="Ada""#));
        assert!(body.contains(">Hello there</textarea>"));
    }

    #[test]
    fn test_contact_view_escapes_echoed_input() {
        let form = ContactForm {
            name: r#""><script>"#.into(),
            ..ContactForm::default()
        };
        let body = ContactView { form: &form }.body();
        assert!(!body.contains("<script>"));
    }
}
