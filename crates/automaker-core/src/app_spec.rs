//! The `app_spec.txt` project specification document.
//!
//! Written into `<project>/.automaker/` when a project is created. Downstream
//! tooling parses this XML-like layout, so `render` output must stay byte-stable.

/// Per-project metadata directory
pub const AUTOMAKER_DIR: &str = ".automaker";

/// Specification file name inside [`AUTOMAKER_DIR`]
pub const APP_SPEC_FILE: &str = "app_spec.txt";

const TECH_STACK_PLACEHOLDER: &str =
    "<!-- The AI agent will fill this in after analyzing your project -->";
const CAPABILITIES_PLACEHOLDER: &str = "<!-- List core features and capabilities -->";
const IMPLEMENTED_PLACEHOLDER: &str =
    "<!-- The AI agent will populate this based on code analysis -->";

/// `<project>/.automaker`
pub fn automaker_dir(project_path: &str) -> String {
    format!("{}/{}", project_path.trim_end_matches(['/', '\\']), AUTOMAKER_DIR)
}

/// `<project>/.automaker/app_spec.txt`
pub fn app_spec_path(project_path: &str) -> String {
    format!("{}/{}", automaker_dir(project_path), APP_SPEC_FILE)
}

/// Contents of a freshly created specification document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSpec {
    pub project_name: String,
    /// Overview paragraphs, one per line
    pub overview: Vec<String>,
    pub technology_stack: Vec<String>,
    pub core_capabilities: Vec<String>,
    /// Render placeholder comments for empty lists; template documents leave them blank
    pub list_placeholders: bool,
}

impl AppSpec {
    /// Placeholder document for a blank project.
    pub fn blank(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            overview: vec![
                "Describe your project here. This file will be analyzed by an AI agent".into(),
                "to understand your project structure and tech stack.".into(),
            ],
            technology_stack: Vec::new(),
            core_capabilities: Vec::new(),
            list_placeholders: true,
        }
    }

    /// Document for a project cloned from a starter template.
    pub fn from_template(
        project_name: impl Into<String>,
        template_name: &str,
        template_description: &str,
        tech_stack: &[String],
        features: &[String],
    ) -> Self {
        Self {
            project_name: project_name.into(),
            overview: vec![
                format!("This project was created from the \"{}\" starter template.", template_name),
                template_description.to_string(),
            ],
            technology_stack: tech_stack.to_vec(),
            core_capabilities: features.to_vec(),
            list_placeholders: false,
        }
    }

    /// Document for a project cloned from an arbitrary repository URL.
    pub fn from_repository(project_name: impl Into<String>, repo_url: &str) -> Self {
        Self {
            project_name: project_name.into(),
            overview: vec![
                format!("This project was cloned from {}.", repo_url),
                "The AI agent will analyze the project structure.".into(),
            ],
            technology_stack: Vec::new(),
            core_capabilities: Vec::new(),
            list_placeholders: true,
        }
    }

    /// Render the document. No trailing newline.
    pub fn render(&self) -> String {
        let overview = self
            .overview
            .iter()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<project_specification>\n\
             \x20 <project_name>{name}</project_name>\n\
             \n\
             \x20 <overview>\n\
             {overview}\n\
             \x20 </overview>\n\
             \n\
             \x20 <technology_stack>\n\
             \x20   {stack}\n\
             \x20 </technology_stack>\n\
             \n\
             \x20 <core_capabilities>\n\
             \x20   {capabilities}\n\
             \x20 </core_capabilities>\n\
             \n\
             \x20 <implemented_features>\n\
             \x20   {implemented}\n\
             \x20 </implemented_features>\n\
             </project_specification>",
            name = self.project_name,
            overview = overview,
            stack = self.render_list(&self.technology_stack, "technology", TECH_STACK_PLACEHOLDER),
            capabilities = self.render_list(&self.core_capabilities, "capability", CAPABILITIES_PLACEHOLDER),
            implemented = IMPLEMENTED_PLACEHOLDER,
        )
    }

    fn render_list(&self, items: &[String], tag: &str, placeholder: &str) -> String {
        if items.is_empty() {
            return if self.list_placeholders { placeholder.to_string() } else { String::new() };
        }
        items
            .iter()
            .map(|item| format!("<{tag}>{item}</{tag}>"))
            .collect::<Vec<_>>()
            .join("\n    ")
    }
}

/// Replace the body of the first `<overview>` section of `document`, keeping
/// everything else byte for byte. `None` if the section is missing.
pub fn replace_overview(document: &str, lines: &[String]) -> Option<String> {
    const OPEN: &str = "<overview>";
    const CLOSE: &str = "</overview>";
    let start = document.find(OPEN)? + OPEN.len();
    let end = start + document[start..].find(CLOSE)?;

    let body: String = lines.iter().map(|line| format!("\n    {}", line)).collect();
    Some(format!("{}{}\n  {}", &document[..start], body, &document[end..]))
}

/// Text between the first `<tag>` and its closing tag, trimmed.
pub fn extract_tag<'a>(document: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = document.find(&open)? + open.len();
    let end = start + document[start..].find(&close)?;
    Some(document[start..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_document_layout() {
        let expected = "<project_specification>
  <project_name>Foo</project_name>

  <overview>
    Describe your project here. This file will be analyzed by an AI agent
    to understand your project structure and tech stack.
  </overview>

  <technology_stack>
    <!-- The AI agent will fill this in after analyzing your project -->
  </technology_stack>

  <core_capabilities>
    <!-- List core features and capabilities -->
  </core_capabilities>

  <implemented_features>
    <!-- The AI agent will populate this based on code analysis -->
  </implemented_features>
</project_specification>";
        assert_eq!(AppSpec::blank("Foo").render(), expected);
    }

    #[test]
    fn template_lists_are_joined_with_indentation() {
        let spec = AppSpec::from_template(
            "shop",
            "Next Starter",
            "A storefront.",
            &["Next.js".to_string(), "Tailwind".to_string()],
            &["Cart".to_string()],
        );
        let doc = spec.render();
        assert!(doc.contains("    This project was created from the \"Next Starter\" starter template.\n    A storefront.\n"));
        assert!(doc.contains(
            "  <technology_stack>\n    <technology>Next.js</technology>\n    <technology>Tailwind</technology>\n  </technology_stack>"
        ));
        assert!(doc.contains("    <capability>Cart</capability>\n"));
        assert!(!doc.ends_with('\n'));
    }

    #[test]
    fn template_with_empty_lists_leaves_blank_lines() {
        let doc = AppSpec::from_template("shop", "Bare", "Nothing yet.", &[], &[]).render();
        assert!(doc.contains("  <technology_stack>\n    \n  </technology_stack>"));
        assert!(doc.contains("  <core_capabilities>\n    \n  </core_capabilities>"));
        assert!(!doc.contains("<!-- List core features"));
    }

    #[test]
    fn overview_replacement_keeps_other_sections() {
        let original = AppSpec::from_template(
            "My Shop",
            "Next Starter",
            "A storefront.",
            &["Next.js".to_string()],
            &["Cart".to_string()],
        );
        let lines = vec!["An online shop.".to_string(), "Sells books.".to_string()];
        let replaced = replace_overview(&original.render(), &lines).unwrap();

        let expected = AppSpec { overview: lines, ..original };
        assert_eq!(replaced, expected.render());
        assert_eq!(replace_overview("<project_specification/>", &[]), None);
    }

    #[test]
    fn repository_overview_mentions_url() {
        let doc = AppSpec::from_repository("tool", "https://github.com/acme/tool").render();
        assert_eq!(
            extract_tag(&doc, "overview"),
            Some("This project was cloned from https://github.com/acme/tool.\n    The AI agent will analyze the project structure.")
        );
    }

    #[test]
    fn extract_project_name() {
        let doc = AppSpec::blank("Foo").render();
        assert_eq!(extract_tag(&doc, "project_name"), Some("Foo"));
        assert_eq!(extract_tag(&doc, "missing"), None);
    }

    #[test]
    fn spec_paths() {
        assert_eq!(app_spec_path("/tmp/Foo"), "/tmp/Foo/.automaker/app_spec.txt");
        assert_eq!(automaker_dir("/tmp/Foo/"), "/tmp/Foo/.automaker");
    }
}
