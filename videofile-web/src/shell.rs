//! Standard page shell wrapping video pages in a complete HTML document

use videofile_core::{Course, HostError, PageShell};

use crate::components::markup::{Attributes, empty_tag, escape_html, tag};
use crate::components::{content_box, heading};

/// Default page shell rendering a minimal HTML5 document.
///
/// The title and heading are stored already formatted and are emitted
/// without further escaping. Assets are emitted in registration order,
/// each URL at most once.
#[derive(Debug, Clone)]
pub struct StandardPageShell {
    course: Course,
    title: String,
    heading: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
    init_code: Vec<String>,
}

impl StandardPageShell {
    /// Creates a shell for pages of the given course.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            title: String::new(),
            heading: String::new(),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            init_code: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

impl PageShell for StandardPageShell {
    fn course(&self) -> &Course {
        &self.course
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    fn require_stylesheet(&mut self, url: &str) {
        push_unique(&mut self.stylesheets, url);
    }

    fn require_script(&mut self, url: &str) {
        push_unique(&mut self.scripts, url);
    }

    fn add_init_code(&mut self, code: &str) {
        self.init_code.push(code.to_string());
    }

    fn render_header(&self) -> Result<String, HostError> {
        let stylesheet_links: String = self
            .stylesheets
            .iter()
            .map(|href| {
                empty_tag(
                    "link",
                    &Attributes::new()
                        .with("rel", "stylesheet")
                        .with("href", href.as_str()),
                )
            })
            .collect();

        let script_tags: String = self
            .scripts
            .iter()
            .map(|src| tag("script", "", &Attributes::new().with("src", src.as_str())))
            .collect();

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
{stylesheet_links}{script_tags}
</head>
<body>
<header id="page-header">{page_heading}</header>
<main id="region-main">
"#,
            title = self.title,
            page_heading = heading(&self.heading, 1),
        ))
    }

    fn render_footer(&self) -> Result<String, HostError> {
        let init_script = if self.init_code.is_empty() {
            String::new()
        } else {
            format!("<script>\n{}\n</script>\n", self.init_code.join("\n"))
        };

        Ok(format!(
            r#"
</main>
<footer id="page-footer">{course}</footer>
{init_script}</body>
</html>
"#,
            course = escape_html(&self.course.full_name),
        ))
    }

    fn render_heading(&self, text: &str, level: u8) -> Result<String, HostError> {
        Ok(heading(text, level))
    }

    fn render_box(&self, content: &str, classes: &str, id: &str) -> Result<String, HostError> {
        Ok(content_box(content, classes, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> StandardPageShell {
        StandardPageShell::new(Course {
            short_name: "BIO101".to_string(),
            full_name: "Biology & Life".to_string(),
        })
    }

    #[test]
    fn test_header_contains_title_heading_and_assets() {
        let mut shell = shell();
        shell.set_title("BIO101: Cells");
        shell.set_heading("Introduction to Biology");
        shell.require_stylesheet("https://school.example/player.css");
        shell.require_script("https://school.example/player.js");

        let header = shell.render_header().unwrap();

        assert!(header.starts_with("<!DOCTYPE html>"));
        assert!(header.contains("<title>BIO101: Cells</title>"));
        assert!(header.contains("<h1>Introduction to Biology</h1>"));
        assert!(header.contains(
            r#"<link rel="stylesheet" href="https://school.example/player.css" />"#
        ));
        assert!(header.contains(r#"<script src="https://school.example/player.js"></script>"#));
        assert!(header.ends_with("<main id=\"region-main\">\n"));
    }

    #[test]
    fn test_assets_are_registered_once() {
        let mut shell = shell();
        shell.require_script("a.js");
        shell.require_script("b.js");
        shell.require_script("a.js");
        shell.require_stylesheet("a.css");
        shell.require_stylesheet("a.css");

        assert_eq!(shell.scripts(), ["a.js", "b.js"]);
        assert_eq!(shell.stylesheets(), ["a.css"]);
    }

    #[test]
    fn test_footer_closes_document_and_runs_init_code() {
        let mut shell = shell();
        assert!(!shell.render_footer().unwrap().contains("<script>"));

        shell.add_init_code("player.ready();");
        let footer = shell.render_footer().unwrap();

        assert!(footer.contains("</main>"));
        assert!(footer.contains("Biology &amp; Life"));
        assert!(footer.contains("<script>\nplayer.ready();\n</script>"));
        assert!(footer.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_title_and_heading_accessors() {
        let mut shell = shell();
        shell.set_title("T");
        shell.set_heading("H");

        assert_eq!(shell.title(), "T");
        assert_eq!(shell.heading(), "H");
        assert_eq!(shell.course().short_name, "BIO101");
    }
}
