use serde::Serialize;
use thiserror::Error;

const NEW_CONTEXT: &str = "_blank";
const NO_LEAK_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub image_url: &'static str,
}

impl Skill {
    /// Glyph shown in place of the logo when the image can't be loaded.
    pub fn fallback_glyph(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub about: &'static [&'static str],
    pub portrait_url: &'static str,
    pub site_url: &'static str,
}

impl Profile {
    /// Document and Open Graph title.
    pub fn page_title(&self) -> String {
        format!("{}'s Portfolio", self.name)
    }

    pub fn og_image_alt(&self) -> String {
        format!("{} Portfolio", self.name)
    }

    /// Portrait joined onto the site url; crawlers ignore relative images.
    pub fn portrait_absolute_url(&self) -> String {
        if is_external(self.portrait_url) {
            return self.portrait_url.to_string();
        }
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            self.portrait_url.trim_start_matches('/')
        )
    }
}

static PROFILE: Profile = Profile {
    name: "Prathmesh Sayal",
    tagline: "Lifelong Learner | CS Enthusiast",
    description: "Professional portfolio website of Prathmesh Sayal, showcasing projects and skills in web development.",
    about: &[
        "Hello! I'm Prathmesh Sayal, a passionate learner with a strong foundation in education. Currently, I am working in the field of Python, Web Development and AI-powered applications to exploring the potential of blockchain technology, I'm constantly seeking new challenges and opportunities to grow.",
        "Feel free to reach out if you're interested in collaboration, networking, or sharing insights within the realm of technology and engineering.",
    ],
    portrait_url: "/images/IMG_5029.webp",
    site_url: "https://portfolio-pratz1337.vercel.app/",
};

static SKILLS: &[Skill] = &[
    Skill { name: "React", image_url: "/images/react.svg" },
    Skill { name: "Python", image_url: "/images/python.svg" },
    Skill { name: "Next.JS", image_url: "/images/Nextjs.svg" },
    Skill { name: "C", image_url: "/images/c.svg" },
    Skill { name: "C++", image_url: "/images/cpp.svg" },
    Skill { name: "JavaScript", image_url: "/images/javascript.svg" },
    Skill { name: "Node.js", image_url: "/images/nodejs.svg" },
    Skill { name: "Tensorflow", image_url: "/images/tensorflow.svg" },
    Skill { name: "Flask", image_url: "/images/flask.svg" },
    Skill { name: "GCloud", image_url: "/images/gcloud.svg" },
    Skill { name: "MATLAB", image_url: "/images/matlab.svg" },
];

static PROJECTS: &[Project] = &[
    Project {
        title: "Gender Classification Model for Indian Faces",
        description: "A deep learning model for gender classification trained specifically on Indian faces. Uses TensorFlow and Keras to predict male or female with high accuracy and confidence scores.",
        technologies: &["NumPy", "Python", "TensorFlow"],
        link: "https://github.com/Pratz1337/Gender-Classification-Model-for-Indian-Faces",
    },
    Project {
        title: "Symptom Sage",
        description: "Intuitive web application designed to detect pneumonia from chest X-rays, generate comprehensive reports pinpointing affected lung areas, and seamlessly connect doctors and patients. This application was awarded first place at the BIT INCEPTRA'24 Hackathon.",
        technologies: &["Tensorflow", "GCloud", "Python", "Flask", "JavaScript"],
        link: "https://github.com/Pratz1337/Symptom_Sage",
    },
    Project {
        title: "Radio Website Data Scraping",
        description: "This Python script scrapes radio station data from a website and saves it to a CSV file. It utilizes BeautifulSoup for web scraping and requests for making HTTP requests.",
        technologies: &["BeautifulSoup", "Python"],
        link: "https://github.com/Pratz1337/Radio-Website-Data-Scraping",
    },
];

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/pratz1337",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/prathmesh-sayal/",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Email",
        href: "mailto:prathmeshsayal8@gmail.com",
        icon: SocialIcon::Email,
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn skills() -> &'static [Skill] {
    SKILLS
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

fn is_external(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

/// Anchor attributes for a link, chosen from its href.
///
/// Anything leaving the site opens in a new browsing context and must not
/// leak `window.opener` or the referrer. Mail and in-page links stay put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttrs {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl LinkAttrs {
    pub fn for_href(href: &str) -> Self {
        if is_external(href) {
            Self {
                target: Some(NEW_CONTEXT),
                rel: Some(NO_LEAK_REL),
            }
        } else {
            Self::default()
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("{record}: field `{field}` is empty")]
    EmptyField { record: String, field: &'static str },
    #[error("{record}: `{href}` is not an https or mailto link")]
    BadLink { record: String, href: String },
}

fn require(record: &str, field: &'static str, value: &str) -> Result<(), PortfolioError> {
    if value.trim().is_empty() {
        Err(PortfolioError::EmptyField {
            record: record.to_string(),
            field,
        })
    } else {
        Ok(())
    }
}

fn require_link(record: &str, href: &str) -> Result<(), PortfolioError> {
    let valid = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("mailto:"))
        .is_some_and(|rest| !rest.is_empty());
    if valid {
        Ok(())
    } else {
        Err(PortfolioError::BadLink {
            record: record.to_string(),
            href: href.to_string(),
        })
    }
}

pub fn validate_skills(skills: &[Skill]) -> Result<(), PortfolioError> {
    for (i, skill) in skills.iter().enumerate() {
        let record = format!("skill #{i}");
        require(&record, "name", skill.name)?;
        require(&record, "image_url", skill.image_url)?;
    }
    Ok(())
}

pub fn validate_projects(projects: &[Project]) -> Result<(), PortfolioError> {
    for (i, project) in projects.iter().enumerate() {
        let record = format!("project #{i}");
        require(&record, "title", project.title)?;
        require(&record, "description", project.description)?;
        require(&record, "link", project.link)?;
        require_link(&record, project.link)?;
        if project.technologies.is_empty() {
            return Err(PortfolioError::EmptyField {
                record,
                field: "technologies",
            });
        }
        for tech in project.technologies {
            require(&record, "technologies", tech)?;
        }
    }
    Ok(())
}

pub fn validate_social_links(links: &[SocialLink]) -> Result<(), PortfolioError> {
    for link in links {
        require(link.label, "label", link.label)?;
        require_link(link.label, link.href)?;
    }
    Ok(())
}

/// Checks every static record the page renders.
pub fn validate() -> Result<(), PortfolioError> {
    let p = profile();
    require("profile", "name", p.name)?;
    require("profile", "tagline", p.tagline)?;
    require("profile", "description", p.description)?;
    require("profile", "portrait_url", p.portrait_url)?;
    require_link("profile", p.site_url)?;
    for paragraph in p.about {
        require("profile", "about", paragraph)?;
    }
    validate_skills(skills())?;
    validate_projects(projects())?;
    validate_social_links(social_links())
}

#[derive(Serialize)]
struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    description: &'a str,
    url: &'a str,
    image: String,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
}

/// schema.org `Person` document for the page head.
pub fn structured_data() -> String {
    let p = profile();
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: p.name,
        description: p.description,
        url: p.site_url,
        image: p.portrait_absolute_url(),
        same_as: social_links()
            .iter()
            .filter(|l| is_external(l.href))
            .map(|l| l.href)
            .collect(),
    };
    serde_json::to_string(&person).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_data_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn every_skill_has_an_initial_fallback() {
        for skill in skills() {
            let glyph = skill.fallback_glyph();
            assert_eq!(glyph.chars().count(), 1, "{}", skill.name);
            let first = skill.name.chars().next().unwrap();
            assert_eq!(glyph, first.to_uppercase().to_string());
        }
    }

    #[test]
    fn fallback_glyph_edge_cases() {
        let lower = Skill {
            name: "numpy",
            image_url: "/images/numpy.svg",
        };
        assert_eq!(lower.fallback_glyph(), "N");
        let cpp = Skill {
            name: "C++",
            image_url: "/images/cpp.svg",
        };
        assert_eq!(cpp.fallback_glyph(), "C");
        let empty = Skill {
            name: "",
            image_url: "",
        };
        assert_eq!(empty.fallback_glyph(), "?");
    }

    #[test]
    fn external_links_open_in_new_context_without_leaking() {
        let hrefs = projects()
            .iter()
            .map(|p| p.link)
            .chain(social_links().iter().map(|l| l.href))
            .filter(|h| is_external(h));
        let mut seen = 0;
        for href in hrefs {
            let attrs = LinkAttrs::for_href(href);
            assert_eq!(attrs.target, Some("_blank"), "{href}");
            let rel = attrs.rel.unwrap_or_default();
            assert!(rel.split(' ').any(|r| r == "noopener"), "{href}");
            assert!(rel.split(' ').any(|r| r == "noreferrer"), "{href}");
            seen += 1;
        }
        assert_eq!(seen, projects().len() + 2);
    }

    #[test]
    fn local_links_have_no_target() {
        assert_eq!(LinkAttrs::for_href("#about"), LinkAttrs::default());
        assert_eq!(
            LinkAttrs::for_href("mailto:someone@example.com"),
            LinkAttrs::default()
        );
    }

    #[test]
    fn validation_names_the_bad_field() {
        let projects = [Project {
            title: "Thing",
            description: "  ",
            technologies: &["Rust"],
            link: "https://example.com",
        }];
        assert_eq!(
            validate_projects(&projects),
            Err(PortfolioError::EmptyField {
                record: "project #0".to_string(),
                field: "description",
            })
        );

        let projects = [Project {
            title: "Thing",
            description: "Does things",
            technologies: &[],
            link: "https://example.com",
        }];
        assert!(matches!(
            validate_projects(&projects),
            Err(PortfolioError::EmptyField {
                field: "technologies",
                ..
            })
        ));
    }

    #[test]
    fn validation_rejects_plain_http_and_bare_schemes() {
        let links = [SocialLink {
            label: "Blog",
            href: "http://example.com",
            icon: SocialIcon::GitHub,
        }];
        assert!(matches!(
            validate_social_links(&links),
            Err(PortfolioError::BadLink { .. })
        ));
        let links = [SocialLink {
            label: "Mail",
            href: "mailto:",
            icon: SocialIcon::Email,
        }];
        assert!(validate_social_links(&links).is_err());
    }

    #[test]
    fn portrait_url_is_absolute() {
        let mut p = *profile();
        assert_eq!(
            p.portrait_absolute_url(),
            "https://portfolio-pratz1337.vercel.app/images/IMG_5029.webp"
        );
        p.site_url = "https://example.com";
        p.portrait_url = "me.webp";
        assert_eq!(p.portrait_absolute_url(), "https://example.com/me.webp");
        p.portrait_url = "https://cdn.example.com/me.webp";
        assert_eq!(p.portrait_absolute_url(), "https://cdn.example.com/me.webp");
    }

    #[test]
    fn page_title_matches_open_graph_title() {
        assert_eq!(profile().page_title(), "Prathmesh Sayal's Portfolio");
        assert_eq!(profile().og_image_alt(), "Prathmesh Sayal Portfolio");
    }

    #[test]
    fn structured_data_lists_external_profiles() {
        let json: serde_json::Value =
            serde_json::from_str(&structured_data()).expect("valid json");
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], profile().name);
        let same_as = json["sameAs"].as_array().expect("sameAs array");
        assert_eq!(same_as.len(), 2);
        assert_eq!(
            json["image"],
            "https://portfolio-pratz1337.vercel.app/images/IMG_5029.webp"
        );
        assert!(same_as.iter().all(|v| v
            .as_str()
            .is_some_and(|s| s.starts_with("https://"))));
    }
}
