//! Built-in criteria templates.

use crate::core::{Category, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateCriterion {
    pub name: &'static str,
    pub weight: f64,
}

const fn tc(name: &'static str, weight: f64) -> TemplateCriterion {
    TemplateCriterion { name, weight }
}

/// A named starting point with three criteria per category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub hot: &'static [TemplateCriterion],
    pub crazy: &'static [TemplateCriterion],
}

impl Template {
    pub fn criteria(&self, category: Category) -> &'static [TemplateCriterion] {
        match category {
            Category::Hot => self.hot,
            Category::Crazy => self.crazy,
        }
    }
}

pub static TEMPLATES: &[Template] = &[
    Template {
        name: "Classic Dating",
        description: "Traditional dating criteria",
        hot: &[
            tc("physical attractiveness", 0.4),
            tc("sense of humor", 0.3),
            tc("intelligence", 0.3),
        ],
        crazy: &[
            tc("jealousy", 0.4),
            tc("mood swings", 0.3),
            tc("drama", 0.3),
        ],
    },
    Template {
        name: "Modern Professional",
        description: "Career-focused criteria",
        hot: &[
            tc("career ambition", 0.35),
            tc("emotional intelligence", 0.35),
            tc("physical fitness", 0.3),
        ],
        crazy: &[
            tc("work-life imbalance", 0.4),
            tc("financial irresponsibility", 0.35),
            tc("communication issues", 0.25),
        ],
    },
    Template {
        name: "Physical Attraction",
        description: "Appearance-focused criteria",
        hot: &[
            tc("facial attractiveness", 0.4),
            tc("body type", 0.35),
            tc("style/fashion", 0.25),
        ],
        crazy: &[
            tc("vanity", 0.4),
            tc("body image issues", 0.35),
            tc("superficiality", 0.25),
        ],
    },
    Template {
        name: "Athletic Type",
        description: "Fitness and health focused",
        hot: &[
            tc("muscle tone", 0.4),
            tc("athletic ability", 0.3),
            tc("height", 0.3),
        ],
        crazy: &[
            tc("gym obsession", 0.4),
            tc("steroid use", 0.35),
            tc("competitive aggression", 0.25),
        ],
    },
    Template {
        name: "Natural Beauty",
        description: "Authentic appearance focus",
        hot: &[
            tc("natural features", 0.4),
            tc("skin quality", 0.3),
            tc("smile", 0.3),
        ],
        crazy: &[
            tc("plastic surgery addiction", 0.4),
            tc("makeup dependency", 0.3),
            tc("appearance anxiety", 0.3),
        ],
    },
    Template {
        name: "Intellectual Match",
        description: "Mind over matter approach",
        hot: &[
            tc("conversation skills", 0.4),
            tc("education level", 0.35),
            tc("eye contact", 0.25),
        ],
        crazy: &[
            tc("know-it-all attitude", 0.4),
            tc("condescending behavior", 0.35),
            tc("overthinking", 0.25),
        ],
    },
];

/// Look up a template by name, ignoring case and `-`/`_` vs space
pub fn find_template(name: &str) -> Result<&'static Template> {
    let wanted = normalize_name(name);
    TEMPLATES
        .iter()
        .find(|t| normalize_name(t.name) == wanted)
        .ok_or_else(|| Error::UnknownTemplate(name.trim().to_string()))
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::is_valid_sum;

    #[test]
    fn every_template_is_valid_out_of_the_box() {
        for template in TEMPLATES {
            for category in Category::ALL {
                let criteria = template.criteria(category);
                assert_eq!(criteria.len(), 3, "{} {}", template.name, category);
                let sum: f64 = criteria.iter().map(|c| c.weight).sum();
                assert!(is_valid_sum(sum), "{} {} sums to {}", template.name, category, sum);
            }
        }
    }

    #[test]
    fn lookup_is_forgiving() {
        assert_eq!(find_template("classic-dating").unwrap().name, "Classic Dating");
        assert_eq!(find_template(" ATHLETIC_TYPE ").unwrap().name, "Athletic Type");
        assert!(matches!(
            find_template("Speed Dating"),
            Err(Error::UnknownTemplate(_))
        ));
    }

    #[test]
    fn six_templates_with_unique_names() {
        let mut names: Vec<_> = TEMPLATES.iter().map(|t| t.name).collect();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
