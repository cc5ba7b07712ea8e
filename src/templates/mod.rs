//! Narrative catalogs keyed by numerology value.
//!
//! Catalogs are plain data: each `(Domain, Topic)` pair maps the values
//! 1..9, 11, 22 and 33 to a template with `{placeholder}` fields. The
//! calculation modules never depend on this text, so catalogs can be edited
//! or localized without touching the arithmetic.

mod love;
mod personal;
mod wealth;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Personal,
    Love,
    Wealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Expression,
    SoulUrge,
    Personality,
    PersonalYear,
    LifePath,
    CompanyNumber,
    RegistrationEnergy,
    Shadow,
}

pub type Entries = &'static [(u32, &'static str)];

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub domain: Domain,
    pub topic: Topic,
    pub entries: Entries,
}

impl Catalog {
    /// Template for `value`, or the template for 1 when the value has no entry.
    pub fn template(&self, value: u32) -> &'static str {
        self.lookup(value)
            .or_else(|| self.lookup(1))
            .unwrap_or_default()
    }

    fn lookup(&self, value: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, text)| *text)
    }
}

static CATALOGS: &[Catalog] = &[
    Catalog {
        domain: Domain::Personal,
        topic: Topic::Expression,
        entries: personal::EXPRESSION,
    },
    Catalog {
        domain: Domain::Personal,
        topic: Topic::SoulUrge,
        entries: personal::SOUL_URGE,
    },
    Catalog {
        domain: Domain::Personal,
        topic: Topic::Personality,
        entries: personal::PERSONALITY,
    },
    Catalog {
        domain: Domain::Personal,
        topic: Topic::PersonalYear,
        entries: personal::PERSONAL_YEAR,
    },
    Catalog {
        domain: Domain::Personal,
        topic: Topic::LifePath,
        entries: personal::LIFE_PATH,
    },
    Catalog {
        domain: Domain::Love,
        topic: Topic::SoulUrge,
        entries: love::SOUL_URGE,
    },
    Catalog {
        domain: Domain::Love,
        topic: Topic::PersonalYear,
        entries: love::PERSONAL_YEAR,
    },
    Catalog {
        domain: Domain::Love,
        topic: Topic::Shadow,
        entries: love::SHADOW,
    },
    Catalog {
        domain: Domain::Wealth,
        topic: Topic::Expression,
        entries: wealth::EXPRESSION,
    },
    Catalog {
        domain: Domain::Wealth,
        topic: Topic::PersonalYear,
        entries: wealth::PERSONAL_YEAR,
    },
    Catalog {
        domain: Domain::Wealth,
        topic: Topic::CompanyNumber,
        entries: wealth::COMPANY_NUMBER,
    },
    Catalog {
        domain: Domain::Wealth,
        topic: Topic::RegistrationEnergy,
        entries: wealth::REGISTRATION_ENERGY,
    },
    Catalog {
        domain: Domain::Wealth,
        topic: Topic::Shadow,
        entries: wealth::SHADOW,
    },
];

pub fn catalogs() -> &'static [Catalog] {
    CATALOGS
}

pub fn catalog(domain: Domain, topic: Topic) -> Option<&'static Catalog> {
    CATALOGS
        .iter()
        .find(|catalog| catalog.domain == domain && catalog.topic == topic)
}

/// Renders the narrative for `value` from the `(domain, topic)` catalog.
///
/// `{number}` is always bound to `value`.
pub fn interpret(domain: Domain, topic: Topic, value: u32, context: &TemplateContext) -> String {
    let Some(catalog) = catalog(domain, topic) else {
        tracing::warn!(?domain, ?topic, "no narrative catalog registered");
        return String::new();
    };
    let context = context.clone().with("number", value);
    context.render(catalog.template(value))
}

/// Values bound to `{placeholder}` fields of a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: Vec<(&'static str, String)>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.values.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces every known `{key}`. Unknown placeholders stay verbatim.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
