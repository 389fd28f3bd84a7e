use crate::{
    dom::Target,
    foundation::core::Axis,
    foundation::error::{QuestError, QuestResult},
    foundation::math::non_negative,
    plan::path::PathMode,
    plan::stagger::DEFAULT_PACE,
};

/// Default travel window in ms.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "E: serde::Deserialize<'de>"))]
/// Everything one travel animation needs.
///
/// Deserializes from JSON with every field but `start` and `end` optional;
/// `members` and `parties` accept either one target or a list, and `path` is
/// also accepted as `pattern`.
pub struct QuestConfig<E> {
    /// Where the party starts.
    pub start: Target<E>,
    /// Where the party ends.
    pub end: Target<E>,
    /// Individual participants.
    #[serde(default = "Vec::new", deserialize_with = "one_or_many")]
    pub members: Vec<Target<E>>,
    /// Containers whose direct children participate.
    #[serde(default = "Vec::new", deserialize_with = "one_or_many")]
    pub parties: Vec<Target<E>>,
    /// Travel window in ms.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Stagger spread factor.
    #[serde(default = "default_pace")]
    pub pace: f64,
    /// Base path shape; unknown names fall back to cubic.
    #[serde(default, alias = "pattern")]
    pub path: PathMode,
    /// Axis given the split treatment; `null` disables splitting.
    #[serde(default = "default_split")]
    pub split: Option<Axis>,
    /// Resolve member and party selectors to their first match only.
    #[serde(default)]
    pub singleton: bool,
    /// Fill/background colors, in order.
    #[serde(default)]
    pub colors: Vec<String>,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_MS
}

fn default_pace() -> f64 {
    DEFAULT_PACE
}

fn default_split() -> Option<Axis> {
    Some(Axis::X)
}

fn one_or_many<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match <OneOrMany<T> as serde::Deserialize>::deserialize(d)? {
        OneOrMany::Many(v) => v,
        OneOrMany::One(t) => vec![t],
    })
}

impl<E> QuestConfig<E> {
    /// Config with all defaults and no participants.
    pub fn new(start: impl Into<Target<E>>, end: impl Into<Target<E>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            members: Vec::new(),
            parties: Vec::new(),
            duration: DEFAULT_DURATION_MS,
            pace: DEFAULT_PACE,
            path: PathMode::default(),
            split: default_split(),
            singleton: false,
            colors: Vec::new(),
        }
    }

    pub fn builder(start: impl Into<Target<E>>, end: impl Into<Target<E>>) -> QuestBuilder<E> {
        QuestBuilder {
            config: Self::new(start, end),
        }
    }

    pub fn validate(&self) -> QuestResult<()> {
        non_negative("duration", self.duration).map_err(QuestError::validation)?;
        non_negative("pace", self.pace).map_err(QuestError::validation)?;
        Ok(())
    }
}

impl<E: serde::de::DeserializeOwned> QuestConfig<E> {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> QuestResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| QuestError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Fluent construction of a [`QuestConfig`].
pub struct QuestBuilder<E> {
    config: QuestConfig<E>,
}

impl<E> QuestBuilder<E> {
    pub fn member(mut self, target: impl Into<Target<E>>) -> Self {
        self.config.members.push(target.into());
        self
    }

    pub fn party(mut self, target: impl Into<Target<E>>) -> Self {
        self.config.parties.push(target.into());
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.config.duration = ms;
        self
    }

    pub fn pace(mut self, pace: f64) -> Self {
        self.config.pace = pace;
        self
    }

    pub fn path(mut self, path: PathMode) -> Self {
        self.config.path = path;
        self
    }

    pub fn split(mut self, split: Option<Axis>) -> Self {
        self.config.split = split;
        self
    }

    pub fn singleton(mut self, singleton: bool) -> Self {
        self.config.singleton = singleton;
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> QuestResult<QuestConfig<E>> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quest/config.rs"]
mod tests;
