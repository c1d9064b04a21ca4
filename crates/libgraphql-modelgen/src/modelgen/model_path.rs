/// The structural path from an operation's root to some selection, e.g.
/// `GetHero.hero.friends`.
///
/// Used purely for diagnostics and for describing what a result parser
/// parses.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ModelPath(Vec<String>);
impl ModelPath {
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn root(operation_name: impl Into<String>) -> Self {
        Self(vec![operation_name.into()])
    }

    pub fn segments(&self) -> &[String] {
        self.0.as_slice()
    }
}
impl std::fmt::Display for ModelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
