/// Knobs controlling how generated models are named and shaped.
///
/// Every field has a default, so a partial configuration (e.g. deserialized
/// from a project's settings file) fills in the rest.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ModelGenConfig {
    /// Base name used for models of operations that have no name.
    pub anonymous_operation_name: String,

    /// Whether type cases that select identical fields are collapsed into a
    /// single model class.
    pub collapse_type_cases: bool,

    /// Prepended to a model's name to form the name of its interface.
    pub interface_prefix: String,

    /// The largest integer suffix the naming registry will try when
    /// resolving a name collision before giving up.
    pub max_name_suffix: u32,

    /// Appended to a model's name to form the name of its result parser.
    pub result_parser_suffix: String,
}
impl Default for ModelGenConfig {
    fn default() -> Self {
        Self {
            anonymous_operation_name: "Anonymous".to_string(),
            collapse_type_cases: true,
            interface_prefix: "I".to_string(),
            max_name_suffix: u32::MAX,
            result_parser_suffix: "ResultParser".to_string(),
        }
    }
}
