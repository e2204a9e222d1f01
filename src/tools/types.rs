//! Tool trait for Orrery

/// Trait that all tools must implement.
///
/// Tools are pure string-to-string functions. A tool must never panic or
/// return an error signal: any internal failure is converted to explanatory
/// text (or a sentinel value) that becomes the observation fed back to the
/// model.
///
/// # Example
///
/// ```rust
/// use orrery::tools::Tool;
///
/// struct UpperTool;
///
/// impl Tool for UpperTool {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn description(&self) -> &str {
///         "Uppercases the argument"
///     }
///
///     fn run(&self, argument: &str) -> String {
///         argument.to_uppercase()
///     }
/// }
///
/// assert_eq!(UpperTool.run("mars"), "MARS");
/// ```
pub trait Tool: Send + Sync {
    /// The tool's unique name, as it appears in `Action:` lines.
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given argument text.
    fn run(&self, argument: &str) -> String;
}
