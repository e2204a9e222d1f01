//! Action parsing for Orrery
//!
//! The model requests tool execution by emitting a line of the exact shape
//! `Action: <name>: <argument>` anywhere in its reply. This module extracts
//! the first such line. The prompt convention allows one action per PAUSE
//! cycle; if the model emits several, first match wins. Lines that do not
//! match the pattern are prose and are ignored.

use once_cell::sync::Lazy;
use regex::Regex;

/// The literal `Action: name: argument` line pattern.
static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Action: (\w+): (.*)$").expect("action pattern is valid"));

/// A parsed tool-invocation request.
///
/// Derived transiently from the latest assistant reply; never stored in
/// the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    /// Name of the requested tool (bare identifier)
    pub name: String,
    /// Argument text, trimmed, with no further escaping
    pub argument: String,
}

/// Scan a reply for the first well-formed action line.
///
/// Returns `None` when no line matches, which the session loop treats as
/// a final answer for the turn.
///
/// # Example
/// ```
/// use orrery::agent::parse_action;
///
/// let reply = "Thought: I need Earth's mass.\nAction: planet_mass: Earth\nPAUSE";
/// let action = parse_action(reply).unwrap();
/// assert_eq!(action.name, "planet_mass");
/// assert_eq!(action.argument, "Earth");
/// ```
pub fn parse_action(reply: &str) -> Option<ActionRequest> {
    for line in reply.lines() {
        if let Some(caps) = ACTION_RE.captures(line) {
            return Some(ActionRequest {
                name: caps[1].to_string(),
                argument: caps[2].trim().to_string(),
            });
        }
    }
    None
}
