//! Reflection loop
//!
//! A two-node generate/reflect state machine: a generator agent drafts a
//! post for the user's request, a critic agent grades it, and the critique
//! is fed back to the generator as a user message for a revised draft. The
//! loop alternates until the draft budget is spent, then the last draft is
//! the result.
//!
//! The node graph is small enough to express as an explicit state enum:
//!
//! ```text
//! Generate -> (budget left? Reflect : End)
//! Reflect  -> Generate
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::agent::Agent;
use crate::error::Result;
use crate::providers::ChatProvider;

/// System prompt for the generator agent.
pub const GENERATION_PROMPT: &str = "\
You are a twitter techie influencer assistant tasked with writing excellent posts. \
Generate the best twitter post for the user's request. \
If the user provides critique, respond with a revised version of your previous tweet.";

/// System prompt for the critic agent.
pub const REFLECTION_PROMPT: &str = "\
You are a viral twitter influencer grading a tweet. \
Generate critique and recommendations for the user's tweet. \
Always provide detailed recommendations, including requests for length, \
virality, style, tone, etc.";

/// Default number of drafts the generator produces before the loop ends.
pub const DEFAULT_MAX_DRAFTS: usize = 4;

/// Nodes of the reflect/generate state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Generate,
    Reflect,
    End,
}

/// One generate/reflect exchange.
#[derive(Debug, Clone)]
pub struct ReflectionStep {
    /// The generator's draft for this round
    pub draft: String,
    /// The critic's grading of that draft; `None` for the final round
    pub critique: Option<String>,
}

/// The full transcript of a reflection run.
#[derive(Debug, Clone)]
pub struct ReflectionOutcome {
    /// All rounds in order
    pub steps: Vec<ReflectionStep>,
}

impl ReflectionOutcome {
    /// The last draft produced, which is the loop's result.
    pub fn final_draft(&self) -> &str {
        self.steps
            .last()
            .map(|s| s.draft.as_str())
            .unwrap_or_default()
    }
}

/// Driver for the two-agent reflect/generate loop.
pub struct ReflectionLoop {
    generator: Agent,
    critic: Agent,
    max_drafts: usize,
}

impl ReflectionLoop {
    /// Create a reflection loop with both agents backed by the same provider.
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            generator: Agent::new(provider.clone(), GENERATION_PROMPT),
            critic: Agent::new(provider, REFLECTION_PROMPT),
            max_drafts: DEFAULT_MAX_DRAFTS,
        }
    }

    /// Override the draft budget. A budget of zero is clamped to one so the
    /// loop always produces a result.
    pub fn with_max_drafts(mut self, max_drafts: usize) -> Self {
        self.max_drafts = max_drafts.max(1);
        self
    }

    /// Run the loop for one user request and return the full transcript.
    pub async fn run(&mut self, request: &str) -> Result<ReflectionOutcome> {
        let mut steps = Vec::new();
        let mut node = Node::Generate;
        let mut next_input = request.to_string();

        while node != Node::End {
            match node {
                Node::Generate => {
                    let draft = self.generator.send(&next_input).await?;
                    debug!(round = steps.len() + 1, "generated draft");
                    steps.push(ReflectionStep {
                        draft,
                        critique: None,
                    });
                    node = if steps.len() >= self.max_drafts {
                        Node::End
                    } else {
                        Node::Reflect
                    };
                }
                Node::Reflect => {
                    // The critic sees the draft as a user message; its reply
                    // comes back to the generator the same way.
                    let draft = steps
                        .last()
                        .map(|s| s.draft.clone())
                        .unwrap_or_default();
                    let critique = self.critic.send(&draft).await?;
                    debug!(round = steps.len(), "generated critique");
                    if let Some(step) = steps.last_mut() {
                        step.critique = Some(critique.clone());
                    }
                    next_input = critique;
                    node = Node::Generate;
                }
                Node::End => unreachable!(),
            }
        }

        Ok(ReflectionOutcome { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrreryError;
    use crate::providers::ChatOptions;
    use crate::session::Message;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider double that replies with a numbered echo of the last message.
    struct EchoProvider {
        calls: Mutex<usize>,
    }

    impl EchoProvider {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl ChatProvider for EchoProvider {
        async fn chat(
            &self,
            messages: &[Message],
            _model: Option<&str>,
            _options: &ChatOptions,
        ) -> Result<String> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            let last = messages.last().ok_or_else(|| {
                OrreryError::Provider("empty conversation".into())
            })?;
            Ok(format!("reply {} to: {}", calls, last.content))
        }

        fn default_model(&self) -> &str {
            "echo"
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_draft_budget_is_honored() {
        let mut looper = ReflectionLoop::new(EchoProvider::new()).with_max_drafts(3);
        let outcome = looper.run("Make this tweet better: hello").await.unwrap();

        assert_eq!(outcome.steps.len(), 3);
        // Every round except the last carries a critique
        assert!(outcome.steps[0].critique.is_some());
        assert!(outcome.steps[1].critique.is_some());
        assert!(outcome.steps[2].critique.is_none());
    }

    #[tokio::test]
    async fn test_single_draft_skips_critic() {
        let mut looper = ReflectionLoop::new(EchoProvider::new()).with_max_drafts(1);
        let outcome = looper.run("request").await.unwrap();

        assert_eq!(outcome.steps.len(), 1);
        assert!(outcome.steps[0].critique.is_none());
        assert_eq!(outcome.final_draft(), outcome.steps[0].draft);
    }

    #[tokio::test]
    async fn test_zero_budget_clamped_to_one() {
        let mut looper = ReflectionLoop::new(EchoProvider::new()).with_max_drafts(0);
        let outcome = looper.run("request").await.unwrap();
        assert_eq!(outcome.steps.len(), 1);
    }

    #[tokio::test]
    async fn test_critique_feeds_next_draft() {
        let mut looper = ReflectionLoop::new(EchoProvider::new()).with_max_drafts(2);
        let outcome = looper.run("request").await.unwrap();

        let critique = outcome.steps[0].critique.as_deref().unwrap();
        // The second draft is the generator's reply to the first critique
        assert!(outcome.steps[1].draft.contains(critique));
    }
}
