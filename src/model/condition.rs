use serde::{Deserialize, Serialize};

use super::policy::PolicyError;

/// A requirement on a single condition token, optionally negated (`!token`).
///
/// Serialized as its textual form, e.g. `"veteran"` or `"!disguised"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ConditionExpr {
    token: String,
    negated: bool,
}

impl ConditionExpr {
    /// Parse `token` or `!token`. Tokens are ASCII alphanumerics, `-` and `_`.
    pub fn parse(text: &str) -> Result<Self, PolicyError> {
        let trimmed = text.trim();
        let (negated, token) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let valid = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PolicyError::InvalidCondition(text.to_string()));
        }

        Ok(Self {
            token: token.to_string(),
            negated,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the requirement holds given whether its token is currently granted.
    pub fn is_satisfied(&self, token_granted: bool) -> bool {
        token_granted != self.negated
    }
}

impl std::fmt::Display for ConditionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        f.write_str(&self.token)
    }
}

impl From<ConditionExpr> for String {
    fn from(expr: ConditionExpr) -> Self {
        expr.to_string()
    }
}

impl TryFrom<String> for ConditionExpr {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).map_err(|e| e.to_string())
    }
}
