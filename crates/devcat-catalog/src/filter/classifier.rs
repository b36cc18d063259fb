//! Property-type classification.
//!
//! Type facets are heuristics over tags and free-text unit types. The rules live
//! in a [`TypeClassifier`] table mapping each [`TypeToken`] to a predicate, so
//! they can be replaced or extended without touching the evaluator.

use std::collections::HashMap;
use std::fmt;

use super::state::TypeToken;
use crate::model::Development;

/// Tag marking a development as houses.
pub const HOUSE_TAG: &str = "casas";

/// Tags marking a development as flats.
pub const FLAT_TAGS: [&str; 3] = ["flat", "compacto", "studio"];

/// A type-matching rule.
pub type TypeRule = Box<dyn Fn(&Development) -> bool + Send + Sync>;

/// Strategy table from type token to matching rule.
pub struct TypeClassifier {
    rules: HashMap<TypeToken, TypeRule>,
}

impl fmt::Debug for TypeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<&TypeToken> = self.rules.keys().collect();
        tokens.sort();
        f.debug_struct("TypeClassifier")
            .field("tokens", &tokens)
            .finish()
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeClassifier {
    /// Creates a classifier with no rules. Every token fails to match.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Creates the classifier with the standard rules:
    ///
    /// - `casa`: tagged `casas`
    /// - `flat`: tagged `flat`, `compacto` or `studio`
    /// - `garden`: some unit type contains "garden" (any case)
    /// - `cobertura`: some unit type contains "cobertura" (any case)
    /// - `apto`: tagged neither `casas` nor `flat`
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(TypeToken::Casa, |dev| dev.has_tag(HOUSE_TAG))
            .with_rule(TypeToken::Flat, |dev| {
                FLAT_TAGS.iter().any(|tag| dev.has_tag(tag))
            })
            .with_rule(TypeToken::Garden, |dev| dev.has_unit_type_containing("garden"))
            .with_rule(TypeToken::Cobertura, |dev| {
                dev.has_unit_type_containing("cobertura")
            })
            .with_rule(TypeToken::Apto, |dev| {
                !dev.has_tag(HOUSE_TAG) && !dev.has_tag("flat")
            })
    }

    /// Registers (or replaces) the rule for a token.
    pub fn with_rule<F>(mut self, token: TypeToken, rule: F) -> Self
    where
        F: Fn(&Development) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(token, Box::new(rule));
        self
    }

    /// Removes the rule for a token, if any.
    pub fn without_rule(mut self, token: &TypeToken) -> Self {
        self.rules.remove(token);
        self
    }

    /// Returns true if a rule is registered for the token.
    pub fn knows(&self, token: &TypeToken) -> bool {
        self.rules.contains_key(token)
    }

    /// Returns true if the development matches the token. Tokens without a rule never match.
    pub fn matches(&self, dev: &Development, token: &TypeToken) -> bool {
        self.rules.get(token).is_some_and(|rule| rule(dev))
    }

    /// Returns true if the development matches at least one of the tokens.
    pub fn matches_any(&self, dev: &Development, tokens: &[TypeToken]) -> bool {
        tokens.iter().any(|token| self.matches(dev, token))
    }
}
