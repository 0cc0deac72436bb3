//! Sentence rules for free-text log lines.
//!
//! Each rule pairs a regular expression with an extractor that builds a
//! typed event from the captures. Rules are tried in order and the first
//! match wins.

use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::event::payload::{
    AccountLogin, CardNotExist, Skin, StateChange, ZoneChange, ZoneChangeType,
};
use crate::event::{DecodedEvent, EventKind};

use super::error::DecodeError;

/// Builds an event from a rule's captures.
pub type Extractor = fn(&Captures<'_>) -> Result<DecodedEvent, DecodeError>;

const CARD_NOT_EXIST: &str = r#"^Card #(?P<card_id>\d+) \("(?P<card_name>.*)"\) had ParentId #(?P<parent_id>\d+) but that card did not exist in the GameState\.?$"#;
const NULL_ENTITY: &str = r"^NULL entity on (?P<json>\{.*\})$";
const SKINS_SEEN: &str = r"^Skins seen:(?P<list>.*)$";
const STATE_CHANGED: &str = r"^STATE CHANGED (?P<from>.+?) -> (?P<to>.+)$";
const ZONE_CHANGE: &str = r#"^(?:<+\s*)?ZoneChange of type (?P<type>\w+) for \["(?P<target>.*)" InstanceId:(?P<instance_id>\d+), GrpId:(?P<grp_id>\d+)\] \(".*?"\) had Instigator (?P<instigator>\d+) \("(?P<source>.*)"\)\.?$"#;
const ZONE_CHANGE_NULL: &str = r#"^(?:<+\s*)?ZoneChange of type (?P<type>\w+) for (?P<instance_id>\d+) \("\[NULL\]"\) had Instigator (?P<instigator>\d+) \("(?P<source>.*)"\)\.?$"#;
const ACCOUNT_LOGIN: &str = r"^Successfully logged in to account: (?P<name>[^#]+)#(?P<number>[^#]+)$";

/// A single sentence rule.
#[derive(Clone)]
pub struct SentenceRule {
    kind: EventKind,
    pattern: Regex,
    extract: Extractor,
}

impl std::fmt::Debug for SentenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceRule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl SentenceRule {
    /// Create a new sentence rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn new(kind: EventKind, pattern: &str, extract: Extractor) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            extract,
        })
    }

    /// The kind of event this rule produces.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Get the pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the rule. Returns `None` if the sentence does not match.
    #[must_use]
    pub fn apply(&self, sentence: &str) -> Option<Result<DecodedEvent, DecodeError>> {
        self.pattern
            .captures(sentence)
            .map(|caps| (self.extract)(&caps))
    }
}

/// Ordered collection of sentence rules.
#[derive(Debug, Clone, Default)]
pub struct SentenceRules {
    rules: Vec<SentenceRule>,
}

impl SentenceRules {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a rule set with the built-in sentences.
    #[must_use]
    pub fn with_default_rules() -> Self {
        let rules = Self::default_rules()
            .into_iter()
            .filter_map(|result| match result {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to compile default sentence rule");
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Append a rule. It is tried after the existing ones.
    pub fn add_rule(&mut self, rule: SentenceRule) {
        self.rules.push(rule);
    }

    /// The rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[SentenceRule] {
        &self.rules
    }

    /// Decode a sentence with the first matching rule.
    ///
    /// Returns `None` when no rule matches.
    #[must_use]
    pub fn decode(&self, sentence: &str) -> Option<Result<DecodedEvent, DecodeError>> {
        self.rules.iter().find_map(|rule| rule.apply(sentence))
    }

    fn default_rules() -> Vec<Result<SentenceRule, regex::Error>> {
        vec![
            SentenceRule::new(EventKind::CardNotExist, CARD_NOT_EXIST, card_not_exist),
            SentenceRule::new(EventKind::NullEntity, NULL_ENTITY, null_entity),
            SentenceRule::new(EventKind::SkinsSeen, SKINS_SEEN, skins_seen),
            SentenceRule::new(EventKind::StateChanged, STATE_CHANGED, state_changed),
            SentenceRule::new(EventKind::ZoneChange, ZONE_CHANGE, zone_change),
            SentenceRule::new(EventKind::ZoneChange, ZONE_CHANGE_NULL, zone_change_null),
            SentenceRule::new(EventKind::AccountLoggedIn, ACCOUNT_LOGIN, account_login),
        ]
    }
}

fn text<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn number(caps: &Captures<'_>, name: &'static str) -> Result<u64, DecodeError> {
    let value = text(caps, name);
    value.parse().map_err(|_| DecodeError::InvalidField {
        field: name,
        value: value.to_string(),
    })
}

fn null_name(name: &str) -> String {
    if name == "[NULL]" {
        "NULL".to_string()
    } else {
        name.to_string()
    }
}

fn card_not_exist(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::CardNotExist(CardNotExist {
        card_id: number(caps, "card_id")?,
        card_name: text(caps, "card_name").to_string(),
        parent_id: number(caps, "parent_id")?,
    }))
}

fn null_entity(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::NullEntity(serde_json::from_str(text(
        caps, "json",
    ))?))
}

fn skins_seen(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::SkinsSeen(parse_skins(text(caps, "list"))))
}

fn state_changed(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::StateChanged(StateChange {
        from: text(caps, "from").trim().to_string(),
        to: text(caps, "to").trim().to_string(),
    }))
}

fn zone_change(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::ZoneChange(ZoneChange {
        kind: ZoneChangeType::from_name(text(caps, "type")),
        target: null_name(text(caps, "target")),
        instance_id: number(caps, "instance_id")?,
        grp_id: number(caps, "grp_id")?,
        instigator: number(caps, "instigator")?,
        source: null_name(text(caps, "source")),
    }))
}

fn zone_change_null(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::ZoneChange(ZoneChange {
        kind: ZoneChangeType::from_name(text(caps, "type")),
        target: "NULL".to_string(),
        instance_id: number(caps, "instance_id")?,
        grp_id: 0,
        instigator: number(caps, "instigator")?,
        source: null_name(text(caps, "source")),
    }))
}

fn account_login(caps: &Captures<'_>) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::AccountLoggedIn(AccountLogin {
        name: text(caps, "name").trim().to_string(),
        number: text(caps, "number").trim().to_string(),
    }))
}

/// Parse a whitespace separated `<id>=<code>` list.
///
/// Tokens without `=` (such as a lone `.`) are skipped. A repeated id keeps
/// its first position and takes the last code.
#[must_use]
pub fn parse_skins(list: &str) -> Vec<Skin> {
    let mut skins: Vec<Skin> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for token in list.split_whitespace() {
        let Some((id, code)) = token.split_once('=') else {
            continue;
        };
        let Ok(id) = id.parse::<u64>() else {
            tracing::trace!(token, "Skipping skin token with non-numeric id");
            continue;
        };
        let code = code.trim_end_matches(['.', ',']);
        if code.is_empty() {
            continue;
        }

        if let Some(&pos) = positions.get(&id) {
            skins[pos].code = code.to_string();
        } else {
            positions.insert(id, skins.len());
            skins.push(Skin {
                id,
                code: code.to_string(),
            });
        }
    }
    skins
}
