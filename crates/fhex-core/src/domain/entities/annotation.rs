//! NatSpec annotation extraction from Solidity sources.
//!
//! Only the contract-level comment block is read: the first NatSpec block
//! carrying `@title`, or the first NatSpec block in the file when no block
//! has one. Both comment styles are recognised:
//!
//! ```solidity
//! /// @title FHE Counter
//! /// @notice A counter on encrypted state
//!
//! /**
//!  * @dev Demonstrates:
//!  * - encrypted addition
//!  * - ACL grants
//!  */
//! ```
//!
//! Extraction is best-effort. Nothing here fails: unknown tags are ignored
//! and an unparseable `@custom:*` value is treated as absent.

use std::collections::BTreeMap;

use crate::domain::value_objects::{Category, Difficulty};

pub const TAG_TITLE: &str = "@title";
pub const TAG_NOTICE: &str = "@notice";
pub const TAG_DEV: &str = "@dev";
pub const TAG_CATEGORY: &str = "@custom:category";
pub const TAG_DIFFICULTY: &str = "@custom:difficulty";

/// Tags read from a contract's NatSpec header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractDoc {
    pub title: Option<String>,
    pub notice: Option<String>,
    /// Prose of the `@dev` tag with bullet lines removed.
    pub dev: Option<String>,
    /// `-` / `*` bullet lines found inside the `@dev` tag, marker stripped.
    pub dev_bullets: Vec<String>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

impl ContractDoc {
    pub fn parse(source: &str) -> Self {
        let blocks = natspec_blocks(source);
        let Some(block) = blocks
            .iter()
            .find(|b| b.iter().any(|l| l.starts_with(TAG_TITLE)))
            .or_else(|| blocks.first())
        else {
            return Self::default();
        };

        let tags = collect_tags(block);
        let joined = |tag: &str| {
            tags.get(tag)
                .map(|lines| join_prose(lines.iter().map(String::as_str)))
                .filter(|s| !s.is_empty())
        };

        let (dev, dev_bullets) = match tags.get(TAG_DEV) {
            Some(lines) => split_bullets(lines),
            None => (None, Vec::new()),
        };

        Self {
            title: joined(TAG_TITLE),
            notice: joined(TAG_NOTICE),
            dev,
            dev_bullets,
            category: joined(TAG_CATEGORY).and_then(|v| v.parse().ok()),
            difficulty: joined(TAG_DIFFICULTY).and_then(|v| v.parse().ok()),
        }
    }
}

/// Collect every NatSpec comment block as a list of de-commented lines.
fn natspec_blocks(source: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut line_block: Vec<String> = Vec::new();
    let mut star_block: Option<Vec<String>> = None;

    for raw in source.lines() {
        let line = raw.trim();

        if let Some(block) = star_block.as_mut() {
            match line.find("*/") {
                Some(end) => {
                    let text = strip_star(&line[..end]);
                    if !text.is_empty() {
                        block.push(text);
                    }
                    blocks.push(std::mem::take(block));
                    star_block = None;
                }
                None => block.push(strip_star(line)),
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("///") {
            line_block.push(rest.trim().to_string());
            continue;
        }

        if !line_block.is_empty() {
            blocks.push(std::mem::take(&mut line_block));
        }

        if let Some(rest) = line.strip_prefix("/**") {
            // `/**/` is an empty comment and `/***` a separator, neither is NatSpec.
            if rest.starts_with(['/', '*']) {
                continue;
            }
            match rest.find("*/") {
                Some(end) => {
                    let text = strip_star(&rest[..end]);
                    if !text.is_empty() {
                        blocks.push(vec![text]);
                    }
                }
                None => {
                    let text = strip_star(rest);
                    star_block = Some(if text.is_empty() { vec![] } else { vec![text] });
                }
            }
        }
    }

    if !line_block.is_empty() {
        blocks.push(line_block);
    }
    if let Some(block) = star_block {
        blocks.push(block);
    }

    blocks
}

fn strip_star(line: &str) -> String {
    let line = line.trim();
    line.strip_prefix('*').unwrap_or(line).trim().to_string()
}

/// Group lines under the tag that precedes them. First occurrence of a tag wins.
fn collect_tags(block: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut tags: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<(String, Vec<String>)> = None;

    let mut flush = |current: &mut Option<(String, Vec<String>)>| {
        if let Some((tag, lines)) = current.take() {
            tags.entry(tag).or_insert(lines);
        }
    };

    for line in block {
        if line.starts_with('@') {
            flush(&mut current);
            let (tag, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let value = value.trim();
            let lines = if value.is_empty() {
                vec![]
            } else {
                vec![value.to_string()]
            };
            current = Some((tag.to_string(), lines));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.clone());
        }
    }
    flush(&mut current);

    tags
}

fn join_prose<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bullet_text(line: &str) -> Option<&str> {
    let line = line.trim();
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn split_bullets(lines: &[String]) -> (Option<String>, Vec<String>) {
    let bullets: Vec<String> = lines
        .iter()
        .filter_map(|l| bullet_text(l))
        .map(str::to_string)
        .collect();
    let prose = join_prose(
        lines
            .iter()
            .map(String::as_str)
            .filter(|l| bullet_text(l).is_none()),
    );
    ((!prose.is_empty()).then_some(prose), bullets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIPLE_SLASH: &str = r#"// SPDX-License-Identifier: BSD-3-Clause-Clear
pragma solidity ^0.8.24;

import {FHE, euint32} from "@fhevm/solidity/lib/FHE.sol";

/// @title FHE Counter
/// @notice A counter whose value stays encrypted
/// @dev Demonstrates:
/// - encrypted addition with FHE.add
/// - granting access with FHE.allow
/// @custom:category basic
/// @custom:difficulty intermediate
contract FHECounter {
    /// @notice Returns the encrypted count
    function getCount() external view returns (euint32) {}
}
"#;

    #[test]
    fn parses_triple_slash_header() {
        let doc = ContractDoc::parse(TRIPLE_SLASH);
        assert_eq!(doc.title.as_deref(), Some("FHE Counter"));
        assert_eq!(
            doc.notice.as_deref(),
            Some("A counter whose value stays encrypted")
        );
        assert_eq!(doc.dev.as_deref(), Some("Demonstrates:"));
        assert_eq!(
            doc.dev_bullets,
            vec![
                "encrypted addition with FHE.add".to_string(),
                "granting access with FHE.allow".to_string()
            ]
        );
        assert_eq!(doc.category, Some(Category::Basic));
        assert_eq!(doc.difficulty, Some(Difficulty::Intermediate));
    }

    #[test]
    fn parses_block_comment_header() {
        let src = r#"
/**
 * @title Encrypted Vote
 * @notice Tallies encrypted ballots
 *   across many voters
 * @dev Uses:
 * * FHE.select
 * @custom:difficulty advanced
 */
contract Vote {}
"#;
        let doc = ContractDoc::parse(src);
        assert_eq!(doc.title.as_deref(), Some("Encrypted Vote"));
        assert_eq!(
            doc.notice.as_deref(),
            Some("Tallies encrypted ballots across many voters")
        );
        assert_eq!(doc.dev_bullets, vec!["FHE.select".to_string()]);
        assert_eq!(doc.difficulty, Some(Difficulty::Advanced));
        assert_eq!(doc.category, None);
    }

    #[test]
    fn function_level_notice_does_not_leak() {
        let src = "/// @title A\ncontract A {\n/// @notice inner\nfunction f() {}\n}\n";
        let doc = ContractDoc::parse(src);
        assert_eq!(doc.title.as_deref(), Some("A"));
        assert_eq!(doc.notice, None);
    }

    #[test]
    fn missing_tags_are_absent() {
        let doc = ContractDoc::parse("pragma solidity ^0.8.24;\ncontract Bare {}\n");
        assert_eq!(doc, ContractDoc::default());
    }

    #[test]
    fn unknown_difficulty_is_absent() {
        let doc = ContractDoc::parse("/// @title X\n/// @custom:difficulty expert\n");
        assert_eq!(doc.difficulty, None);
    }

    #[test]
    fn single_line_block_comment() {
        let doc = ContractDoc::parse("/** @title Tiny */\ncontract Tiny {}\n");
        assert_eq!(doc.title.as_deref(), Some("Tiny"));
    }

    #[test]
    fn empty_block_comment_does_not_swallow_header() {
        let doc = ContractDoc::parse("/**/\n/// @title Real\ncontract R {}\n");
        assert_eq!(doc.title.as_deref(), Some("Real"));
    }

    #[test]
    fn separator_comment_is_not_natspec() {
        let src = "/*****************\n * @title Banner\n *****************/\n\
                   /// @title Real\n/// @notice Kept\ncontract R {}\n";
        let doc = ContractDoc::parse(src);
        assert_eq!(doc.title.as_deref(), Some("Real"));
        assert_eq!(doc.notice.as_deref(), Some("Kept"));
    }
}
