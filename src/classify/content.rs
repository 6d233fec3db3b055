//! Text-block density classifier.
//!
//! Text nodes are grouped into blocks by their nearest block-level ancestor.
//! A block is content when it is long enough and not dominated by link text;
//! a heading directly followed by content is content too. Page chrome
//! (navigation, sidebars, site headers and footers) is skipped outright.

use super::ContentClassifier;
use crate::dom::{self, NodeId, NodeRef, NodeSet};
use crate::options::DistillerOptions;
use crate::patterns::BOILERPLATE_NAME;

/// Tags whose text is never content.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template", "nav", "aside", "form"];

/// Tags that are chrome unless they sit inside an article.
const CHROME_TAGS: &[&str] = &["header", "footer"];

const ARTICLE_TAGS: &[&str] = &["article", "main"];

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Classifies text nodes by block length and link density.
#[derive(Debug, Clone, Copy)]
pub struct BlockDensityClassifier {
    /// Minimum words for a block to count as content.
    pub min_block_words: usize,
    /// Maximum share of words inside links.
    pub max_link_density: f64,
}

impl Default for BlockDensityClassifier {
    fn default() -> Self {
        Self::from_options(&DistillerOptions::default())
    }
}

impl BlockDensityClassifier {
    #[must_use]
    pub fn from_options(options: &DistillerOptions) -> Self {
        Self {
            min_block_words: options.min_block_words,
            max_link_density: options.max_link_density,
        }
    }
}

struct Block<'a> {
    id: Option<NodeId>,
    heading: bool,
    texts: Vec<NodeRef<'a>>,
    words: usize,
    link_words: usize,
}

impl Block<'_> {
    fn link_density(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        self.link_words as f64 / self.words as f64
    }
}

#[derive(Clone, Copy)]
struct WalkState {
    in_article: bool,
    in_link: bool,
}

fn tag_in(tag: &str, list: &[&str]) -> bool {
    list.iter().any(|t| tag.eq_ignore_ascii_case(t))
}

fn is_boilerplate_named(node: &NodeRef) -> bool {
    node.attr("class").is_some_and(|c| BOILERPLATE_NAME.is_match(&c))
        || node.attr("id").is_some_and(|i| BOILERPLATE_NAME.is_match(&i))
}

impl BlockDensityClassifier {
    /// Collect text blocks under `root`, skipping hidden and chrome subtrees.
    fn collect_blocks<'a>(root: NodeRef<'a>, hidden: &NodeSet<NodeId>) -> Vec<Block<'a>> {
        let mut blocks: Vec<Block<'a>> = Vec::new();
        let mut stack = vec![(root, WalkState { in_article: false, in_link: false })];

        while let Some((node, mut walk)) = stack.pop() {
            if hidden.contains(&node.id) {
                continue;
            }

            if node.is_text() {
                let text = node.text();
                let words = text.split_whitespace().count();
                if words == 0 {
                    continue;
                }

                let block_node = dom::block_ancestor(&node);
                let id = block_node.map(|b| b.id);
                let heading = block_node
                    .and_then(|b| b.node_name())
                    .is_some_and(|t| tag_in(&t, HEADING_TAGS));

                match blocks.last_mut() {
                    Some(last) if last.id == id => {
                        last.texts.push(node);
                        last.words += words;
                        if walk.in_link {
                            last.link_words += words;
                        }
                    }
                    _ => blocks.push(Block {
                        id,
                        heading,
                        texts: vec![node],
                        words,
                        link_words: if walk.in_link { words } else { 0 },
                    }),
                }
                continue;
            }

            if node.is_element() {
                if let Some(tag) = node.node_name() {
                    if tag_in(&tag, SKIPPED_TAGS) {
                        continue;
                    }
                    if tag_in(&tag, CHROME_TAGS) && !walk.in_article {
                        continue;
                    }
                    if tag_in(&tag, ARTICLE_TAGS) {
                        walk.in_article = true;
                    }
                    if tag.eq_ignore_ascii_case("a") {
                        walk.in_link = true;
                    }
                }
                if node.id != root.id && is_boilerplate_named(&node) {
                    continue;
                }
            }

            for child in node.children().into_iter().rev() {
                stack.push((child, walk));
            }
        }

        blocks
    }

    fn is_content_block(&self, block: &Block) -> bool {
        block.words >= self.min_block_words && block.link_density() <= self.max_link_density
    }
}

impl ContentClassifier for BlockDensityClassifier {
    fn classify<'a>(&self, root: NodeRef<'a>, hidden: &NodeSet<NodeId>) -> Vec<NodeRef<'a>> {
        let blocks = Self::collect_blocks(root, hidden);
        let mut labels: Vec<bool> = blocks.iter().map(|b| self.is_content_block(b)).collect();

        // Headings take the label of the block that follows them.
        for i in (0..blocks.len()).rev() {
            if blocks[i].heading && !labels[i] && labels.get(i + 1).copied().unwrap_or(false) {
                labels[i] = true;
            }
        }

        tracing::debug!(
            blocks = blocks.len(),
            content_blocks = labels.iter().filter(|l| **l).count(),
            "classified text blocks"
        );

        blocks
            .into_iter()
            .zip(labels)
            .filter(|(_, is_content)| *is_content)
            .flat_map(|(block, _)| block.texts)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAGRAPH: &str = "This paragraph has more than enough words to pass the default block threshold easily.";

    fn content_texts(html: &str, classifier: &BlockDensityClassifier) -> Vec<String> {
        let doc = dom::parse(html);
        let root = dom::body_or_root(&doc);
        classifier
            .classify(root, &NodeSet::new())
            .iter()
            .map(|n| n.text().trim().to_string())
            .collect()
    }

    #[test]
    fn test_long_paragraph_is_content() {
        let html = format!("<p>{PARAGRAPH}</p><p>Short one.</p>");
        let texts = content_texts(&html, &BlockDensityClassifier::default());
        assert_eq!(texts, vec![PARAGRAPH]);
    }

    #[test]
    fn test_navigation_is_skipped() {
        let html = format!("<nav><p>{PARAGRAPH}</p></nav><div class=\"sidebar\"><p>{PARAGRAPH}</p></div>");
        let texts = content_texts(&html, &BlockDensityClassifier::default());
        assert!(texts.is_empty());
    }

    #[test]
    fn test_header_inside_article_is_kept() {
        let html = format!(
            "<header><p>{PARAGRAPH}</p></header><article><header><p>{PARAGRAPH}</p></header></article>"
        );
        let texts = content_texts(&html, &BlockDensityClassifier::default());
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn test_link_heavy_block_is_boilerplate() {
        let html = "<p><a href=\"/1\">one two three four five</a> <a href=\"/2\">six seven eight nine ten</a> end</p>";
        let texts = content_texts(html, &BlockDensityClassifier::default());
        assert!(texts.is_empty());
    }

    #[test]
    fn test_inline_link_in_long_block_is_content() {
        let html = format!("<p>{PARAGRAPH} See <a href=\"/x\">this</a> too.</p>");
        let texts = content_texts(&html, &BlockDensityClassifier::default());
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1], "this");
    }

    #[test]
    fn test_heading_before_content_is_content() {
        let html = format!("<h2>Section title</h2><p>{PARAGRAPH}</p><h2>Dangling</h2>");
        let texts = content_texts(&html, &BlockDensityClassifier::default());
        assert_eq!(texts, vec!["Section title", PARAGRAPH]);
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let html = format!("<div id=\"x\"><p>{PARAGRAPH}</p></div>");
        let doc = dom::parse(&html);
        let root = dom::body_or_root(&doc);
        let hidden: NodeSet<NodeId> = dom::select_first(&doc, "#x").map(|n| n.id).into_iter().collect();

        assert!(BlockDensityClassifier::default().classify(root, &hidden).is_empty());
    }

    #[test]
    fn test_thresholds_come_from_options() {
        let options = DistillerOptions {
            min_block_words: 2,
            ..DistillerOptions::default()
        };
        let classifier = BlockDensityClassifier::from_options(&options);
        let texts = content_texts("<p>Short one.</p>", &classifier);
        assert_eq!(texts, vec!["Short one."]);
    }
}
