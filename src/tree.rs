//! Document tree traversal and rewriting.
//!
//! [`walk`] flattens a tree into a depth-first sequence of enter/exit
//! events. [`substitute_link_targets`] consumes that sequence to replace
//! link labels with the link's target, which is what the plain-text
//! format shows instead of the label.

use comrak::arena_tree::{NodeEdge, Traverse};
use comrak::nodes::{Ast, AstNode, NodeValue};
use std::cell::RefCell;
use tracing::debug;

use crate::error::{Error, Result};

/// Whether a node is being entered or left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

/// One step of a depth-first traversal.
#[derive(Clone, Copy)]
pub struct Event<'a> {
    pub node: &'a AstNode<'a>,
    pub phase: Phase,
}

/// Lazy depth-first traversal over a document tree.
///
/// Every node yields one [`Phase::Enter`] before any event of its children
/// and one [`Phase::Exit`] after all of them.
pub struct Walk<'a> {
    inner: Traverse<'a, RefCell<Ast>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|edge| match edge {
            NodeEdge::Start(node) => Event {
                node,
                phase: Phase::Enter,
            },
            NodeEdge::End(node) => Event {
                node,
                phase: Phase::Exit,
            },
        })
    }
}

/// Start a fresh traversal rooted at `root`.
pub fn walk<'a>(root: &'a AstNode<'a>) -> Walk<'a> {
    Walk {
        inner: root.traverse(),
    }
}

/// Replace the text inside every link with the link's target.
///
/// Active links are kept on a stack so that text following a nested
/// link's exit goes back to the enclosing link's target. Text outside any
/// link is untouched. Returns the number of text nodes rewritten.
///
/// The tree is mutated in place: only call this on a tree that no other
/// renderer will see.
pub fn substitute_link_targets<'a>(root: &'a AstNode<'a>) -> Result<usize> {
    let mut targets: Vec<String> = Vec::new();
    let mut rewritten = 0;

    for event in walk(root) {
        let is_link = matches!(event.node.data.borrow().value, NodeValue::Link(_));

        match event.phase {
            Phase::Enter if is_link => {
                if let NodeValue::Link(ref link) = event.node.data.borrow().value {
                    targets.push(link.url.clone());
                }
            }
            Phase::Exit if is_link => {
                targets.pop();
            }
            Phase::Enter => {
                let Some(target) = targets.last() else {
                    continue;
                };
                let mut data = event
                    .node
                    .data
                    .try_borrow_mut()
                    .map_err(|e| Error::Render(format!("cannot rewrite link text: {}", e)))?;
                if let NodeValue::Text(ref mut literal) = data.value {
                    literal.clone_from(target);
                    rewritten += 1;
                }
            }
            Phase::Exit => {}
        }
    }

    debug!(rewritten, "substituted link targets");
    Ok(rewritten)
}
