//! AST module for the Padlock language
//!
//! The tree is a root `Branch` of ordered elements. A split instruction is
//! always followed by its two sibling branches, so the fork topology lives
//! in the nesting itself; there are no parent or child links. Writers locate
//! the branch under construction with a path of `Directive`s.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{ErrorKind, PadlockError, ParseResult};
use crate::symbols::{CharSet, Instruction, SymbolTable};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One step of descent from the root towards the branch being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// The earlier of the two sibling branches at this level.
    FirstBranch,
    /// The later of the two sibling branches at this level.
    SecondBranch,
}

impl Directive {
    /// Position of the addressed branch counted from the end of its parent.
    ///
    /// A branch that has split is never appended to again, so its sibling
    /// pair always occupies the last two slots.
    fn slots_from_end(self) -> usize {
        match self {
            Directive::FirstBranch => 2,
            Directive::SecondBranch => 1,
        }
    }
}

/// A single AST element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Instruction(Instruction),
    Name(String),
    Branch(Branch),
}

impl Element {
    pub fn as_instruction(&self) -> Option<Instruction> {
        match self {
            Element::Instruction(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Element::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Element::Branch(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Instruction> for Element {
    fn from(instruction: Instruction) -> Self {
        Element::Instruction(instruction)
    }
}

impl From<Branch> for Element {
    fn from(branch: Branch) -> Self {
        Element::Branch(branch)
    }
}

/// An ordered, linear instruction sequence within a fork.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Branch(Vec<Element>);

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    fn push(&mut self, element: Element) {
        self.0.push(element);
    }

    fn child(&self, directive: Directive) -> Option<&Branch> {
        let index = self.0.len().checked_sub(directive.slots_from_end())?;
        self.0[index].as_branch()
    }

    fn child_mut(&mut self, directive: Directive) -> Option<&mut Branch> {
        let index = self.0.len().checked_sub(directive.slots_from_end())?;
        match &mut self.0[index] {
            Element::Branch(b) => Some(b),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Branch {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Element>> for Branch {
    fn from(elements: Vec<Element>) -> Self {
        Branch(elements)
    }
}

/// A parsed Padlock program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ast {
    root: Branch,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// The branch reached by the empty path.
    pub fn root(&self) -> &Branch {
        &self.root
    }

    /// Follow `path` from the root.
    pub fn branch_at(&self, path: &[Directive]) -> Option<&Branch> {
        path.iter()
            .try_fold(&self.root, |branch, &directive| branch.child(directive))
    }

    /// Append `value` to the branch addressed by `path`.
    pub fn push(&mut self, value: impl Into<Element>, path: &[Directive]) -> ParseResult<()> {
        let mut branch = &mut self.root;
        for &directive in path {
            branch = branch.child_mut(directive).ok_or_else(|| {
                PadlockError::new(ErrorKind::DetachedCursor, 0, (0, 0).into())
            })?;
        }
        branch.push(value.into());
        Ok(())
    }

    /// Number of split instructions anywhere in the tree.
    pub fn split_count(&self) -> usize {
        self.count(|e| e.as_instruction() == Some(Instruction::Split))
    }

    /// Number of instructions anywhere in the tree.
    pub fn instruction_count(&self) -> usize {
        self.count(|e| e.as_instruction().is_some())
    }

    fn count(&self, pred: impl Fn(&Element) -> bool + Copy) -> usize {
        fn walk(branch: &Branch, pred: impl Fn(&Element) -> bool + Copy) -> usize {
            branch
                .iter()
                .map(|e| match e {
                    Element::Branch(b) => walk(b, pred),
                    other => usize::from(pred(other)),
                })
                .sum()
        }
        walk(&self.root, pred)
    }

    /// Indentation-based rendering using the glyphs of `charset`.
    pub fn render(&self, charset: CharSet) -> String {
        let mut out = String::new();
        render_branch(&mut out, &self.root, &SymbolTable::new(charset), 0);
        out
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CharSet::Visual))
    }
}

// ------------------------------------------------------------------------
// Rendering helpers
// ------------------------------------------------------------------------

fn render_branch(out: &mut String, branch: &Branch, table: &SymbolTable, depth: usize) {
    for element in branch {
        match element {
            Element::Instruction(i) => {
                out.push(table.symbol(*i));
                out.push(' ');
            }
            Element::Name(name) => {
                out.push('\'');
                out.push_str(name);
                out.push_str("' ");
            }
            Element::Branch(nested) => {
                out.push('\n');
                for _ in 0..=depth {
                    out.push_str("  ");
                }
                render_branch(out, nested, table, depth + 1);
            }
        }
    }
}
