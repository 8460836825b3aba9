// Rule trees

use crate::RuleParam;

/// Ordered set of named rules for one field.
///
/// Insertion order is evaluation order, which in turn fixes the order of
/// failed-rule names and messages recorded for the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<(String, RuleParam)>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule. Re-declaring a name updates its parameter in place
    /// without changing its position.
    pub fn rule(mut self, name: impl Into<String>, param: impl Into<RuleParam>) -> Self {
        let name = name.into();
        let param = param.into();
        match self.rules.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = param,
            None => self.rules.push((name, param)),
        }
        self
    }

    /// Parameter of a rule, if declared.
    pub fn get(&self, name: &str) -> Option<&RuleParam> {
        self.rules
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, param)| param)
    }

    /// Whether the field is marked required with a truthy parameter.
    pub fn required(&self) -> bool {
        self.get("required").is_some_and(RuleParam::is_truthy)
    }

    /// Iterate over `(name, param)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleParam)> {
        self.rules.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One node of a rule tree: a leaf field with rules, or a group of child
/// nodes mirroring a nested object in the data.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleNode {
    /// Leaf field with its rule set
    Field(RuleSet),
    /// Nested object of named child nodes
    Group(RuleTree),
}

impl From<RuleSet> for RuleNode {
    fn from(rules: RuleSet) -> Self {
        RuleNode::Field(rules)
    }
}

impl From<RuleTree> for RuleNode {
    fn from(tree: RuleTree) -> Self {
        RuleNode::Group(tree)
    }
}

/// Nested rule specification, walked in lockstep with a data snapshot.
///
/// Keys name fields (or sub-objects) of the data; field paths are built
/// by dot-joining ancestor keys during the walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTree {
    children: Vec<(String, RuleNode)>,
}

impl RuleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a leaf field with its rules.
    pub fn field(self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.node(name, RuleNode::Field(rules))
    }

    /// Attach a nested group of fields.
    pub fn group(self, name: impl Into<String>, tree: RuleTree) -> Self {
        self.node(name, RuleNode::Group(tree))
    }

    /// Attach a node. Re-declaring a name replaces the node in place.
    pub fn node(mut self, name: impl Into<String>, node: impl Into<RuleNode>) -> Self {
        let name = name.into();
        let node = node.into();
        match self.children.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = node,
            None => self.children.push((name, node)),
        }
        self
    }

    /// Child node for a key, if configured.
    pub fn child(&self, name: &str) -> Option<&RuleNode> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Iterate over `(name, node)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleNode)> {
        self.children.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Whether the tree has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
