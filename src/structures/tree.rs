/*!
The binary decision tree built during a search.

Each node records the atom decided at that point of the search (`0` until some decision is
made), the branch value which led to success (if any), and up to two exclusively-owned
children --- one for the branch on which the atom was set true, one for false.

Ownership does the memory accounting: a node owns its children through boxed handles, and the
solver drops the handle for a branch the instant the branch is refuted.
So, at any point, the live tree is the current search path plus the surviving siblings already
proven satisfiable --- after a failed solve no children survive at all, and after a successful
solve exactly one chain from the root to a leaf survives.

```rust
# use chroma_sat::structures::tree::DecisionNode;
let mut root = DecisionNode::new();
assert!(root.is_leaf());

let mut child = DecisionNode::new();
child.decide(2);
root.decide(1);
root.record(true, child);

assert_eq!(root.accepted_path(), vec![1]);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// A node of the decision tree.
#[derive(Debug, Default)]
pub struct DecisionNode {
    /// The atom decided at this node, or `0` if no decision has been recorded.
    atom: Atom,

    /// The branch value which led to success, if either did.
    outcome: Option<bool>,

    /// The subtree explored with the atom set true.
    when_true: Option<Box<DecisionNode>>,

    /// The subtree explored with the atom set false.
    when_false: Option<Box<DecisionNode>>,
}

impl DecisionNode {
    /// A fresh node: no decision, no outcome, no children.
    pub fn new() -> Self {
        DecisionNode::default()
    }

    /// The atom decided at this node, or `0` if none.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The branch value which led to success at this node, if any.
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    /// Records the atom decided at this node.
    pub fn decide(&mut self, atom: Atom) {
        self.atom = atom;
    }

    /// Attaches a surviving child for the given branch value and records the value as the
    /// outcome of this node.
    ///
    /// Any previous child on the branch is released.
    pub fn record(&mut self, value: bool, child: DecisionNode) {
        match value {
            true => self.when_true = Some(Box::new(child)),
            false => self.when_false = Some(Box::new(child)),
        }
        self.outcome = Some(value);
    }

    /// Releases the subtree on the given branch, if one is attached.
    pub fn release(&mut self, value: bool) {
        match value {
            true => self.when_true = None,
            false => self.when_false = None,
        }
    }

    /// The child on the given branch, if one survives.
    pub fn child(&self, value: bool) -> Option<&DecisionNode> {
        match value {
            true => self.when_true.as_deref(),
            false => self.when_false.as_deref(),
        }
    }

    /// Whether the node has no surviving children.
    pub fn is_leaf(&self) -> bool {
        self.when_true.is_none() && self.when_false.is_none()
    }

    /// The depth of the tree rooted at this node, with a lone node of depth zero.
    pub fn depth(&self) -> usize {
        let true_depth = self.when_true.as_ref().map_or(0, |n| 1 + n.depth());
        let false_depth = self.when_false.as_ref().map_or(0, |n| 1 + n.depth());
        true_depth.max(false_depth)
    }

    /// The accepted path from this node, as the literals decided along the surviving outcome
    /// chain.
    ///
    /// Empty unless a solve from this node succeeded.
    pub fn accepted_path(&self) -> Vec<CLiteral> {
        let mut path = Vec::new();
        let mut node = self;
        while let Some(value) = node.outcome {
            if node.atom != 0 {
                path.push(CLiteral::new(node.atom, value));
            }
            match node.child(value) {
                Some(child) => node = child,
                None => break,
            }
        }
        path
    }
}
