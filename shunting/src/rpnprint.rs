use crate::parser::{precedence, RPNExpr, RpnToken};
use lexers::Operator;
use std::fmt;

// Nodes live in a flat arena and refer to their operands by index, so
// neither building nor rendering recurses on long operator chains.
enum Node<'a> {
    Leaf(&'a str),
    Op(Operator, usize, usize),
}

impl Node<'_> {
    fn precedence(&self) -> usize {
        match *self {
            Node::Leaf(_) => usize::MAX,
            Node::Op(ref op, _, _) => precedence(op),
        }
    }
}

// pending rendering work, popped in order
enum Step {
    Visit(usize),
    Op(Operator),
    OParen,
    CParen,
}

impl RPNExpr {
    // returns the arena and the index of the root
    fn build_ast(&self) -> Option<(Vec<Node<'_>>, usize)> {
        let mut nodes = Vec::with_capacity(self.len());
        let mut subtrees = Vec::new();
        for token in self.iter() {
            match *token {
                RpnToken::Number(ref n) => nodes.push(Node::Leaf(n)),
                RpnToken::Op(op) => {
                    let rhs = subtrees.pop()?;
                    let lhs = subtrees.pop()?;
                    nodes.push(Node::Op(op, lhs, rhs));
                }
            }
            subtrees.push(nodes.len() - 1);
        }
        match (subtrees.pop(), subtrees.is_empty()) {
            (Some(root), true) => Some((nodes, root)),
            _ => None,
        }
    }

    /// Render back to infix with the minimum parens needed to keep the
    /// same grouping, or None if the sequence doesn't form a single tree.
    pub fn to_infix(&self) -> Option<String> {
        let (nodes, root) = self.build_ast()?;
        let mut out = String::new();
        let mut todo = vec![Step::Visit(root)];

        while let Some(step) = todo.pop() {
            match step {
                Step::OParen => out.push('('),
                Step::CParen => out.push(')'),
                Step::Op(op) => {
                    out.push(' ');
                    out.push(op.symbol());
                    out.push(' ');
                }
                Step::Visit(idx) => match nodes[idx] {
                    Node::Leaf(n) => out.push_str(n),
                    Node::Op(op, lhs, rhs) => {
                        let prec = precedence(&op);
                        // left-associative: only a looser lhs needs parens,
                        // an equally tight rhs was grouped explicitly
                        let lparen = nodes[lhs].precedence() < prec;
                        let rparen = nodes[rhs].precedence() <= prec;
                        // pushed in reverse of output order
                        if rparen { todo.push(Step::CParen); }
                        todo.push(Step::Visit(rhs));
                        if rparen { todo.push(Step::OParen); }
                        todo.push(Step::Op(op));
                        if lparen { todo.push(Step::CParen); }
                        todo.push(Step::Visit(lhs));
                        if lparen { todo.push(Step::OParen); }
                    }
                },
            }
        }
        Some(out)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for token in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match *token {
                RpnToken::Number(ref n) => write!(f, "{}", n)?,
                RpnToken::Op(ref op) => write!(f, "{}", op)?,
            }
        }
        Ok(())
    }
}
