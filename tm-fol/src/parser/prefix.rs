/*! Implements a reader for trees written in prefix notation, `Label(Child,...)`.

The reader does not validate labels: any run of characters other than `(`, `)` and `,` is a
label. It reads what it can of malformed input and always stops at the end of the input.
*/
use crate::syntax::{Arena, ExpressionTree, NodeId};

/// Reads a tree in prefix notation.
///
/// Spaces around labels and separators are skipped. A child list that is still open at the end
/// of the input is closed implicitly, and anything after the first complete tree is ignored.
///
/// **Example**:
/// ```rust
/// use tm_fol::parser::parse_prefix;
///
/// let tree = parse_prefix("&( P(x) , Q[1] )");
/// assert_eq!("&(P(x),Q[1])", tree.to_string());
///
/// assert_eq!("@x(P(x))", parse_prefix("@x(P(x").to_string());
/// ```
pub fn parse_prefix(input: &str) -> ExpressionTree {
    let mut reader = Reader {
        source: input,
        position: 0,
        arena: Arena::new(),
    };
    let root = reader.node();
    ExpressionTree::from_arena(&reader.arena, root)
}

struct Reader<'s> {
    source: &'s str,
    position: usize,
    arena: Arena,
}

impl<'s> Reader<'s> {
    fn rest(&self) -> &'s str {
        &self.source[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_spaces(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start_matches(' ').len();
    }

    // Reads a label and leaves the position on the character after it.
    fn label(&mut self) -> &'s str {
        self.skip_spaces();
        let rest = self.rest();
        let end = rest
            .find(|c: char| matches!(c, '(' | ')' | ','))
            .unwrap_or(rest.len());
        self.position += end;
        rest[..end].trim_end_matches(' ')
    }

    // Reads one tree. Nodes whose child lists are still open wait on `open` together with the
    // children read so far, so nesting depth is bounded by the heap rather than the call stack.
    fn node(&mut self) -> NodeId {
        let mut open: Vec<(&'s str, Vec<NodeId>)> = Vec::new();
        loop {
            let label = self.label();
            if self.peek() == Some('(') {
                self.position += 1;
                open.push((label, Vec::new()));
                continue;
            }
            let mut done = self.arena.alloc(label, Vec::new());
            // attach the finished node and close every list that ends after it
            loop {
                let (_, children) = match open.last_mut() {
                    Some(parent) => parent,
                    None => return done,
                };
                children.push(done);
                self.skip_spaces();
                match self.peek() {
                    Some(',') => {
                        self.position += 1;
                        break;
                    }
                    Some(')') => self.position += 1,
                    None => {}
                    // the next child starts right here
                    Some(_) => break,
                }
                if let Some((label, children)) = open.pop() {
                    done = self.arena.alloc(label, children);
                }
            }
        }
    }
}
