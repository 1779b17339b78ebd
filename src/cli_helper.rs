use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::line_buffer::LineBuffer;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use snake_lisp::Environment;


// Rustyline Helper completing names bound in the session environment.
pub struct CliHelper {
    env: Environment,
}

pub struct CliCandidate {
    name: String,
}

impl CliHelper {
    pub fn new(env: &Environment) -> Self {
        Self { env: env.clone() }
    }

    fn names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.env
            .names()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c.is_whitespace() || "()\";#".contains(c) {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let names = self.names_with_prefix(&line[start..end]);
        Ok((
            start,
            names
                .into_iter()
                .map(|name| CliCandidate { name })
                .collect(),
        ))
    }

    // Replace the whole word under the cursor, not just its head.
    fn update(&self, line: &mut LineBuffer, _: usize, elected: &str) {
        let (start, end) = self.word_bounds(line.as_str(), line.pos());
        line.delete_range(start..end);
        line.insert_str(start, elected);
        line.set_pos(start + elected.len());
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name.as_str()
    }

    fn replacement(&self) -> &str {
        self.name.as_str()
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name.as_str()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}
