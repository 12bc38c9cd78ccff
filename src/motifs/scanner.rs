use super::compiler::MotifRule;

/// Case-insensitive view of a sequence that motif rules are run against
pub struct SequenceScanner {
    haystack: String,
}

impl SequenceScanner {
    pub fn new(seq: &str) -> Self {
        Self {
            haystack: seq.to_ascii_uppercase(),
        }
    }

    /// Every start position where `rule` matches, overlaps included, in ascending order
    pub fn scan<'s, 'r>(&'s self, rule: &'r MotifRule) -> MatchIter<'s, 'r> {
        MatchIter {
            haystack: &self.haystack,
            rule,
            pos: 0,
        }
    }
}

pub struct MatchIter<'s, 'r> {
    haystack: &'s str,
    rule: &'r MotifRule,
    pos: usize,
}

impl Iterator for MatchIter<'_, '_> {
    /// Half-open span `(start, start + motif length)`
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.haystack.len() {
            return None;
        }
        let start = self.rule.matcher().find_at(self.haystack, self.pos)?.start();
        // Resume one character past the match start so overlapping hits are found
        let step = self.haystack[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos = start + step;
        Some((start, start + self.rule.length))
    }
}
