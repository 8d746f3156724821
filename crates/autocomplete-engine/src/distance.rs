// Levenshtein edit distance over Unicode scalar values
//
// Unit cost for insertion, deletion and substitution. The dynamic
// programming table is kept as two rows.

/// Edit distance between `a` and `b`, counted in `char`s.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut calc = Levenshtein::new(a);
    calc.distance(b)
}

/// Distance calculator with a fixed left-hand string.
///
/// Reuses its row and character buffers across calls, which matters when one
/// query is compared against a whole vocabulary.
pub struct Levenshtein {
    query: Vec<char>,
    word: Vec<char>,
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Levenshtein {
    /// Create a calculator for distances from `query`.
    pub fn new(query: &str) -> Self {
        Self {
            query: query.chars().collect(),
            word: Vec::new(),
            prev: Vec::new(),
            curr: Vec::new(),
        }
    }

    /// Edit distance from the query to `word`.
    pub fn distance(&mut self, word: &str) -> usize {
        self.word.clear();
        self.word.extend(word.chars());

        let (a, b) = (&self.query, &self.word);
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        self.prev.clear();
        self.prev.extend(0..=b.len());
        self.curr.clear();
        self.curr.resize(b.len() + 1, 0);

        for (i, &ca) in a.iter().enumerate() {
            self.curr[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let substitution = self.prev[j] + usize::from(ca != cb);
                let deletion = self.prev[j + 1] + 1;
                let insertion = self.curr[j] + 1;
                self.curr[j + 1] = substitution.min(deletion).min(insertion);
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }
        self.prev[b.len()]
    }

    /// Length of the query in characters.
    pub fn query_len(&self) -> usize {
        self.query.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(levenshtein("koira", "koira"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn against_empty_string_is_length() {
        assert_eq!(levenshtein("", "cart"), 4);
        assert_eq!(levenshtein("cart", ""), 4);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn scenario_distances() {
        assert_eq!(levenshtein("xy", "cat"), 3);
        assert_eq!(levenshtein("xy", "car"), 3);
        assert_eq!(levenshtein("xy", "cart"), 4);
        assert_eq!(levenshtein("xy", "dog"), 3);
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn symmetric() {
        for (a, b) in [("cat", "cart"), ("häkki", "hakki"), ("", "x"), ("abc", "yabd")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(levenshtein("ä", "a"), 1);
        assert_eq!(levenshtein("häkki", "hakki"), 1);
        assert_eq!(levenshtein("", "日本"), 2);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(levenshtein("Cat", "cat"), 1);
    }

    #[test]
    fn calculator_reuse_gives_same_results() {
        let mut calc = Levenshtein::new("car");
        assert_eq!(calc.query_len(), 3);
        assert_eq!(calc.distance("cart"), 1);
        assert_eq!(calc.distance(""), 3);
        assert_eq!(calc.distance("dog"), 3);
        assert_eq!(calc.distance("car"), 0);
        assert_eq!(calc.distance("cart"), 1);
    }
}
