/// Character-by-character text reveal.
///
/// Advanced by a single repeating timer: each `step` shows one more
/// character. After `len()` steps the shown text equals the source and
/// further steps do nothing, which is the caller's signal to clear the timer.
#[derive(Clone, Debug)]
pub struct Typewriter {
    source: Vec<char>,
    emitted: usize,
    shown: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterStep {
    /// One more character was revealed; `finished` is true on the last one.
    Emitted { finished: bool },
    /// Nothing left to reveal.
    Done,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let source: Vec<char> = text.chars().collect();
        Self {
            shown: String::with_capacity(text.len()),
            source,
            emitted: 0,
        }
    }

    pub fn step(&mut self) -> TypewriterStep {
        match self.source.get(self.emitted) {
            Some(&c) => {
                self.shown.push(c);
                self.emitted += 1;
                TypewriterStep::Emitted {
                    finished: self.is_finished(),
                }
            }
            None => TypewriterStep::Done,
        }
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    pub fn remaining(&self) -> usize {
        self.source.len() - self.emitted
    }

    /// Number of characters (and therefore steps) in the source text.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.emitted == self.source.len()
    }
}

/// Text to type: a non-empty literal payload wins over the rendered text.
pub fn resolve_source(payload: Option<&str>, rendered: &str) -> String {
    match payload {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => rendered.to_string(),
    }
}
