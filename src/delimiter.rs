//! The emphasis delimiter-run stack: classification of `*`/`_` runs into
//! left-/right-flanking, the can-open/can-close derivation, and the
//! rule-of-three constrained pairing.
//!
//! Grounded on `delimiter.rs`'s `Delimiter` trait and `EmphasisDelimiter`,
//! and on `parser/delimiter.rs`'s flanking derivation and
//! `parser/emphasis.rs`'s matching loop — adapted from CST event-cursor
//! arithmetic to plain indices into this crate's atom vector (see
//! `inline.rs`), since there is no event buffer here.

use bitflags::bitflags;
use unicode_properties::UnicodeGeneralCategory;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharFlags: u8 {
        const PRECEDING_WHITESPACE  = 0b0001;
        const PRECEDING_PUNCTUATION = 0b0010;
        const FOLLOWING_WHITESPACE  = 0b0100;
        const FOLLOWING_PUNCTUATION = 0b1000;
    }
}

fn is_punctuation(c: char) -> bool {
    use unicode_properties::GeneralCategoryGroup;
    matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
    )
}

/// A delimiter run's neighbor, for flanking classification: the string
/// boundary (counts as whitespace), an ordinary character, or an opaque
/// already-rendered atom (a code span, autolink, or raw HTML tag — counts as
/// neither whitespace nor punctuation, per how the inline pipeline's earlier
/// stages turn those constructs into neutral placeholders before emphasis
/// ever runs).
#[derive(Debug, Clone, Copy)]
pub enum Neighbor {
    Boundary,
    Plain(char),
    Opaque,
}

/// Classify the characters immediately before and after a delimiter run.
pub fn classify(prev: Neighbor, next: Neighbor) -> CharFlags {
    let mut flags = CharFlags::empty();
    match prev {
        Neighbor::Boundary => flags |= CharFlags::PRECEDING_WHITESPACE,
        Neighbor::Plain(c) if c.is_whitespace() => flags |= CharFlags::PRECEDING_WHITESPACE,
        Neighbor::Plain(c) if is_punctuation(c) => flags |= CharFlags::PRECEDING_PUNCTUATION,
        _ => {}
    }
    match next {
        Neighbor::Boundary => flags |= CharFlags::FOLLOWING_WHITESPACE,
        Neighbor::Plain(c) if c.is_whitespace() => flags |= CharFlags::FOLLOWING_WHITESPACE,
        Neighbor::Plain(c) if is_punctuation(c) => flags |= CharFlags::FOLLOWING_PUNCTUATION,
        _ => {}
    }
    flags
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimKind {
    Star,
    Under,
}

pub trait Delimiter {
    fn kind(&self) -> DelimKind;
    fn count(&self) -> usize;
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
    fn can_open(&self) -> bool;
    fn can_close(&self) -> bool;

    fn can_open_and_close(&self) -> bool {
        self.can_open() && self.can_close()
    }
}

/// One run of `*` or `_` in the atom vector. `atoms` holds the indices (in
/// left-to-right order) of the run's delimiter atoms in the enclosing
/// [`crate::inline::Atom`] vector.
#[derive(Debug)]
pub struct EmphasisDelimiter {
    kind: DelimKind,
    can_open: bool,
    can_close: bool,
    active: bool,
    atoms: Vec<usize>,
}

impl EmphasisDelimiter {
    pub fn new(kind: DelimKind, can_open: bool, can_close: bool, atoms: Vec<usize>) -> Self {
        EmphasisDelimiter {
            kind,
            can_open,
            can_close,
            active: true,
            atoms,
        }
    }

    /// Remove and return `count` atom indices from the end of the run (the
    /// side nearest the content an opener introduces).
    pub fn consume_opening(&mut self, count: usize) -> Vec<usize> {
        let at = self.atoms.len() - count;
        let taken = self.atoms.split_off(at);
        if self.atoms.is_empty() {
            self.active = false;
        }
        taken
    }

    /// Remove and return `count` atom indices from the start of the run (the
    /// side nearest the content a closer ends).
    pub fn consume_closing(&mut self, count: usize) -> Vec<usize> {
        let taken: Vec<usize> = self.atoms.drain(..count).collect();
        if self.atoms.is_empty() {
            self.active = false;
        }
        taken
    }

    /// True if every atom this run covers falls in `[start, end)`. Used to
    /// split off the delimiters belonging to an image's alt text, which must
    /// resolve emphasis on its own before the surrounding scan continues.
    pub fn within(&self, start: usize, end: usize) -> bool {
        self.atoms.iter().all(|&idx| idx >= start && idx < end)
    }

    /// Shift every atom index down by `offset`, for reuse against a slice
    /// taken starting at that offset.
    pub fn rebased(mut self, offset: usize) -> Self {
        for idx in &mut self.atoms {
            *idx -= offset;
        }
        self
    }
}

impl Delimiter for EmphasisDelimiter {
    fn kind(&self) -> DelimKind {
        self.kind
    }

    fn count(&self) -> usize {
        self.atoms.len()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn can_open(&self) -> bool {
        self.can_open
    }

    fn can_close(&self) -> bool {
        self.can_close
    }
}

/// Derive can-open/can-close for one delimiter run given the flags of its
/// first and last token and which character (`*` or `_`) it is made of.
/// Directly mirrors `parse_delimiter_run`'s flanking math.
pub fn derive_open_close(kind: DelimKind, first: CharFlags, last: CharFlags) -> (bool, bool) {
    let is_right_flanking = !first.contains(CharFlags::PRECEDING_WHITESPACE)
        && (!first.contains(CharFlags::PRECEDING_PUNCTUATION)
            || last.contains(CharFlags::FOLLOWING_WHITESPACE)
            || last.contains(CharFlags::FOLLOWING_PUNCTUATION));

    let is_left_flanking = !last.contains(CharFlags::FOLLOWING_WHITESPACE)
        && (!last.contains(CharFlags::FOLLOWING_PUNCTUATION)
            || first.contains(CharFlags::PRECEDING_WHITESPACE)
            || first.contains(CharFlags::PRECEDING_PUNCTUATION));

    match kind {
        DelimKind::Star => (is_left_flanking, is_right_flanking),
        DelimKind::Under => (
            is_left_flanking && (!is_right_flanking || first.contains(CharFlags::PRECEDING_PUNCTUATION)),
            is_right_flanking && (!is_left_flanking || last.contains(CharFlags::FOLLOWING_PUNCTUATION)),
        ),
    }
}

pub enum EmphasisTag {
    Em,
    Strong,
}

impl EmphasisTag {
    pub fn open(&self) -> &'static str {
        match self {
            EmphasisTag::Em => "<em>",
            EmphasisTag::Strong => "<strong>",
        }
    }

    pub fn close(&self) -> &'static str {
        match self {
            EmphasisTag::Em => "</em>",
            EmphasisTag::Strong => "</strong>",
        }
    }
}

/// One resolved emphasis match: which atom becomes the opening tag text,
/// which atoms (if any) on the opener side are blanked, and the same for
/// the closer side.
pub struct MatchResult {
    pub open_tag_atom: usize,
    pub open_blank_atoms: Vec<usize>,
    pub close_tag_atom: usize,
    pub close_blank_atoms: Vec<usize>,
    pub tag: EmphasisTag,
}

/// Run the rightmost-opener pairing algorithm over `stack`, returning the
/// resolved matches in the order they were made. `stack` indices are used
/// as each delimiter's identity.
pub fn process_emphasis(stack: &mut [EmphasisDelimiter]) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for closer_index in 0..stack.len() {
        if !stack[closer_index].can_close() || !stack[closer_index].is_active() {
            continue;
        }
        let closer_kind = stack[closer_index].kind();

        let mut opener_index = closer_index;
        while opener_index > 0 {
            opener_index -= 1;
            if !stack[opener_index].is_active()
                || !stack[opener_index].can_open()
                || stack[opener_index].kind() != closer_kind
            {
                continue;
            }
            if stack[closer_index].count() == 0 {
                break;
            }

            let total_length = stack[opener_index].count() + stack[closer_index].count();
            if stack[opener_index].can_open_and_close() || stack[closer_index].can_open_and_close()
            {
                if total_length % 3 == 0
                    && (stack[opener_index].count() % 3 != 0 || stack[closer_index].count() % 3 != 0)
                {
                    continue;
                }
            }

            let mut to_consume = stack[opener_index].count().min(stack[closer_index].count());
            while to_consume > 0 {
                let this_consume = to_consume.min(2);
                let tag = if this_consume == 1 {
                    EmphasisTag::Em
                } else {
                    EmphasisTag::Strong
                };

                let mut opened = stack[opener_index].consume_opening(this_consume);
                let open_tag_atom = opened.remove(0);
                let mut closed = stack[closer_index].consume_closing(this_consume);
                let close_tag_atom = closed.pop().unwrap();
                closed.reverse();

                results.push(MatchResult {
                    open_tag_atom,
                    open_blank_atoms: opened,
                    close_tag_atom,
                    close_blank_atoms: closed,
                    tag,
                });

                to_consume -= this_consume;
            }

            for inner in stack.iter_mut().take(closer_index).skip(opener_index + 1) {
                inner.deactivate();
            }

            if !stack[closer_index].is_active() {
                break;
            }
        }
    }

    results
}
