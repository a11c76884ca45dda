//! Reconstructing nested HTML lists from flat list paragraphs.
//!
//! Word stores a list as a run of paragraphs that each carry a kind and a
//! nesting level; HTML needs properly nested `ul`/`ol` elements. [`ListState`]
//! is the stack of currently open lists. It is a plain value: every transition
//! consumes the state and returns the next one together with the markup to
//! emit, so a conversion owns its list state outright.
use crate::ooxml::docx::{ListKind, NumberingInfo};
use smallvec::SmallVec;

/// Markup lines produced by one transition.
pub type Markup = SmallVec<[String; 4]>;

/// An open list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub kind: ListKind,
    pub level: u32,
}

/// The stack of open lists, innermost last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    frames: SmallVec<[ListFrame; 4]>,
}

impl ListState {
    /// No open lists.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frames(&self) -> &[ListFrame] {
        &self.frames
    }

    /// Number of open lists.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// A list paragraph arrives.
    ///
    /// Lists deeper than the item are closed. A new list is opened when none is
    /// open, when the item is deeper than the innermost list, or when the
    /// innermost list has the other kind. The item is then written as `<li>`.
    /// `content` is inserted as is.
    pub fn item(mut self, info: NumberingInfo, content: &str) -> (Self, Markup) {
        let mut markup = Markup::new();

        while let Some(top) = self.frames.last()
            && top.level > info.level
        {
            markup.push(close_tag(top.kind));
            self.frames.pop();
        }

        let open_new = match self.frames.last() {
            None => true,
            Some(top) => top.level < info.level || top.kind != info.kind,
        };
        if open_new {
            markup.push(open_tag(info.kind));
            self.frames.push(ListFrame {
                kind: info.kind,
                level: info.level,
            });
        }

        let mut li = String::with_capacity(content.len() + 9);
        li.push_str("<li>");
        li.push_str(content);
        li.push_str("</li>");
        markup.push(li);

        (self, markup)
    }

    /// Close every open list, innermost first.
    ///
    /// Called before any non-list block and once at the end of the document.
    pub fn flush(mut self) -> (Self, Markup) {
        let mut markup = Markup::with_capacity(self.frames.len());
        while let Some(top) = self.frames.pop() {
            markup.push(close_tag(top.kind));
        }
        (self, markup)
    }
}

fn open_tag(kind: ListKind) -> String {
    format!("<{}>", kind.tag())
}

fn close_tag(kind: ListKind) -> String {
    format!("</{}>", kind.tag())
}
