#![deny(warnings)]

// A backtracking cursor over any iterator. Items are buffered from the
// source until extract/ignore drops everything up to the current position,
// which also advances the count of consumed items.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    consumed: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        if self.pos as usize >= self.buf.len() {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => self.pos = self.buf.len() as isize,
            }
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1, consumed: 0}
    }

    pub fn buffer_pos(&self) -> isize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    // items dropped by extract/ignore so far, ie: offset of the buffer start
    pub fn consumed(&self) -> usize { self.consumed }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // drop everything up to and including the current position
    pub fn ignore(&mut self) {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        self.buf.drain(..n);
        self.consumed += n;
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        let tokens = self.buf[..n].to_vec();
        self.ignore();
        tokens
    }
}


impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Advance the scanner only if the next item is in the 'any' set,
    // self.curr() will return the matched item if accept matched any
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if any.contains(&next) { return Some(next); }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced,
    // after skip a call to self.curr() will return the last matching item
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}
